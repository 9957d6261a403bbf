//! Shapes the server sends back from the control-plane API.
//!
//! Apart from an imposter's `protocol` and `port`, fields default when absent
//! and unknown fields are kept in `extra`, so server-generated additions
//! (`_links`, `numberOfRequests`, ...) never break decoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An imposter as reported by the server.
///
/// `protocol` and `port` are required when decoding; the `Default` value is
/// the empty shape a no-op delete yields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImposterDetail {
    pub protocol: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub record_requests: bool,
    #[serde(default)]
    pub number_of_requests: u64,
    #[serde(default)]
    pub stubs: Vec<StubDetail>,
    /// Present only when the imposter records requests.
    #[serde(default)]
    pub requests: Vec<RecordedRequest>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImposterDetail {
    /// True for the empty shape returned when deleting a port with no imposter.
    pub fn is_empty(&self) -> bool {
        self.port == 0 && self.protocol.is_empty()
    }
}

/// A stub as echoed by the server.
///
/// Predicates and responses stay as raw JSON: the server adds its own
/// fields and may render `statusCode` as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubDetail {
    pub predicates: Vec<Value>,
    pub responses: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A request the imposter recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_from: Option<String>,
    pub method: String,
    pub path: String,
    pub query: HashMap<String, Value>,
    pub headers: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrapper returned by `GET /imposters` and `DELETE /imposters`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ImpostersResponse {
    pub imposters: Vec<ImposterDetail>,
}
