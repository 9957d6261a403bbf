//! Type definitions for the imposters sent to the server.

use crate::error::ConfigurationError;
use crate::predicate::Predicate;
use crate::response::{IsResponse, Response};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Protocol
// ============================================================================

/// Network protocol an imposter listens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Tcp,
    Smtp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Tcp => "tcp",
            Protocol::Smtp => "smtp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            "tcp" => Ok(Protocol::Tcp),
            "smtp" => Ok(Protocol::Smtp),
            _ => Err(ConfigurationError::UnknownProtocol(s.to_string())),
        }
    }
}

// ============================================================================
// Stub
// ============================================================================

/// Predicates paired with the responses the server cycles through on match.
///
/// Predicates attached directly to a stub are ANDed by the server; a stub
/// without predicates matches every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stub {
    pub(super) predicates: Vec<Predicate>,
    pub(super) responses: Vec<Response>,
}

impl Stub {
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }
}

// ============================================================================
// Imposter
// ============================================================================

fn is_unassigned(port: &u16) -> bool {
    *port == 0
}

/// Top-level imposter definition, as posted to `/imposters`.
///
/// Port 0 leaves the port off the wire so the server picks one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Imposter {
    pub(super) protocol: Protocol,
    #[serde(skip_serializing_if = "is_unassigned")]
    pub(super) port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) name: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub(super) record_requests: bool,
    pub(super) stubs: Vec<Stub>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) default_response: Option<IsResponse>,
}

impl Imposter {
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Requested port; 0 means the server assigns one.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn record_requests(&self) -> bool {
        self.record_requests
    }

    /// Stubs in evaluation order; the first stub whose predicates all match wins.
    pub fn stubs(&self) -> &[Stub] {
        &self.stubs
    }

    pub fn default_response(&self) -> Option<&IsResponse> {
        self.default_response.as_ref()
    }
}
