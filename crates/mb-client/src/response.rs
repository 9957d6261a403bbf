//! Responses a stub replies with once its predicates match.

use crate::error::ConfigurationError;
use serde::Serialize;
use std::collections::HashMap;

pub(crate) fn default_status_code() -> u16 {
    200
}

/// A stub response. Only literal `is` responses are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Is(IsResponse),
}

impl From<IsResponse> for Response {
    fn from(is: IsResponse) -> Self {
        Response::Is(is)
    }
}

/// Literal reply: status, headers and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsResponse {
    status_code: u16,
    headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl IsResponse {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Builder for `is` responses. The status code defaults to 200.
#[derive(Debug, Clone, Default)]
pub struct IsBuilder {
    status_code: Option<u16>,
    headers: HashMap<String, String>,
    body: Option<String>,
}

impl IsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Add a header. Later values for the same name replace earlier ones.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers<H, K, V>(mut self, headers: H) -> Self
    where
        H: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Result<Response, ConfigurationError> {
        self.build_is().map(Response::Is)
    }

    /// Build the bare `is` body, e.g. for an imposter's default response.
    pub fn build_is(self) -> Result<IsResponse, ConfigurationError> {
        let status_code = self.status_code.unwrap_or_else(default_status_code);
        if !(100..600).contains(&status_code) {
            return Err(ConfigurationError::InvalidStatusCode(status_code));
        }

        Ok(IsResponse {
            status_code,
            headers: self.headers,
            body: self.body,
        })
    }
}

/// Start an `is` response.
pub fn is() -> IsBuilder {
    IsBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_status_code_defaults_to_200() {
        let Response::Is(is) = is().build().unwrap();
        assert_eq!(is.status_code(), 200);
        assert!(is.headers().is_empty());
        assert_eq!(is.body(), None);
    }

    #[test]
    fn test_headers_accumulate() {
        let Response::Is(is) = is()
            .header("Content-Type", "application/json")
            .header("X-Custom-Header", "ABC123")
            .build()
            .unwrap();

        assert_eq!(is.header("Content-Type"), Some("application/json"));
        assert_eq!(is.header("X-Custom-Header"), Some("ABC123"));
        assert_eq!(is.header("content-type"), None);
    }

    #[test]
    fn test_status_code_range() {
        assert_eq!(
            is().status_code(99).build().unwrap_err(),
            ConfigurationError::InvalidStatusCode(99)
        );
        assert_eq!(
            is().status_code(600).build().unwrap_err(),
            ConfigurationError::InvalidStatusCode(600)
        );
        assert!(is().status_code(100).build().is_ok());
        assert!(is().status_code(599).build().is_ok());
    }

    #[test]
    fn test_is_wire_shape() {
        let response = is()
            .status_code(201)
            .headers([("Location", "/users/1")])
            .body("{ \"greeting\": \"Hello\" }")
            .build()
            .unwrap();

        assert_json_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "is": {
                    "statusCode": 201,
                    "headers": {"Location": "/users/1"},
                    "body": "{ \"greeting\": \"Hello\" }"
                }
            })
        );
    }

    #[test]
    fn test_body_omitted_when_unset() {
        let response = is().status_code(204).build().unwrap();
        assert_json_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"is": {"statusCode": 204, "headers": {}}})
        );
    }
}
