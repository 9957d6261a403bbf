//! Builders for stubs and imposters.

use super::types::{Imposter, Protocol, Stub};
use crate::error::ConfigurationError;
use crate::predicate::Predicate;
use crate::response::{IsResponse, Response};

/// Builder for [`Stub`]. At least one response is required.
#[derive(Debug, Clone, Default)]
pub struct StubBuilder {
    predicates: Vec<Predicate>,
    responses: Vec<Response>,
}

impl StubBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    pub fn response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    pub fn responses(mut self, responses: impl IntoIterator<Item = Response>) -> Self {
        self.responses.extend(responses);
        self
    }

    pub fn build(self) -> Result<Stub, ConfigurationError> {
        if self.responses.is_empty() {
            return Err(ConfigurationError::EmptyResponses);
        }

        Ok(Stub {
            predicates: self.predicates,
            responses: self.responses,
        })
    }
}

/// Builder for [`Imposter`]. The protocol is required.
#[derive(Debug, Clone, Default)]
pub struct ImposterBuilder {
    protocol: Option<String>,
    port: u16,
    name: Option<String>,
    record_requests: bool,
    stubs: Vec<Stub>,
    default_response: Option<IsResponse>,
}

impl ImposterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Protocol name; checked against [`Protocol`] at build time.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Port to listen on. Leave at 0 to let the server assign one.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn record_requests(mut self, record_requests: bool) -> Self {
        self.record_requests = record_requests;
        self
    }

    pub fn stub(mut self, stub: Stub) -> Self {
        self.stubs.push(stub);
        self
    }

    pub fn stubs(mut self, stubs: impl IntoIterator<Item = Stub>) -> Self {
        self.stubs.extend(stubs);
        self
    }

    /// Reply the server sends when no stub matches.
    pub fn default_response(mut self, response: IsResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    pub fn build(self) -> Result<Imposter, ConfigurationError> {
        let protocol: Protocol = self
            .protocol
            .as_deref()
            .ok_or(ConfigurationError::MissingProtocol)?
            .parse()?;

        Ok(Imposter {
            protocol,
            port: self.port,
            name: self.name,
            record_requests: self.record_requests,
            stubs: self.stubs,
            default_response: self.default_response,
        })
    }
}
