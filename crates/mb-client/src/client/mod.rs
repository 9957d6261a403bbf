//! Blocking HTTP client for the server's control-plane API.
//!
//! Each call performs one round trip and returns once it completes. There is
//! no retry, caching or client-side locking; concurrent callers race exactly
//! as their HTTP requests do.

mod types;

pub use types::{ImposterDetail, RecordedRequest, StubDetail};

use crate::error::{Error, Result};
use crate::imposter::Imposter;
use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use types::ImpostersResponse;

/// Default control-plane address of a locally running server.
pub const DEFAULT_ADMIN_URL: &str = "http://localhost:2525";

/// Configures a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// `base_url` may be `host:port` or a full URI.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Per-request deadline. Requests wait indefinitely when unset.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = HttpClient::builder().timeout(self.timeout).build()?;
        Ok(Client {
            http,
            base_url: normalize_base_url(&self.base_url),
        })
    }
}

/// Client for installing, inspecting and removing imposters.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
}

impl Client {
    /// Create a client with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install an imposter and return the server's echo of it.
    ///
    /// The echo carries the assigned port when the imposter was built with
    /// port 0. Any non-2xx reply becomes [`Error::Installation`] with the
    /// server's body kept verbatim.
    pub fn create_imposter(&self, imposter: &Imposter) -> Result<ImposterDetail> {
        let request = self.http.post(self.url("/imposters")).json(imposter);
        let (status, body) = self.send(request)?;

        if !status.is_success() {
            return Err(Error::Installation {
                status: status.as_u16(),
                body,
            });
        }

        decode(&body)
    }

    /// Fetch the current state of the imposter on `port`, including any
    /// recorded requests.
    pub fn get_imposter(&self, port: u16) -> Result<ImposterDetail> {
        let request = self.http.get(self.imposter_url(port));
        let (status, body) = self.send(request)?;

        match status {
            s if s.is_success() => decode(&body),
            StatusCode::NOT_FOUND => Err(Error::NotFound { port }),
            s => Err(unexpected(s, body)),
        }
    }

    /// Remove the imposter on `port`.
    ///
    /// Deleting a port with no imposter succeeds and yields an empty
    /// [`ImposterDetail`] (see [`ImposterDetail::is_empty`]).
    pub fn delete_imposter(&self, port: u16) -> Result<ImposterDetail> {
        let request = self.http.delete(self.imposter_url(port));
        let (status, body) = self.send(request)?;

        if !status.is_success() {
            return Err(unexpected(status, body));
        }

        decode_deleted(&body)
    }

    /// Remove every installed imposter, returning what was removed.
    pub fn delete_all_imposters(&self) -> Result<Vec<ImposterDetail>> {
        let request = self.http.delete(self.url("/imposters"));
        let (status, body) = self.send(request)?;

        if !status.is_success() {
            return Err(unexpected(status, body));
        }

        decode_or_default::<ImpostersResponse>(&body).map(|list| list.imposters)
    }

    /// List installed imposters in the server's summary form.
    pub fn list_imposters(&self) -> Result<Vec<ImposterDetail>> {
        let request = self.http.get(self.url("/imposters"));
        let (status, body) = self.send(request)?;

        if !status.is_success() {
            return Err(unexpected(status, body));
        }

        decode::<ImpostersResponse>(&body).map(|list| list.imposters)
    }

    /// Requests recorded by the imposter on `port`; empty when recording is off.
    pub fn recorded_requests(&self, port: u16) -> Result<Vec<RecordedRequest>> {
        Ok(self.get_imposter(port)?.requests)
    }

    /// Number of requests recorded by the imposter on `port`.
    ///
    /// Derived from [`get_imposter`](Self::get_imposter); returns 0 when the
    /// imposter exists but does not record.
    pub fn number_of_requests(&self, port: u16) -> Result<usize> {
        Ok(self.recorded_requests(port)?.len())
    }

    /// Drop the requests recorded by the imposter on `port`.
    pub fn clear_recorded_requests(&self, port: u16) -> Result<ImposterDetail> {
        let url = format!("{}/savedRequests", self.imposter_url(port));
        let (status, body) = self.send(self.http.delete(url))?;

        match status {
            s if s.is_success() => decode_or_default(&body),
            StatusCode::NOT_FOUND => Err(Error::NotFound { port }),
            s => Err(unexpected(s, body)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn imposter_url(&self, port: u16) -> String {
        format!("{}/imposters/{}", self.base_url, port)
    }

    fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String)> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();
        debug!("Control plane: {} {}", method, url);

        let response = self.http.execute(request)?;
        let status = response.status();
        let body = response.text()?;
        debug!("Control plane: {} {} -> {}", method, url, status);

        Ok((status, body))
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

fn unexpected(status: StatusCode, body: String) -> Error {
    Error::UnexpectedStatus {
        status: status.as_u16(),
        body,
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(Error::Decoding)
}

/// Like [`decode`], but an empty body yields `T::default()`.
fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    decode(body)
}

/// Decode the reply to a single delete. The server answers `{}` when no
/// imposter was installed, which maps to the empty shape.
fn decode_deleted(body: &str) -> Result<ImposterDetail> {
    if body.trim().is_empty() {
        return Ok(ImposterDetail::default());
    }
    match decode::<Value>(body)? {
        Value::Object(map) if map.is_empty() => Ok(ImposterDetail::default()),
        value => serde_json::from_value(value).map_err(Error::Decoding),
    }
}
