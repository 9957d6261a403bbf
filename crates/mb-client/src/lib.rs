//! Client library for Mountebank-compatible service virtualization servers.
//!
//! This crate lets tests describe imposters with a builder DSL instead of
//! hand-writing the server's JSON schema, and drives the server's
//! control-plane API to install, inspect and remove them.
//!
//! # Example
//!
//! ```no_run
//! use mb_client::{predicate, response, Client, ImposterBuilder, StubBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ok = response::is()
//!     .status_code(200)
//!     .body("{ \"greeting\": \"Hello\" }")
//!     .build()?;
//!
//! let stub = StubBuilder::new()
//!     .predicate(predicate::equals().path("/test-path").build()?)
//!     .response(ok)
//!     .build()?;
//!
//! let imposter = ImposterBuilder::new()
//!     .protocol("http")
//!     .port(4545)
//!     .name("Greeting Imposter")
//!     .record_requests(true)
//!     .stub(stub)
//!     .build()?;
//!
//! let client = Client::new("http://localhost:2525")?;
//! let installed = client.create_imposter(&imposter)?;
//! assert_eq!(installed.port, 4545);
//!
//! let seen = client.number_of_requests(4545)?;
//! println!("{seen} request(s) so far");
//!
//! client.delete_imposter(4545)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod imposter;
pub mod predicate;
pub mod response;

pub use client::{
    Client, ClientBuilder, ImposterDetail, RecordedRequest, StubDetail, DEFAULT_ADMIN_URL,
};
pub use error::{ConfigurationError, Error, Result};
pub use imposter::{Imposter, ImposterBuilder, Protocol, Stub, StubBuilder};
pub use predicate::{Field, Operator, Predicate};
pub use response::{IsBuilder, IsResponse, Response};
