//! Imposter and stub definitions.
//!
//! This module provides:
//! - `Imposter`: the top-level definition posted to the server
//! - `Stub`: predicates paired with responses
//! - `Protocol`: the protocols an imposter can listen with
//! - `ImposterBuilder` / `StubBuilder`: validating builders for the above
//!
//! ## Module Structure
//!
//! - `types`: All type definitions
//! - `builder`: Builders that check invariants before producing values

mod builder;
mod types;


pub use builder::{ImposterBuilder, StubBuilder};
pub use types::{Imposter, Protocol, Stub};
