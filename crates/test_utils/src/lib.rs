//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! party details test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common records
//! - `builders`: Builder patterns for parties, addresses, and contacts
//! - `world`: A `TestWorld` wiring every mock port into a service
//! - `assertions`: Assertion helpers for serialized profiles and errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod world;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use world::*;
pub use assertions::*;
pub use generators::*;
