//! Party Details Command-Line Interface
//!
//! Loads a JSON dataset into the in-memory adapters, resolves one party
//! profile as configured, and prints it as JSON.
//!
//! # Modules
//!
//! - `config`: configuration from `party-details.toml` and `PARTY_*` variables
//! - `dataset`: the JSON dataset and the service wired from it
//! - `error`: errors raised while loading configuration or data
//! - `notify`: notification sink writing notices to stderr

pub mod config;
pub mod dataset;
pub mod error;
pub mod notify;

pub use config::{CliConfig, LogFormat};
pub use dataset::{Dataset, ReadGrant};
pub use error::CliError;
pub use notify::StderrNotifier;
