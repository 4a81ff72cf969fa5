//! CLI error types

use std::path::PathBuf;
use thiserror::Error;

use core_kernel::CoreError;

/// Errors raised before resolution starts
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The configuration is readable but incomplete
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The dataset file could not be read
    #[error("Cannot read dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON for the expected layout
    #[error("Invalid dataset: {0}")]
    DatasetFormat(#[from] serde_json::Error),
}
