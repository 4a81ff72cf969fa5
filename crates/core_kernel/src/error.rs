//! Core error types used across the system

use chrono::NaiveDate;
use thiserror::Error;

use crate::messages::LocalizedMessage;

/// Core error type for the kernel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Date out of range: {date} plus {days} days")]
    DateOutOfRange { date: NaiveDate, days: u32 },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}

impl LocalizedMessage for CoreError {
    fn message_id(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "validation-failed",
            CoreError::DateOutOfRange { .. } => "date-out-of-range",
            CoreError::Configuration(_) => "configuration-invalid",
        }
    }

    fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            CoreError::Validation(detail) | CoreError::Configuration(detail) => {
                vec![("detail", detail.clone())]
            }
            CoreError::DateOutOfRange { date, days } => {
                vec![("date", date.to_string()), ("days", days.to_string())]
            }
        }
    }
}
