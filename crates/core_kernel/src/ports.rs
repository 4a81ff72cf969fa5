//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the hexagonal
//! architecture used by the resolution domains.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! │                 (PartyDetailsService)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │   (LedgerPort, PartyPort, PermissionPort, NotificationSink)  │
//! │   Defined in each domain, depend only on core_kernel         │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  Record store     │     │  In-memory mock  │
//!         │  adapter (host)   │     │  (feature mock)  │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! Resolution is synchronous, so port methods are plain functions. Every
//! port is `Send + Sync` so one service instance can be shared by a host's
//! request handlers.

use std::fmt;
use thiserror::Error;

use crate::identifiers::{CorrelationId, UserId};
use crate::messages::LocalizedMessage;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested record was not found
    #[error("Not found: {entity_type} {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The operation conflicts with existing data (e.g. a duplicate name)
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error indicates a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

impl LocalizedMessage for PortError {
    fn message_id(&self) -> &'static str {
        match self {
            PortError::NotFound { .. } => "record-not-found",
            _ => "store-error",
        }
    }

    fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            PortError::NotFound { entity_type, id } => {
                vec![("entity", entity_type.clone()), ("name", id.clone())]
            }
            other => vec![("detail", other.to_string())],
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so that adapters can be shared
/// between threads.
pub trait DomainPort: Send + Sync {}

/// Receives user-visible notices raised as a side effect of resolution
pub trait NotificationSink: Send + Sync {
    /// Delivers a message to the current user
    fn notify(&self, message: &str);
}

/// Metadata about one resolution for auditing and tracing
#[derive(Debug, Clone, Default)]
pub struct OperationMetadata {
    /// Correlation ID for tracing across systems
    pub correlation_id: CorrelationId,
    /// User or system that initiated the operation
    pub initiated_by: Option<UserId>,
}

impl OperationMetadata {
    /// Creates metadata for an operation started by `actor`
    pub fn initiated_by(actor: UserId) -> Self {
        Self {
            initiated_by: Some(actor),
            ..Default::default()
        }
    }
}

/// In-memory adapters for tests and demos
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Notification sink that records every message it receives
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        /// Creates an empty recorder
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the messages received so far, oldest first
        pub fn messages(&self) -> Vec<String> {
            self.messages
                .lock()
                .map(|messages| messages.clone())
                .unwrap_or_default()
        }
    }

    impl NotificationSink for RecordingNotifier {
        fn notify(&self, message: &str) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(message.to_string());
            }
        }
    }
}
