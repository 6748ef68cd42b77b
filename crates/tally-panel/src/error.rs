//! Error types for the panel manager
//!
//! This module provides structured error types for the few fallible
//! operations in the crate. Geometry math and mode transitions are
//! deliberately infallible: out-of-range inputs are clamped and illegal
//! transitions are no-ops, so neither surfaces here.

use crate::types::PanelId;

/// Errors that can occur in panel manager operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Panel with the given ID was not found
    PanelNotFound(PanelId),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PanelNotFound(id) => write!(f, "panel not found: {}", id),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}

/// Result type alias for panel operations
pub type PanelResult<T> = Result<T, PanelError>;
