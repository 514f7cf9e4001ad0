//! Error types for keyed container access
//!
//! This module defines the three error kinds every operation can surface.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | InvalidArgument | Container, key, or path shape was rejected before any lookup |
//! | NotFound | Key is valid but absent from the container |
//! | ContainerFailure | An underlying capability failed; carries the cause |

use crate::capability::CapabilityError;
use thiserror::Error;

/// Result type alias for keyed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for keyed container access
#[derive(Debug, Error)]
pub enum Error {
    /// The container or key could not be normalized into a recognized shape
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why normalization rejected the value
        reason: String,
    },

    /// Key is syntactically valid but absent from the container
    #[error("key not found: {key}")]
    NotFound {
        /// The offending key, rendered as the caller supplied it
        key: String,
    },

    /// An underlying capability raised an unexpected error
    #[error("container failure: {context}")]
    ContainerFailure {
        /// What the core was doing when the capability failed
        context: String,
        /// The original capability error
        #[source]
        source: CapabilityError,
    },
}

impl Error {
    /// Create an `InvalidArgument` error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a `NotFound` error carrying the offending key rendering
    pub fn not_found(key: impl Into<String>) -> Self {
        Error::NotFound { key: key.into() }
    }

    /// Create a `ContainerFailure` error wrapping a capability error
    pub fn container_failure(context: impl Into<String>, source: CapabilityError) -> Self {
        Error::ContainerFailure {
            context: context.into(),
            source,
        }
    }

    /// Get the canonical error code
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidArgument { .. } => "InvalidArgument",
            Error::NotFound { .. } => "NotFound",
            Error::ContainerFailure { .. } => "ContainerFailure",
        }
    }

    /// Check if this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a `ContainerFailure` error
    pub fn is_container_failure(&self) -> bool {
        matches!(self, Error::ContainerFailure { .. })
    }
}
