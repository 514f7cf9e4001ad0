//! Capability contracts for opaque containers
//!
//! Two narrow traits, not one with optional members: a type implementing only
//! the read pair is a [`Service`]; one implementing all four capabilities is
//! [`Indexable`]. The access layer wraps every capability failure as
//! [`ContainerFailure`](crate::Error::ContainerFailure), keeping the original
//! error as the cause.
//!
//! Methods take `&self`; implementations own their interior mutability (see
//! [`MemoryIndex`](crate::MemoryIndex) for the lock-protected-map shape).
//! Container values hold these as `Arc<dyn …>`, so a handle read out of a
//! container aliases the same underlying object.

use crate::key::Key;
use crate::value::Value;
use thiserror::Error;

/// Opaque error raised by an [`Indexable`] capability
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An opaque container addressable by key, with full read/write capabilities
///
/// Each capability may fail with an implementation-specific error; the access
/// layer never interprets those failures beyond wrapping them.
pub trait Indexable: Send + Sync {
    /// Check whether an entry exists for the key
    fn exists_at(&self, key: &Key) -> std::result::Result<bool, CapabilityError>;

    /// Read the value stored at the key
    fn get_at(&self, key: &Key) -> std::result::Result<Value, CapabilityError>;

    /// Store a value at the key, creating or replacing the entry
    fn set_at(&self, key: &Key, value: Value) -> std::result::Result<(), CapabilityError>;

    /// Remove the entry at the key
    fn delete_at(&self, key: &Key) -> std::result::Result<(), CapabilityError>;
}

/// The two reserved failure kinds of a [`Service`] lookup
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service has no entry for the key
    #[error("service has no entry for the requested key")]
    NotFound,

    /// The lookup itself failed
    #[error("service lookup failed")]
    Failure(#[source] CapabilityError),
}

/// A pull-based, read-only key/value service
///
/// Exposes exactly the read pair — existence check and get — and no mutation.
/// Writing through the access layer to a Service container is an
/// `InvalidArgument`.
pub trait Service: Send + Sync {
    /// Check whether the service can resolve the key
    fn has(&self, key: &Key) -> std::result::Result<bool, ServiceError>;

    /// Resolve the key to its value
    fn get(&self, key: &Key) -> std::result::Result<Value, ServiceError>;
}
