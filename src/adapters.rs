//! Reference capability implementations
//!
//! In-crate implementations of the two capability contracts: [`MemoryIndex`]
//! is a lock-protected ordered map implementing the full [`Indexable`]
//! surface, and [`TableService`] is a read-only [`Service`] over an owned
//! table. Both are plain building blocks — no caching, no persistence — and
//! double as the reference targets for the integration suites.

use crate::capability::{CapabilityError, Indexable, Service, ServiceError};
use crate::key::Key;
use crate::value::Value;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// In-memory [`Indexable`] container
///
/// Holds its entries behind a `parking_lot::RwLock`, so a shared handle can
/// be mutated through `&self` capabilities from any holder. Capability calls
/// never fail; the error channel exists for implementations that do.
///
/// # Example
///
/// ```
/// use keyed::{get, set, MemoryIndex, Value};
/// use std::sync::Arc;
///
/// let idx = Arc::new(MemoryIndex::new());
/// let mut c = Value::index(idx.clone());
/// set(&mut c, "k", 1).unwrap();
/// assert_eq!(get(&c, "k").unwrap(), Value::Int(1));
/// // The same entries are visible through the shared handle.
/// assert_eq!(idx.len(), 1);
/// ```
#[derive(Default)]
pub struct MemoryIndex {
    entries: RwLock<BTreeMap<Key, Value>>,
}

impl MemoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index seeded with entries
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot the stored keys in order
    pub fn keys(&self) -> Vec<Key> {
        self.entries.read().keys().cloned().collect()
    }
}

impl Indexable for MemoryIndex {
    fn exists_at(&self, key: &Key) -> Result<bool, CapabilityError> {
        Ok(self.entries.read().contains_key(key))
    }

    fn get_at(&self, key: &Key) -> Result<Value, CapabilityError> {
        self.entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| format!("no entry at {}", key).into())
    }

    fn set_at(&self, key: &Key, value: Value) -> Result<(), CapabilityError> {
        self.entries.write().insert(key.clone(), value);
        Ok(())
    }

    fn delete_at(&self, key: &Key) -> Result<(), CapabilityError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Read-only [`Service`] over an owned table
///
/// Resolves lookups against a fixed ordered map; a missing key surfaces the
/// reserved not-found kind from `get`.
///
/// # Example
///
/// ```
/// use keyed::{get, TableService, Value};
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
///
/// let svc = TableService::from_entries([("greeting", Value::from("hello"))]);
/// let c = Value::service(Arc::new(svc));
/// assert_eq!(get(&c, "greeting").unwrap(), Value::from("hello"));
/// ```
pub struct TableService {
    table: BTreeMap<Key, Value>,
}

impl TableService {
    /// Create a service over the given table
    pub fn new(table: BTreeMap<Key, Value>) -> Self {
        Self { table }
    }

    /// Create a service seeded with entries
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            table: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Service for TableService {
    fn has(&self, key: &Key) -> Result<bool, ServiceError> {
        Ok(self.table.contains_key(key))
    }

    fn get(&self, key: &Key) -> Result<Value, ServiceError> {
        self.table.get(key).cloned().ok_or(ServiceError::NotFound)
    }
}
