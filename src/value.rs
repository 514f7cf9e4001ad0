//! The dynamic value type
//!
//! [`Value`] is the closed sum every operation works over: seven plain data
//! variants plus the four container variants the access layer recognizes
//! (`Map`, `Record`, `Index`, `Service`).
//!
//! ## Equality Rules
//!
//! - Different variants are never equal (no type coercion): `Int(1) != Float(1.0)`,
//!   `String("abc") != Bytes([97, 98, 99])`.
//! - `Float` uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`.
//! - `Index` and `Service` handles compare by identity (same underlying
//!   object), not by contents.

use crate::capability::{Indexable, Service};
use crate::key::Key;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A dynamically typed value
///
/// The four container variants are the only shapes the access operations
/// accept; passing any other variant as a container is an
/// [`InvalidArgument`](crate::Error::InvalidArgument).
///
/// `Index` and `Service` hold `Arc` handles: reading one out of a container
/// yields an alias of the same underlying object, so mutations through the
/// child are visible to every holder.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit IEEE-754 float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Arbitrary binary data, distinct from `String`
    Bytes(Vec<u8>),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Ordered mapping with canonical string-or-integer keys
    Map(BTreeMap<Key, Value>),
    /// Plain structured object; fields addressed by name
    Record(HashMap<String, Value>),
    /// Opaque read/write container (see [`Indexable`])
    Index(Arc<dyn Indexable>),
    /// Opaque read-only key/value service (see [`Service`])
    Service(Arc<dyn Service>),
}

impl Value {
    /// Returns the variant name (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Map(_) => "Map",
            Value::Record(_) => "Record",
            Value::Index(_) => "Index",
            Value::Service(_) => "Service",
        }
    }

    /// Create an empty `Map` container
    pub fn map() -> Value {
        Value::Map(BTreeMap::new())
    }

    /// Create a `Map` container from key/value pairs
    pub fn map_from<K, I>(entries: I) -> Value
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Create an empty `Record` container
    pub fn record() -> Value {
        Value::Record(HashMap::new())
    }

    /// Create a `Record` container from field/value pairs
    pub fn record_from<N, I>(fields: I) -> Value
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Value::Record(fields.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }

    /// Wrap an [`Indexable`] handle as a container value
    pub fn index(handle: Arc<dyn Indexable>) -> Value {
        Value::Index(handle)
    }

    /// Wrap a [`Service`] handle as a container value
    pub fn service(handle: Arc<dyn Service>) -> Value {
        Value::Service(handle)
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is one of the four container shapes
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Map(_) | Value::Record(_) | Value::Index(_) | Value::Service(_)
        )
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as array slice
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as map reference
    pub fn as_map(&self) -> Option<&BTreeMap<Key, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get as record reference
    pub fn as_record(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Build a value from a `serde_json::Value`
    ///
    /// JSON objects become `Record` containers; numbers become `Int` when they
    /// fit an `i64` and `Float` otherwise.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Render a data-only tree as a `serde_json::Value`
    ///
    /// `Map` keys are rendered as strings and `Bytes` as an array of numbers.
    /// Returns `None` if the tree contains an `Index` or `Service` handle,
    /// which has no JSON representation.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Int(i) => Some(serde_json::Value::Number((*i).into())),
            Value::Float(f) => serde_json::Number::from_f64(*f).map(serde_json::Value::Number),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Bytes(b) => Some(serde_json::Value::Array(
                b.iter().map(|byte| (*byte).into()).collect(),
            )),
            Value::Array(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Map(m) => m
                .iter()
                .map(|(k, v)| v.to_json().map(|j| (k.to_string(), j)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Value::Record(r) => r
                .iter()
                .map(|(k, v)| v.to_json().map(|j| (k.clone(), j)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Value::Index(_) | Value::Service(_) => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Value::Array(a) => f.debug_tuple("Array").field(a).finish(),
            Value::Map(m) => f.debug_tuple("Map").field(m).finish(),
            Value::Record(r) => f.debug_tuple("Record").field(r).finish(),
            Value::Index(_) => write!(f, "Index(..)"),
            Value::Service(_) => write!(f, "Service(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754 equality: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            // Handles compare by identity, not contents.
            (Value::Index(a), Value::Index(b)) => Arc::ptr_eq(a, b),
            (Value::Service(a), Value::Service(b)) => Arc::ptr_eq(a, b),
            // Different variants are never equal (no type coercion).
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
