//! Single-key container operations
//!
//! The four polymorphic operations — [`get`], [`has`], [`set`], [`delete`] —
//! plus the batch variants [`set_many`] and [`delete_many`]. Every operation
//! normalizes its container and key exactly once, then dispatches by
//! exhaustive match; these functions are the only place errors are
//! constructed (the path operations are pure pass-through).
//!
//! ## Failure Contract
//!
//! - Absence on `get`/`delete` is [`NotFound`](crate::Error::NotFound); on
//!   [`has`] it is `Ok(false)`.
//! - Any capability error from an `Index` or `Service` container wraps as
//!   [`ContainerFailure`](crate::Error::ContainerFailure) with the original
//!   error as its cause.
//! - A value that is not one of the four container shapes fails
//!   [`InvalidArgument`](crate::Error::InvalidArgument) before any lookup.

use crate::capability::ServiceError;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::normalize::{container_mut, container_ref, ContainerMut, ContainerRef};
use crate::value::Value;

/// Render the offending key for a `NotFound` error
///
/// String keys are reported exactly as the caller supplied them, even when
/// canonicalization mapped them to an integer; everything else reports the
/// canonical rendering.
pub(crate) fn key_repr(raw: &Value, canonical: &Key) -> String {
    match raw {
        Value::String(s) => s.clone(),
        _ => canonical.to_string(),
    }
}

/// Retrieve the value stored under `key`
///
/// Fails `NotFound` when the key is absent, `ContainerFailure` when an
/// underlying capability errors, and `InvalidArgument` when `container` is
/// not a container or `key` is not a scalar.
///
/// # Examples
///
/// ```
/// use keyed::{get, Value};
///
/// let c = Value::map_from([("name", Value::from("Alice"))]);
/// assert_eq!(get(&c, "name").unwrap(), Value::from("Alice"));
/// assert!(get(&c, "missing").unwrap_err().is_not_found());
/// ```
pub fn get(container: &Value, key: impl Into<Value>) -> Result<Value> {
    get_value(container, &key.into())
}

pub(crate) fn get_value(container: &Value, raw_key: &Value) -> Result<Value> {
    let shape = container_ref(container)?;
    let key = Key::normalize(raw_key)?;

    match shape {
        ContainerRef::Service(svc) => match svc.get(&key) {
            Ok(value) => Ok(value),
            // The service's own not-found does not carry the key; re-raise
            // with the caller's original representation attached.
            Err(ServiceError::NotFound) => Err(Error::not_found(key_repr(raw_key, &key))),
            Err(ServiceError::Failure(source)) => Err(Error::container_failure(
                format!("reading key \"{}\" from service container", key),
                source,
            )),
        },
        ContainerRef::Index(idx) => {
            let present = idx.exists_at(&key).map_err(|source| {
                Error::container_failure(
                    format!("checking key \"{}\" on indexable container", key),
                    source,
                )
            })?;
            if !present {
                return Err(Error::not_found(key_repr(raw_key, &key)));
            }
            idx.get_at(&key).map_err(|source| {
                Error::container_failure(
                    format!("reading key \"{}\" from indexable container", key),
                    source,
                )
            })
        }
        ContainerRef::Map(map) => map
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::not_found(key_repr(raw_key, &key))),
        ContainerRef::Record(rec) => rec
            .get(key.field_name().as_str())
            .cloned()
            .ok_or_else(|| Error::not_found(key_repr(raw_key, &key))),
    }
}

/// Check whether `key` exists in the container
///
/// Absence is `Ok(false)`, never an error; a present key with a `Null` value
/// is still `Ok(true)`. Capability failures wrap as `ContainerFailure`.
///
/// # Examples
///
/// ```
/// use keyed::{has, Value};
///
/// let c = Value::map_from([("present", Value::Null)]);
/// assert!(has(&c, "present").unwrap());
/// assert!(!has(&c, "missing").unwrap());
/// ```
pub fn has(container: &Value, key: impl Into<Value>) -> Result<bool> {
    has_value(container, &key.into())
}

pub(crate) fn has_value(container: &Value, raw_key: &Value) -> Result<bool> {
    let shape = container_ref(container)?;
    let key = Key::normalize(raw_key)?;

    match shape {
        ContainerRef::Service(svc) => match svc.has(&key) {
            Ok(present) => Ok(present),
            // A service reporting its not-found kind from `has` is plain
            // absence, not a failure.
            Err(ServiceError::NotFound) => Ok(false),
            Err(ServiceError::Failure(source)) => Err(Error::container_failure(
                format!("checking key \"{}\" on service container", key),
                source,
            )),
        },
        ContainerRef::Index(idx) => idx.exists_at(&key).map_err(|source| {
            Error::container_failure(
                format!("checking key \"{}\" on indexable container", key),
                source,
            )
        }),
        ContainerRef::Map(map) => Ok(map.contains_key(&key)),
        ContainerRef::Record(rec) => Ok(rec.contains_key(key.field_name().as_str())),
    }
}

/// Store `value` under `key`, creating or replacing the entry
///
/// Upsert semantics: a missing key is created, never an error. Writing to a
/// `Service` container fails `InvalidArgument` — services expose only read
/// capabilities.
///
/// # Examples
///
/// ```
/// use keyed::{get, set, Value};
///
/// let mut c = Value::record();
/// set(&mut c, "age", 30).unwrap();
/// assert_eq!(get(&c, "age").unwrap(), Value::Int(30));
/// ```
pub fn set(container: &mut Value, key: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
    set_value(container, &key.into(), value.into())
}

pub(crate) fn set_value(container: &mut Value, raw_key: &Value, value: Value) -> Result<()> {
    let shape = container_mut(container)?;
    let key = Key::normalize(raw_key)?;
    tracing::trace!(target: "keyed::accessor", key = %key, "set entry");

    match shape {
        ContainerMut::Map(map) => {
            map.insert(key, value);
            Ok(())
        }
        ContainerMut::Record(rec) => {
            rec.insert(key.field_name(), value);
            Ok(())
        }
        ContainerMut::Index(idx) => idx.set_at(&key, value).map_err(|source| {
            Error::container_failure(
                format!("writing key \"{}\" to indexable container", key),
                source,
            )
        }),
        ContainerMut::Service(_) => Err(Error::invalid_argument(
            "service containers are read-only",
        )),
    }
}

/// Remove the entry stored under `key`
///
/// Existence is confirmed first: deleting an absent key fails `NotFound`, it
/// is not a silent no-op. Deleting from a `Service` container fails
/// `InvalidArgument`.
///
/// # Examples
///
/// ```
/// use keyed::{delete, set, Value};
///
/// let mut c = Value::map();
/// set(&mut c, "k", 1).unwrap();
/// delete(&mut c, "k").unwrap();
/// assert!(delete(&mut c, "k").unwrap_err().is_not_found());
/// ```
pub fn delete(container: &mut Value, key: impl Into<Value>) -> Result<()> {
    delete_value(container, &key.into())
}

pub(crate) fn delete_value(container: &mut Value, raw_key: &Value) -> Result<()> {
    let shape = container_mut(container)?;
    let key = Key::normalize(raw_key)?;
    tracing::trace!(target: "keyed::accessor", key = %key, "delete entry");

    match shape {
        ContainerMut::Map(map) => match map.remove(&key) {
            Some(_) => Ok(()),
            None => Err(Error::not_found(key_repr(raw_key, &key))),
        },
        ContainerMut::Record(rec) => match rec.remove(key.field_name().as_str()) {
            Some(_) => Ok(()),
            None => Err(Error::not_found(key_repr(raw_key, &key))),
        },
        ContainerMut::Index(idx) => {
            let present = idx.exists_at(&key).map_err(|source| {
                Error::container_failure(
                    format!("checking key \"{}\" on indexable container", key),
                    source,
                )
            })?;
            if !present {
                return Err(Error::not_found(key_repr(raw_key, &key)));
            }
            idx.delete_at(&key).map_err(|source| {
                Error::container_failure(
                    format!("deleting key \"{}\" from indexable container", key),
                    source,
                )
            })
        }
        ContainerMut::Service(_) => Err(Error::invalid_argument(
            "service containers are read-only",
        )),
    }
}

/// Store every key/value pair in order
///
/// Applies [`set`] per pair; later pairs win on duplicate keys. Stops at and
/// propagates the first failure without rolling back earlier writes.
pub fn set_many<K, V, I>(container: &mut Value, entries: I) -> Result<()>
where
    K: Into<Value>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    for (key, value) in entries {
        set(container, key, value)?;
    }
    Ok(())
}

/// Remove every listed key in order
///
/// Applies [`delete`] per key; a missing key fails `NotFound` and leaves the
/// earlier deletions applied.
pub fn delete_many<K, I>(container: &mut Value, keys: I) -> Result<()>
where
    K: Into<Value>,
    I: IntoIterator<Item = K>,
{
    for key in keys {
        delete(container, key)?;
    }
    Ok(())
}
