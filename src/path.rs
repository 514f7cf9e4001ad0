//! Path-based container operations
//!
//! [`get_path`], [`has_path`], and [`set_path`] compose the single-key
//! operations across an ordered sequence of key segments, consumed strictly
//! left to right. They walk with an explicit accumulator rather than
//! recursing per segment, and they never construct errors of their own:
//! whatever a single-key operation raises propagates unchanged, kind and
//! message intact.
//!
//! ## Empty Paths
//!
//! One policy for all three operations: the empty path addresses the
//! container itself. `get_path(c, &[])` returns `c`, `has_path(c, &[])` is
//! `true`, and `set_path(c, &[], v)` assigns `v` as the new root value.

use crate::accessor::{get_value, has_value, key_repr, set_value};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::Value;
use std::borrow::Cow;

/// Resolve a nested value by walking `path` left to right
///
/// Each segment is resolved with [`get`](crate::get); the value produced by
/// the final segment is the result. Any intermediate failure — `NotFound`,
/// `ContainerFailure`, `InvalidArgument` — propagates unchanged.
///
/// # Examples
///
/// ```
/// use keyed::{get_path, Value};
///
/// let c = Value::map_from([(
///     "a",
///     Value::map_from([("b", Value::from("x"))]),
/// )]);
/// assert_eq!(
///     get_path(&c, &["a".into(), "b".into()]).unwrap(),
///     Value::from("x")
/// );
/// assert_eq!(get_path(&c, &[]).unwrap(), c);
/// ```
pub fn get_path(container: &Value, path: &[Value]) -> Result<Value> {
    let Some((first, rest)) = path.split_first() else {
        return Ok(container.clone());
    };
    let mut current = get_value(container, first)?;
    for segment in rest {
        current = get_value(&current, segment)?;
    }
    Ok(current)
}

/// Check whether a nested key exists by walking `path` left to right
///
/// Calls [`has`](crate::has) at each segment and short-circuits to
/// `Ok(false)` the moment a segment is absent; later segments are not
/// evaluated. Only non-final segments are `get`-resolved to descend — the
/// final segment is never read.
///
/// # Examples
///
/// ```
/// use keyed::{has_path, Value};
///
/// let c = Value::map_from([(
///     "a",
///     Value::map_from([("b", Value::from("x"))]),
/// )]);
/// assert!(has_path(&c, &["a".into(), "b".into()]).unwrap());
/// assert!(!has_path(&c, &["a".into(), "z".into()]).unwrap());
/// ```
pub fn has_path(container: &Value, path: &[Value]) -> Result<bool> {
    let last_index = match path.len().checked_sub(1) {
        Some(i) => i,
        None => return Ok(true),
    };
    let mut current = Cow::Borrowed(container);
    for (i, segment) in path.iter().enumerate() {
        if !has_value(&current, segment)? {
            return Ok(false);
        }
        if i < last_index {
            current = Cow::Owned(get_value(&current, segment)?);
        }
    }
    Ok(true)
}

/// Write a nested value by walking `path` left to right
///
/// A single-segment path delegates straight to [`set`](crate::set). For
/// longer paths the walk descends `Map` containers by direct indexing,
/// creating an empty intermediate `Map` for an absent key, and descends
/// `Record` containers into the existing field (absent fields fail
/// `NotFound`). At an `Index` or `Service` boundary the child is resolved
/// with [`get`](crate::get); plain data children are written back through
/// [`set`](crate::set) once the nested write completes, while handle
/// children alias the underlying object and need no write-back. A data
/// child under a `Service` cannot be written back, so the walk fails
/// `InvalidArgument` there, consistent with the read-only contract.
///
/// # Examples
///
/// ```
/// use keyed::{get_path, set_path, Value};
///
/// let mut c = Value::map();
/// set_path(&mut c, &["a".into(), "b".into()], "x").unwrap();
/// assert_eq!(
///     get_path(&c, &["a".into(), "b".into()]).unwrap(),
///     Value::from("x")
/// );
/// ```
pub fn set_path(container: &mut Value, path: &[Value], value: impl Into<Value>) -> Result<()> {
    set_path_value(container, path, value.into())
}

fn set_path_value(container: &mut Value, path: &[Value], value: Value) -> Result<()> {
    let Some((last, init)) = path.split_last() else {
        *container = value;
        return Ok(());
    };

    let mut current: &mut Value = container;
    for (depth, segment) in init.iter().enumerate() {
        if matches!(current, Value::Index(_) | Value::Service(_)) {
            // Handle boundary: the child is a fresh value, not a borrow of
            // the container. Handle children alias their underlying object;
            // data children must be written back after the nested write.
            let mut child = get_value(current, segment)?;
            let write_back = matches!(child, Value::Map(_) | Value::Record(_));
            set_path_value(&mut child, &path[depth + 1..], value)?;
            if write_back {
                set_value(current, segment, child)?;
            }
            return Ok(());
        }

        let key = Key::normalize(segment)?;
        current = match current {
            Value::Map(map) => map.entry(key).or_insert_with(Value::map),
            Value::Record(rec) => {
                let name = key.field_name();
                match rec.get_mut(&name) {
                    Some(child) => child,
                    None => return Err(Error::not_found(key_repr(segment, &key))),
                }
            }
            other => {
                return Err(Error::invalid_argument(format!(
                    "{} is not a container",
                    other.type_name()
                )))
            }
        };
    }
    set_value(current, last, value)
}
