//! Container normalization
//!
//! The access layer never duck-types: each operation projects its raw input
//! through [`container_ref`]/[`container_mut`] exactly once, then dispatches
//! by exhaustive match over the closed four-variant sum. Anything that is not
//! one of the four container shapes is rejected here, before any lookup.

use crate::capability::{Indexable, Service};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Shared projection of a value into one of the four container shapes
pub(crate) enum ContainerRef<'a> {
    Map(&'a BTreeMap<Key, Value>),
    Record(&'a HashMap<String, Value>),
    Index(&'a Arc<dyn Indexable>),
    Service(&'a Arc<dyn Service>),
}

impl std::fmt::Debug for ContainerRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerRef::Map(_) => f.write_str("ContainerRef::Map"),
            ContainerRef::Record(_) => f.write_str("ContainerRef::Record"),
            ContainerRef::Index(_) => f.write_str("ContainerRef::Index"),
            ContainerRef::Service(_) => f.write_str("ContainerRef::Service"),
        }
    }
}

/// Mutable projection of a value into one of the four container shapes
///
/// Handle variants stay shared references: their capabilities take `&self`
/// and mutate through interior mutability.
pub(crate) enum ContainerMut<'a> {
    Map(&'a mut BTreeMap<Key, Value>),
    Record(&'a mut HashMap<String, Value>),
    Index(&'a Arc<dyn Indexable>),
    Service(&'a Arc<dyn Service>),
}

/// Project a value as a readable container, or fail `InvalidArgument`
pub(crate) fn container_ref(value: &Value) -> Result<ContainerRef<'_>> {
    match value {
        Value::Map(m) => Ok(ContainerRef::Map(m)),
        Value::Record(r) => Ok(ContainerRef::Record(r)),
        Value::Index(h) => Ok(ContainerRef::Index(h)),
        Value::Service(h) => Ok(ContainerRef::Service(h)),
        other => Err(not_a_container(other)),
    }
}

/// Project a value as a mutable container, or fail `InvalidArgument`
pub(crate) fn container_mut(value: &mut Value) -> Result<ContainerMut<'_>> {
    match value {
        Value::Map(m) => Ok(ContainerMut::Map(m)),
        Value::Record(r) => Ok(ContainerMut::Record(r)),
        Value::Index(h) => Ok(ContainerMut::Index(h)),
        Value::Service(h) => Ok(ContainerMut::Service(h)),
        other => Err(not_a_container(other)),
    }
}

fn not_a_container(value: &Value) -> Error {
    Error::invalid_argument(format!("{} is not a container", value.type_name()))
}
