//! Canonical lookup keys
//!
//! Every key a caller passes in — text, integer, float, or boolean — is
//! canonicalized into a [`Key`] before any lookup happens. Canonicalization is
//! deterministic: the same input always produces the same lookup key.
//!
//! ## Unification Policy
//!
//! Integer-looking keys unify. `19`, `"19"`, and `19.0` all canonicalize to
//! `Key::Int(19)`, so a value stored under one form is retrievable under the
//! others on every container variant. A string that is not the exact canonical
//! base-10 rendering of an `i64` (`"007"`, `"1.5"`, `" 19"`) stays a string
//! key. This is a fixed policy, not a configuration knob.

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical lookup key: a string or an integer
///
/// `Map` containers are keyed by `Key` directly; `Record` containers use the
/// [`Display`](fmt::Display) rendering as the field name, which is why a
/// record field `"19"` is reachable through both `"19"` and `19`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key (not an integer rendering)
    Str(String),
}

impl Key {
    /// Canonicalize an arbitrary scalar value into a lookup key
    ///
    /// Accepts `String`, `Int`, `Float`, and `Bool` values. Everything else —
    /// including containers, arrays, bytes, null, and non-finite floats — is
    /// rejected with `InvalidArgument` before any lookup is attempted.
    pub fn normalize(raw: &Value) -> Result<Key> {
        match raw {
            Value::String(s) => Ok(Key::canonicalize_str(s)),
            Value::Int(i) => Ok(Key::Int(*i)),
            Value::Float(f) => {
                if !f.is_finite() {
                    return Err(Error::invalid_argument(format!(
                        "non-finite float {} is not a valid key",
                        f
                    )));
                }
                // Integral floats unify with their integer form.
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Ok(Key::Int(*f as i64))
                } else {
                    Ok(Key::Str(f.to_string()))
                }
            }
            Value::Bool(b) => Ok(Key::Str(b.to_string())),
            other => Err(Error::invalid_argument(format!(
                "{} is not a valid key",
                other.type_name()
            ))),
        }
    }

    /// Canonicalize a string: exact `i64` renderings become integer keys
    fn canonicalize_str(s: &str) -> Key {
        if let Ok(i) = s.parse::<i64>() {
            // Only the canonical rendering unifies; "007" and "+1" stay strings.
            if i.to_string() == s {
                return Key::Int(i);
            }
        }
        Key::Str(s.to_string())
    }

    /// The field name this key addresses on a `Record` container
    pub fn field_name(&self) -> String {
        self.to_string()
    }

    /// Check if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Check if this is a string key
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

// From conversions run the same canonicalization as `normalize`, so keys
// built directly (e.g. for a Map literal) cannot bypass the policy.

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::canonicalize_str(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::canonicalize_str(&s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i as i64)
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Int(i as i64)
    }
}
