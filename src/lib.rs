//! # Keyed
//!
//! Uniform keyed access over heterogeneous container values.
//!
//! Keyed lets calling code read, check, write, and delete keyed values on
//! four container shapes — ordered maps, plain records, opaque indexable
//! objects, and read-only key/value services — without branching on the
//! concrete shape at every call site.
//!
//! ## Quick Start
//!
//! ```
//! use keyed::{delete, get, has, set, get_path, set_path, Value};
//!
//! let mut profile = Value::map();
//! set(&mut profile, "name", "Alice").unwrap();
//! set_path(&mut profile, &["address".into(), "city".into()], "Berlin").unwrap();
//!
//! assert!(has(&profile, "name").unwrap());
//! assert_eq!(
//!     get_path(&profile, &["address".into(), "city".into()]).unwrap(),
//!     Value::from("Berlin")
//! );
//!
//! delete(&mut profile, "name").unwrap();
//! assert!(get(&profile, "name").unwrap_err().is_not_found());
//! ```
//!
//! ## Container Shapes
//!
//! - [`Value::Map`] — ordered mapping with canonical string-or-integer keys
//! - [`Value::Record`] — plain structured object, fields by name
//! - [`Value::Index`] — opaque object with full read/write capabilities
//!   (see [`Indexable`])
//! - [`Value::Service`] — opaque pull-based read-only lookup
//!   (see [`Service`])
//!
//! ## Error Taxonomy
//!
//! Every operation resolves to exactly one of a value,
//! [`Error::NotFound`] (absent key, carries the key),
//! [`Error::ContainerFailure`] (capability error, carries the cause), or
//! [`Error::InvalidArgument`] (shape rejected before any lookup).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod accessor;
mod adapters;
mod capability;
mod error;
mod key;
mod normalize;
mod path;
mod value;

pub use accessor::{delete, delete_many, get, has, set, set_many};
pub use adapters::{MemoryIndex, TableService};
pub use capability::{CapabilityError, Indexable, Service, ServiceError};
pub use error::{Error, Result};
pub use key::Key;
pub use path::{get_path, has_path, set_path};
pub use value::Value;
