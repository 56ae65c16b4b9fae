//! Dot-path utilities for nested JSON values.
//!
//! Read, write and delete values inside nested objects and arrays using a
//! delimited path such as `"a.b.0.c"`. Writes create missing intermediate
//! objects; deletes prune the containers they leave empty.
//!
//! # Example
//!
//! ```
//! use json_joy_dot_path::{delete, get, set};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! set(&mut doc, "a.b.c", 1).unwrap();
//! assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));
//!
//! assert_eq!(get(&doc, "a.b.c", -1), json!(1));
//! assert_eq!(get(&doc, "a.x", -1), json!(-1));
//!
//! delete(&mut doc, "a.b.c");
//! assert_eq!(doc, json!({}));
//! ```
//!
//! Use [`PathAccessor`] for a delimiter other than `.`.

use serde_json::Value;

pub mod accessor;
pub mod collection;
pub mod error;
pub mod node;
pub mod path;

pub use accessor::PathAccessor;
pub use collection::{
    filter_duplicates_by_key, find_by_key, in_array, loose_eq, push_or_replace_object,
    push_unique, remove_by_key, remove_by_value, to_array,
};
pub use error::DotPathError;
pub use node::{is_container, is_empty, is_empty_container, NodeKind};
pub use path::{format_path, parse_index, split_path, DEFAULT_DELIMITER};

/// Read the value at a `.`-delimited path, or `default` on any miss.
///
/// See [`PathAccessor::get`].
pub fn get(root: &Value, path: &str, default: impl Into<Value>) -> Value {
    PathAccessor::default().get(root, path, default)
}

/// Borrow the value at a `.`-delimited path.
///
/// See [`PathAccessor::lookup`].
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    PathAccessor::default().lookup(root, path)
}

/// Write a value at a `.`-delimited path, creating missing objects.
///
/// See [`PathAccessor::set`].
pub fn set(root: &mut Value, path: &str, new_value: impl Into<Value>) -> Result<(), DotPathError> {
    PathAccessor::default().set(root, path, new_value)
}

/// Delete the value at a `.`-delimited path and prune emptied ancestors.
///
/// See [`PathAccessor::delete`].
pub fn delete(root: &mut Value, path: &str) -> Option<Value> {
    PathAccessor::default().delete(root, path)
}
