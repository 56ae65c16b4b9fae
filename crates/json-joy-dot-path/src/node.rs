//! Node classification over `serde_json::Value`.

use serde_json::Value;

use crate::path::parse_index;

/// Structural class of a node, decided at every traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// String-keyed object.
    Mapping,
    /// Index-addressed array.
    Sequence,
    /// Anything else; never traversed.
    Leaf,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Mapping,
            Value::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Leaf,
        }
    }

    pub fn is_container(self) -> bool {
        !matches!(self, NodeKind::Leaf)
    }
}

/// Check if a value is an object or an array.
pub fn is_container(value: &Value) -> bool {
    NodeKind::of(value).is_container()
}

/// Check if a value is an object or array with no entries.
///
/// Leaves are never "empty containers", so they are never pruned.
pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        _ => false,
    }
}

/// Resolve one token against a container.
///
/// Returns `None` for leaves, missing keys, invalid or out-of-range indices.
/// An explicit `null` is returned as-is; presence is checked by [`child_present`].
pub fn child<'a>(node: &'a Value, token: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(token),
        Value::Array(arr) => arr.get(parse_index(token)?),
        _ => None,
    }
}

/// Mutable counterpart of [`child`].
pub fn child_mut<'a>(node: &'a mut Value, token: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(token),
        Value::Array(arr) => arr.get_mut(parse_index(token)?),
        _ => None,
    }
}

/// Resolve one token, treating an explicit `null` as absent.
pub fn child_present<'a>(node: &'a Value, token: &str) -> Option<&'a Value> {
    child(node, token).filter(|v| !v.is_null())
}

const ZERO_UUID: &str = "00000000-0000-0000-0000-000000000000";
const ZERO_DATETIME: &str = "0001-01-01 00:00:00.000Z";
const ZERO_DATE: &str = "0001-01-01";

/// Check whether a value is "empty".
///
/// Empty values are `null`, the empty string, an empty array, an empty
/// object, and the zero uuid/datetime/date sentinel strings.
///
/// # Example
///
/// ```
/// use json_joy_dot_path::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!(null)));
/// assert!(is_empty(&json!("")));
/// assert!(is_empty(&json!("0001-01-01")));
/// assert!(!is_empty(&json!(0)));
/// assert!(!is_empty(&json!(false)));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => matches!(s.as_str(), "" | ZERO_UUID | ZERO_DATETIME | ZERO_DATE),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
