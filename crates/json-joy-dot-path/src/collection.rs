//! Helpers for arrays of JSON values, usually arrays of records.
//!
//! Matching is loose: `1`, `1.0`, `"1"` and `true` all match each other,
//! and a missing key never matches anything. Arrays and objects are not
//! coerced, so `[1]` does not match `1`.

use std::collections::HashMap;

use serde_json::{Number, Value};

use crate::node::is_empty;
use crate::path::parse_index;

fn as_loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse().ok()
            }
        }
        _ => None,
    }
}

/// Loosely compare two values.
///
/// Strings compare with strings by content, otherwise scalars are compared
/// numerically. `null` only equals `null`. Arrays and objects compare
/// structurally and never equal a scalar: unlike a JavaScript `==`,
/// `[1]` is not converted to `"1"` first.
///
/// # Example
///
/// ```
/// use json_joy_dot_path::loose_eq;
/// use serde_json::json;
///
/// assert!(loose_eq(&json!(1), &json!("1")));
/// assert!(loose_eq(&json!(true), &json!(1)));
/// assert!(!loose_eq(&json!(null), &json!(0)));
/// ```
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => a == b,
        _ => match (as_loose_number(a), as_loose_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

fn key_matches(item: &Value, key: &str, value: &Value) -> bool {
    item.get(key).is_some_and(|v| loose_eq(v, value))
}

/// Normalize a value into a new vector.
///
/// Arrays are copied. Any other value becomes a single-element vector,
/// unless it is empty (see [`is_empty`]) and `allow_empty` is false.
///
/// # Example
///
/// ```
/// use json_joy_dot_path::to_array;
/// use serde_json::json;
///
/// assert_eq!(to_array(&json!([1, 2]), false), vec![json!(1), json!(2)]);
/// assert_eq!(to_array(&json!("a"), false), vec![json!("a")]);
/// assert_eq!(to_array(&json!(""), false), Vec::<serde_json::Value>::new());
/// assert_eq!(to_array(&json!(""), true), vec![json!("")]);
/// ```
pub fn to_array(value: &Value, allow_empty: bool) -> Vec<Value> {
    match value {
        Value::Array(arr) => arr.clone(),
        _ if allow_empty || !is_empty(value) => vec![value.clone()],
        _ => Vec::new(),
    }
}

/// Check if `arr` contains a value loosely equal to `value`.
pub fn in_array(arr: &[Value], value: &Value) -> bool {
    arr.iter().rev().any(|item| loose_eq(item, value))
}

/// Remove the last element loosely equal to `value`.
pub fn remove_by_value(arr: &mut Vec<Value>, value: &Value) -> Option<Value> {
    let index = arr.iter().rposition(|item| loose_eq(item, value))?;
    Some(arr.remove(index))
}

/// Push `value` unless an equal one is already there. Returns whether it was pushed.
pub fn push_unique(arr: &mut Vec<Value>, value: Value) -> bool {
    if in_array(arr, &value) {
        return false;
    }
    arr.push(value);
    true
}

/// Find the first record whose `key` field loosely equals `value`.
///
/// # Example
///
/// ```
/// use json_joy_dot_path::find_by_key;
/// use serde_json::json;
///
/// let items = vec![json!({"id": 1, "name": "a"}), json!({"id": 2, "name": "b"})];
/// assert_eq!(find_by_key(&items, "id", &json!("2")), Some(&items[1]));
/// assert_eq!(find_by_key(&items, "id", &json!(3)), None);
/// ```
pub fn find_by_key<'a>(arr: &'a [Value], key: &str, value: &Value) -> Option<&'a Value> {
    arr.iter().find(|item| key_matches(item, key, value))
}

/// Remove every record whose `key` field loosely equals `value`.
///
/// Returns the number of removed records.
pub fn remove_by_key(arr: &mut Vec<Value>, key: &str, value: &Value) -> usize {
    let before = arr.len();
    arr.retain(|item| !key_matches(item, key, value));
    before - arr.len()
}

/// Replace the last record with the same `key` value as `item`, or append it.
pub fn push_or_replace_object(arr: &mut Vec<Value>, item: Value, key: &str) {
    let position = item
        .get(key)
        .and_then(|needle| arr.iter().rposition(|existing| key_matches(existing, key, needle)));
    match position {
        Some(index) => arr[index] = item,
        None => arr.push(item),
    }
}

fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // Integral floats share a group with the matching integer.
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn dedup_key(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        other => Some(other.to_string()),
    }
}

/// Keys that read as array indices sort first, in ascending order.
fn index_key(group: &Option<String>) -> Option<usize> {
    parse_index(group.as_deref()?).filter(|&n| n < u32::MAX as usize)
}

/// Drop records sharing the same `key` value; the last one of each group wins.
///
/// Keys compare by their string form, so `1`, `1.0` and `"1"` share a
/// group. Groups whose key is a canonical non-negative integer come first
/// in ascending order; the rest keep the position where their key was
/// first seen. Records without the key form one group of their own,
/// ordered with the non-integer keys.
///
/// # Example
///
/// ```
/// use json_joy_dot_path::filter_duplicates_by_key;
/// use serde_json::json;
///
/// let items = vec![json!({"id": 5}), json!({"id": "x"}), json!({"id": 3}), json!({"id": 5.0, "v": 1})];
/// assert_eq!(
///     filter_duplicates_by_key(&items, "id"),
///     vec![json!({"id": 3}), json!({"id": 5.0, "v": 1}), json!({"id": "x"})]
/// );
/// ```
pub fn filter_duplicates_by_key(arr: &[Value], key: &str) -> Vec<Value> {
    let mut positions: HashMap<Option<String>, usize> = HashMap::new();
    let mut groups: Vec<(Option<String>, Value)> = Vec::with_capacity(arr.len());
    for item in arr {
        let group = dedup_key(item, key);
        match positions.get(&group) {
            Some(&index) => groups[index].1 = item.clone(),
            None => {
                positions.insert(group.clone(), groups.len());
                groups.push((group, item.clone()));
            }
        }
    }
    groups.sort_by_key(|(group, _)| match index_key(group) {
        Some(n) => (0, n),
        None => (1, 0),
    });
    groups.into_iter().map(|(_, item)| item).collect()
}
