//! Get, set and delete by delimited path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::DotPathError;
use crate::node::{child, child_mut, child_present, is_container, is_empty_container};
use crate::path::{parse_index, split_path, DEFAULT_DELIMITER};

/// Path accessor configured with a token delimiter.
///
/// The accessor holds no document state; every call borrows the root it
/// operates on. It can be embedded in host configuration:
///
/// ```
/// use json_joy_dot_path::PathAccessor;
///
/// let acc: PathAccessor = serde_json::from_str(r#"{"delimiter": "/"}"#).unwrap();
/// assert_eq!(acc.delimiter(), "/");
///
/// let acc: PathAccessor = serde_json::from_str("{}").unwrap();
/// assert_eq!(acc.delimiter(), ".");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathAccessor {
    delimiter: String,
}

impl Default for PathAccessor {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl PathAccessor {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split `path` with this accessor's delimiter.
    pub fn tokens<'a>(&self, path: &'a str) -> Vec<&'a str> {
        split_path(path, &self.delimiter)
    }

    /// Borrow the value at `path`.
    ///
    /// Returns `None` when a step hits a leaf, a missing key, a missing
    /// index, or an explicit `null`. An empty path returns the root.
    pub fn lookup<'a>(&self, root: &'a Value, path: &str) -> Option<&'a Value> {
        lookup_tokens(root, &self.tokens(path))
    }

    /// Read the value at `path`, or `default` on any traversal miss.
    ///
    /// A `null` root is treated as an absent root, i.e. an empty object.
    ///
    /// # Example
    ///
    /// ```
    /// use json_joy_dot_path::PathAccessor;
    /// use serde_json::json;
    ///
    /// let acc = PathAccessor::default();
    /// let doc = json!({"a": {"b": {"c": 3}}});
    /// assert_eq!(acc.get(&doc, "a.b.c", json!(null)), json!(3));
    /// assert_eq!(acc.get(&doc, "a.b.c.d", -1), json!(-1));
    /// ```
    pub fn get(&self, root: &Value, path: &str, default: impl Into<Value>) -> Value {
        let tokens = self.tokens(path);
        if tokens.is_empty() && root.is_null() {
            return Value::Object(Map::new());
        }
        match lookup_tokens(root, &tokens) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Write `new_value` at `path`, creating missing intermediate objects.
    ///
    /// An intermediate slot that is absent, `null` or a scalar is replaced
    /// by a fresh empty object. Replacing a scalar is intentional: writing
    /// `"a.b.c"` into `{"a": {"b": 1}}` drops the `1`.
    ///
    /// Arrays accept index assignment (`index < len`) and append
    /// (`index == len`). Anything past the end, or a token that is not an
    /// index, is rejected. Errors are detected before the root is touched.
    ///
    /// # Errors
    ///
    /// - `DotPathError::RootNotContainer` - the root is not an object or array
    /// - `DotPathError::EmptyPath` - the path has no tokens
    /// - `DotPathError::InvalidIndex` - a token used on an array is not an index
    /// - `DotPathError::IndexOutOfBounds` - an array index is past the end
    ///
    /// # Example
    ///
    /// ```
    /// use json_joy_dot_path::PathAccessor;
    /// use serde_json::json;
    ///
    /// let acc = PathAccessor::default();
    /// let mut doc = json!({});
    /// acc.set(&mut doc, "a.b.c", 1).unwrap();
    /// assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));
    /// ```
    pub fn set(
        &self,
        root: &mut Value,
        path: &str,
        new_value: impl Into<Value>,
    ) -> Result<(), DotPathError> {
        if !is_container(root) {
            return Err(DotPathError::RootNotContainer);
        }
        let tokens = self.tokens(path);
        let (target, parents) = tokens.split_last().ok_or(DotPathError::EmptyPath)?;
        check_writable(root, parents, target)?;

        let mut current = root;
        for token in parents {
            current = vivify(current, token)?;
        }
        assign(current, target, new_value.into())
    }

    /// Remove the value at `path` and prune ancestors it left empty.
    ///
    /// The walk to the parent never creates anything: a path that does not
    /// resolve removes nothing. After the removal, an ancestor that is now an
    /// empty object or array is removed as well, repeating upwards until a
    /// non-empty ancestor is found. When the path breaks early, the deepest
    /// container it reached is pruned the same way if it is empty. The root itself is never removed, and
    /// nothing is pruned when the root was empty to begin with.
    ///
    /// Returns the removed value, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use json_joy_dot_path::PathAccessor;
    /// use serde_json::json;
    ///
    /// let acc = PathAccessor::default();
    /// let mut doc = json!({"a": {"b": {"c": 3, "d": 4}}});
    /// assert_eq!(acc.delete(&mut doc, "a.b.c"), Some(json!(3)));
    /// assert_eq!(doc, json!({"a": {"b": {"d": 4}}}));
    ///
    /// acc.delete(&mut doc, "a.b.d");
    /// assert_eq!(doc, json!({}));
    /// ```
    pub fn delete(&self, root: &mut Value, path: &str) -> Option<Value> {
        let tokens = self.tokens(path);
        let prune = is_container(root) && !is_empty_container(root);
        delete_tokens(root, &tokens, prune)
    }
}

fn lookup_tokens<'a>(root: &'a Value, tokens: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for token in tokens {
        match child_present(current, token) {
            Some(next) => current = next,
            None => {
                trace!(token, "path miss");
                return None;
            }
        }
    }
    Some(current)
}

fn index_for_write(token: &str, len: usize) -> Result<usize, DotPathError> {
    let index = parse_index(token).ok_or_else(|| DotPathError::InvalidIndex {
        token: token.to_string(),
    })?;
    if index > len {
        return Err(DotPathError::IndexOutOfBounds { index, len });
    }
    Ok(index)
}

/// Read-only dry run of a write; `current` is always a container.
fn check_writable(root: &Value, parents: &[&str], target: &str) -> Result<(), DotPathError> {
    let mut current = root;
    for token in parents {
        if let Value::Array(arr) = current {
            index_for_write(token, arr.len())?;
        }
        match child(current, token) {
            Some(next) if is_container(next) => current = next,
            // Everything below is created fresh as objects.
            _ => return Ok(()),
        }
    }
    if let Value::Array(arr) = current {
        index_for_write(target, arr.len())?;
    }
    Ok(())
}

/// Descend into `token`, replacing a missing or non-container child with `{}`.
fn vivify<'a>(node: &'a mut Value, token: &str) -> Result<&'a mut Value, DotPathError> {
    let slot = match node {
        Value::Object(map) => map.entry(token).or_insert(Value::Null),
        Value::Array(arr) => {
            let index = index_for_write(token, arr.len())?;
            if index == arr.len() {
                arr.push(Value::Null);
            }
            &mut arr[index]
        }
        _ => return Err(DotPathError::RootNotContainer),
    };
    if !is_container(slot) {
        if !slot.is_null() {
            debug!(token, replaced = %slot, "overwriting scalar with object");
        }
        *slot = Value::Object(Map::new());
    }
    Ok(slot)
}

fn assign(node: &mut Value, target: &str, value: Value) -> Result<(), DotPathError> {
    match node {
        Value::Object(map) => {
            map.insert(target.to_string(), value);
        }
        Value::Array(arr) => {
            let index = index_for_write(target, arr.len())?;
            if index == arr.len() {
                arr.push(value);
            } else {
                arr[index] = value;
            }
        }
        _ => return Err(DotPathError::RootNotContainer),
    }
    Ok(())
}

/// Walk to the container at `tokens` without creating anything.
fn container_mut<'a>(root: &'a mut Value, tokens: &[&str]) -> Option<&'a mut Value> {
    let mut current = root;
    for token in tokens {
        current = child_mut(current, token)?;
    }
    if is_container(current) {
        Some(current)
    } else {
        None
    }
}

fn remove_child(node: &mut Value, token: &str) -> Option<Value> {
    match node {
        Value::Object(map) => map.shift_remove(token),
        Value::Array(arr) => {
            let index = parse_index(token)?;
            (index < arr.len()).then(|| arr.remove(index))
        }
        _ => None,
    }
}

/// Deepest container reachable along `tokens`, with the number of tokens walked.
fn deepest_container<'a>(root: &'a Value, tokens: &[&str]) -> (usize, &'a Value) {
    let mut current = root;
    for (depth, token) in tokens.iter().enumerate() {
        match child(current, token) {
            Some(next) if is_container(next) => current = next,
            _ => return (depth, current),
        }
    }
    (tokens.len(), current)
}

fn delete_tokens(root: &mut Value, tokens: &[&str], prune: bool) -> Option<Value> {
    let (target, parents) = tokens.split_last()?;
    let (depth, reached) = deepest_container(root, parents);
    if depth < parents.len() {
        // Nothing to remove, but an empty container where the chain breaks
        // still counts as dangling.
        if prune && depth > 0 && is_empty_container(reached) {
            debug!(depth, "pruning empty container on broken path");
            delete_tokens(root, &parents[..depth], prune);
        }
        return None;
    }

    let parent = container_mut(root, parents)?;
    let removed = remove_child(parent, target);

    if prune && !parents.is_empty() && is_empty_container(parent) {
        debug!(depth = parents.len(), "pruning emptied container");
        delete_tokens(root, parents, prune);
    }
    removed
}
