//! Non-destructive transforms over key-ordered JSON mappings.
//!
//! Mappings are [`serde_json::Map`]s, which keep insertion order, so "native
//! enumeration order" below is the order keys were inserted in.
//!
//! The `*_entries` functions take an already typed [`Map`]. The unsuffixed
//! functions take a dynamic [`Value`] and run the guard chain first.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};
use crate::guard;

/// Callback applied to each value by [`map`].
pub type MapFn<'a> = &'a dyn Fn(&Value) -> Value;

/// Predicate applied to each value by [`filter`].
pub type FilterFn<'a> = &'a dyn Fn(&Value) -> bool;

/// Builds a new mapping with the same keys, each value replaced by `f(value)`.
pub fn map_entries<F>(entries: &Map<String, Value>, mut f: F) -> Map<String, Value>
where
    F: FnMut(&Value) -> Value,
{
    entries
        .iter()
        .map(|(key, value)| (key.clone(), f(value)))
        .collect()
}

/// Takes `count` consecutive entries starting at position `from`.
///
/// The second bound is a count, not an end index: the window is
/// `[from, from + count)`. Either bound larger than the number of keys, or
/// negative, is rejected. A window running past the end is cut short.
pub fn slice_entries(entries: &Map<String, Value>, from: i64, count: i64) -> Result<Map<String, Value>> {
    let len = entries.len() as i64;

    if from > len || count > len {
        return Err(ValidationError::IndexTooLarge.emit());
    }
    if from < 0 || count < 0 {
        return Err(ValidationError::NegativeIndex.emit());
    }

    Ok(entries
        .iter()
        .skip(from as usize)
        .take(count as usize)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Keeps the entries whose value satisfies `predicate`, in order.
pub fn filter_entries<P>(entries: &Map<String, Value>, mut predicate: P) -> Map<String, Value>
where
    P: FnMut(&Value) -> bool,
{
    entries
        .iter()
        .filter(|(_, value)| predicate(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns `true` if two keys hold equal values.
///
/// The comparison is shallow. Scalars compare by value (numbers numerically,
/// so `1` and `1.0` match, as do `0` and `-0`). Arrays and objects are
/// distinct instances and never count as duplicates of one another, whatever
/// their contents.
pub fn entries_have_duplicates(entries: &Map<String, Value>) -> bool {
    let mut seen = HashSet::with_capacity(entries.len());

    entries
        .values()
        .filter_map(ScalarKey::of)
        .any(|key| !seen.insert(key))
}

/// Hashable identity of a scalar JSON value.
#[derive(PartialEq, Eq, Hash)]
enum ScalarKey<'a> {
    Null,
    Bool(bool),
    Number(u64),
    String(&'a str),
}

impl<'a> ScalarKey<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => Some(ScalarKey::Null),
            Value::Bool(b) => Some(ScalarKey::Bool(*b)),
            Value::Number(n) => {
                let n = n.as_f64().unwrap_or(f64::NAN);
                // -0 and 0 are the same value
                let n = if n == 0.0 { 0.0 } else { n };
                Some(ScalarKey::Number(n.to_bits()))
            }
            Value::String(s) => Some(ScalarKey::String(s)),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Guarded [`map_entries`] over a dynamic container.
pub fn map(container: &Value, callback: Option<MapFn<'_>>) -> Result<Value> {
    guard::require_present(&[container])?;
    let entries = guard::require_object(container)?;
    let callback = guard::require_callback(callback)?;

    Ok(Value::Object(map_entries(entries, callback)))
}

/// Guarded [`slice_entries`] over a dynamic container.
///
/// `from` and `count` go through the number guard; fractional values are
/// floored.
pub fn slice(container: &Value, from: &Value, count: &Value) -> Result<Value> {
    guard::require_present(&[container, from, count])?;
    guard::require_numbers(&[from, count])?;
    let entries = guard::require_object(container)?;

    let from = guard::as_number(from).floor() as i64;
    let count = guard::as_number(count).floor() as i64;

    slice_entries(entries, from, count).map(Value::Object)
}

/// Guarded [`filter_entries`] over a dynamic container.
pub fn filter(container: &Value, predicate: Option<FilterFn<'_>>) -> Result<Value> {
    guard::require_present(&[container])?;
    let entries = guard::require_object(container)?;
    let predicate = guard::require_callback(predicate)?;

    Ok(Value::Object(filter_entries(entries, predicate)))
}

/// Guarded [`entries_have_duplicates`] over a dynamic container.
pub fn has_duplicate_values(container: &Value) -> Result<bool> {
    guard::require_present(&[container])?;
    let entries = guard::require_object(container)?;

    Ok(entries_have_duplicates(entries))
}
