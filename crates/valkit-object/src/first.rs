// SPDX-License-Identifier: MIT OR Apache-2.0
//! First-property access

use serde_json::{Map, Value};

/// The value under the first key of `object`, `None` if it is empty.
///
/// Keys iterate in insertion order, so "first" is the first key written.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use valkit_object::get_first_property;
///
/// let doc = json!({"x": 1, "y": 2});
/// assert_eq!(get_first_property(doc.as_object().unwrap()), Some(&json!(1)));
/// ```
#[must_use]
pub fn get_first_property(object: &Map<String, Value>) -> Option<&Value> {
    object.values().next()
}

/// The first member value of any JSON value.
///
/// Objects give the value under their first key and arrays their first
/// element. Scalars and null have no members.
#[must_use]
pub fn first_property_of(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(object) => get_first_property(object),
        Value::Array(items) => items.first(),
        _ => None,
    }
}
