// SPDX-License-Identifier: MIT OR Apache-2.0
//! Duplicate detection

use serde_json::Value;
use valkit_core::strict_equals;

/// True if any element occurs more than once.
///
/// An element whose first occurrence is not at its own index is a repeat.
/// Elements that are not equal to themselves (`f64::NAN`) have no first
/// occurrence at all and therefore also report `true`.
///
/// # Examples
///
/// ```
/// use valkit_array::has_duplicate_values;
///
/// assert!(!has_duplicate_values(&[1, 2, 3]));
/// assert!(has_duplicate_values(&[1, 2, 2]));
/// ```
#[must_use]
pub fn has_duplicate_values<T: PartialEq>(values: &[T]) -> bool {
    has_duplicate_values_by(values, |a, b| a == b)
}

/// [`has_duplicate_values`] with a caller-supplied equality.
#[must_use]
pub fn has_duplicate_values_by<T, F>(values: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    values.iter().enumerate().any(|(index, value)| {
        values.iter().position(|other| eq(other, value)) != Some(index)
    })
}

/// [`has_duplicate_values`] for JSON values under strict equality, where
/// `1` and `1.0` are the same value.
#[must_use]
pub fn has_duplicate_json_values(values: &[Value]) -> bool {
    has_duplicate_values_by(values, strict_equals)
}
