// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-place stable sorting

use serde_json::Value;
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;
use tracing::trace;
use valkit_core::{PATH_SEPARATOR, ValkitError, compare_values, member};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortOrder {
    /// Orient an ascending comparison result
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Which part of each JSON element to compare.
///
/// With no field the elements are compared whole. With a field, `element[field]`
/// is compared, and with a nested field as well, `element[field][nested]`.
/// An empty name counts as absent, and a nested field without a field is
/// ignored.
///
/// The text form joins the names with `.` and does no escaping, so a key
/// whose field name itself contains a dot does not survive `to_string` and
/// `parse`. Build such keys with [`SortKey::field`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortKey {
    field: Option<String>,
    nested: Option<String>,
}

impl SortKey {
    /// Compare whole elements
    #[must_use]
    pub const fn none() -> Self {
        Self {
            field: None,
            nested: None,
        }
    }

    /// Compare `element[field]`
    #[must_use]
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: non_empty(field.into()),
            nested: None,
        }
    }

    /// Additionally descend into `element[field][nested]`.
    ///
    /// Ignored when there is no field.
    #[must_use]
    pub fn nested(mut self, nested: impl Into<String>) -> Self {
        if self.field.is_some() {
            self.nested = non_empty(nested.into());
        }
        self
    }

    /// The field name, if any
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The nested field name, if any
    #[must_use]
    pub fn nested_name(&self) -> Option<&str> {
        self.nested.as_deref()
    }

    /// Pick the part of `element` this key compares, `None` if it is missing
    #[must_use]
    pub fn extract<'v>(&self, element: &'v Value) -> Option<&'v Value> {
        let Some(field) = self.field.as_deref() else {
            return Some(element);
        };
        let value = member(element, field)?;
        match self.nested.as_deref() {
            Some(nested) => member(value, nested),
            None => Some(value),
        }
    }
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() { None } else { Some(name) }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            f.write_str(field)?;
            if let Some(nested) = &self.nested {
                write!(f, "{PATH_SEPARATOR}{nested}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for SortKey {
    type Err = ValkitError;

    /// Parse `""`, `field` or `field.nested`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::none());
        }
        let parts: Vec<&str> = s.split(PATH_SEPARATOR).collect();
        match parts.as_slice() {
            [field] => Ok(Self::field(*field)),
            [field, nested] => Ok(Self::field(*field).nested(*nested)),
            _ => Err(ValkitError::SortKeyTooDeep {
                key: s.to_string(),
                depth: parts.len(),
            }),
        }
    }
}

/// Sort ascending in place and return the same slice.
///
/// Stable: equal elements keep their input order.
///
/// # Examples
///
/// ```
/// use valkit_array::sort_ascending;
///
/// let mut values = [3, 1, 2];
/// assert_eq!(sort_ascending(&mut values), [1, 2, 3]);
/// ```
pub fn sort_ascending<T: Ord>(values: &mut [T]) -> &mut [T] {
    values.sort();
    values
}

/// Sort descending in place and return the same slice.
///
/// Stable: equal elements keep their input order.
pub fn sort_descending<T: Ord>(values: &mut [T]) -> &mut [T] {
    values.sort_by(|a, b| b.cmp(a));
    values
}

/// Sort ascending by an extracted key
pub fn sort_ascending_by_key<T, K, F>(values: &mut [T], key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    values.sort_by_key(key);
    values
}

/// Sort descending by an extracted key
pub fn sort_descending_by_key<T, K, F>(values: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    values.sort_by_key(|v| Reverse(key(v)));
    values
}

/// Sort JSON values in place by `key` in the given direction.
///
/// Values are compared with [`valkit_core::compare_values`]. Elements whose
/// key is missing, or whose keys are of different kinds, do not fail the
/// sort; their position relative to each other is unspecified.
pub fn sort_values<'a>(
    values: &'a mut [Value],
    key: &SortKey,
    order: SortOrder,
) -> &'a mut [Value] {
    trace!(len = values.len(), key = %key, ?order, "sorting values");
    values.sort_by(|a, b| order.apply(compare_values(key.extract(a), key.extract(b))));
    values
}

/// [`sort_values`] ascending
pub fn sort_values_ascending<'a>(values: &'a mut [Value], key: &SortKey) -> &'a mut [Value] {
    sort_values(values, key, SortOrder::Ascending)
}

/// [`sort_values`] descending
pub fn sort_values_descending<'a>(values: &'a mut [Value], key: &SortKey) -> &'a mut [Value] {
    sort_values(values, key, SortOrder::Descending)
}
