// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Array operations
//!
//! Small, stateless helpers over slices.
//!
//! ## Duplicate detection
//! An element is a duplicate when the first index at which an equal element
//! occurs is not its own index. The check is a linear search per element,
//! so it is quadratic and needs only equality, not hashing or ordering.
//!
//! ## Sorting
//! Ascending and descending sorts work in place and hand the same slice
//! back. Both are stable: elements with equal keys keep their input order in
//! either direction. JSON values can be sorted by a field or by a field of a
//! field via [`SortKey`]; elements missing the key still sort, in an
//! unspecified position.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

mod duplicates;
mod sort;

pub use duplicates::{has_duplicate_json_values, has_duplicate_values, has_duplicate_values_by};
pub use sort::{
    SortKey, SortOrder, sort_ascending, sort_ascending_by_key, sort_descending,
    sort_descending_by_key, sort_values, sort_values_ascending, sort_values_descending,
};
