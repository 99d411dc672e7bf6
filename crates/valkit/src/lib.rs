// SPDX-License-Identifier: MIT OR Apache-2.0
//! # valkit
//!
//! Small, stateless helpers for sequences and objects of JSON values.
//!
//! - [`array`] - duplicate detection and stable ascending/descending sorts,
//!   optionally keyed by a field or a nested field
//! - [`object`] - null-safe dotted path resolution and first-property access
//! - [`core`] - the shared error type, path type and value comparison rules
//!
//! ```
//! use serde_json::json;
//! use valkit::prelude::*;
//!
//! let mut people = vec![json!({"age": 40}), json!({"age": 25})];
//! sort_values_ascending(&mut people, &SortKey::field("age"));
//! assert_eq!(resolve_path("0.age", &json!(people)), Some(&json!(25)));
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

/// Re-export of valkit-array
pub use valkit_array as array;

/// Re-export of valkit-object
pub use valkit_object as object;

/// Re-export of valkit-core
pub use valkit_core as core;

/// The commonly used functions and types in one import
pub mod prelude {
    pub use valkit_array::{
        SortKey, SortOrder, has_duplicate_json_values, has_duplicate_values, sort_ascending,
        sort_descending, sort_values, sort_values_ascending, sort_values_descending,
    };
    pub use valkit_core::{Result, ValkitError, ValuePath};
    pub use valkit_object::{PathSource, first_property_of, get_first_property, resolve_path};

    pub use serde_json::{Map, Value};
}
