// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for valkit
//!
//! The array and object services never fail: missing data degrades to `None`
//! or to an unspecified relative order. Errors only arise at the edges, when
//! text is parsed into a path or sort key, or when a caller hands over a
//! value of the wrong shape.

use thiserror::Error;

/// Errors raised at the edges of valkit
#[derive(Error, Debug)]
pub enum ValkitError {
    /// A path string with no segments
    #[error("path is empty")]
    EmptyPath,

    /// A sort key naming more levels than a field and a nested field
    #[error("sort key '{key}' has {depth} levels, at most 2 are supported")]
    SortKeyTooDeep {
        /// The offending key as written
        key: String,
        /// Number of segments found
        depth: usize,
    },

    /// An operation that needs an array received something else
    #[error("expected an array, found {0}")]
    NotAnArray(&'static str),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for valkit operations
pub type Result<T> = std::result::Result<T, ValkitError>;
