// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and value comparison for valkit
//!
//! This crate provides the foundational pieces shared by the valkit services:
//!
//! - [`error`] - Error types and Result alias
//! - [`path`] - Dotted path parsing
//! - [`access`] - Single-segment member lookup on JSON values
//! - [`compare`] - Ordering and equality rules for JSON values

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Single-segment member lookup
pub mod access;
/// Ordering and equality rules for JSON values
pub mod compare;
/// Error types for valkit operations
pub mod error;
/// Dotted path parsing
pub mod path;

// Re-exports for convenience
pub use access::member;
pub use compare::{ValueKind, compare_values, strict_equals};
pub use error::{Result, ValkitError};
pub use path::{PATH_SEPARATOR, ValuePath};
