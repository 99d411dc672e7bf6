// SPDX-License-Identifier: MIT OR Apache-2.0
//! # valkit-cli
//!
//! Command-line interface for valkit.
//!
//! ## Usage
//!
//! ```bash
//! # Does the array contain a repeated value?
//! valkit dups data.json
//!
//! # Sort an array of objects by a nested field, largest first
//! valkit sort --key stats.score --desc data.json
//!
//! # Read a nested value
//! valkit get config.servers.0.host data.json
//!
//! # Value under the first key
//! valkit first data.json
//! ```
//!
//! Input is read from stdin when no file is given. `get` and `first` print
//! nothing and exit with status 1 when there is no value.
//!
//! ## Library Usage
//!
//! The subcommands are thin wrappers over the library crates; use
//! [`valkit`](https://docs.rs/valkit) directly for programmatic access.

#![warn(missing_docs)]

pub mod commands;
pub mod logging;

/// Re-export of valkit-array for sorting and duplicate detection.
pub use valkit_array as array;

/// Re-export of valkit-object for path resolution.
pub use valkit_object as object;

/// Re-export of valkit-core for core types.
pub use valkit_core as core;
