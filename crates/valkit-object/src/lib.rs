// SPDX-License-Identifier: MIT OR Apache-2.0
//! Object operations for valkit
//!
//! Provides:
//! - [`resolve_path`] - walk a dotted or pre-split path through nested
//!   objects and arrays, giving `None` at the first missing or non-container
//!   step instead of failing
//! - [`get_first_property`] - the value under the first key of an object,
//!   in insertion order

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

mod first;
mod resolve;

pub use first::{first_property_of, get_first_property};
pub use resolve::{PathSource, resolve_path};
