// SPDX-License-Identifier: MIT OR Apache-2.0
//! Subcommand implementations, kept free of process handling so they can be
//! tested directly.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;
use valkit_array::{SortKey, SortOrder, has_duplicate_json_values, sort_values};
use valkit_core::{Result, ValkitError, ValueKind};
use valkit_object::{first_property_of, resolve_path};

/// How JSON output is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Single line
    Compact,
    /// Pretty-printed with this many spaces per level
    Pretty(usize),
}

/// Read the whole input from `path`, or stdin when there is none.
///
/// # Errors
///
/// Any I/O error from the file or stdin.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    if let Some(p) = path {
        fs::read_to_string(p)
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }
}

/// Parse input text as a single JSON document.
///
/// # Errors
///
/// [`ValkitError::Json`] when the text is not valid JSON.
pub fn parse_input(text: &str) -> Result<Value> {
    let value = serde_json::from_str(text)?;
    debug!(bytes = text.len(), "parsed input");
    Ok(value)
}

/// Render a value as JSON text.
///
/// # Errors
///
/// [`ValkitError::Json`] if serialization fails.
pub fn render(value: &Value, layout: Layout) -> Result<String> {
    match layout {
        Layout::Compact => Ok(serde_json::to_string(value)?),
        Layout::Pretty(indent) => {
            let indent_str = " ".repeat(indent);
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent_str.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut ser)?;
            // serde_json only ever writes UTF-8
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// `dups`: `true` if the array holds a repeated value.
///
/// # Errors
///
/// [`ValkitError::NotAnArray`] for any other input.
pub fn dups(input: &Value) -> Result<Value> {
    let items = expect_array(input)?;
    let found = has_duplicate_json_values(items);
    debug!(len = items.len(), found, "checked for duplicates");
    Ok(Value::Bool(found))
}

/// `sort`: the input array sorted by `key` in `order`.
///
/// # Errors
///
/// [`ValkitError::NotAnArray`] for any other input.
pub fn sort(mut input: Value, key: &SortKey, order: SortOrder) -> Result<Value> {
    let kind = ValueKind::of(Some(&input));
    let Value::Array(items) = &mut input else {
        return Err(ValkitError::NotAnArray(kind.name()));
    };
    sort_values(items, key, order);
    Ok(input)
}

/// `get`: the value at `path`, if any.
#[must_use]
pub fn get(input: &Value, path: &str) -> Option<Value> {
    resolve_path(path, input).cloned()
}

/// `first`: the first property (or element) of the input, if any.
#[must_use]
pub fn first(input: &Value) -> Option<Value> {
    first_property_of(input).cloned()
}

/// What a finished command leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered output, newline terminated
    Print(String),
    /// No value: print nothing
    Missing,
}

impl Outcome {
    /// Process exit status: 0 when there is output, 1 when the value is missing
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Print(_) => 0,
            Self::Missing => 1,
        }
    }
}

/// Turn a command result into what to print and how to exit.
///
/// # Errors
///
/// [`ValkitError::Json`] if rendering fails.
pub fn finish(value: Option<&Value>, layout: Layout) -> Result<Outcome> {
    let Some(value) = value else {
        debug!("no value");
        return Ok(Outcome::Missing);
    };
    let mut text = render(value, layout)?;
    text.push('\n');
    Ok(Outcome::Print(text))
}

fn expect_array(input: &Value) -> Result<&[Value]> {
    input
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValkitError::NotAnArray(ValueKind::of(Some(input)).name()))
}
