// SPDX-License-Identifier: MIT OR Apache-2.0
//! Single-segment member lookup on JSON values

use serde_json::Value;

/// Look up one segment on a value.
///
/// Objects are indexed by key. Arrays are indexed by a canonical decimal
/// segment (`"0"`, `"17"`; not `"01"`, `"+1"` or `"-0"`). Scalars and null
/// have no members.
#[must_use]
pub fn member<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|idx| items.get(idx)),
        _ => None,
    }
}

/// Parse a canonical array index segment
fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}
