#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for path resolution correctness.
//!
//! Input is split at the first newline into a path and a JSON document.
//! Resolution must never panic, and a dotted path must agree with the same
//! path handed over pre-split.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_resolve_path

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use valkit_core::ValuePath;
use valkit_object::resolve_path;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Some((path, json)) = input.split_once('\n') else {
        return;
    };
    let Ok(doc) = serde_json::from_str::<Value>(json) else {
        return;
    };

    let dotted = resolve_path(path, &doc);
    let segments: Vec<&str> = path.split('.').collect();
    if path.is_empty() {
        assert!(dotted.is_none(), "empty path resolved to {dotted:?}");
    } else {
        assert_eq!(dotted, resolve_path(&segments, &doc), "path: {path:?}");
    }

    if let Ok(parsed) = ValuePath::parse(path) {
        assert_eq!(parsed.to_string(), path);
        assert_eq!(resolve_path(&parsed, &doc), dotted);
    }
});
