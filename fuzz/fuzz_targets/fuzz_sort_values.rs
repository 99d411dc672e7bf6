#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for JSON value sorting.
//!
//! Any JSON array, sorted by any key, must sort without panicking, keep
//! every element, and come out ordered under the value comparison.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_sort_values

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use std::cmp::Ordering;
use valkit_array::{SortKey, SortOrder, has_duplicate_json_values, sort_values};
use valkit_core::compare_values;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(Value::Array(mut items)) = serde_json::from_slice::<Value>(rest) else {
        return;
    };

    let key = match selector % 4 {
        0 => SortKey::none(),
        1 => SortKey::field("a"),
        2 => SortKey::field("a").nested("b"),
        _ => SortKey::field("0"),
    };
    let order = if selector & 0x80 == 0 {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };

    let before = items.len();
    let had_duplicates = has_duplicate_json_values(&items);
    sort_values(&mut items, &key, order);

    assert_eq!(items.len(), before);
    assert_eq!(has_duplicate_json_values(&items), had_duplicates);
    for pair in items.windows(2) {
        let ord = order.apply(compare_values(key.extract(&pair[0]), key.extract(&pair[1])));
        assert_ne!(ord, Ordering::Greater);
    }
});
