// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordering and equality rules for JSON values
//!
//! Values of the same scalar kind compare naturally: numbers by numeric
//! value (exactly, across integer and float representations), strings by
//! UTF-16 code unit as JavaScript does, `false < true`. Nothing is coerced across kinds. Values that
//! are not naturally comparable (mixed kinds, arrays, objects, null, or a
//! missing value) are grouped by [`ValueKind`] rank, so the result is still a
//! total order and safe to hand to the standard library sorts. Callers must
//! treat the relative order of such groups as unspecified.

use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Kind of a (possibly missing) JSON value, in comparison rank order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// JSON number
    Number,
    /// JSON string
    String,
    /// JSON boolean
    Bool,
    /// JSON null
    Null,
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// No value at all
    Missing,
}

impl ValueKind {
    /// Classify a value
    #[must_use]
    pub const fn of(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Null) => Self::Null,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
            None => Self::Missing,
        }
    }

    /// Human readable name, used in error messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
            Self::Missing => "nothing",
        }
    }
}

/// Compare two possibly missing values.
///
/// See the module documentation for the rules.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => compare_numbers(x, y),
        (Some(Value::String(x)), Some(Value::String(y))) => x.encode_utf16().cmp(y.encode_utf16()),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => ValueKind::of(a).cmp(&ValueKind::of(b)),
    }
}

/// Compare two JSON numbers by numeric value
#[must_use]
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (Numeric::of(a), Numeric::of(b)) {
        (Numeric::Int(x), Numeric::Int(y)) => x.cmp(&y),
        // JSON numbers are never NaN
        (Numeric::Float(x), Numeric::Float(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Numeric::Int(x), Numeric::Float(y)) => compare_int_float(x, y),
        (Numeric::Float(x), Numeric::Int(y)) => compare_int_float(y, x).reverse(),
    }
}

/// Strict equality.
///
/// Numbers are equal when numerically equal (`1` and `1.0`), containers when
/// their members are strictly equal, everything else by value.
#[must_use]
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y) == Ordering::Equal,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| strict_equals(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| strict_equals(v, w)))
        }
        _ => a == b,
    }
}

enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    fn of(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            Self::Int(i128::from(i))
        } else if let Some(u) = n.as_u64() {
            Self::Int(i128::from(u))
        } else {
            Self::Float(n.as_f64().unwrap_or_default())
        }
    }
}

/// 2^127
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn compare_int_float(i: i128, f: f64) -> Ordering {
    if f >= I128_BOUND {
        return Ordering::Less;
    }
    if f < -I128_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i128;
    match i.cmp(&whole_int) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ord => ord,
    }
}
