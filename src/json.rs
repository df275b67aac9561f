//! JSON records (feature-gated)
//!
//! Parsed JSON is the most common place the undefined/null split shows up:
//! a field can be missing or set to `null`. With the `json` feature,
//! [`serde_json::Value`] is a [`Nullable`] slot and objects and arrays are
//! [`Record`]s, so every key predicate works on it directly.
//!
//! A JSON value is never undefined; a missing key plays that role.
//!
//! Numbers compare by numeric value, so `1` and `1.0` match each other in
//! either position.
//!
//! # Example
//!
//! ```rust
//! use presence::prelude::*;
//! use serde_json::json;
//!
//! let files = vec![
//!     json!({ "type": "image", "url": "a.png" }),
//!     json!({ "type": "pdf", "url": null }),
//!     json!({ "type": "image" }),
//! ];
//!
//! let images = files.iter().filter(has_value_at_key("type", "image").into_fn()).count();
//! assert_eq!(images, 2);
//!
//! let with_url = files.iter().filter(has_present_key("url").into_fn()).count();
//! assert_eq!(with_url, 1);
//! ```

use serde_json::{Map, Number, Value};

use crate::nullish::{Nullable, Nullish};
use crate::record::Record;

impl Nullable for Value {
    type Value = Value;

    #[inline]
    fn as_nullish(&self) -> Nullish<&Value> {
        match self {
            Value::Null => Nullish::Null,
            value => Nullish::Present(value),
        }
    }

    fn value_eq<W>(value: &Value, expected: &W) -> bool
    where
        Value: PartialEq<W>,
    {
        if value == expected {
            return true;
        }
        match value {
            Value::Number(number) => other_encoding(number).is_some_and(|other| other == *expected),
            _ => false,
        }
    }
}

/// The same number in the other representation: integral floats as
/// integers, integers as floats.
fn other_encoding(number: &Number) -> Option<Value> {
    let float = number.as_f64()?;
    if !number.is_f64() {
        return Some(Value::from(float));
    }
    if !float.is_finite() || float.fract() != 0.0 {
        return None;
    }
    if (0.0..18_446_744_073_709_551_616.0).contains(&float) {
        Some(Value::from(float as u64))
    } else if (-9_223_372_036_854_775_808.0..0.0).contains(&float) {
        Some(Value::from(float as i64))
    } else {
        None
    }
}

impl Record<str> for Map<String, Value> {
    type Slot = Value;

    #[inline]
    fn slot(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Non-object values have no string keys.
impl Record<str> for Value {
    type Slot = Value;

    #[inline]
    fn slot(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }
}

/// Non-array values have no indices.
impl Record<usize> for Value {
    type Slot = Value;

    #[inline]
    fn slot(&self, index: &usize) -> Option<&Value> {
        self.as_array().and_then(|array| array.get(*index))
    }
}
