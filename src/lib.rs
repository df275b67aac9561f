//! # Presence
//!
//! Predicates for telling present values apart from undefined ones, null
//! ones, and missing keys.
//!
//! ## Absence model
//!
//! A slot is in exactly one of three states:
//! - **Undefined**: no value was supplied (a missing key reads the same way)
//! - **Null**: the value was intentionally cleared
//! - **Present**: anything else
//!
//! [`Nullish`] names the three states explicitly. `Option` also works as a
//! slot; since it only has `None`, `None` counts as both undefined and null.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use presence::prelude::*;
//!
//! // Value predicates drop absent entries
//! let results = vec![Nullish::Present("a"), Nullish::Null, Nullish::Present("b"), Nullish::Undefined];
//! let present: Vec<&str> = results.into_iter().filter_map(Nullish::present).collect();
//! assert_eq!(present, vec!["a", "b"]);
//!
//! // Key predicate factories check records
//! let records: Vec<HashMap<&str, Nullish<&str>>> = vec![
//!     HashMap::from([("data", Nullish::Null)]),
//!     HashMap::from([("data", Nullish::Present(""))]),
//!     HashMap::new(),
//! ];
//!
//! assert_eq!(records.iter().filter(has_key("data").into_fn()).count(), 2);
//! assert_eq!(records.iter().filter(has_defined_key("data").into_fn()).count(), 2);
//! assert_eq!(records.iter().filter(has_present_key("data").into_fn()).count(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`Nullish`]
//! - `json`: `serde_json::Value` and `serde_json::Map` as records
//! - `tracing`: trace events when multi-key and value checks fail

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod nullish;
pub mod predicate;
pub mod record;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use nullish::{Absence, Nullable, Nullish};
pub use predicate::{
    has_defined_key, has_key, has_nullish_value_at_key, has_present_key, has_present_keys,
    has_value_at_key, is_defined, is_filled, is_present, Predicate, PredicateExt,
};
pub use record::{Key, Record};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
}
