//! Presence predicates and predicate factories
//!
//! Two families of checks live here:
//!
//! - **Value predicates** look at one nullable value: [`is_present`],
//!   [`is_defined`], [`is_filled`].
//! - **Key predicate factories** close over a key (or keys) and check a
//!   [`Record`](crate::Record): [`has_key`], [`has_defined_key`],
//!   [`has_present_key`], [`has_present_keys`], [`has_value_at_key`].
//!
//! Every factory returns a small `Copy`-able struct implementing
//! [`Predicate`], so results can be stored, shared across threads, combined
//! with `and` / `or` / `not`, or handed to [`Iterator::filter`] through
//! [`PredicateExt::into_fn`].
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use presence::predicate::*;
//! use presence::{Nullish, Record};
//!
//! let files: Vec<HashMap<&str, Nullish<&str>>> = vec![
//!     HashMap::from([("url", Nullish::Present("a.png")), ("name", Nullish::Present("a"))]),
//!     HashMap::from([("url", Nullish::Null), ("name", Nullish::Present("b"))]),
//!     HashMap::from([("name", Nullish::Present("c"))]),
//! ];
//!
//! let linked = has_present_key("url");
//! let names: Vec<&str> = files
//!     .iter()
//!     .filter(|file| linked.check(*file))
//!     .filter_map(|file| file.present_at("name").copied())
//!     .collect();
//!
//! assert_eq!(names, vec!["a"]);
//! ```

mod combinators;
mod key;
mod keys;
mod value;
mod value_at;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export value predicates
pub use value::{
    defined, filled, is_defined, is_filled, is_present, present, IsDefined, IsFilled, IsPresent,
};

// Re-export key predicates
pub use key::{has_defined_key, has_key, has_present_key, HasDefinedKey, HasKey, HasPresentKey};
pub use keys::{has_present_keys, HasPresentKeys};
pub use value_at::{has_nullish_value_at_key, has_value_at_key, HasValueAtKey};
