//! Predicate prelude for convenient imports
//!
//! Re-exports the predicate factories together with the types they work on.
//!
//! # Example
//!
//! ```rust
//! use presence::predicate::prelude::*;
//!
//! let p = present().and(filled());
//! assert!(p.check(&Nullish::Present(1)));
//! ```

// Core trait
pub use super::combinators::{And, Not, Or, Predicate, PredicateExt};

// Value predicates
pub use super::value::{defined, filled, is_defined, is_filled, is_present, present};

// Key predicates
pub use super::key::{has_defined_key, has_key, has_present_key};
pub use super::keys::has_present_keys;
pub use super::value_at::{has_nullish_value_at_key, has_value_at_key};

// Data model
pub use crate::nullish::{Absence, Nullable, Nullish};
pub use crate::record::{Key, Record};
