//! Value-equality predicates on a key
//!
//! The usual job is picking one variant out of a mixed list by its
//! discriminant field, e.g. every record whose `"type"` is `"image"`.

use super::combinators::{Predicate, PredicateExt};
use crate::nullish::{Nullable, Nullish};
use crate::record::{Key, Record};

/// Predicate that checks the slot under a key equals an expected value.
#[derive(Clone, Copy, Debug)]
pub struct HasValueAtKey<K, W> {
    key: K,
    expected: Nullish<W>,
}

impl<K, W> HasValueAtKey<K, W> {
    /// The value the slot is compared against.
    pub fn expected(&self) -> &Nullish<W> {
        &self.expected
    }
}

impl<K, W, R> Predicate<R> for HasValueAtKey<K, W>
where
    K: Key,
    W: Send + Sync,
    R: Record<K::Lookup> + ?Sized,
    <R::Slot as Nullable>::Value: PartialEq<W>,
{
    fn check(&self, record: &R) -> bool {
        let key = self.key.lookup();
        let matched = match &self.expected {
            Nullish::Undefined => record.is_undefined_at(key),
            Nullish::Null => record.is_null_at(key),
            Nullish::Present(expected) => record
                .present_at(key)
                .is_some_and(|actual| <R::Slot as Nullable>::value_eq(actual, expected)),
        };
        #[cfg(feature = "tracing")]
        if !matched {
            tracing::trace!("slot does not hold the expected value");
        }
        matched
    }
}

impl<K, W> PredicateExt for HasValueAtKey<K, W> {}

/// Create a predicate that checks the slot under `key` is present and equal
/// to `value`.
///
/// Equality is `PartialEq` with no coercion: `"1"` never matches `1`, and
/// undefined or null slots never match a plain value. Slot types may widen
/// this through [`Nullable::value_eq`]; JSON numbers match by numeric value.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let fruits = vec![
///     HashMap::from([("type", Nullish::Present("apple")), ("isApple", Nullish::Present("true"))]),
///     HashMap::from([("type", Nullish::Present("banana")), ("isBanana", Nullish::Present("true"))]),
/// ];
///
/// let apples: Vec<_> = fruits.iter().filter(has_value_at_key("type", "apple").into_fn()).collect();
/// assert_eq!(apples, vec![&fruits[0]]);
/// ```
pub fn has_value_at_key<K: Key, W>(key: K, value: W) -> HasValueAtKey<K, W> {
    HasValueAtKey {
        key,
        expected: Nullish::Present(value),
    }
}

/// Create a predicate that compares the slot under `key` with a value that
/// may itself be one of the absence markers.
///
/// - `Nullish::Undefined` matches a missing key or an undefined slot.
/// - `Nullish::Null` matches a null slot.
/// - `Nullish::Present(v)` behaves like [`has_value_at_key`].
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let missing: HashMap<&str, Nullish<&str>> = HashMap::new();
/// let cleared = HashMap::from([("data", Nullish::<&str>::Null)]);
///
/// let unset = has_nullish_value_at_key("data", Nullish::<&str>::Undefined);
/// assert!(unset.check(&missing));
/// assert!(!unset.check(&cleared));
///
/// let null = has_nullish_value_at_key("data", Nullish::<&str>::Null);
/// assert!(null.check(&cleared));
/// ```
pub fn has_nullish_value_at_key<K: Key, W>(key: K, expected: Nullish<W>) -> HasValueAtKey<K, W> {
    HasValueAtKey { key, expected }
}
