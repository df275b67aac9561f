//! Single-key predicates
//!
//! Factories that close over one key and check a record's slot under it.
//! Apart from [`has_key`], a missing key reads exactly like an undefined slot.

use super::combinators::{Predicate, PredicateExt};
use crate::nullish::Nullable;
use crate::record::{Key, Record};

/// Predicate that checks a key exists, whatever its slot holds.
#[derive(Clone, Copy, Debug)]
pub struct HasKey<K> {
    key: K,
}

impl<K: Key, R: Record<K::Lookup> + ?Sized> Predicate<R> for HasKey<K> {
    #[inline]
    fn check(&self, record: &R) -> bool {
        record.contains_key(self.key.lookup())
    }
}

impl<K> PredicateExt for HasKey<K> {}

/// Create a predicate that checks a record contains `key`.
///
/// This is a membership test: undefined and null slots still count.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let items: Vec<HashMap<&str, Nullish<&str>>> = vec![
///     HashMap::new(),
///     HashMap::from([("data", Nullish::Undefined)]),
///     HashMap::from([("data", Nullish::Null)]),
/// ];
///
/// let with_key = items.iter().filter(has_key("data").into_fn()).count();
/// assert_eq!(with_key, 2);
/// ```
pub fn has_key<K: Key>(key: K) -> HasKey<K> {
    HasKey { key }
}

/// Predicate that checks the slot under a key is not undefined.
#[derive(Clone, Copy, Debug)]
pub struct HasDefinedKey<K> {
    key: K,
}

impl<K: Key, R: Record<K::Lookup> + ?Sized> Predicate<R> for HasDefinedKey<K> {
    #[inline]
    fn check(&self, record: &R) -> bool {
        !record.is_undefined_at(self.key.lookup())
    }
}

impl<K> PredicateExt for HasDefinedKey<K> {}

/// Create a predicate that checks the slot under `key` is defined.
///
/// Missing keys and undefined slots fail; null slots pass.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let cleared = HashMap::from([("data", Nullish::<&str>::Null)]);
/// let missing: HashMap<&str, Nullish<&str>> = HashMap::new();
///
/// assert!(has_defined_key("data").check(&cleared));
/// assert!(!has_defined_key("data").check(&missing));
/// ```
pub fn has_defined_key<K: Key>(key: K) -> HasDefinedKey<K> {
    HasDefinedKey { key }
}

/// Predicate that checks the slot under a key is present.
#[derive(Clone, Copy, Debug)]
pub struct HasPresentKey<K> {
    key: K,
}

impl<K: Key, R: Record<K::Lookup> + ?Sized> Predicate<R> for HasPresentKey<K> {
    #[inline]
    fn check(&self, record: &R) -> bool {
        record
            .slot(self.key.lookup())
            .is_some_and(|slot| !slot.is_undefined() && !slot.is_null())
    }
}

impl<K> PredicateExt for HasPresentKey<K> {}

/// Create a predicate that checks the slot under `key` is neither undefined
/// nor null.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let files = vec![
///     HashMap::from([("url", Nullish::Present("a.png"))]),
///     HashMap::from([("url", Nullish::Null)]),
/// ];
///
/// let urls: Vec<&str> = files
///     .iter()
///     .filter(has_present_key("url").into_fn())
///     .filter_map(|file| file.present_at("url").copied())
///     .collect();
/// assert_eq!(urls, vec!["a.png"]);
/// ```
pub fn has_present_key<K: Key>(key: K) -> HasPresentKey<K> {
    HasPresentKey { key }
}
