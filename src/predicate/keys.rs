//! Multi-key predicates

use super::combinators::{Predicate, PredicateExt};
use crate::nullish::Nullable;
use crate::record::{Key, Record};

/// Predicate that checks every listed key holds a present slot.
#[derive(Clone, Debug)]
pub struct HasPresentKeys<K> {
    keys: Vec<K>,
}

impl<K> HasPresentKeys<K> {
    /// The keys this predicate checks, in evaluation order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<K: Key, R: Record<K::Lookup> + ?Sized> Predicate<R> for HasPresentKeys<K> {
    fn check(&self, record: &R) -> bool {
        let failing = self.keys.iter().position(|key| {
            !record
                .slot(key.lookup())
                .is_some_and(|slot| !slot.is_undefined() && !slot.is_null())
        });
        #[cfg(feature = "tracing")]
        if let Some(index) = failing {
            tracing::trace!(index, "key is not present");
        }
        failing.is_none()
    }
}

impl<K> PredicateExt for HasPresentKeys<K> {}

/// Create a predicate that checks every key in `keys` holds a value that is
/// neither undefined nor null.
///
/// Keys are checked in order and evaluation stops at the first one that
/// fails. With no keys at all the predicate accepts every record.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let complete = HashMap::from([("url", Nullish::Present("a.png")), ("name", Nullish::Present("a"))]);
/// let partial = HashMap::from([("url", Nullish::Present("b.png")), ("name", Nullish::Null)]);
///
/// let named_links = has_present_keys(["url", "name"]);
/// assert!(named_links.check(&complete));
/// assert!(!named_links.check(&partial));
///
/// let anything = has_present_keys(Vec::<&str>::new());
/// assert!(anything.check(&partial));
/// ```
pub fn has_present_keys<K, I>(keys: I) -> HasPresentKeys<K>
where
    K: Key,
    I: IntoIterator<Item = K>,
{
    HasPresentKeys {
        keys: keys.into_iter().collect(),
    }
}
