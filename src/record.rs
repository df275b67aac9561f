//! Keyed records
//!
//! A [`Record`] is anything that can answer two questions about a flat key:
//! does the key exist, and what slot does it hold. Slots are [`Nullable`], so
//! a record can carry undefined and null values as well as present ones.
//!
//! Keys are described by [`Key`], which maps an owned key type to the type a
//! record is queried with (`String` and `&str` both query by `str`).
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use presence::{Nullish, Record};
//!
//! let mut file: HashMap<&str, Nullish<&str>> = HashMap::new();
//! file.insert("url", Nullish::Null);
//!
//! assert!(file.contains_key("url"));
//! assert!(!file.contains_key("name"));
//! assert_eq!(file.slot("url"), Some(&Nullish::Null));
//! ```

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::nullish::Nullable;

/// A key a record can be queried with.
pub trait Key: Send + Sync {
    /// The borrowed form records are looked up by.
    type Lookup: ?Sized;

    /// Borrow the lookup form of this key.
    fn lookup(&self) -> &Self::Lookup;
}

impl Key for &str {
    type Lookup = str;

    #[inline]
    fn lookup(&self) -> &str {
        self
    }
}

impl Key for String {
    type Lookup = str;

    #[inline]
    fn lookup(&self) -> &str {
        self.as_str()
    }
}

impl Key for Box<str> {
    type Lookup = str;

    #[inline]
    fn lookup(&self) -> &str {
        self
    }
}

impl Key for Cow<'_, str> {
    type Lookup = str;

    #[inline]
    fn lookup(&self) -> &str {
        self.as_ref()
    }
}

macro_rules! impl_key_by_value {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                type Lookup = $t;

                #[inline]
                fn lookup(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

impl_key_by_value!(usize, u8, u16, u32, u64, u128, isize, i8, i16, i32, i64, i128, char);

/// A record with flat keys.
///
/// Reading a missing key is indistinguishable from reading an undefined slot
/// everywhere except [`contains_key`](Record::contains_key).
pub trait Record<Q: ?Sized> {
    /// The slot type stored under each key.
    type Slot: Nullable + ?Sized;

    /// Borrow the slot stored under `key`, or `None` if the key is missing.
    fn slot(&self, key: &Q) -> Option<&Self::Slot>;

    /// Returns `true` if `key` exists, whatever its slot holds.
    #[inline]
    fn contains_key(&self, key: &Q) -> bool {
        self.slot(key).is_some()
    }

    /// Returns `true` if `key` is missing or its slot is undefined.
    #[inline]
    fn is_undefined_at(&self, key: &Q) -> bool {
        self.slot(key).map_or(true, |slot| slot.is_undefined())
    }

    /// Returns `true` if the slot under `key` is null.
    #[inline]
    fn is_null_at(&self, key: &Q) -> bool {
        self.slot(key).is_some_and(|slot| slot.is_null())
    }

    /// Borrow the present value under `key`, if any.
    #[inline]
    fn present_at<'a>(&'a self, key: &Q) -> Option<&'a <Self::Slot as Nullable>::Value>
    where
        Self::Slot: 'a,
    {
        self.slot(key).and_then(|slot| slot.as_present())
    }
}

impl<K, V, Q, S> Record<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    V: Nullable,
    S: BuildHasher,
{
    type Slot = V;

    #[inline]
    fn slot(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Record<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
    V: Nullable,
{
    type Slot = V;

    #[inline]
    fn slot(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<V: Nullable> Record<usize> for [V] {
    type Slot = V;

    #[inline]
    fn slot(&self, index: &usize) -> Option<&V> {
        self.get(*index)
    }
}

impl<V: Nullable> Record<usize> for Vec<V> {
    type Slot = V;

    #[inline]
    fn slot(&self, index: &usize) -> Option<&V> {
        self.get(*index)
    }
}

impl<V: Nullable, const N: usize> Record<usize> for [V; N] {
    type Slot = V;

    #[inline]
    fn slot(&self, index: &usize) -> Option<&V> {
        self.get(*index)
    }
}

impl<Q: ?Sized, R: Record<Q> + ?Sized> Record<Q> for &R {
    type Slot = R::Slot;

    #[inline]
    fn slot(&self, key: &Q) -> Option<&R::Slot> {
        (**self).slot(key)
    }
}

impl<Q: ?Sized, R: Record<Q> + ?Sized> Record<Q> for Box<R> {
    type Slot = R::Slot;

    #[inline]
    fn slot(&self, key: &Q) -> Option<&R::Slot> {
        (**self).slot(key)
    }
}
