//! Value predicates
//!
//! Checks on a single nullable value. The free functions take `&V` so they can
//! be passed straight to [`Iterator::filter`]; the unit structs are the same
//! checks as composable [`Predicate`]s.

use super::combinators::{Predicate, PredicateExt};
use crate::nullish::Nullable;

/// Returns `true` if `value` is neither undefined nor null.
///
/// `()`, the result of a function that produced nothing, is never present.
///
/// # Example
///
/// ```rust
/// use presence::{is_present, Nullish};
///
/// let results = vec![
///     Nullish::Present("hello"),
///     Nullish::Null,
///     Nullish::Present("world"),
///     Nullish::Undefined,
/// ];
///
/// let present: Vec<_> = results.into_iter().filter(is_present).collect();
/// assert_eq!(present, vec![Nullish::Present("hello"), Nullish::Present("world")]);
/// ```
#[inline]
pub fn is_present<V: Nullable + ?Sized>(value: &V) -> bool {
    !value.is_undefined() && !value.is_null()
}

/// Returns `true` if `value` is not undefined. Null counts as defined.
///
/// # Example
///
/// ```rust
/// use presence::{is_defined, Nullish};
///
/// assert!(is_defined(&Nullish::<i32>::Null));
/// assert!(!is_defined(&Nullish::<i32>::Undefined));
/// ```
#[inline]
pub fn is_defined<V: Nullable + ?Sized>(value: &V) -> bool {
    !value.is_undefined()
}

/// Returns `true` if `value` is not null. Undefined counts as filled.
///
/// # Example
///
/// ```rust
/// use presence::{is_filled, Nullish};
///
/// assert!(is_filled(&Nullish::<i32>::Undefined));
/// assert!(!is_filled(&Nullish::<i32>::Null));
/// ```
#[inline]
pub fn is_filled<V: Nullable + ?Sized>(value: &V) -> bool {
    !value.is_null()
}

/// Predicate form of [`is_present`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsPresent;

impl<V: Nullable + ?Sized> Predicate<V> for IsPresent {
    #[inline]
    fn check(&self, value: &V) -> bool {
        is_present(value)
    }
}

impl PredicateExt for IsPresent {}

/// Create a predicate that checks a value is neither undefined nor null.
pub fn present() -> IsPresent {
    IsPresent
}

/// Predicate form of [`is_defined`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsDefined;

impl<V: Nullable + ?Sized> Predicate<V> for IsDefined {
    #[inline]
    fn check(&self, value: &V) -> bool {
        is_defined(value)
    }
}

impl PredicateExt for IsDefined {}

/// Create a predicate that checks a value is not undefined.
pub fn defined() -> IsDefined {
    IsDefined
}

/// Predicate form of [`is_filled`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsFilled;

impl<V: Nullable + ?Sized> Predicate<V> for IsFilled {
    #[inline]
    fn check(&self, value: &V) -> bool {
        is_filled(value)
    }
}

impl PredicateExt for IsFilled {}

/// Create a predicate that checks a value is not null.
pub fn filled() -> IsFilled {
    IsFilled
}
