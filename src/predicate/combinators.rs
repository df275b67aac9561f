//! Core predicate trait and logical combinators
//!
//! Every predicate in this crate implements [`Predicate`], so factories can be
//! mixed freely with closures and with each other.

/// A reusable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use presence::prelude::*;
///
/// let mut file: HashMap<&str, Nullish<&str>> = HashMap::new();
/// file.insert("url", Nullish::Present("https://example.com"));
///
/// let linked = has_present_key("url").and(has_defined_key("name").not());
/// assert!(linked.check(&file));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// The predicates in this crate check many input types (any [`Nullable`]
/// value, any [`Record`]), so the combinators are not tied to one `T`; the
/// input type is fixed when the composed predicate is checked. Closures can
/// be passed as the other operand but are not receivers themselves.
///
/// [`Nullable`]: crate::Nullable
/// [`Record`]: crate::Record
pub trait PredicateExt: Sized {
    /// Combine with AND logic. The second predicate only runs if the first
    /// one passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::prelude::*;
    ///
    /// let p = present().and(|v: &Option<i32>| v.is_some_and(|n| n > 0));
    /// assert!(p.check(&Some(3)));
    /// assert!(!p.check(&Some(-3)));
    /// assert!(!p.check(&None));
    /// ```
    fn and<P>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use presence::prelude::*;
    ///
    /// let set_or_cleared = has_present_key("data")
    ///     .or(has_nullish_value_at_key("data", Nullish::<&str>::Null));
    ///
    /// let record = |v: Nullish<&'static str>| HashMap::from([("data", v)]);
    /// assert!(set_or_cleared.check(&record(Nullish::Null)));
    /// assert!(set_or_cleared.check(&record(Nullish::Present("x"))));
    /// assert!(!set_or_cleared.check(&record(Nullish::Undefined)));
    /// ```
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::prelude::*;
    ///
    /// let absent = present().not();
    /// assert!(absent.check(&Nullish::<i32>::Null));
    /// assert!(!absent.check(&Nullish::Present(1)));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Turn the predicate into a closure for [`Iterator::filter`].
    ///
    /// `filter` hands its closure a reference to each item, so the closure
    /// takes `&&T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use presence::prelude::*;
    ///
    /// let files: Vec<HashMap<&str, Nullish<&str>>> = vec![
    ///     HashMap::from([("url", Nullish::Present("a.png"))]),
    ///     HashMap::from([("url", Nullish::Null)]),
    ///     HashMap::new(),
    /// ];
    ///
    /// let with_url: Vec<_> = files.iter().filter(has_present_key("url").into_fn()).collect();
    /// assert_eq!(with_url.len(), 1);
    /// ```
    fn into_fn<T: ?Sized>(self) -> impl Fn(&&T) -> bool
    where
        Self: Predicate<T>,
    {
        move |value: &&T| self.check(*value)
    }
}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

impl<P1, P2> PredicateExt for And<P1, P2> {}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

impl<P1, P2> PredicateExt for Or<P1, P2> {}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

impl<P> PredicateExt for Not<P> {}
