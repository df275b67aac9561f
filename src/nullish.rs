//! The three-valued absence model
//!
//! A slot can hold a value, hold the "no value supplied" marker (undefined),
//! or hold the "intentionally empty" marker (null). [`Nullish`] spells the
//! three states out explicitly, and [`Nullable`] lets other slot types
//! classify themselves into the same model.
//!
//! # Example
//!
//! ```rust
//! use presence::{Nullable, Nullish};
//!
//! let name: Nullish<&str> = Nullish::Present("ada");
//! assert!(name.is_present());
//!
//! let cleared: Nullish<&str> = Nullish::Null;
//! assert!(cleared.is_defined());
//! assert!(!cleared.is_present());
//!
//! // `Option` collapses both absence markers into `None`.
//! let nothing: Option<&str> = None;
//! assert!(nothing.is_undefined() && nothing.is_null());
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A value that may be present, undefined, or null.
///
/// `Undefined` is the default, matching a field that was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullish<T> {
    /// No value was supplied.
    #[default]
    Undefined,
    /// The value was explicitly cleared.
    Null,
    /// A value is present.
    Present(T),
}

impl<T> Nullish<T> {
    /// Returns `true` if this is `Undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Nullish::Undefined)
    }

    /// Returns `true` if this is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Nullish::Null)
    }

    /// Returns `true` if this is anything but `Undefined`.
    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    /// Returns `true` if this is anything but `Null`.
    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.is_null()
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Nullish::Present(_))
    }

    /// Borrow the contents.
    #[inline]
    pub fn as_ref(&self) -> Nullish<&T> {
        match self {
            Nullish::Undefined => Nullish::Undefined,
            Nullish::Null => Nullish::Null,
            Nullish::Present(value) => Nullish::Present(value),
        }
    }

    /// Map the present value, keeping the absence state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Nullish;
    ///
    /// assert_eq!(Nullish::Present(2).map(|n| n * 10), Nullish::Present(20));
    /// assert_eq!(Nullish::<i32>::Null.map(|n| n * 10), Nullish::Null);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Nullish<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Nullish::Undefined => Nullish::Undefined,
            Nullish::Null => Nullish::Null,
            Nullish::Present(value) => Nullish::Present(f(value)),
        }
    }

    /// Narrow to the present value.
    ///
    /// This is the value-returning form of [`is_present`](crate::is_present),
    /// meant for `filter_map`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Nullish;
    ///
    /// let items = vec![Nullish::Present(1), Nullish::Null, Nullish::Undefined, Nullish::Present(4)];
    /// let values: Vec<i32> = items.into_iter().filter_map(Nullish::present).collect();
    /// assert_eq!(values, vec![1, 4]);
    /// ```
    #[inline]
    pub fn present(self) -> Option<T> {
        match self {
            Nullish::Present(value) => Some(value),
            Nullish::Undefined | Nullish::Null => None,
        }
    }

    /// Narrow away `Undefined`. The inner `None` stands for `Null`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Nullish;
    ///
    /// assert_eq!(Nullish::Present(1).defined(), Some(Some(1)));
    /// assert_eq!(Nullish::<i32>::Null.defined(), Some(None));
    /// assert_eq!(Nullish::<i32>::Undefined.defined(), None);
    /// ```
    #[inline]
    pub fn defined(self) -> Option<Option<T>> {
        match self {
            Nullish::Undefined => None,
            Nullish::Null => Some(None),
            Nullish::Present(value) => Some(Some(value)),
        }
    }

    /// Narrow away `Null`. The inner `None` stands for `Undefined`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Nullish;
    ///
    /// assert_eq!(Nullish::Present(1).filled(), Some(Some(1)));
    /// assert_eq!(Nullish::<i32>::Undefined.filled(), Some(None));
    /// assert_eq!(Nullish::<i32>::Null.filled(), None);
    /// ```
    #[inline]
    pub fn filled(self) -> Option<Option<T>> {
        match self {
            Nullish::Null => None,
            Nullish::Undefined => Some(None),
            Nullish::Present(value) => Some(Some(value)),
        }
    }

    /// Narrow to the present value, reporting which absence state was found.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::{Absence, Nullish};
    ///
    /// fn port(raw: Nullish<u16>) -> Result<u16, Absence> {
    ///     let port = raw.require_present()?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port(Nullish::Present(8080)), Ok(8080));
    /// assert_eq!(port(Nullish::Null), Err(Absence::Null));
    /// ```
    #[inline]
    pub fn require_present(self) -> Result<T, Absence> {
        match self {
            Nullish::Present(value) => Ok(value),
            Nullish::Undefined => Err(Absence::Undefined),
            Nullish::Null => Err(Absence::Null),
        }
    }

    /// Build from the double-option encoding used by serde helpers:
    /// outer `None` is undefined, `Some(None)` is null.
    pub fn from_double_option(value: Option<Option<T>>) -> Self {
        match value {
            None => Nullish::Undefined,
            Some(None) => Nullish::Null,
            Some(Some(value)) => Nullish::Present(value),
        }
    }

    /// Convert to the double-option encoding. Inverse of
    /// [`from_double_option`](Nullish::from_double_option).
    pub fn into_double_option(self) -> Option<Option<T>> {
        self.defined()
    }
}

impl<T> From<T> for Nullish<T> {
    fn from(value: T) -> Self {
        Nullish::Present(value)
    }
}

/// The absence state found where a value was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Absence {
    /// No value was supplied.
    Undefined,
    /// The value was explicitly null.
    Null,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::Undefined => write!(f, "value is undefined"),
            Absence::Null => write!(f, "value is null"),
        }
    }
}

impl StdError for Absence {}

/// A slot that can be classified into the three-valued absence model.
///
/// Implementors only describe how to borrow themselves as a [`Nullish`];
/// the classification methods follow from that. Types with a single absence
/// marker, like `Option`, override [`is_null`](Nullable::is_null) so that the
/// marker counts as both undefined and null.
pub trait Nullable {
    /// The type of a present value.
    type Value: ?Sized;

    /// Borrow this slot as a [`Nullish`].
    fn as_nullish(&self) -> Nullish<&Self::Value>;

    /// Returns `true` if the slot holds the "no value supplied" marker.
    #[inline]
    fn is_undefined(&self) -> bool {
        self.as_nullish().is_undefined()
    }

    /// Returns `true` if the slot holds the "intentionally empty" marker.
    #[inline]
    fn is_null(&self) -> bool {
        self.as_nullish().is_null()
    }

    /// Borrow the present value, if any.
    #[inline]
    fn as_present(&self) -> Option<&Self::Value> {
        self.as_nullish().present()
    }

    /// Compare a present value from this kind of slot with an expected one.
    ///
    /// Defaults to `PartialEq`. Slot types whose values have several
    /// encodings of the same thing (JSON numbers) override it.
    #[inline]
    fn value_eq<W>(value: &Self::Value, expected: &W) -> bool
    where
        Self::Value: PartialEq<W>,
    {
        value == expected
    }
}

impl<T> Nullable for Nullish<T> {
    type Value = T;

    #[inline]
    fn as_nullish(&self) -> Nullish<&T> {
        self.as_ref()
    }
}

/// `None` is both undefined and null, so `is_defined` and `is_filled` agree
/// with `is_present` for `Option`.
impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn as_nullish(&self) -> Nullish<&T> {
        match self {
            Some(value) => Nullish::Present(value),
            None => Nullish::Undefined,
        }
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// The unit result of a function that produced nothing. Always undefined.
impl Nullable for () {
    type Value = ();

    #[inline]
    fn as_nullish(&self) -> Nullish<&()> {
        Nullish::Undefined
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    type Value = N::Value;

    #[inline]
    fn as_nullish(&self) -> Nullish<&N::Value> {
        (**self).as_nullish()
    }

    #[inline]
    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }

    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    #[inline]
    fn value_eq<W>(value: &Self::Value, expected: &W) -> bool
    where
        Self::Value: PartialEq<W>,
    {
        N::value_eq(value, expected)
    }
}

impl<N: Nullable + ?Sized> Nullable for Box<N> {
    type Value = N::Value;

    #[inline]
    fn as_nullish(&self) -> Nullish<&N::Value> {
        (**self).as_nullish()
    }

    #[inline]
    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }

    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    #[inline]
    fn value_eq<W>(value: &Self::Value, expected: &W) -> bool
    where
        Self::Value: PartialEq<W>,
    {
        N::value_eq(value, expected)
    }
}
