//! Immutable zero-or-one value container.
//!
//! [`Optional`] wraps an [`Option`] and exposes composition operators that
//! propagate absence automatically, along with terminal operations that
//! report absence through the crate's [`Exception`] taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Exception;

/// Message carried by the error returned from [`Optional::value`] when empty.
pub const VALUE_NOT_PRESENT: &str = "Value is not present.";

/// An immutable container holding at most one value.
///
/// ## Invariants
/// - Presence and the held value never change after construction.
/// - Two empty optionals are equal; two present optionals are equal when
///   their payloads are equal under `T`'s own [`PartialEq`].
///
/// # Examples
/// ```
/// use shared_utils::Optional;
///
/// let doubled = Optional::of(5).map(|x| x * 2);
/// assert_eq!(doubled.value().ok(), Some(&10));
///
/// let missing: Optional<i32> = Optional::empty();
/// assert_eq!(missing.get_or_else(7), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Optional<T> {
    inner: Option<T>,
}

impl<T> Optional<T> {
    /// Wrap a value known to be present.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Wrap a value whose presence the caller guarantees.
    ///
    /// # Errors
    ///
    /// Returns an [`ExceptionKind::IllegalArgument`](crate::ExceptionKind)
    /// exception when `value` is `None`.
    pub fn try_of(value: Option<T>) -> Result<Self, Exception> {
        value
            .map(Self::of)
            .ok_or_else(|| Exception::illegal_argument("Value cannot be null or undefined."))
    }

    /// Wrap a possibly absent value; `None` yields an empty optional.
    #[must_use]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { inner: value }
    }

    /// An empty optional.
    #[must_use]
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Borrow the held value.
    ///
    /// # Errors
    ///
    /// Returns an [`ExceptionKind::IllegalState`](crate::ExceptionKind)
    /// exception carrying [`VALUE_NOT_PRESENT`] when empty.
    pub fn value(&self) -> Result<&T, Exception> {
        self.inner
            .as_ref()
            .ok_or_else(|| Exception::illegal_state(VALUE_NOT_PRESENT))
    }

    /// Returns `true` when a value is held.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// The held value, or `default` when empty.
    #[must_use]
    pub fn get_or_else(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Apply `f` to the held value and wrap the result.
    ///
    /// `f` is not invoked when empty.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            inner: self.inner.map(f),
        }
    }

    /// Apply `f` to the held value; a `None` result yields an empty optional.
    ///
    /// # Examples
    /// ```
    /// use shared_utils::Optional;
    ///
    /// let parsed = Optional::of("42").map_nullable(|s| s.parse::<u8>().ok());
    /// assert!(parsed.is_present());
    ///
    /// let rejected = Optional::of("x").map_nullable(|s| s.parse::<u8>().ok());
    /// assert!(!rejected.is_present());
    /// ```
    #[must_use]
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional {
            inner: self.inner.and_then(f),
        }
    }

    /// Apply `f` to the held value and return its optional unchanged.
    #[must_use]
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.inner.map_or_else(Optional::empty, f)
    }

    /// Keep the held value only when `predicate` accepts it.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            inner: self.inner.filter(predicate),
        }
    }

    /// Invoke `consumer` with the held value, if any.
    pub fn if_present<C>(&self, consumer: C)
    where
        C: FnOnce(&T),
    {
        if let Some(value) = self.inner.as_ref() {
            consumer(value);
        }
    }

    /// The held value, or the error produced by `error_factory` when empty.
    ///
    /// # Errors
    ///
    /// Returns `error_factory()` when empty.
    pub fn or_else_throw<E, F>(self, error_factory: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.inner.ok_or_else(error_factory)
    }

    /// The held value, or a not-found exception carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExceptionKind::NotFound`](crate::ExceptionKind) exception
    /// when empty.
    pub fn get_or_throw(self, message: impl Into<String>) -> Result<T, Exception> {
        self.inner.ok_or_else(|| Exception::not_found(message))
    }

    /// Borrow the held value as an optional reference.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            inner: self.inner.as_ref(),
        }
    }

    /// Convert into the underlying [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.inner
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.inner.as_ref() else {
            return f.write_str("Optional.empty");
        };
        write!(f, "Optional({value})")
    }
}
