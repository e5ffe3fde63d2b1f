//! Fluent precondition checks bound to a single value.
//!
//! A [`Guard`] borrows the value under test together with a parameter name
//! and an error factory. Each check hands the same guard back on success, so
//! checks chain with `?`; the first failing check short-circuits with an error
//! built by the factory.
//!
//! Failure messages share one format:
//! `<parameter> <reason>. Actual value: <json>.` where `<json>` is the value
//! rendered by `serde_json` (finite floats print without a trailing `.0`), or
//! `null` when the value is absent or cannot be serialised. A caller-supplied message replaces the `<parameter> <reason>.`
//! prefix.

mod inspect;

use std::fmt;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use inspect::{Inspect, ParseTypeTagError, TypeTag};

use crate::Exception;

/// Parameter name used by [`Guard::check`].
pub const DEFAULT_PARAMETER_NAME: &str = "value";

const NULL_OR_UNDEFINED: &str = "cannot be null or undefined";
const NOT_A_STRING: &str = "must be a string";
const WHITESPACE: &str = "cannot be empty or whitespace";
const NOT_MEASURABLE: &str = "must be a string, array, or have a length property";
const EMPTY: &str = "cannot be empty";
const NOT_A_NUMBER: &str = "must be a valid number";
const NEGATIVE: &str = "cannot be negative";
const ZERO: &str = "cannot be zero";
const PATTERN_MISMATCH: &str = "does not match the required pattern";

/// A validation session bound to one value.
///
/// ## Invariants
/// - The bound value, parameter name, and error factory never change.
/// - Every check returns this same guard or an error.
///
/// # Examples
/// ```
/// use shared_utils::{ExceptionKind, Guard};
///
/// # fn main() -> Result<(), shared_utils::Exception> {
/// let name = "Example";
/// Guard::check_named(&name, "name")
///     .against_null_or_undefined()?
///     .against_whitespace()?;
///
/// let err = Guard::check_named(&-1, "count").against_negative().unwrap_err();
/// assert_eq!(err.kind(), ExceptionKind::IllegalArgument);
/// assert_eq!(err.message(), "count cannot be negative. Actual value: -1.");
/// # Ok(())
/// # }
/// ```
pub struct Guard<'a, T: ?Sized, E = Exception> {
    value: &'a T,
    name: &'a str,
    factory: fn(String) -> E,
}

impl<T: ?Sized, E> Clone for Guard<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, E> Copy for Guard<'_, T, E> {}

impl<T: ?Sized + fmt::Debug, E> fmt::Debug for Guard<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("value", &self.value)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<'a, T: ?Sized> Guard<'a, T> {
    /// Guard `value` under the default parameter name, raising
    /// illegal-argument exceptions.
    #[must_use]
    pub fn check(value: &'a T) -> Self {
        Self::check_named(value, DEFAULT_PARAMETER_NAME)
    }

    /// Guard `value` under `name`, raising illegal-argument exceptions.
    #[must_use]
    pub fn check_named(value: &'a T, name: &'a str) -> Self {
        Self::check_with(value, name, Exception::illegal_argument)
    }
}

impl<'a, T: ?Sized, E> Guard<'a, T, E> {
    /// Guard `value` under `name`, building failures with `factory`.
    ///
    /// # Examples
    /// ```
    /// use shared_utils::Guard;
    ///
    /// #[derive(Debug)]
    /// struct QuotaError(String);
    ///
    /// let err = Guard::check_with(&0_u32, "quota", QuotaError)
    ///     .against_zero()
    ///     .unwrap_err();
    /// assert_eq!(err.0, "quota cannot be zero. Actual value: 0.");
    /// ```
    #[must_use]
    pub const fn check_with(value: &'a T, name: &'a str, factory: fn(String) -> E) -> Self {
        Self {
            value,
            name,
            factory,
        }
    }

    /// The bound value.
    #[must_use]
    pub const fn value(&self) -> &'a T {
        self.value
    }

    /// The parameter name used in failure messages.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

impl<'a, T, E> Guard<'a, T, E>
where
    T: Inspect + Serialize + ?Sized,
{
    /// Fail when the value is absent.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is null or undefined.
    pub fn against_null_or_undefined(self) -> Result<Self, E> {
        self.ensure_present(None)
    }

    /// Like [`Guard::against_null_or_undefined`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is null or undefined.
    pub fn against_null_or_undefined_with_message(self, message: &str) -> Result<Self, E> {
        self.ensure_present(Some(message))
    }

    /// Fail unless the value is text containing a non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not text, or
    /// blank.
    pub fn against_whitespace(self) -> Result<Self, E> {
        self.ensure_not_blank(None)
    }

    /// Like [`Guard::against_whitespace`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not text, or
    /// blank.
    pub fn against_whitespace_with_message(self, message: &str) -> Result<Self, E> {
        self.ensure_not_blank(Some(message))
    }

    /// Fail unless the value is measurable with a nonzero length.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, has no length,
    /// or has length zero.
    pub fn against_empty(self) -> Result<Self, E> {
        self.ensure_not_empty(None)
    }

    /// Like [`Guard::against_empty`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, has no length,
    /// or has length zero.
    pub fn against_empty_with_message(self, message: &str) -> Result<Self, E> {
        self.ensure_not_empty(Some(message))
    }

    /// Fail unless the value is a valid number no smaller than zero.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not a number,
    /// NaN, or negative.
    pub fn against_negative(self) -> Result<Self, E> {
        self.ensure_number(None, |n| n >= 0.0, NEGATIVE)
    }

    /// Like [`Guard::against_negative`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not a number,
    /// NaN, or negative.
    pub fn against_negative_with_message(self, message: &str) -> Result<Self, E> {
        self.ensure_number(Some(message), |n| n >= 0.0, NEGATIVE)
    }

    /// Fail unless the value is a valid nonzero number.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not a number,
    /// NaN, or zero.
    pub fn against_zero(self) -> Result<Self, E> {
        self.ensure_number(None, |n| n != 0.0, ZERO)
    }

    /// Like [`Guard::against_zero`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not a number,
    /// NaN, or zero.
    pub fn against_zero_with_message(self, message: &str) -> Result<Self, E> {
        self.ensure_number(Some(message), |n| n != 0.0, ZERO)
    }

    /// Fail unless the value is a valid number within `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not a number,
    /// NaN, or outside the inclusive range.
    pub fn is_in_range(self, min: impl Into<f64>, max: impl Into<f64>) -> Result<Self, E> {
        self.ensure_in_range(None, min.into(), max.into())
    }

    /// Like [`Guard::is_in_range`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not a number,
    /// NaN, or outside the inclusive range.
    pub fn is_in_range_with_message(
        self,
        min: impl Into<f64>,
        max: impl Into<f64>,
        message: &str,
    ) -> Result<Self, E> {
        self.ensure_in_range(Some(message), min.into(), max.into())
    }

    /// Fail unless the value is text matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not text, or
    /// does not match.
    pub fn matches(self, pattern: &Regex) -> Result<Self, E> {
        self.ensure_match(None, pattern)
    }

    /// Like [`Guard::matches`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the value is absent, not text, or
    /// does not match.
    pub fn matches_with_message(self, pattern: &Regex, message: &str) -> Result<Self, E> {
        self.ensure_match(Some(message), pattern)
    }

    /// Fail unless the value reports `expected` as its type tag.
    ///
    /// Absent values report [`TypeTag::Undefined`] and are not rejected up
    /// front.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the type tag differs.
    pub fn is_type(self, expected: TypeTag) -> Result<Self, E> {
        self.ensure_type(None, expected)
    }

    /// Like [`Guard::is_type`] with a custom message.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when the type tag differs.
    pub fn is_type_with_message(self, expected: TypeTag, message: &str) -> Result<Self, E> {
        self.ensure_type(Some(message), expected)
    }

    fn ensure_present(self, message: Option<&str>) -> Result<Self, E> {
        if self.value.is_absent() {
            return Err(self.fail(NULL_OR_UNDEFINED, message));
        }
        Ok(self)
    }

    fn ensure_not_blank(self, message: Option<&str>) -> Result<Self, E> {
        let guard = self.ensure_present(message)?;
        let blank = guard
            .value
            .is_blank()
            .ok_or_else(|| guard.fail(NOT_A_STRING, message))?;
        if blank {
            return Err(guard.fail(WHITESPACE, message));
        }
        Ok(guard)
    }

    fn ensure_not_empty(self, message: Option<&str>) -> Result<Self, E> {
        let guard = self.ensure_present(message)?;
        let len = guard
            .value
            .measured_len()
            .ok_or_else(|| guard.fail(NOT_MEASURABLE, message))?;
        if len == 0 {
            return Err(guard.fail(EMPTY, message));
        }
        Ok(guard)
    }

    fn valid_number(self, message: Option<&str>) -> Result<(Self, f64), E> {
        let guard = self.ensure_present(message)?;
        let number = guard
            .value
            .as_number()
            .filter(|n| !n.is_nan())
            .ok_or_else(|| guard.fail(NOT_A_NUMBER, message))?;
        Ok((guard, number))
    }

    fn ensure_number(
        self,
        message: Option<&str>,
        accept: impl FnOnce(f64) -> bool,
        reason: &str,
    ) -> Result<Self, E> {
        let (guard, number) = self.valid_number(message)?;
        if accept(number) {
            Ok(guard)
        } else {
            Err(guard.fail(reason, message))
        }
    }

    fn ensure_in_range(self, message: Option<&str>, min: f64, max: f64) -> Result<Self, E> {
        let (guard, number) = self.valid_number(message)?;
        if (min..=max).contains(&number) {
            return Ok(guard);
        }
        Err(guard.fail(&format!("must be between {min} and {max}"), message))
    }

    fn ensure_match(self, message: Option<&str>, pattern: &Regex) -> Result<Self, E> {
        let guard = self.ensure_present(message)?;
        let matched = guard
            .value
            .matches_pattern(pattern)
            .ok_or_else(|| guard.fail(NOT_A_STRING, message))?;
        if matched {
            return Ok(guard);
        }
        Err(guard.fail(PATTERN_MISMATCH, message))
    }

    fn ensure_type(self, message: Option<&str>, expected: TypeTag) -> Result<Self, E> {
        if self.value.type_tag() == expected {
            return Ok(self);
        }
        Err(self.fail(&format!("must be of type {expected}"), message))
    }

    fn fail(&self, reason: &str, message: Option<&str>) -> E {
        let prefix =
            message.map_or_else(|| format!("{} {reason}.", self.name), ToOwned::to_owned);
        debug!(parameter = self.name, reason, "guard check failed");
        (self.factory)(format!("{prefix} Actual value: {}.", self.actual_value()))
    }

    fn actual_value(&self) -> String {
        if self.value.is_absent() {
            return "null".to_owned();
        }
        serde_json::to_value(self.value)
            .map_or_else(|_| "null".to_owned(), |json| render_json(&json))
    }
}

/// Compact JSON text, with finite floats rendered the way range bounds are
/// (`11` rather than `11.0`).
fn render_json(json: &Value) -> String {
    json.as_f64()
        .filter(|n| json.is_f64() && n.is_finite())
        .map_or_else(|| json.to_string(), |n| n.to_string())
}
