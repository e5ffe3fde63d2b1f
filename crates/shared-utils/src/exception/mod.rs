//! Typed failure taxonomy shared by every primitive in the crate.
//!
//! Failures are a single [`Exception`] value tagged with an [`ExceptionKind`].
//! Callers choose a handling strategy by matching on the kind, never on the
//! message text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminant identifying which member of the taxonomy an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// A general domain rule was violated.
    Domain,
    /// An operation was invoked while the receiver's state forbids it.
    IllegalState,
    /// A requested lookup yielded no result.
    NotFound,
    /// An argument failed validation.
    IllegalArgument,
}

impl ExceptionKind {
    /// Stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::IllegalState => "illegal_state",
            Self::NotFound => "not_found",
            Self::IllegalArgument => "illegal_argument",
        }
    }

    /// Human-readable description used when a caller supplies a blank message.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Domain => "domain rule violated",
            Self::IllegalState => "illegal state",
            Self::NotFound => "not found",
            Self::IllegalArgument => "illegal argument",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Validation errors emitted by [`Exception::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExceptionValidationError {
    /// The message was empty once trimmed of whitespace.
    #[error("exception message must not be empty")]
    EmptyMessage,
}

/// A failure raised by the crate's primitives.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use shared_utils::{Exception, ExceptionKind};
///
/// let err = Exception::not_found("user 42 does not exist");
/// assert_eq!(err.kind(), ExceptionKind::NotFound);
/// assert_eq!(err.to_string(), "user 42 does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
#[serde(try_from = "ExceptionDto", into = "ExceptionDto")]
pub struct Exception {
    kind: ExceptionKind,
    message: String,
}

impl Exception {
    /// Create an exception of `kind`.
    ///
    /// A blank `message` is replaced by the kind's
    /// [`description`](ExceptionKind::description) so the non-empty invariant
    /// always holds. Use [`Exception::try_new`] to reject blank input instead.
    #[must_use]
    pub fn new(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self::try_new(kind, message).unwrap_or_else(|_| Self {
            kind,
            message: kind.description().to_owned(),
        })
    }

    /// Fallible constructor that validates the message content.
    ///
    /// # Errors
    ///
    /// Returns [`ExceptionValidationError::EmptyMessage`] when `message` is
    /// empty or whitespace only.
    pub fn try_new(
        kind: ExceptionKind,
        message: impl Into<String>,
    ) -> Result<Self, ExceptionValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ExceptionValidationError::EmptyMessage);
        }
        Ok(Self { kind, message })
    }

    /// Convenience constructor for [`ExceptionKind::Domain`].
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Domain, message)
    }

    /// Convenience constructor for [`ExceptionKind::IllegalState`].
    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::IllegalState, message)
    }

    /// Convenience constructor for [`ExceptionKind::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::NotFound, message)
    }

    /// Convenience constructor for [`ExceptionKind::IllegalArgument`].
    #[must_use]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::IllegalArgument, message)
    }

    /// Taxonomy member this exception belongs to.
    #[must_use]
    pub const fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns `true` when this exception belongs to `kind`.
    #[must_use]
    pub fn is(&self, kind: ExceptionKind) -> bool {
        self.kind == kind
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct ExceptionDto {
    kind: ExceptionKind,
    message: String,
}

impl From<Exception> for ExceptionDto {
    fn from(value: Exception) -> Self {
        Self {
            kind: value.kind,
            message: value.message,
        }
    }
}

impl TryFrom<ExceptionDto> for Exception {
    type Error = ExceptionValidationError;

    fn try_from(value: ExceptionDto) -> Result<Self, Self::Error> {
        let ExceptionDto { kind, message } = value;
        Self::try_new(kind, message)
    }
}
