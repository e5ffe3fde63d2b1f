//! Validated UUID value type.
//!
//! [`Uuid`] accepts only the canonical hyphenated text form
//! (`8-4-4-4-12` hexadecimal digits) and renders as lowercase. Parse failures
//! are reported as illegal-argument [`Exception`]s.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Exception;

/// Length of the canonical hyphenated UUID text form.
const HYPHENATED_LEN: usize = 36;

/// A 128-bit universally unique identifier.
///
/// # Examples
/// ```
/// use shared_utils::Uuid;
///
/// let id = Uuid::parse("550E8400-E29B-41D4-A716-446655440000").expect("valid UUID");
/// assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
///
/// assert!(Uuid::parse("550e8400-e29b-41d4-a716-44665544000").is_err());
/// assert!(Uuid::is_valid(&Uuid::create().to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// Generate a new random (version 4) identifier.
    #[must_use]
    pub fn create() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parse the canonical hyphenated form, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an [`ExceptionKind::IllegalArgument`](crate::ExceptionKind)
    /// exception when `value` is not a hyphenated UUID.
    pub fn parse(value: &str) -> Result<Self, Exception> {
        Self::parse_hyphenated(value).ok_or_else(|| {
            debug!(input = value, "rejected malformed UUID");
            Exception::illegal_argument(format!("Invalid UUID: {value}"))
        })
    }

    /// Returns `true` when `value` is a hyphenated UUID.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::parse_hyphenated(value).is_some()
    }

    /// Access the underlying [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    fn parse_hyphenated(value: &str) -> Option<Self> {
        if value.len() != HYPHENATED_LEN {
            return None;
        }
        uuid::Uuid::parse_str(value).ok().map(Self)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Uuid {
    type Err = Exception;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Exception;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for UUID parsing and rendering.

    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::rstest;

    use super::*;
    use crate::ExceptionKind;

    #[rstest]
    #[case("550e8400-e29b-41d4-a716-446655440000")]
    #[case("00000000-0000-0000-0000-000000000000")]
    #[case("3FA85F64-5717-4562-B3FC-2C963F66AFA6")]
    fn parses_hyphenated_form(#[case] input: &str) {
        let id = Uuid::parse(input).expect("valid UUID");
        assert_eq!(id.to_string(), input.to_ascii_lowercase());
    }

    #[rstest]
    #[case("550e8400-e29b-41d4-a716-44665544000")]
    #[case("550e8400e29b41d4a716446655440000")]
    #[case("{550e8400-e29b-41d4-a716-446655440000}")]
    #[case("urn:uuid:550e8400-e29b-41d4-a716-446655440000")]
    #[case("550e8400-e29b-41d4-a716-44665544000g")]
    #[case("")]
    fn rejects_non_canonical_input(#[case] input: &str) {
        let err = Uuid::parse(input).expect_err("malformed UUID");
        assert_eq!(err.kind(), ExceptionKind::IllegalArgument);
        assert_eq!(err.message(), format!("Invalid UUID: {input}"));
        assert!(!Uuid::is_valid(input));
    }

    #[rstest]
    fn create_produces_distinct_v4_identifiers() {
        let first = Uuid::create();
        let second = Uuid::create();
        assert_ne!(first, second);
        assert_eq!(first.as_uuid().get_version_num(), 4);
        assert!(Uuid::is_valid(&first.to_string()));
    }

    #[rstest]
    fn from_str_matches_parse() {
        let id: Uuid = "550e8400-e29b-41d4-a716-446655440000"
            .parse()
            .expect("valid UUID");
        assert_eq!(
            Some(id),
            Uuid::parse("550e8400-e29b-41d4-a716-446655440000").ok()
        );
    }

    #[rstest]
    fn serde_uses_validated_string_form() {
        let id = Uuid::from(uuid::Uuid::nil());
        let json = serde_json::to_string(&id).expect("serialise");
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        let back: Uuid = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Uuid>("\"not-a-uuid\"").is_err());
    }
}
