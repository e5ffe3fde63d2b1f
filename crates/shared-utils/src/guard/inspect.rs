//! Capability views that [`Guard`](super::Guard) checks consult.
//!
//! A type opts into guard checks by implementing [`Inspect`] and answering
//! only the questions that make sense for it. Anything left at the default
//! answer ("not text", "no length", "not a number") makes the corresponding
//! check fail with its type-mismatch reason.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Runtime type tag reported by [`Inspect::type_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Text values.
    String,
    /// Finite-width integers and floats.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Collections, records, and JSON `null`.
    Object,
    /// Callable values.
    Function,
    /// Unique opaque tokens.
    Symbol,
    /// Absent values.
    Undefined,
    /// Arbitrary-precision or 128-bit integers.
    #[serde(rename = "bigint")]
    BigInt,
}

impl TypeTag {
    /// Lowercase name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Function => "function",
            Self::Symbol => "symbol",
            Self::Undefined => "undefined",
            Self::BigInt => "bigint",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TypeTag`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag '{0}'")]
pub struct ParseTypeTagError(String);

impl FromStr for TypeTag {
    type Err = ParseTypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "function" => Ok(Self::Function),
            "symbol" => Ok(Self::Symbol),
            "undefined" => Ok(Self::Undefined),
            "bigint" => Ok(Self::BigInt),
            other => Err(ParseTypeTagError(other.to_owned())),
        }
    }
}

/// Capabilities a value exposes to guard checks.
///
/// # Examples
/// ```
/// use shared_utils::{Guard, Inspect, TypeTag};
///
/// #[derive(serde::Serialize)]
/// struct Basket(Vec<u32>);
///
/// impl Inspect for Basket {
///     fn type_tag(&self) -> TypeTag {
///         TypeTag::Object
///     }
///
///     fn measured_len(&self) -> Option<usize> {
///         Some(self.0.len())
///     }
/// }
///
/// let basket = Basket(Vec::new());
/// assert!(Guard::check_named(&basket, "basket").against_empty().is_err());
/// ```
pub trait Inspect {
    /// Runtime type tag of the value.
    fn type_tag(&self) -> TypeTag;

    /// Returns `true` when the value stands for null or undefined.
    fn is_absent(&self) -> bool {
        false
    }

    /// Text view of the value, if it is string-like.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Whether the text view is empty or whitespace only; `None` when the
    /// value is not string-like.
    fn is_blank(&self) -> Option<bool> {
        self.as_text().map(|text| text.trim().is_empty())
    }

    /// Whether the text view matches `pattern`; `None` when the value is not
    /// string-like.
    fn matches_pattern(&self, pattern: &Regex) -> Option<bool> {
        self.as_text().map(|text| pattern.is_match(text))
    }

    /// Length of the value, if it is measurable.
    fn measured_len(&self) -> Option<usize> {
        None
    }

    /// Numeric view of the value, if it is a finite-width number.
    fn as_number(&self) -> Option<f64> {
        None
    }
}

impl Inspect for str {
    fn type_tag(&self) -> TypeTag {
        TypeTag::String
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn measured_len(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Inspect for String {
    fn type_tag(&self) -> TypeTag {
        TypeTag::String
    }

    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn measured_len(&self) -> Option<usize> {
        self.as_str().measured_len()
    }
}

impl Inspect for Cow<'_, str> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::String
    }

    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }

    fn measured_len(&self) -> Option<usize> {
        (**self).measured_len()
    }
}

impl Inspect for char {
    fn type_tag(&self) -> TypeTag {
        TypeTag::String
    }

    fn is_blank(&self) -> Option<bool> {
        Some(self.is_whitespace())
    }

    fn matches_pattern(&self, pattern: &Regex) -> Option<bool> {
        let mut buf = [0; 4];
        Some(pattern.is_match(self.encode_utf8(&mut buf)))
    }

    fn measured_len(&self) -> Option<usize> {
        Some(1)
    }
}

impl Inspect for bool {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Boolean
    }
}

macro_rules! inspect_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Number
                }

                fn as_number(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }
            }
        )*
    };
}

inspect_number!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! inspect_wide_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Number
                }

                #[expect(
                    clippy::cast_precision_loss,
                    reason = "guard comparisons tolerate rounding beyond 2^53"
                )]
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

inspect_wide_number!(i64, u64, isize, usize);

macro_rules! inspect_bigint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::BigInt
                }
            }
        )*
    };
}

inspect_bigint!(i128, u128);

macro_rules! inspect_collection {
    ($(impl<$($param:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($param),*> Inspect for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Object
                }

                fn measured_len(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )*
    };
}

inspect_collection! {
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T> for BTreeSet<T>;
}

impl<T, const N: usize> Inspect for [T; N] {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }

    fn measured_len(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn type_tag(&self) -> TypeTag {
        self.as_ref().map_or(TypeTag::Undefined, Inspect::type_tag)
    }

    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(Inspect::is_absent)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Inspect::as_text)
    }

    fn is_blank(&self) -> Option<bool> {
        self.as_ref().and_then(Inspect::is_blank)
    }

    fn matches_pattern(&self, pattern: &Regex) -> Option<bool> {
        self.as_ref().and_then(|value| value.matches_pattern(pattern))
    }

    fn measured_len(&self) -> Option<usize> {
        self.as_ref().and_then(Inspect::measured_len)
    }

    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(Inspect::as_number)
    }
}

macro_rules! inspect_pointer {
    ($(impl<$param:ident> for $ty:ty;)*) => {
        $(
            impl<$param: Inspect + ?Sized> Inspect for $ty {
                fn type_tag(&self) -> TypeTag {
                    (**self).type_tag()
                }

                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }

                fn as_text(&self) -> Option<&str> {
                    (**self).as_text()
                }

                fn is_blank(&self) -> Option<bool> {
                    (**self).is_blank()
                }

                fn matches_pattern(&self, pattern: &Regex) -> Option<bool> {
                    (**self).matches_pattern(pattern)
                }

                fn measured_len(&self) -> Option<usize> {
                    (**self).measured_len()
                }

                fn as_number(&self) -> Option<f64> {
                    (**self).as_number()
                }
            }
        )*
    };
}

inspect_pointer! {
    impl<T> for &T;
    impl<T> for Box<T>;
}

/// JSON values behave like dynamically typed inputs: `null` is absent and
/// reports [`TypeTag::Object`], and an object is measurable only through a
/// numeric `length` field.
impl Inspect for Value {
    fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null | Self::Array(_) | Self::Object(_) => TypeTag::Object,
            Self::Bool(_) => TypeTag::Boolean,
            Self::Number(_) => TypeTag::Number,
            Self::String(_) => TypeTag::String,
        }
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn measured_len(&self) -> Option<usize> {
        match self {
            Self::String(text) => text.as_str().measured_len(),
            Self::Array(items) => Some(items.len()),
            Self::Object(fields) => fields
                .get("length")
                .and_then(Self::as_u64)
                .and_then(|len| usize::try_from(len).ok()),
            Self::Null | Self::Bool(_) | Self::Number(_) => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        self.as_f64()
    }
}
