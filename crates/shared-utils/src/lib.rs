//! Small shared primitives for argument validation and absence handling.
//!
//! The crate offers four independent building blocks:
//!
//! - [`Optional`], an immutable zero-or-one container with combinators
//! - [`Guard`], fluent precondition checks bound to a single value
//! - [`Exception`], a flat failure taxonomy discriminated by [`ExceptionKind`]
//! - [`Uuid`], a validated identifier value type
//!
//! Every operation is synchronous and side-effect free apart from `debug`
//! level [`tracing`] events emitted when a check or parse fails.
//!
//! # Example
//!
//! ```
//! use shared_utils::{Exception, ExceptionKind, Guard, Optional};
//!
//! fn find_user(id: u32) -> Optional<&'static str> {
//!     Optional::of_nullable((id == 1).then_some("ada"))
//! }
//!
//! fn lookup(id: u32) -> Result<&'static str, Exception> {
//!     Guard::check_named(&id, "id").against_zero()?;
//!     find_user(id).get_or_throw(format!("user {id} not found"))
//! }
//!
//! assert_eq!(lookup(1).ok(), Some("ada"));
//! assert_eq!(lookup(0).map_err(|e| e.kind()), Err(ExceptionKind::IllegalArgument));
//! assert_eq!(lookup(2).map_err(|e| e.kind()), Err(ExceptionKind::NotFound));
//! ```

mod exception;
mod guard;
mod identifier;
mod optional;

pub use exception::{Exception, ExceptionKind, ExceptionValidationError};
pub use guard::{DEFAULT_PARAMETER_NAME, Guard, Inspect, ParseTypeTagError, TypeTag};
pub use identifier::Uuid;
pub use optional::{Optional, VALUE_NOT_PRESENT};
