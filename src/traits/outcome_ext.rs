//! Extension traits bridging `Option` and `Result` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use tristate_rail::definition::{Definition, ErrorDefinition};
//! use tristate_rail::traits::{OptionExt, ResultExt};
//!
//! const PARSE: Definition = Definition::new(422, "Unparsable input");
//!
//! let port = "80x".parse::<u16>().ctx(PARSE.because("port"));
//! assert_eq!(port.failure_value().unwrap().reason(), Some("port"));
//!
//! let missing = None::<u16>.into_outcome();
//! assert!(missing.is_empty());
//! ```
use crate::outcome::{absorb_fault, Outcome};
use crate::types::{BoxError, ErrorContext};

/// Conversions from `Option` into [`Outcome`].
pub trait OptionExt<T> {
    /// `Some` becomes `Success`, `None` becomes `Empty`.
    fn into_outcome(self) -> Outcome<T>;

    /// `Some` becomes `Success`, `None` becomes `Failure(ctx)`.
    fn or_failure(self, ctx: ErrorContext) -> Outcome<T>;

    /// Like [`or_failure`](OptionExt::or_failure) with a lazily built context.
    fn or_failure_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }

    #[inline]
    fn or_failure(self, ctx: ErrorContext) -> Outcome<T> {
        Outcome::of(self, ctx)
    }

    #[inline]
    fn or_failure_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::failure(f()),
        }
    }
}

/// Conversions from fallible `Result`s into [`Outcome`].
///
/// The error is handled as by [`Outcome::of_call`]: a
/// [`BusinessError`](crate::BusinessError) keeps its own context, anything
/// else becomes the cause on the given one.
pub trait ResultExt<T, E> {
    /// `Ok` becomes `Success`, `Err` becomes a failure built from `ctx`.
    fn ctx(self, ctx: ErrorContext) -> Outcome<T>;

    /// Like [`ctx`](ResultExt::ctx); the context is only built on error.
    fn ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E: Into<BoxError>> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn ctx(self, ctx: ErrorContext) -> Outcome<T> {
        self.ctx_with(|| ctx)
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::failure(absorb_fault(error, f())),
        }
    }
}
