//! Error definitions: immutable `(code, message)` catalog entries.
//!
//! Callers describe their failure modes once, usually as an enum declared with
//! [`error_catalog!`](crate::error_catalog), and seed [`ErrorContext`] values
//! from them.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::definition::{ErrorCode, ErrorDefinition};
//! use tristate_rail::error_catalog;
//!
//! error_catalog! {
//!     pub enum OrderError {
//!         OutOfStock => (409, "Item is out of stock"),
//!         Unknown => ("ORD-999", "Unknown order failure"),
//!     }
//! }
//!
//! assert_eq!(OrderError::OutOfStock.code(), ErrorCode::Int(409));
//! assert_eq!(OrderError::Unknown.code().to_string(), "ORD-999");
//! ```
use crate::format::FormatArg;
use crate::types::{BusinessError, ErrorContext};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Display};

/// Identifier of an error definition: either numeric or textual.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Int(i64),
    Text(Cow<'static, str>),
}

impl ErrorCode {
    /// Returns the numeric code, if this is one.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(code) => Some(*code),
            Self::Text(_) => None,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(code) => write!(f, "{}", code),
            Self::Text(code) => f.write_str(code),
        }
    }
}

macro_rules! impl_int_code {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ErrorCode {
                #[inline]
                fn from(code: $ty) -> Self {
                    Self::Int(i64::from(code))
                }
            }
        )*
    };
}

impl_int_code!(i8, i16, i32, i64, u8, u16, u32);

impl From<&'static str> for ErrorCode {
    #[inline]
    fn from(code: &'static str) -> Self {
        Self::Text(Cow::Borrowed(code))
    }
}

impl From<String> for ErrorCode {
    #[inline]
    fn from(code: String) -> Self {
        Self::Text(Cow::Owned(code))
    }
}

/// Contract for an immutable `(code, message)` pair.
///
/// Only [`code`](ErrorDefinition::code) and [`message`](ErrorDefinition::message)
/// are required; the remaining methods build contexts and errors seeded by the
/// definition.
pub trait ErrorDefinition {
    /// Machine-readable identifier.
    fn code(&self) -> ErrorCode;

    /// Human-readable summary.
    fn message(&self) -> Cow<'static, str>;

    /// A fresh context carrying this definition's code and message.
    #[inline]
    fn as_context(&self) -> ErrorContext {
        ErrorContext::of(self)
    }

    /// A fresh context with a free-text reason.
    #[inline]
    fn because<R: Into<String>>(&self, reason: R) -> ErrorContext
    where
        Self: Sized,
    {
        ErrorContext::of(self).with_reason(reason)
    }

    /// A fresh context whose reason is formatted with [`format`](crate::format::format).
    ///
    /// A trailing fault argument becomes the context's cause.
    ///
    /// ```
    /// use tristate_rail::definition::{ErrorDefinition, StdError};
    /// use tristate_rail::rail_args;
    ///
    /// let ctx = StdError::InternalServerError.because_of("user {} not found", &rail_args![42]);
    /// assert_eq!(ctx.reason(), Some("user 42 not found"));
    /// ```
    #[inline]
    fn because_of(&self, pattern: &str, args: &[FormatArg]) -> ErrorContext
    where
        Self: Sized,
    {
        ErrorContext::of(self).with_reason_fmt(pattern, args)
    }

    /// The distinguished exception for this definition, without a reason.
    #[inline]
    fn to_error(&self) -> BusinessError {
        self.as_context().into_exception()
    }
}

impl<D: ErrorDefinition + ?Sized> ErrorDefinition for &D {
    #[inline]
    fn code(&self) -> ErrorCode {
        (**self).code()
    }

    #[inline]
    fn message(&self) -> Cow<'static, str> {
        (**self).message()
    }
}

/// A standalone catalog entry, usable in `const` position.
///
/// ```
/// use tristate_rail::definition::{Definition, ErrorDefinition};
///
/// const BAD_INPUT: Definition = Definition::new(400, "Bad Input");
///
/// let ctx = BAD_INPUT.because("missing field");
/// assert_eq!(ctx.message(), Some("Bad Input"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Definition {
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl Definition {
    /// Numeric-coded definition.
    #[inline]
    pub const fn new(code: i64, message: &'static str) -> Self {
        Self { code: ErrorCode::Int(code), message: Cow::Borrowed(message) }
    }

    /// Text-coded definition.
    #[inline]
    pub const fn text(code: &'static str, message: &'static str) -> Self {
        Self { code: ErrorCode::Text(Cow::Borrowed(code)), message: Cow::Borrowed(message) }
    }
}

impl ErrorDefinition for Definition {
    #[inline]
    fn code(&self) -> ErrorCode {
        self.code.clone()
    }

    #[inline]
    fn message(&self) -> Cow<'static, str> {
        self.message.clone()
    }
}

crate::error_catalog! {
    /// Definitions the crate itself fails with.
    pub enum StdError {
        /// Generic internal failure.
        InternalServerError => (9999, "System internal error"),
        /// A result was built from a missing or blank argument.
        ResultCreation => (9001, "Result instance creation error"),
        /// A predicate check over a result's content failed.
        ResultContent => (9002, "Result instance content error"),
        /// The wrong accessor was called for a result's variant.
        ResultInvoke => (9003, "Result instance calls the wrong method"),
        /// A transform passed to `map`/`flat_map` faulted.
        ResultMap => (9004, "When calling method map() on Result instance, throw an exception"),
        /// A required value was absent.
        NullResult => (9005, "Result instance holds no value"),
    }
}
