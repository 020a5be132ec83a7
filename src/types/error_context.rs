//! Chainable diagnostic state.
//!
//! An [`ErrorContext`] accumulates a code and message (copied from an
//! [`ErrorDefinition`]), a free-text reason and an underlying cause. It renders
//! as a fixed multi-line description and converts into a [`BusinessError`].
//!
//! Two building styles are supported:
//!
//! - in place, through `&mut self` methods that return `&mut Self`
//!   ([`mark`](ErrorContext::mark), [`set_reason`](ErrorContext::set_reason), ...),
//!   which is how contexts living in a [`ContextStack`](crate::context::ContextStack)
//!   are enriched;
//! - by value, through the `with_*` methods, for one-shot construction.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::definition::Definition;
//! use tristate_rail::ErrorContext;
//!
//! let mut ctx = ErrorContext::new();
//! ctx.mark(&Definition::new(400, "Bad Input")).set_reason("missing field");
//!
//! let rendered = ctx.fmt().unix().to_string();
//! let lines: Vec<&str> = rendered.lines().collect();
//! assert_eq!(lines, ["", ">>> Bad Input", ">>> The error code is 400", ">>> missing field"]);
//! ```
use crate::definition::{ErrorCode, ErrorDefinition, StdError};
use crate::format::{self, FormatArg};
use crate::types::error_formatter::{DescriptionBuilder, DescriptionConfig, LINE_SEPARATOR};
use crate::types::{BusinessError, Cause};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::iter;

/// Mutable, chainable diagnostic state.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    code: Option<ErrorCode>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    message: Option<Cow<'static, str>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    reason: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    cause: Option<Cause>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    previous: Option<Box<ErrorContext>>,
}

impl ErrorContext {
    /// An empty context.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context carrying `definition`'s code and message.
    #[inline]
    pub fn of<D: ErrorDefinition + ?Sized>(definition: &D) -> Self {
        let mut ctx = Self::new();
        ctx.mark(definition);
        ctx
    }

    /// Like [`of`](Self::of), but a missing definition yields the
    /// construction-error definition instead of a blank context.
    pub fn of_optional(definition: Option<&dyn ErrorDefinition>) -> Self {
        match definition {
            Some(definition) => Self::of(definition),
            None => StdError::ResultCreation.because("error definition was not provided"),
        }
    }

    /// Snapshot of the calling thread's current context.
    ///
    /// See [`context::instance`](crate::context::instance).
    #[inline]
    pub fn instance() -> Self {
        crate::context::instance()
    }

    /// Discards the calling thread's context stack.
    ///
    /// See [`context::remove`](crate::context::remove).
    #[inline]
    pub fn remove() {
        crate::context::remove()
    }

    #[inline]
    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The context this one was stored over, if any.
    #[inline]
    pub fn previous(&self) -> Option<&ErrorContext> {
        self.previous.as_deref()
    }

    /// Iterates this context and its ancestors, innermost first.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorContext> {
        iter::successors(Some(self), |ctx| ctx.previous())
    }

    /// Returns `true` when no code, message, reason or cause is set.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.code.is_none() && self.message.is_none() && self.reason.is_none() && self.cause.is_none()
    }

    /// Clears every field, including the back-link.
    pub fn reset(&mut self) -> &mut Self {
        self.code = None;
        self.message = None;
        self.reason = None;
        self.cause = None;
        self.previous = None;
        self
    }

    /// [`reset`](Self::reset), then [`mark`](Self::mark) with `definition`.
    pub fn reset_to<D: ErrorDefinition + ?Sized>(&mut self, definition: &D) -> &mut Self {
        self.reset().mark(definition)
    }

    /// Copies `definition`'s code and message, leaving the other fields alone.
    pub fn mark<D: ErrorDefinition + ?Sized>(&mut self, definition: &D) -> &mut Self {
        self.code = Some(definition.code());
        self.message = Some(definition.message());
        self
    }

    /// Sets the reason, replacing any earlier one.
    pub fn set_reason<R: Into<String>>(&mut self, reason: R) -> &mut Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the reason from a pattern; a trailing surplus fault becomes the cause.
    pub fn set_reason_fmt(&mut self, pattern: &str, args: &[FormatArg]) -> &mut Self {
        let (message, cause) = format::format(pattern, args).into_parts();
        self.reason = Some(message);
        if let Some(cause) = cause {
            self.cause = Some(cause);
        }
        self
    }

    /// Sets the reason if none (or only whitespace) is set, otherwise appends
    /// it on a new line.
    pub fn append_reason<R: Into<String>>(&mut self, reason: R) -> &mut Self {
        let reason = reason.into();
        self.reason = match self.reason.take() {
            Some(existing) if !existing.trim().is_empty() => {
                Some(existing + LINE_SEPARATOR + &reason)
            }
            _ => Some(reason),
        };
        self
    }

    /// Attaches the underlying fault, replacing any earlier one.
    pub fn set_cause<C: Into<Cause>>(&mut self, cause: C) -> &mut Self {
        self.cause = Some(cause.into());
        self
    }

    /// By-value [`set_reason`](Self::set_reason).
    #[inline]
    pub fn with_reason<R: Into<String>>(mut self, reason: R) -> Self {
        self.set_reason(reason);
        self
    }

    /// By-value [`set_reason_fmt`](Self::set_reason_fmt).
    #[inline]
    pub fn with_reason_fmt(mut self, pattern: &str, args: &[FormatArg]) -> Self {
        self.set_reason_fmt(pattern, args);
        self
    }

    /// By-value [`append_reason`](Self::append_reason).
    #[inline]
    pub fn with_appended_reason<R: Into<String>>(mut self, reason: R) -> Self {
        self.append_reason(reason);
        self
    }

    /// By-value [`set_cause`](Self::set_cause).
    #[inline]
    pub fn with_cause<C: Into<Cause>>(mut self, cause: C) -> Self {
        self.set_cause(cause);
        self
    }

    pub(crate) fn set_previous(&mut self, previous: Option<Box<ErrorContext>>) {
        self.previous = previous;
    }

    pub(crate) fn take_previous(&mut self) -> Option<Box<ErrorContext>> {
        self.previous.take()
    }

    pub(crate) fn previous_mut(&mut self) -> Option<&mut ErrorContext> {
        self.previous.as_deref_mut()
    }

    /// Builds the distinguished exception from a copy of this context.
    #[inline]
    pub fn to_exception(&self) -> BusinessError {
        BusinessError::new(self.clone())
    }

    /// Builds the distinguished exception, consuming this context.
    #[inline]
    pub fn into_exception(self) -> BusinessError {
        BusinessError::new(self)
    }

    /// Returns a builder for customizing the rendered description.
    #[inline]
    pub fn fmt(&self) -> DescriptionBuilder<'_> {
        DescriptionBuilder::new(self)
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DescriptionConfig::default().render(self, f)
    }
}

impl<D: ErrorDefinition> From<&D> for ErrorContext {
    #[inline]
    fn from(definition: &D) -> Self {
        Self::of(definition)
    }
}
