//! Tri-state results: success with a value, failure with a diagnostic, or
//! success with nothing.
//!
//! [`Outcome`] composes railway-style: a [`Failure`](Outcome::Failure) passes
//! unchanged through `map`, `flat_map` and `filter`; an
//! [`Empty`](Outcome::Empty) passes through `map` and `flat_map` but yields to
//! the default of `get_or_else`. Faults raised by user closures are caught at
//! this boundary and turned into failures; only the `*_throw*` methods hand
//! back a [`BusinessError`].
//!
//! Absence of a value is always [`Outcome::Empty`]: a success never holds
//! "nothing", and `Option` inputs are mapped explicitly.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::definition::{Definition, ErrorDefinition};
//! use tristate_rail::Outcome;
//!
//! const NOT_FOUND: Definition = Definition::new(404, "User not found");
//!
//! fn lookup(id: u32) -> Option<&'static str> {
//!     (id == 7).then_some("ferris")
//! }
//!
//! let name = Outcome::of(lookup(7), NOT_FOUND.because("id 7"))
//!     .map(str::to_uppercase)
//!     .filter(|name| !name.is_empty())
//!     .get_or_else("anonymous".to_string());
//! assert_eq!(name, "FERRIS");
//!
//! let missing = Outcome::of(lookup(1), NOT_FOUND.because("id 1"));
//! assert!(missing.is_failure());
//! assert!(missing.or_throw().unwrap_err().to_string().contains("id 1"));
//! ```
use crate::definition::{ErrorDefinition, StdError};
use crate::types::{BoxError, BusinessError, Cause, ErrorContext};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

mod lift;

pub use lift::{lift, lift2, lift3, map2, map2_with, map3_with};

const UNMATCHED_PREDICATE: &str = "Unmatched predicate with no error message provided.";
const UNINDICATED_CAUSE: &str = "The cause of the error was not indicated";

/// Tri-state result of an operation.
///
/// Build failures with [`Outcome::failure`], which refuses blank contexts;
/// the variants are public for pattern matching.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "OutcomeRepr<T>"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed; the context describes why.
    Failure(ErrorContext),
    /// The operation succeeded without producing a value.
    Empty,
}

/// Wire shape of [`Outcome`]; failures are rebuilt through [`Outcome::failure`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Outcome")]
enum OutcomeRepr<T> {
    Success(T),
    Failure(ErrorContext),
    Empty,
}

#[cfg(feature = "serde")]
impl<T> From<OutcomeRepr<T>> for Outcome<T> {
    fn from(repr: OutcomeRepr<T>) -> Self {
        match repr {
            OutcomeRepr::Success(value) => Self::Success(value),
            OutcomeRepr::Failure(ctx) => Self::failure(ctx),
            OutcomeRepr::Empty => Self::Empty,
        }
    }
}

/// Folds a fault returned by a user closure into a failure context.
///
/// A [`BusinessError`] already carries its diagnostic and is reused as is;
/// any other fault is attached to `ctx` as its cause.
pub(crate) fn absorb_fault<E: Into<BoxError>>(error: E, ctx: ErrorContext) -> ErrorContext {
    match error.into().downcast::<BusinessError>() {
        Ok(business) => (*business).into_context(),
        Err(other) => ctx.with_cause(Cause::from_boxed(other)),
    }
}

fn invoke_error(method: &str, variant: &str) -> BusinessError {
    StdError::ResultInvoke
        .because(format!("Method {}() called on a {} instance", method, variant))
        .into_exception()
}

impl<T> Outcome<T> {
    /// Wraps a present value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// The stateless "nothing" outcome.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Wraps a failure diagnostic.
    ///
    /// A blank context (no field set) carries no diagnostic at all; it is
    /// replaced by a construction error.
    ///
    /// ```
    /// use tristate_rail::definition::{ErrorDefinition, StdError};
    /// use tristate_rail::{ErrorContext, Outcome};
    ///
    /// let outcome = Outcome::<()>::failure(ErrorContext::new());
    /// let ctx = outcome.failure_value().unwrap();
    /// assert_eq!(ctx.code(), Some(&StdError::ResultCreation.code()));
    /// ```
    pub fn failure(ctx: ErrorContext) -> Self {
        if ctx.is_blank() {
            crate::rail_event!(trace, "blank context replaced by construction error");
            return Self::Failure(StdError::ResultCreation.because(UNINDICATED_CAUSE));
        }
        Self::Failure(ctx)
    }

    /// `Success` if `value` is present, otherwise `Failure(ctx)`.
    #[inline]
    pub fn of(value: Option<T>, ctx: ErrorContext) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::failure(ctx),
        }
    }

    /// [`of`](Self::of) with the built-in "no value" diagnostic.
    #[inline]
    pub fn of_required(value: Option<T>) -> Self {
        Self::of(value, StdError::NullResult.as_context())
    }

    /// Invokes `f`, capturing its fault as a failure.
    ///
    /// A returned [`BusinessError`] contributes its own context; any other
    /// fault becomes the cause on `ctx`.
    pub fn of_call<F, E>(f: F, ctx: ErrorContext) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        match f() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(absorb_fault(error, ctx)),
        }
    }

    /// Like [`of_call`](Self::of_call); an absent value yields `Failure(ctx)`.
    pub fn of_call_opt<F, E>(f: F, ctx: ErrorContext) -> Self
    where
        F: FnOnce() -> Result<Option<T>, E>,
        E: Into<BoxError>,
    {
        match f() {
            Ok(value) => Self::of(value, ctx),
            Err(error) => Self::failure(absorb_fault(error, ctx)),
        }
    }

    /// `Success(value)` if `predicate` holds, otherwise `Failure(ctx)`.
    pub fn of_predicate<P>(predicate: P, value: T, ctx: ErrorContext) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Success(value)
        } else {
            Self::failure(ctx)
        }
    }

    /// Like [`of_predicate`](Self::of_predicate) for a predicate that may fault;
    /// the fault becomes the cause on `ctx`, a [`BusinessError`] included.
    pub fn try_of_predicate<P, E>(predicate: P, value: T, ctx: ErrorContext) -> Self
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Into<BoxError>,
    {
        match predicate(&value) {
            Ok(true) => Self::Success(value),
            Ok(false) => Self::failure(ctx),
            Err(error) => Self::failure(ctx.with_cause(Cause::from_boxed(error.into()))),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Success(_) => "Success",
            Self::Failure(_) => "Failure",
            Self::Empty => "Empty",
        }
    }

    /// The held value; any other variant is an invoke error.
    pub fn success_value(&self) -> Result<&T, BusinessError> {
        match self {
            Self::Success(value) => Ok(value),
            other => Err(invoke_error("success_value", other.variant_name())),
        }
    }

    /// The held diagnostic; any other variant is an invoke error.
    pub fn failure_value(&self) -> Result<&ErrorContext, BusinessError> {
        match self {
            Self::Failure(ctx) => Ok(ctx),
            other => Err(invoke_error("failure_value", other.variant_name())),
        }
    }

    /// Owned [`success_value`](Self::success_value).
    pub fn into_success_value(self) -> Result<T, BusinessError> {
        match self {
            Self::Success(value) => Ok(value),
            other => Err(invoke_error("into_success_value", other.variant_name())),
        }
    }

    /// Owned [`failure_value`](Self::failure_value).
    pub fn into_failure_value(self) -> Result<ErrorContext, BusinessError> {
        match self {
            Self::Failure(ctx) => Ok(ctx),
            other => Err(invoke_error("into_failure_value", other.variant_name())),
        }
    }

    /// The held value, or `default` for `Failure` and `Empty`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// The held value, or the supplier's result for `Failure` and `Empty`.
    #[inline]
    pub fn get_or_else_with<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Self::Success(value) => value,
            _ => default(),
        }
    }

    /// `self` if it is a success, otherwise the supplier's outcome.
    #[inline]
    pub fn or_else<F: FnOnce() -> Outcome<T>>(self, f: F) -> Outcome<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            _ => f(),
        }
    }

    /// Transforms the held value.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(ctx) => Outcome::Failure(ctx),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Transforms the held value with a closure that may fault.
    ///
    /// A fault becomes a map error carrying it as cause, unless it is a
    /// [`BusinessError`], whose context is propagated unchanged.
    pub fn try_map<U, F, E>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => match f(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => Outcome::failure(absorb_fault(error, StdError::ResultMap.as_context())),
            },
            Self::Failure(ctx) => Outcome::Failure(ctx),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Chains an outcome-producing step.
    #[doc(alias = "and_then")]
    #[inline]
    pub fn flat_map<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(ctx) => Outcome::Failure(ctx),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Chains an outcome-producing step that may fault.
    pub fn try_flat_map<U, F, E>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<Outcome<U>, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => match f(value) {
                Ok(next) => next,
                Err(error) => Outcome::failure(absorb_fault(error, StdError::ResultMap.as_context())),
            },
            Self::Failure(ctx) => Outcome::Failure(ctx),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Keeps a success only if `predicate` holds; otherwise a content error.
    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.filter_with(predicate, StdError::ResultContent.because(UNMATCHED_PREDICATE))
    }

    /// Keeps a success only if `predicate` holds; otherwise `Failure(ctx)`.
    pub fn filter_with<P: FnOnce(&T) -> bool>(self, predicate: P, ctx: ErrorContext) -> Self {
        match self {
            Self::Success(value) => Self::of_predicate(predicate, value, ctx),
            other => other,
        }
    }

    /// Keeps a success only if a fallible `predicate` holds.
    ///
    /// Both a false predicate and a fault yield `Failure(ctx)`; the fault is
    /// attached as its cause.
    pub fn try_filter<P, E>(self, predicate: P, ctx: ErrorContext) -> Self
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => Self::try_of_predicate(predicate, value, ctx),
            other => other,
        }
    }

    /// Asserts `predicate` over the held value; a violation is a content error.
    ///
    /// Assertions over `Empty` trivially pass.
    #[inline]
    pub fn asserting<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.filter_with(predicate, StdError::ResultContent.as_context())
    }

    /// Asserts `predicate`; a violation yields `Failure(ctx)`.
    #[inline]
    pub fn asserting_with<P: FnOnce(&T) -> bool>(self, predicate: P, ctx: ErrorContext) -> Self {
        self.filter_with(predicate, ctx)
    }

    /// `predicate(value)` for a success, `false` otherwise.
    #[inline]
    pub fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        match self {
            Self::Success(value) => predicate(value),
            _ => false,
        }
    }

    /// Invokes `f` with the held value, if any.
    #[inline]
    pub fn for_each<F: FnOnce(&T)>(&self, f: F) {
        if let Self::Success(value) = self {
            f(value);
        }
    }

    /// Invokes `f` with the held value; a failure is raised instead.
    pub fn for_each_or_throw<F: FnOnce(&T)>(&self, f: F) -> Result<(), BusinessError> {
        match self {
            Self::Success(value) => {
                f(value);
                Ok(())
            }
            Self::Failure(ctx) => Err(ctx.to_exception()),
            Self::Empty => Ok(()),
        }
    }

    /// Invokes `f` with the held value; a failure is reported as its message.
    pub fn for_each_or_fail<F: FnOnce(&T)>(&self, f: F) -> Outcome<String> {
        match self {
            Self::Success(value) => {
                f(value);
                Outcome::Empty
            }
            Self::Failure(ctx) => Outcome::Success(ctx.message().unwrap_or_default().to_owned()),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Invokes `f` with the held value; a failure is reported as its exception.
    pub fn for_each_or_exception<F: FnOnce(&T)>(&self, f: F) -> Outcome<BusinessError> {
        match self {
            Self::Success(value) => {
                f(value);
                Outcome::Empty
            }
            Self::Failure(ctx) => Outcome::Success(ctx.to_exception()),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Raises a failure; passes successes and empties through.
    pub fn or_throw(self) -> Result<Self, BusinessError> {
        match self {
            Self::Failure(ctx) => Err(ctx.into_exception()),
            other => Ok(other),
        }
    }

    /// Raises a failure using `ctx` instead of the held diagnostic.
    pub fn or_throw_with(self, ctx: ErrorContext) -> Result<Self, BusinessError> {
        match self {
            Self::Failure(_) => Err(ctx.into_exception()),
            other => Ok(other),
        }
    }

    /// `f(identity, value)` for a success, `identity` otherwise.
    #[inline]
    pub fn fold_left<V, F: FnOnce(V, T) -> V>(self, identity: V, f: F) -> V {
        match self {
            Self::Success(value) => f(identity, value),
            _ => identity,
        }
    }

    /// `f(value, identity)` for a success, `identity` otherwise.
    #[inline]
    pub fn fold_right<V, F: FnOnce(T, V) -> V>(self, identity: V, f: F) -> V {
        match self {
            Self::Success(value) => f(value, identity),
            _ => identity,
        }
    }

    /// Rewrites the diagnostic of a failure.
    pub fn map_failure<F: FnOnce(ErrorContext) -> ErrorContext>(self, f: F) -> Self {
        match self {
            Self::Failure(ctx) => Self::failure(f(ctx)),
            other => other,
        }
    }

    /// Replaces the reason of a failure; an empty becomes a "no value"
    /// failure with that reason.
    pub fn map_failure_reason<R: Into<String>>(self, reason: R) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(ctx) => Self::failure(ctx.with_reason(reason)),
            Self::Empty => Self::failure(StdError::NullResult.because(reason)),
        }
    }

    /// Attaches `cause` to a failure, using its text as the reason; an empty
    /// becomes a "no value" failure carrying it.
    pub fn map_failure_cause<C: Into<Cause>>(self, cause: C) -> Self {
        let rebuild =
            |ctx: ErrorContext, cause: Cause| ctx.with_reason(cause.to_string()).with_cause(cause);
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(ctx) => Self::failure(rebuild(ctx, cause.into())),
            Self::Empty => Self::failure(rebuild(StdError::NullResult.as_context(), cause.into())),
        }
    }

    /// Replaces a failure or an empty with `Failure(ctx)`.
    pub fn map_failure_with(self, ctx: ErrorContext) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            _ => Self::failure(ctx),
        }
    }

    /// Turns `Empty` into `Failure(ctx)`.
    pub fn fail_if_empty(self, ctx: ErrorContext) -> Self {
        match self {
            Self::Empty => Self::failure(ctx),
            other => other,
        }
    }

    /// Replaces a failure or an empty with `fallback`.
    pub fn recover_with(self, fallback: Outcome<T>) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            _ => fallback,
        }
    }

    /// `Empty` becomes `Success(())`, a success becomes a content error.
    pub fn map_empty(self) -> Outcome<()> {
        match self {
            Self::Success(_) => Outcome::failure(StdError::ResultContent.because("Not empty")),
            Self::Failure(ctx) => Outcome::Failure(ctx),
            Self::Empty => Outcome::Success(()),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(ctx) => Outcome::Failure(ctx.clone()),
            Self::Empty => Outcome::Empty,
        }
    }

    /// The held value, discarding any diagnostic.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Alias of [`ok`](Self::ok).
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.ok()
    }

    /// Converts into a standard result; `Empty` becomes `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, BusinessError> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::Failure(ctx) => Err(ctx.into_exception()),
            Self::Empty => Ok(None),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    /// `Some` becomes `Success`, `None` becomes `Empty`.
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Success)
    }
}

impl<T> From<BusinessError> for Outcome<T> {
    #[inline]
    fn from(error: BusinessError) -> Self {
        Self::failure(error.into_context())
    }
}

impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({})", value),
            Self::Failure(ctx) => write!(f, "Failure({})", ctx),
            Self::Empty => f.write_str("Empty()"),
        }
    }
}
