use crate::definition::ErrorCode;
use crate::types::{Cause, ErrorContext};
use std::error::Error;
use std::fmt::{self, Display};

/// The single exception type raised by this crate.
///
/// Its display text is the rendered description of the carried
/// [`ErrorContext`]; the context itself stays available for programmatic
/// inspection, and [`Error::source`] exposes the context's cause.
///
/// ```
/// use std::error::Error;
/// use tristate_rail::definition::{Definition, ErrorDefinition};
///
/// let io = std::io::Error::other("disk full");
/// let err = Definition::new(500, "Write failed").as_context().with_cause(io).into_exception();
///
/// assert_eq!(err.code().and_then(|c| c.as_int()), Some(500));
/// assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk full"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessError {
    context: Box<ErrorContext>,
}

impl BusinessError {
    #[inline]
    pub fn new(context: ErrorContext) -> Self {
        Self { context: Box::new(context) }
    }

    /// The structured payload.
    #[inline]
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Consumes the error, returning its context.
    #[inline]
    pub fn into_context(self) -> ErrorContext {
        *self.context
    }

    #[inline]
    pub fn code(&self) -> Option<&ErrorCode> {
        self.context.code()
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.context.cause()
    }
}

impl Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.context, f)
    }
}

impl Error for BusinessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.context.cause().map(|cause| cause.as_error() as &(dyn Error + 'static))
    }
}

impl From<ErrorContext> for BusinessError {
    #[inline]
    fn from(context: ErrorContext) -> Self {
        Self::new(context)
    }
}

impl From<BusinessError> for ErrorContext {
    #[inline]
    fn from(error: BusinessError) -> Self {
        error.into_context()
    }
}
