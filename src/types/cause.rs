use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Boxed, thread-safe error accepted from user closures.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A fault that carries only a message.
///
/// Used when a cause is built from text, e.g. when a context is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MessageFault(pub String);

/// Shared handle to the underlying fault of an [`ErrorContext`](crate::ErrorContext).
///
/// Cloning is cheap; two causes compare equal when they share the same fault
/// or render the same text.
#[derive(Clone)]
pub struct Cause(Arc<dyn Error + Send + Sync + 'static>);

impl Cause {
    /// Wraps an error.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// A message-only cause.
    #[inline]
    pub fn msg<S: Into<String>>(message: S) -> Self {
        Self::new(MessageFault(message.into()))
    }

    /// Takes ownership of a boxed error without re-wrapping it.
    #[inline]
    pub fn from_boxed(error: BoxError) -> Self {
        Self(Arc::from(error))
    }

    /// Borrows the fault.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Attempts to view the fault as a concrete type.
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` if both handles point at the same fault.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.to_string() == other.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cause {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cause {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let message = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::msg(message))
    }
}
