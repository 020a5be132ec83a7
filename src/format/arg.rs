//! Argument model for the message formatter.
use crate::types::Cause;
use std::borrow::Cow;
use std::fmt::{self, Debug, Display};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// A single positional argument for [`format`](super::format).
///
/// Arguments are owned and cheap to clone: displayable values and arrays are
/// reference-counted, so the same array can appear several times (or inside
/// itself) without copying.
#[derive(Clone)]
pub enum FormatArg {
    /// Renders as `null`.
    Null,
    /// Pre-rendered text.
    Text(Cow<'static, str>),
    /// Any displayable value, rendered when the pattern is expanded.
    Value(Arc<dyn Display + Send + Sync>),
    /// A (possibly nested, possibly cyclic) array of arguments.
    Array(ArgArray),
    /// An underlying fault; extracted as the trailing cause when it is the
    /// last, surplus argument.
    Fault(Cause),
}

impl FormatArg {
    /// Wraps any displayable value.
    #[inline]
    pub fn display<T>(value: T) -> Self
    where
        T: Display + Send + Sync + 'static,
    {
        Self::Value(Arc::new(value))
    }

    /// Wraps an error as a fault argument.
    #[inline]
    pub fn fault<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Fault(Cause::new(error))
    }

    /// Returns `true` for [`FormatArg::Fault`].
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

impl Debug for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Array(array) => Debug::fmt(array, f),
            Self::Fault(cause) => f.debug_tuple("Fault").field(cause).finish(),
        }
    }
}

impl From<&'static str> for FormatArg {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for FormatArg {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<&String> for FormatArg {
    #[inline]
    fn from(text: &String) -> Self {
        Self::Text(Cow::Owned(text.clone()))
    }
}

macro_rules! impl_display_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FormatArg {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Value(Arc::new(value))
                }
            }
        )*
    };
}

impl_display_arg!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl From<Cause> for FormatArg {
    #[inline]
    fn from(cause: Cause) -> Self {
        Self::Fault(cause)
    }
}

impl From<ArgArray> for FormatArg {
    #[inline]
    fn from(array: ArgArray) -> Self {
        Self::Array(array)
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<FormatArg>> From<Vec<T>> for FormatArg {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().collect())
    }
}

impl<T: Into<FormatArg> + Clone> From<&[T]> for FormatArg {
    #[inline]
    fn from(values: &[T]) -> Self {
        Self::Array(values.iter().cloned().collect())
    }
}

impl<T: Into<FormatArg>, const N: usize> From<[T; N]> for FormatArg {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::Array(values.into_iter().collect())
    }
}

/// Shared, growable array argument.
///
/// Identity (not content) is what the formatter's cycle detection keys on,
/// so an array pushed into itself renders as `[...]` at the point of
/// recursion instead of expanding forever.
///
/// ```
/// use tristate_rail::format::{format, ArgArray, FormatArg};
///
/// let array = ArgArray::new();
/// array.push(1);
/// array.push(array.clone());
///
/// let out = format("{}", &[FormatArg::from(array)]);
/// assert_eq!(out.message(), "[1, [...]]");
/// ```
#[derive(Clone, Default)]
pub struct ArgArray {
    items: Arc<RwLock<Vec<FormatArg>>>,
}

impl ArgArray {
    /// Creates an empty array.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn push<A: Into<FormatArg>>(&self, item: A) {
        let item = item.into();
        self.items.write().unwrap_or_else(PoisonError::into_inner).push(item);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Identity of the underlying storage, stable across clones.
    #[inline]
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.items) as *const () as usize
    }

    #[inline]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<FormatArg>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Debug for ArgArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgArray")
            .field("identity", &format_args!("{:#x}", self.identity()))
            .finish_non_exhaustive()
    }
}

impl<A: Into<FormatArg>> FromIterator<A> for ArgArray {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let items: Vec<FormatArg> = iter.into_iter().map(Into::into).collect();
        Self { items: Arc::new(RwLock::new(items)) }
    }
}
