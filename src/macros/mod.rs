//! Shorthand macros for formatting arguments, error catalogs and guards.
//!
//! - [`macro@crate::rail_args`] - Builds a `[FormatArg; N]` from heterogeneous values.
//! - [`macro@crate::message`] - Formats a pattern with anchors, returning a
//!   [`FormattingTuple`](crate::format::FormattingTuple).
//! - [`macro@crate::error_catalog`] - Declares an enum of error definitions.
//! - [`macro@crate::ensure`] - Returns early with a [`BusinessError`](crate::BusinessError)
//!   (or a failed [`Outcome`](crate::Outcome)) when a condition does not hold.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::{ensure, error_catalog, message, Outcome};
//! use tristate_rail::definition::ErrorDefinition;
//!
//! error_catalog! {
//!     pub enum AccountError {
//!         Overdrawn => (402, "Insufficient funds"),
//!     }
//! }
//!
//! fn withdraw(balance: u32, amount: u32) -> Outcome<u32> {
//!     let reason = message!("balance {} is below {}", balance, amount);
//!     ensure!(balance >= amount, AccountError::Overdrawn.because(reason.message()));
//!     Outcome::success(balance - amount)
//! }
//!
//! assert_eq!(withdraw(10, 3), Outcome::success(7));
//! let failed = withdraw(1, 3);
//! assert_eq!(failed.failure_value().unwrap().reason(), Some("balance 1 is below 3"));
//! ```

/// Builds an array of [`FormatArg`](crate::format::FormatArg)s.
///
/// Every element goes through `FormatArg::from`, so strings, numbers,
/// `Option`s, vectors and [`Cause`](crate::Cause)s can be mixed freely.
///
/// ```
/// use tristate_rail::format::format;
/// use tristate_rail::rail_args;
///
/// let out = format("{} has {} items: {}", &rail_args!["cart", 2, vec!["a", "b"]]);
/// assert_eq!(out.message(), "cart has 2 items: [a, b]");
/// ```
#[macro_export]
macro_rules! rail_args {
    () => {{
        let args: [$crate::format::FormatArg; 0] = [];
        args
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::format::FormatArg::from($arg)),+]
    };
}

/// Formats a pattern with anchors.
///
/// Equivalent to [`format::format`](crate::format::format) over
/// [`rail_args!`](crate::rail_args); a trailing fault argument not consumed by
/// an anchor is returned as the cause.
///
/// ```
/// use tristate_rail::{message, Cause};
///
/// let out = message!("lookup of {} failed", "key", Cause::msg("timeout"));
/// assert_eq!(out.message(), "lookup of key failed");
/// assert_eq!(out.cause().map(ToString::to_string).as_deref(), Some("timeout"));
/// ```
#[macro_export]
macro_rules! message {
    ($pattern:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::format($pattern, &$crate::rail_args![$($arg),*])
    };
}

/// Declares an enum of error definitions.
///
/// Each variant maps to a `(code, message)` pair; the code may be an integer
/// or a string literal. The generated enum derives `Debug`, `Clone`, `Copy`,
/// `PartialEq`, `Eq` and `Hash` and implements
/// [`ErrorDefinition`](crate::definition::ErrorDefinition).
///
/// ```
/// use tristate_rail::definition::ErrorDefinition;
/// use tristate_rail::error_catalog;
///
/// error_catalog! {
///     /// Failures of the billing service.
///     pub enum BillingError {
///         /// Card was declined.
///         Declined => (402, "Card declined"),
///         Fraud => ("BILL-7", "Flagged as fraud"),
///     }
/// }
///
/// assert_eq!(BillingError::Declined.message(), "Card declined");
/// assert_eq!(BillingError::Fraud.code().to_string(), "BILL-7");
/// ```
#[macro_export]
macro_rules! error_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($code:expr, $message:expr)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::definition::ErrorDefinition for $name {
            fn code(&self) -> $crate::definition::ErrorCode {
                match self {
                    $(Self::$variant => $crate::definition::ErrorCode::from($code),)*
                }
            }

            fn message(&self) -> ::std::borrow::Cow<'static, str> {
                match self {
                    $(Self::$variant => ::std::borrow::Cow::Borrowed($message),)*
                }
            }
        }
    };
}

/// Early-return target of [`ensure!`](crate::ensure).
#[doc(hidden)]
pub trait EnsureFailure {
    fn from_business_error(error: crate::BusinessError) -> Self;
}

impl<T> EnsureFailure for crate::Outcome<T> {
    #[inline]
    fn from_business_error(error: crate::BusinessError) -> Self {
        Self::from(error)
    }
}

impl<T, E: From<crate::BusinessError>> EnsureFailure for Result<T, E> {
    #[inline]
    fn from_business_error(error: crate::BusinessError) -> Self {
        Err(E::from(error))
    }
}

/// Returns a [`BusinessError`](crate::BusinessError) built from `ctx` unless
/// the condition holds.
///
/// Inside a function returning [`Outcome`](crate::Outcome) the error becomes
/// a failure; inside one returning `Result<_, E>` it is converted with
/// `E::from`.
///
/// ```
/// use tristate_rail::definition::{ErrorDefinition, StdError};
/// use tristate_rail::{ensure, Outcome};
///
/// fn positive(n: i32) -> Outcome<i32> {
///     ensure!(n > 0, StdError::ResultContent.because("must be positive"));
///     Outcome::success(n)
/// }
///
/// assert!(positive(-1).is_failure());
///
/// fn checked(n: i32) -> Result<i32, tristate_rail::BusinessError> {
///     ensure!(n != 0, StdError::ResultContent.because("zero"));
///     Ok(100 / n)
/// }
///
/// assert_eq!(checked(0).unwrap_err().context().reason(), Some("zero"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $ctx:expr $(,)?) => {
        if !$cond {
            return $crate::macros::EnsureFailure::from_business_error(
                $crate::BusinessError::new($ctx),
            );
        }
    };
}
