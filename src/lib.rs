//! Railway-oriented tri-state results with chainable error contexts.
//!
//! The crate is organised around four pieces:
//!
//! - [`format`]: `{}`-anchor message formatting with escapes, array rendering
//!   and trailing-cause extraction.
//! - [`definition`]: the [`ErrorDefinition`] contract, an immutable
//!   `(code, message)` catalog entry, plus the [`error_catalog!`] macro.
//! - [`ErrorContext`] and [`context`]: mutable diagnostic state, rendered as a
//!   fixed multi-line description, with a stack discipline for nested scopes.
//! - [`Outcome`]: `Success(T)`, `Failure(ErrorContext)` or `Empty`, composed
//!   with `map` / `flat_map` / `filter` and lifted over plain functions.
//!
//! # Examples
//!
//! ## Building and raising a diagnostic
//!
//! ```
//! use tristate_rail::definition::{Definition, ErrorDefinition};
//!
//! const BAD_INPUT: Definition = Definition::new(400, "Bad Input");
//!
//! let err = BAD_INPUT.because("missing field `name`").into_exception();
//! let text = err.to_string();
//! assert!(text.contains(">>> Bad Input"));
//! assert!(text.contains(">>> The error code is 400"));
//! assert!(text.contains(">>> missing field `name`"));
//! ```
//!
//! ## Composing outcomes
//!
//! ```
//! use tristate_rail::definition::{ErrorDefinition, StdError};
//! use tristate_rail::Outcome;
//!
//! let parsed = Outcome::of_call(|| "42".parse::<i32>(), StdError::ResultContent.as_context())
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 0);
//! assert_eq!(parsed, Outcome::success(84));
//!
//! let bad = Outcome::of_call(|| "x".parse::<i32>(), StdError::ResultContent.as_context());
//! assert!(bad.failure_value().unwrap().cause().is_some());
//! ```
//!
//! ## Formatting with anchors
//!
//! ```
//! use tristate_rail::message;
//!
//! assert_eq!(message!("{} of {}", 3, 5).message(), "3 of 5");
//! assert_eq!(message!("literal \\{} stays").message(), "literal \\{} stays");
//! assert_eq!(message!("literal \\{} stays", 1).message(), "literal {} stays");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` / `Deserialize` for contexts, codes and outcomes.
//! - `tracing`: emits `tracing` events for formatter faults and context
//!   store/recall.
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Emits a `tracing` event when the `tracing` feature is enabled; expands to
/// nothing otherwise.
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use rail_event;

/// Thread-scoped and explicit stacks of in-progress error contexts
pub mod context;
/// The error definition contract and the built-in catalog
pub mod definition;
/// `{}`-anchor message formatting
pub mod format;
/// Argument, catalog and guard macros
pub mod macros;
/// The tri-state `Outcome` container and function lifting
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Option` and `Result`
pub mod traits;
/// Error context, exception and cause types
pub mod types;

pub use definition::{Definition, ErrorCode, ErrorDefinition, StdError};
pub use outcome::{lift, lift2, lift3, Outcome};
pub use types::{BoxError, BusinessError, Cause, ErrorContext};
