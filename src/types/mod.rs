//! Error types and utilities.
//!
//! - [`ErrorContext`]: chainable diagnostic state with a fixed rendering.
//! - [`BusinessError`]: the exception an [`ErrorContext`] converts into.
//! - [`Cause`]: shared handle to an underlying fault.
//! - [`error_formatter`]: configuration of the rendered description.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::definition::{ErrorDefinition, StdError};
//!
//! let err = StdError::InternalServerError
//!     .because("cache warm-up failed")
//!     .into_exception();
//!
//! assert!(err.to_string().contains(">>> The error code is 9999"));
//! ```
pub mod business_error;
pub mod cause;
pub mod error_context;
pub mod error_formatter;

pub use business_error::*;
pub use cause::*;
pub use error_context::*;
pub use error_formatter::{DescriptionBuilder, DescriptionConfig, LINE_PREFIX, LINE_SEPARATOR};
