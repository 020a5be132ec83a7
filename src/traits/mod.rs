//! Extension traits for interop with the standard containers.
//!
//! - [`OptionExt`]: lifts an `Option` into an [`Outcome`](crate::Outcome)
//! - [`ResultExt`]: lifts a fallible `Result` into an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use tristate_rail::definition::{ErrorDefinition, StdError};
//! use tristate_rail::traits::ResultExt;
//!
//! let read = std::fs::read_to_string("/definitely/not/here")
//!     .ctx(StdError::InternalServerError.because("reading settings"));
//! assert!(read.failure_value().unwrap().cause().is_some());
//! ```

pub mod outcome_ext;

pub use outcome_ext::{OptionExt, ResultExt};
