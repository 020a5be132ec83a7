//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use tristate_rail::prelude::*;
//!
//! error_catalog! {
//!     pub enum AppError {
//!         Missing => (404, "Not found"),
//!     }
//! }
//!
//! fn find(id: u32) -> Outcome<&'static str> {
//!     (id == 1).then_some("one").or_failure(AppError::Missing.because_of("id {}", &rail_args![id]))
//! }
//!
//! assert_eq!(find(1).get_or_else("none"), "one");
//! assert_eq!(find(2).failure_value().unwrap().reason(), Some("id 2"));
//! ```

// Macros
pub use crate::{ensure, error_catalog, message, rail_args};

// Core types
pub use crate::definition::{Definition, ErrorCode, ErrorDefinition, StdError};
pub use crate::format::FormatArg;
pub use crate::outcome::{lift, lift2, lift3, map2, Outcome};
pub use crate::types::{BusinessError, Cause, ErrorContext};

// Traits
pub use crate::traits::{OptionExt, ResultExt};
