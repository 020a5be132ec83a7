//! Rendering of [`ErrorContext`] descriptions.
//!
//! [`DescriptionConfig::default`] is the compatibility format consumed by
//! tests and log scrapers:
//!
//! ```text
//! <sep>>>> <message><sep>>>> The error code is <code><sep>>>> <reason><sep>>>> Cause: <cause>
//! ```
//!
//! Lines whose field is unset are omitted; a context with no field set renders
//! as the empty string.
use crate::types::ErrorContext;
use std::fmt::{self, Display};

/// Platform line terminator used by the default description.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line terminator used by the default description.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Marker prefixed to every description line.
pub const LINE_PREFIX: &str = ">>> ";

/// Configuration for rendering an [`ErrorContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionConfig {
    pub separator: String,
    pub prefix: String,
    pub code_label: String,
    pub cause_label: String,
    /// Emit the separator before the first line as well.
    pub leading_separator: bool,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            separator: LINE_SEPARATOR.into(),
            prefix: LINE_PREFIX.into(),
            code_label: "The error code is ".into(),
            cause_label: "Cause: ".into(),
            leading_separator: true,
        }
    }
}

impl DescriptionConfig {
    /// Single-line rendering, fields joined by ` | ` without markers.
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " | ".into(),
            prefix: String::new(),
            leading_separator: false,
            ..Default::default()
        }
    }

    /// The default layout with `\n` regardless of platform.
    #[inline]
    pub fn unix() -> Self {
        Self { separator: "\n".into(), ..Default::default() }
    }

    pub(crate) fn render(&self, ctx: &ErrorContext, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut line = |f: &mut fmt::Formatter<'_>, label: &str, value: &dyn Display| {
            if self.leading_separator || !first {
                f.write_str(&self.separator)?;
            }
            first = false;
            write!(f, "{}{}{}", self.prefix, label, value)
        };

        if let Some(message) = ctx.message() {
            line(f, "", &message)?;
        }
        if let Some(code) = ctx.code() {
            line(f, &self.code_label, code)?;
        }
        if let Some(reason) = ctx.reason() {
            line(f, "", &reason)?;
        }
        if let Some(cause) = ctx.cause() {
            line(f, &self.cause_label, cause)?;
        }
        Ok(())
    }
}

/// Builder for per-call overrides of the description layout.
///
/// ```
/// use tristate_rail::definition::{Definition, ErrorDefinition};
///
/// let ctx = Definition::new(400, "Bad Input").because("missing field");
/// assert_eq!(
///     ctx.fmt().compact().to_string(),
///     "Bad Input | The error code is 400 | missing field"
/// );
/// ```
#[must_use]
pub struct DescriptionBuilder<'a> {
    context: &'a ErrorContext,
    config: DescriptionConfig,
}

impl<'a> DescriptionBuilder<'a> {
    pub fn new(context: &'a ErrorContext) -> Self {
        Self { context, config: DescriptionConfig::default() }
    }

    pub fn with_config(mut self, config: DescriptionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    pub fn leading_separator(mut self, enabled: bool) -> Self {
        self.config.leading_separator = enabled;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = DescriptionConfig::compact();
        self
    }

    pub fn unix(mut self) -> Self {
        self.config = DescriptionConfig::unix();
        self
    }
}

impl Display for DescriptionBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.render(self.context, f)
    }
}
