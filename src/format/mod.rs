//! Placeholder substitution for diagnostic messages.
//!
//! The format anchor is the two-character token `{}`; each occurrence consumes
//! one positional argument, left to right.
//!
//! - `\{}` emits a literal `{}` and consumes nothing.
//! - `\\{}` emits a literal `\` followed by a normal substitution.
//! - Array arguments render as `[a, b, c]`, recursively. An array met again
//!   while it is still being expanded renders as `[...]`.
//! - [`FormatArg::Null`] renders as `null`; a value whose `Display` fails
//!   or panics renders as [`FAILED_DISPLAY`]. Panics are only contained
//!   when the crate is built with `panic = "unwind"`.
//!
//! [`format_with_cause`] is the primary contract: the optional cause is passed
//! explicitly. [`format`] additionally sniffs a trailing fault argument out of
//! the list when the pattern has no anchor left for it.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::format::format;
//! use tristate_rail::rail_args;
//!
//! assert_eq!(format("Hi {}.", &rail_args!["there"]).message(), "Hi there.");
//! assert_eq!(
//!     format("Set \\{} is not equal to {}.", &rail_args!["1,2"]).message(),
//!     "Set {} is not equal to 1,2."
//! );
//! assert_eq!(
//!     format("File name is C:\\\\{}.", &rail_args!["file.zip"]).message(),
//!     "File name is C:\\file.zip."
//! );
//! ```
use crate::types::Cause;
use smallvec::SmallVec;
use std::fmt::Write;
use std::panic::{self, AssertUnwindSafe};

mod arg;

pub use arg::{ArgArray, FormatArg};

/// The format anchor.
pub const ANCHOR: &str = "{}";
/// Rendered in place of an argument whose `Display` implementation fails.
pub const FAILED_DISPLAY: &str = "[FAILED toString()]";

const DELIM_START: char = '{';
const ESCAPE: u8 = b'\\';
const NULL: &str = "null";
const ELEMENT_SEPARATOR: &str = ", ";

/// Arrays currently being expanded, keyed by identity.
type Rendering = SmallVec<[usize; 8]>;

/// Output of the formatter: the expanded message plus an optional cause.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct FormattingTuple {
    message: String,
    cause: Option<Cause>,
}

impl FormattingTuple {
    #[inline]
    fn new(message: String, cause: Option<Cause>) -> Self {
        Self { message, cause }
    }

    /// The expanded message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The cause, either passed explicitly or extracted from the arguments.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Splits the tuple into its message and cause.
    #[inline]
    pub fn into_parts(self) -> (String, Option<Cause>) {
        (self.message, self.cause)
    }
}

/// Expands `pattern`, treating a surplus trailing fault argument as the cause.
///
/// The last argument is extracted only when it is a [`FormatArg::Fault`] and
/// the pattern has fewer anchors than there are arguments; otherwise every
/// argument is printable.
///
/// ```
/// use tristate_rail::format::{format, FormatArg};
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
/// let out = format("read {} failed", &[FormatArg::from("a.txt"), FormatArg::fault(io)]);
///
/// assert_eq!(out.message(), "read a.txt failed");
/// assert_eq!(out.cause().map(ToString::to_string).as_deref(), Some("gone"));
/// ```
pub fn format(pattern: &str, args: &[FormatArg]) -> FormattingTuple {
    match args.split_last() {
        Some((FormatArg::Fault(cause), rest)) if count_anchors(pattern) < args.len() => {
            format_with_cause(pattern, rest, Some(cause.clone()))
        }
        _ => format_with_cause(pattern, args, None),
    }
}

/// Expands `pattern` with every argument printable and an explicit cause.
pub fn format_with_cause(pattern: &str, args: &[FormatArg], cause: Option<Cause>) -> FormattingTuple {
    if args.is_empty() {
        return FormattingTuple::new(pattern.to_owned(), cause);
    }

    let bytes = pattern.as_bytes();
    let mut out = String::with_capacity(pattern.len() + 50);
    let mut start = 0;
    let mut next_arg = 0;

    while next_arg < args.len() {
        let Some(offset) = pattern[start..].find(ANCHOR) else {
            break;
        };
        let anchor = start + offset;

        if is_escaped(bytes, anchor) {
            if !is_double_escaped(bytes, anchor) {
                out.push_str(&pattern[start..anchor - 1]);
                out.push(DELIM_START);
                start = anchor + 1;
                continue;
            }
            // the escape is itself escaped: keep one backslash, then substitute
            out.push_str(&pattern[start..anchor - 1]);
        } else {
            out.push_str(&pattern[start..anchor]);
        }

        append_arg(&mut out, &args[next_arg], &mut Rendering::new());
        start = anchor + ANCHOR.len();
        next_arg += 1;
    }

    out.push_str(&pattern[start..]);
    FormattingTuple::new(out, cause)
}

/// Number of anchors in `pattern` that would consume an argument.
///
/// ```
/// use tristate_rail::format::count_anchors;
///
/// assert_eq!(count_anchors("{} and {}"), 2);
/// assert_eq!(count_anchors("\\{} and {}"), 1);
/// assert_eq!(count_anchors("C:\\\\{}"), 1);
/// ```
pub fn count_anchors(pattern: &str) -> usize {
    let bytes = pattern.as_bytes();
    let mut start = 0;
    let mut count = 0;
    while let Some(offset) = pattern[start..].find(ANCHOR) {
        let anchor = start + offset;
        if is_escaped(bytes, anchor) && !is_double_escaped(bytes, anchor) {
            start = anchor + 1;
            continue;
        }
        count += 1;
        start = anchor + ANCHOR.len();
    }
    count
}

#[inline]
fn is_escaped(bytes: &[u8], anchor: usize) -> bool {
    anchor >= 1 && bytes[anchor - 1] == ESCAPE
}

#[inline]
fn is_double_escaped(bytes: &[u8], anchor: usize) -> bool {
    anchor >= 2 && bytes[anchor - 2] == ESCAPE
}

fn append_arg(out: &mut String, arg: &FormatArg, rendering: &mut Rendering) {
    match arg {
        FormatArg::Null => out.push_str(NULL),
        FormatArg::Text(text) => out.push_str(text),
        FormatArg::Value(value) => append_display(out, value.as_ref()),
        FormatArg::Fault(cause) => append_display(out, cause),
        FormatArg::Array(array) => append_array(out, array, rendering),
    }
}

fn append_display(out: &mut String, value: &dyn std::fmt::Display) {
    let rendered = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut rendered = String::new();
        write!(rendered, "{}", value).map(|()| rendered)
    }));
    if let Ok(Ok(rendered)) = rendered {
        out.push_str(&rendered);
    } else {
        crate::rail_event!(warn, "Display implementation failed while formatting an argument");
        out.push_str(FAILED_DISPLAY);
    }
}

fn append_array(out: &mut String, array: &ArgArray, rendering: &mut Rendering) {
    let identity = array.identity();
    out.push('[');
    if rendering.contains(&identity) {
        out.push_str("...");
    } else {
        rendering.push(identity);
        let items = array.read();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(ELEMENT_SEPARATOR);
            }
            append_arg(out, item, rendering);
        }
        drop(items);
        // siblings may repeat the same array
        rendering.pop();
    }
    out.push(']');
}
