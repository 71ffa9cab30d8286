//! # Standout Stringify - Shape-Driven Value Rendering
//!
//! `standout-stringify` turns values of arbitrary shape into readable text
//! without per-type formatting code, and fills printf-style templates with
//! those renderings.
//!
//! ## Core Concepts
//!
//! - [`Category`]: the rendering rule a type is classified into
//!   (Streamable, Pairing, Tuple, Sequence)
//! - [`Render`]: implemented once per shape; elements of containers recurse
//!   through their own category
//! - [`RenderArgs`]: a heterogeneous argument list (a tuple of values)
//! - [`Template`]: `%s` placeholders and `%%` escapes, with configurable
//!   [`Markers`]
//! - [`json_to_text`]: the same rules applied to dynamically shaped data
//!
//! ## Rendering Rules
//!
//! | Category | Output |
//! |----------|--------|
//! | Streamable | the value's own text, verbatim |
//! | Pairing | `(first, second)` |
//! | Tuple | `(a, b, c)`, empty tuple `()` |
//! | Sequence | `[a, b, c]`, empty sequence `[]` |
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use standout_stringify::{formatf, render, Pair};
//!
//! let pairs = vec![Pair::new(1, 2), Pair::new(3, 4)];
//! assert_eq!(render!(pairs), "[(1, 2), (3, 4)]");
//!
//! let mut inventory = BTreeMap::new();
//! inventory.insert("apples", 3);
//! inventory.insert("pears", 0);
//! assert_eq!(render!(inventory), "[(apples, 3), (pears, 0)]");
//!
//! let line = formatf!("%s items, 100%% checked", 2).unwrap();
//! assert_eq!(line, "2 items, 100% checked");
//! ```
//!
//! ## Unrenderable Shapes
//!
//! Types without a [`Render`] impl are rejected when the program is built,
//! never at runtime:
//!
//! ```compile_fail
//! struct Handle(u64);
//!
//! let text = standout_stringify::render!(Handle(3));
//! ```
//!
//! ## Deriving
//!
//! `#[derive(Render)]` from `standout-stringify-macros` classifies your own
//! types. With the `derive` feature it is also re-exported as
//! `standout_stringify::Render`:
//!
//! ```rust
//! use standout_stringify::render;
//! use standout_stringify_macros::Render;
//!
//! #[derive(Render)]
//! struct Span {
//!     start: usize,
//!     end: usize,
//! }
//!
//! #[derive(Render)]
//! #[render(pair)]
//! struct Entry {
//!     key: String,
//!     hits: Vec<u32>,
//! }
//!
//! assert_eq!(render!(Span { start: 2, end: 9 }), "(2, 9)");
//!
//! let entry = Entry { key: "home".into(), hits: vec![1, 3] };
//! assert_eq!(render!(entry), "(home, [1, 3])");
//! ```

mod args;
mod category;
mod dynamic;
mod error;
mod format;
mod pair;
mod render;
mod ser;
mod sequence;
mod sink;
mod tuple;

pub mod prelude;

// Re-export public API
pub use args::{display, render_to, to_text, RenderArgs, Rendered};
pub use category::{category_of, classify, Category};
pub use dynamic::{check_json, classify_json, json_to_text, render_json};
pub use error::{Result, StringifyError};
pub use format::{format_text, format_to, Markers, Template};
pub use pair::{render_pair, Pair};
pub use render::{render_value, Delimited, Render, Streamed, SEPARATOR};
pub use ser::{serialize_to, serialize_to_text};
pub use sequence::{render_sequence, Seq};
pub use sink::{format_io, write_io, IoSink};

#[cfg(feature = "derive")]
pub use standout_stringify_macros::Render;

/// Renders the arguments, concatenated, into a `String`.
///
/// Each argument is borrowed. Panics under the same conditions as
/// [`to_text`].
///
/// ```
/// use standout_stringify::render;
///
/// let name = String::from("x");
/// assert_eq!(render!(1, name, [1, 2]), "1x[1, 2]");
/// assert_eq!(render!(), "");
/// ```
#[macro_export]
macro_rules! render {
    ($($arg:expr),* $(,)?) => {
        $crate::to_text(($(&$arg,)*))
    };
}

/// Renders the arguments, concatenated, into a sink.
///
/// ```
/// use standout_stringify::render_to;
///
/// let mut out = String::new();
/// render_to!(&mut out, "v", (1, 2)).unwrap();
/// assert_eq!(out, "v(1, 2)");
/// ```
#[macro_export]
macro_rules! render_to {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::render_to($sink, ($(&$arg,)*))
    };
}

/// Formats a template into a `String`, borrowing each argument.
///
/// ```
/// use standout_stringify::formatf;
///
/// assert_eq!(formatf!("%s and %s", 1, 2).unwrap(), "1 and 2");
/// assert!(formatf!("%s").is_err());
/// ```
#[macro_export]
macro_rules! formatf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_text($template, ($(&$arg,)*))
    };
}

/// Formats a template into a sink, borrowing each argument.
///
/// ```
/// use standout_stringify::formatf_to;
///
/// let mut out = String::new();
/// formatf_to!(&mut out, "[%s]", 'x').unwrap();
/// assert_eq!(out, "[x]");
/// ```
#[macro_export]
macro_rules! formatf_to {
    ($sink:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_to($sink, $template, ($(&$arg,)*))
    };
}
