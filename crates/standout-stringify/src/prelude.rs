//! Convenience imports.
//!
//! ```rust
//! use standout_stringify::prelude::*;
//!
//! let output = format_text("%s -> %s", (Pair::new(1, 'a'), vec![2, 3])).unwrap();
//! assert_eq!(output, "(1, a) -> [2, 3]");
//! ```

pub use crate::{
    display, format_text, format_to, render_to, to_text, Category, Delimited, Markers, Pair,
    Render, RenderArgs, Seq, Streamed, StringifyError, Template,
};
