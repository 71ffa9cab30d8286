//! Error types for the stringify crate.
//!
//! Rendering a statically classified value never fails on its own; the only
//! failures there come from the sink and travel as [`core::fmt::Error`].
//! [`StringifyError`] covers everything else: malformed templates, argument
//! count mismatches, and dynamic values with no renderable shape.

use std::fmt;
use std::io;

use thiserror::Error;

/// Errors that can occur when formatting templates or rendering dynamic values.
#[derive(Debug, Error)]
pub enum StringifyError {
    /// The template ends with an escape marker that has nothing after it.
    #[error("template must not end on an unmatched '{marker}' (byte {offset})")]
    UnmatchedMarker { marker: char, offset: usize },

    /// The escape marker is followed by a character that is neither the
    /// substitution letter nor the marker itself.
    #[error("template contains illegal format specifier '{marker}{found}' at byte {offset}")]
    UnknownSpecifier {
        marker: char,
        found: char,
        offset: usize,
    },

    /// A placeholder asked for a value after all supplied values were used.
    #[error("template requests more arguments than the {supplied} provided")]
    TooFewArguments { supplied: usize },

    /// The template ran out of placeholders while values were still pending.
    #[error("template consumed {consumed} of {supplied} arguments")]
    TooManyArguments { supplied: usize, consumed: usize },

    /// The escape marker and the substitution letter cannot be told apart.
    #[error("invalid template markers: escape '{escape}' and substitute '{substitute}' must differ")]
    InvalidMarkers { escape: char, substitute: char },

    /// A dynamic value matched none of the renderable shapes.
    #[error("value at {path} has no renderable shape ({kind})")]
    Unrenderable { path: String, kind: &'static str },

    /// The text sink rejected a write.
    #[error("sink rejected a write")]
    Sink(#[from] fmt::Error),

    /// The underlying byte writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A `Serialize` impl reported its own failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StringifyError {
    /// Returns `true` for errors caused by the template text or the number of
    /// arguments, as opposed to sink or value failures.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            StringifyError::UnmatchedMarker { .. }
                | StringifyError::UnknownSpecifier { .. }
                | StringifyError::TooFewArguments { .. }
                | StringifyError::TooManyArguments { .. }
        )
    }
}

impl serde::ser::Error for StringifyError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        StringifyError::Serialization(msg.to_string())
    }
}

/// Result type for stringify operations.
pub type Result<T> = std::result::Result<T, StringifyError>;
