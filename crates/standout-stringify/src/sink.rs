//! Text sinks.
//!
//! Any [`core::fmt::Write`] is a sink: `String`, `fmt::Formatter`, or your
//! own type. The renderer only ever appends. [`IoSink`] adapts a byte-oriented
//! [`io::Write`] and keeps the underlying `io::Error` so it reaches the caller
//! unchanged.

use std::fmt;
use std::io;

use crate::args::RenderArgs;
use crate::error::{Result, StringifyError};
use crate::format::Template;

/// Adapts an [`io::Write`] into a text sink.
///
/// ```
/// use std::fmt::Write;
/// use standout_stringify::IoSink;
///
/// let mut sink = IoSink::new(Vec::new());
/// sink.write_str("bytes").unwrap();
/// assert_eq!(sink.into_inner(), b"bytes");
/// ```
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        IoSink { inner, error: None }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Takes the I/O error behind the last failed write, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Renders every argument into `writer`.
///
/// ```
/// use standout_stringify::write_io;
///
/// let mut out = Vec::new();
/// write_io(&mut out, (&[1, 2], " ok")).unwrap();
/// assert_eq!(out, b"[1, 2] ok");
/// ```
pub fn write_io<W: io::Write, A: RenderArgs>(writer: W, args: A) -> io::Result<()> {
    let mut sink = IoSink::new(writer);
    args.render_all(&mut sink).map_err(|fmt::Error| {
        sink.take_error()
            .unwrap_or_else(|| io::Error::other("a Render implementation returned an error"))
    })
}

/// Formats `template` into `writer` with the default markers.
pub fn format_io<W: io::Write, A: RenderArgs>(writer: W, template: &str, args: A) -> Result<()> {
    let mut sink = IoSink::new(writer);
    Template::new(template)
        .format_to(&mut sink, args)
        .map_err(|err| match (err, sink.take_error()) {
            (StringifyError::Sink(_), Some(io_err)) => StringifyError::Io(io_err),
            (err, _) => err,
        })
}
