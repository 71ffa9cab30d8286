//! Printf-style placeholder templates.
//!
//! A [`Template`] is literal text with placeholder markers. Each placeholder
//! is replaced, left to right, by the rendered form of the next argument.
//!
//! # Syntax
//!
//! With the default [`Markers`]:
//!
//! - `%s` - render the next argument here
//! - `%%` - a literal `%`
//!
//! Any other character after `%`, or a `%` at the very end, is an error. So
//! is a template that uses fewer or more placeholders than arguments given.
//!
//! # Example
//!
//! ```rust
//! use standout_stringify::format_text;
//!
//! let output = format_text("%s of %s done (100%% soon)", (3, &[1, 2, 3])).unwrap();
//! assert_eq!(output, "3 of [1, 2, 3] done (100% soon)");
//! ```
//!
//! Errors are raised where they are found. Text written to the sink before
//! that point stays there.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::args::RenderArgs;
use crate::error::{Result, StringifyError};

const DEFAULT_ESCAPE: char = '%';
const DEFAULT_SUBSTITUTE: char = 's';

/// The escape marker and substitution letter a template is scanned with.
///
/// Markers deserialize from configuration; both keys are optional:
///
/// ```
/// use standout_stringify::Markers;
///
/// let markers: Markers = serde_json::from_str(r#"{"escape": "$"}"#).unwrap();
/// assert_eq!(markers.escape(), '$');
/// assert_eq!(markers.substitute(), 's');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MarkersRaw", into = "MarkersRaw")]
pub struct Markers {
    escape: char,
    substitute: char,
}

#[derive(Serialize, Deserialize)]
struct MarkersRaw {
    #[serde(default = "default_escape")]
    escape: char,
    #[serde(default = "default_substitute")]
    substitute: char,
}

fn default_escape() -> char {
    DEFAULT_ESCAPE
}

fn default_substitute() -> char {
    DEFAULT_SUBSTITUTE
}

impl From<Markers> for MarkersRaw {
    fn from(markers: Markers) -> Self {
        MarkersRaw {
            escape: markers.escape,
            substitute: markers.substitute,
        }
    }
}

impl TryFrom<MarkersRaw> for Markers {
    type Error = StringifyError;

    fn try_from(raw: MarkersRaw) -> Result<Self> {
        Markers::new(raw.escape, raw.substitute)
    }
}

impl Markers {
    /// `%s` placeholders and `%%` escapes.
    pub const PRINTF: Markers = Markers {
        escape: DEFAULT_ESCAPE,
        substitute: DEFAULT_SUBSTITUTE,
    };

    /// Creates markers; the two characters must differ.
    pub fn new(escape: char, substitute: char) -> Result<Self> {
        if escape == substitute {
            return Err(StringifyError::InvalidMarkers { escape, substitute });
        }
        Ok(Markers { escape, substitute })
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    pub fn substitute(&self) -> char {
        self.substitute
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::PRINTF
    }
}

/// A template string paired with the markers used to scan it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template<'t> {
    source: &'t str,
    markers: Markers,
}

impl<'t> Template<'t> {
    /// Creates a template using the default `%s` / `%%` markers.
    pub fn new(source: &'t str) -> Self {
        Template {
            source,
            markers: Markers::default(),
        }
    }

    /// Replaces the markers the template is scanned with.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn source(&self) -> &'t str {
        self.source
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Validates the whole template and returns how many arguments it needs.
    ///
    /// ```
    /// use standout_stringify::Template;
    ///
    /// assert_eq!(Template::new("%s%% of %s").placeholders().unwrap(), 2);
    /// assert!(Template::new("50%").placeholders().is_err());
    /// ```
    pub fn placeholders(&self) -> Result<usize> {
        let mut scanner = Scanner::new(self.source, self.markers);
        let mut count = 0;
        while scanner.advance(&mut Discard)? {
            count += 1;
        }
        Ok(count)
    }

    /// Writes the template into `sink`, substituting `args` in order.
    pub fn format_to<W, A>(&self, sink: &mut W, args: A) -> Result<()>
    where
        W: fmt::Write + ?Sized,
        A: RenderArgs,
    {
        let supplied = args.count();
        let mut scanner = Scanner::new(self.source, self.markers);

        for index in 0..supplied {
            if !scanner.advance(sink).map_err(rejected)? {
                return Err(rejected(StringifyError::TooManyArguments {
                    supplied,
                    consumed: index,
                }));
            }
            trace!("substituting argument {} at byte {}", index, scanner.pos);
            args.render_arg(index, sink)?;
        }

        if scanner.advance(sink).map_err(rejected)? {
            return Err(rejected(StringifyError::TooFewArguments { supplied }));
        }
        Ok(())
    }

    /// Formats into a fresh `String`.
    pub fn format<A: RenderArgs>(&self, args: A) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        self.format_to(&mut out, args)?;
        Ok(out)
    }
}

/// Formats `template` into `sink` with the default markers.
pub fn format_to<W, A>(sink: &mut W, template: &str, args: A) -> Result<()>
where
    W: fmt::Write + ?Sized,
    A: RenderArgs,
{
    Template::new(template).format_to(sink, args)
}

/// Formats `template` into a fresh `String` with the default markers.
pub fn format_text<A: RenderArgs>(template: &str, args: A) -> Result<String> {
    Template::new(template).format(args)
}

fn rejected(err: StringifyError) -> StringifyError {
    if err.is_template_error() {
        debug!("template rejected: {}", err);
    }
    err
}

/// Walks a template, copying literal text until the next placeholder.
struct Scanner<'t> {
    source: &'t str,
    pos: usize,
    markers: Markers,
}

impl<'t> Scanner<'t> {
    fn new(source: &'t str, markers: Markers) -> Self {
        Scanner {
            source,
            pos: 0,
            markers,
        }
    }

    /// Copies literal text into `sink` up to the next placeholder.
    ///
    /// Returns `true` with the position just past the placeholder, or `false`
    /// once the template is exhausted.
    fn advance<W: fmt::Write + ?Sized>(&mut self, sink: &mut W) -> Result<bool> {
        let Markers { escape, substitute } = self.markers;

        loop {
            let rest = &self.source[self.pos..];
            let Some(found) = rest.find(escape) else {
                sink.write_str(rest)?;
                self.pos = self.source.len();
                return Ok(false);
            };
            sink.write_str(&rest[..found])?;

            let marker_at = self.pos + found;
            let after = marker_at + escape.len_utf8();
            match self.source[after..].chars().next() {
                None => {
                    self.pos = after;
                    return Err(StringifyError::UnmatchedMarker {
                        marker: escape,
                        offset: marker_at,
                    });
                }
                Some(next) if next == escape => {
                    // Escaped marker: %% -> %
                    sink.write_char(escape)?;
                    self.pos = after + next.len_utf8();
                }
                Some(next) if next == substitute => {
                    self.pos = after + next.len_utf8();
                    return Ok(true);
                }
                Some(next) => {
                    return Err(StringifyError::UnknownSpecifier {
                        marker: escape,
                        found: next,
                        offset: marker_at,
                    });
                }
            }
        }
    }
}

/// Sink that drops everything; used for validation passes.
struct Discard;

impl fmt::Write for Discard {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_in_order() {
        assert_eq!(format_text("%s and %s", (1, 2)).unwrap(), "1 and 2");
    }

    #[test]
    fn test_escaped_marker() {
        assert_eq!(
            format_text("100%% done, %s left", (5,)).unwrap(),
            "100% done, 5 left"
        );
        assert_eq!(format_text("%%%%", ()).unwrap(), "%%");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            format_text("Just plain text, no placeholders", ()).unwrap(),
            "Just plain text, no placeholders"
        );
        assert_eq!(format_text("", ()).unwrap(), "");
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(format_text("%s%s%s", ('a', "b", 3)).unwrap(), "ab3");
    }

    #[test]
    fn test_arguments_render_recursively() {
        let output = format_text("rows=%s", (vec![(1, "a"), (2, "b")],)).unwrap();
        assert_eq!(output, "rows=[(1, a), (2, b)]");
    }

    #[test]
    fn test_too_few_arguments() {
        let err = format_text("%s", ()).unwrap_err();
        assert!(matches!(err, StringifyError::TooFewArguments { supplied: 0 }));

        let err = format_text("%s-%s", (1,)).unwrap_err();
        assert!(matches!(err, StringifyError::TooFewArguments { supplied: 1 }));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = format_text("x", (1,)).unwrap_err();
        assert!(matches!(
            err,
            StringifyError::TooManyArguments {
                supplied: 1,
                consumed: 0
            }
        ));

        let err = format_text("", (1,)).unwrap_err();
        assert!(matches!(err, StringifyError::TooManyArguments { .. }));

        let err = format_text("%s", (1, 2, 3)).unwrap_err();
        assert!(matches!(
            err,
            StringifyError::TooManyArguments {
                supplied: 3,
                consumed: 1
            }
        ));
    }

    #[test]
    fn test_trailing_marker() {
        let err = format_text("50%", ()).unwrap_err();
        assert!(matches!(
            err,
            StringifyError::UnmatchedMarker {
                marker: '%',
                offset: 2
            }
        ));
        assert!(err.to_string().contains("unmatched"));
    }

    #[test]
    fn test_unknown_specifier() {
        let err = format_text("%d", (1,)).unwrap_err();
        assert!(matches!(
            err,
            StringifyError::UnknownSpecifier {
                found: 'd',
                offset: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_partial_output_is_kept() {
        let mut out = String::new();
        let result = format_to(&mut out, "a=%s, b=%s, %x", (1, 2));
        assert!(result.is_err());
        assert_eq!(out, "a=1, b=2, ");
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers::new('$', 'v').unwrap();
        let template = Template::new("cost: $$$v").with_markers(markers);
        assert_eq!(template.format((12,)).unwrap(), "cost: $12");
        assert_eq!(template.placeholders().unwrap(), 1);

        // The default marker is plain text under custom markers.
        let template = Template::new("%s $v").with_markers(markers);
        assert_eq!(template.format(("x",)).unwrap(), "%s x");
    }

    #[test]
    fn test_multibyte_markers() {
        let markers = Markers::new('§', 'ü').unwrap();
        let template = Template::new("ä§ü§§").with_markers(markers);
        assert_eq!(template.format(("ö",)).unwrap(), "äö§");

        let err = Template::new("ä§").with_markers(markers).format(()).unwrap_err();
        assert!(matches!(
            err,
            StringifyError::UnmatchedMarker { offset: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_markers() {
        let err = Markers::new('%', '%').unwrap_err();
        assert!(matches!(err, StringifyError::InvalidMarkers { .. }));
    }

    #[test]
    fn test_markers_default() {
        let markers = Markers::default();
        assert_eq!(markers, Markers::PRINTF);
        assert_eq!(markers.escape(), '%');
        assert_eq!(markers.substitute(), 's');
    }

    #[test]
    fn test_markers_serde() {
        let markers: Markers = serde_json::from_str(r#"{"escape": "@", "substitute": "v"}"#).unwrap();
        assert_eq!(markers, Markers::new('@', 'v').unwrap());

        let json = serde_json::to_string(&Markers::PRINTF).unwrap();
        let parsed: Markers = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Markers::PRINTF);

        let empty: Markers = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Markers::PRINTF);
    }

    #[test]
    fn test_markers_serde_rejects_equal() {
        let result: std::result::Result<Markers, _> =
            serde_json::from_str(r#"{"escape": "s", "substitute": "s"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Template::new("").placeholders().unwrap(), 0);
        assert_eq!(Template::new("%% %s %s").placeholders().unwrap(), 2);
        assert!(Template::new("%q").placeholders().is_err());
    }

    #[test]
    fn test_template_accessors() {
        let template = Template::new("hi %s");
        assert_eq!(template.source(), "hi %s");
        assert_eq!(template.markers(), Markers::PRINTF);
    }
}
