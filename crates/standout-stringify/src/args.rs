//! Heterogeneous argument lists and the top-level render entry points.
//!
//! Rust has no variadic functions, so an argument list is a tuple of
//! renderable values. [`RenderArgs`] is implemented for tuples up to twelve
//! elements; the [`render!`](crate::render!) family of macros builds the tuple
//! for you and borrows every argument.
//!
//! Top-level arguments are concatenated with no separator:
//!
//! ```
//! use standout_stringify::render;
//!
//! assert_eq!(render!(1, "x", [1, 2]), "1x[1, 2]");
//! ```

use std::fmt;

use crate::render::Render;

/// An ordered list of renderable values of possibly different types.
pub trait RenderArgs {
    /// Number of values in the list.
    fn count(&self) -> usize;

    /// Renders the value at `index`. Fails when `index` is out of range.
    fn render_arg<W: fmt::Write + ?Sized>(&self, index: usize, sink: &mut W) -> fmt::Result;

    /// Renders every value in order, with nothing in between.
    fn render_all<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        for index in 0..self.count() {
            self.render_arg(index, sink)?;
        }
        Ok(())
    }
}

impl<A: RenderArgs + ?Sized> RenderArgs for &A {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn render_arg<W: fmt::Write + ?Sized>(&self, index: usize, sink: &mut W) -> fmt::Result {
        (**self).render_arg(index, sink)
    }
}

/// [`fmt::Display`] adapter over an argument list.
///
/// Lets rendered values take part in `format!`, `write!` and `println!`:
///
/// ```
/// use standout_stringify::display;
///
/// let scores = vec![("ana", 3), ("bo", 5)];
/// assert_eq!(format!("scores: {}", display(&scores)), "scores: [(ana, 3), (bo, 5)]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rendered<A>(pub A);

impl<A: RenderArgs> fmt::Display for Rendered<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render_all(f)
    }
}

/// Wraps a single value for use with `Display`-based APIs.
pub fn display<T: Render + ?Sized>(value: &T) -> Rendered<(&T,)> {
    Rendered((value,))
}

/// Renders every argument into `sink`, concatenated.
pub fn render_to<W, A>(sink: &mut W, args: A) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    A: RenderArgs,
{
    args.render_all(sink)
}

/// Renders every argument into a fresh `String`.
///
/// # Panics
///
/// Writing to a `String` cannot fail, so an error here comes from a `Render`
/// impl that returned `Err` on its own, for example by calling
/// [`Delimited::open`](crate::Delimited::open) with a category that has no
/// delimiters. Such an impl makes this function panic. Use [`render_to`] to
/// get the error back instead.
pub fn to_text<A: RenderArgs>(args: A) -> String {
    Rendered(args).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_separator_between_arguments() {
        assert_eq!(to_text((1, "x", vec![1, 2])), "1x[1, 2]");
        assert_eq!(to_text(("a", 'b', "c")), "abc");
    }

    #[test]
    fn test_empty_argument_list_renders_nothing() {
        assert_eq!(to_text(()), "");
        assert_eq!(().count(), 0);
    }

    #[test]
    fn test_single_argument_tuple_is_not_wrapped() {
        assert_eq!(to_text((vec!['a'],)), "[a]");
    }

    #[test]
    fn test_render_arg_by_index() {
        let args = (10, "twenty", 30.5);
        assert_eq!(args.count(), 3);

        let mut out = String::new();
        args.render_arg(2, &mut out).unwrap();
        args.render_arg(0, &mut out).unwrap();
        assert_eq!(out, "30.510");

        assert!(args.render_arg(3, &mut out).is_err());
    }

    #[test]
    fn test_render_to_appends() {
        let mut out = String::from("> ");
        render_to(&mut out, (&[1, 2, 3], ' ', &(4, 5))).unwrap();
        assert_eq!(out, "> [1, 2, 3] (4, 5)");
    }

    #[test]
    fn test_borrowed_args_delegate() {
        let args = (1, 2);
        assert_eq!(to_text(&args), "12");
    }

    /// Returns an error without writing anything.
    struct Misbehaving;

    impl Render for Misbehaving {
        const CATEGORY: crate::Category = crate::Category::Streamable;

        fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
            crate::Delimited::open(sink, Self::CATEGORY)?.finish()
        }
    }

    #[test]
    fn test_failing_impl_is_reported_by_render_to() {
        let mut out = String::new();
        assert!(render_to(&mut out, (1, Misbehaving)).is_err());
        assert_eq!(out, "1");
    }

    #[test]
    #[should_panic]
    fn test_failing_impl_panics_in_to_text() {
        let _ = to_text((Misbehaving,));
    }

    #[test]
    fn test_display_adapter() {
        let value = vec![vec![1], vec![]];
        assert_eq!(display(&value).to_string(), "[[1], []]");
        assert_eq!(format!("<{}>", Rendered(("a", 1))), "<a1>");
    }
}
