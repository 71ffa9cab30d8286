//! The recursive renderer.
//!
//! [`Render`] is implemented once per shape. Streamable types write their own
//! text form; container types open their delimiters through [`Delimited`] and
//! hand every element back to [`render_value`], which dispatches on the
//! element's own category. Nesting is therefore unbounded and mixed: a
//! sequence of tuples of pairings renders without any extra code.
//!
//! # Example
//!
//! ```
//! use standout_stringify::{to_text, Pair};
//!
//! let rows = vec![(1, "one"), (2, "two")];
//! assert_eq!(to_text((&rows,)), "[(1, one), (2, two)]");
//!
//! let nested = Pair::new(vec!['a', 'b'], ("x", 3.5));
//! assert_eq!(to_text((&nested,)), "([a, b], (x, 3.5))");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::rc::Rc;
use std::sync::Arc;

use crate::category::Category;

/// Separator written between elements of pairings, tuples and sequences.
pub const SEPARATOR: &str = ", ";

/// A value whose shape has a rendering rule.
///
/// Implementations exist for the standard scalars, strings, tuples, pointers
/// and collections. User types either implement it by hand, derive it with
/// `#[derive(Render)]`, or wrap a `Display` type in [`Streamed`].
///
/// # Manual Implementation
///
/// ```
/// use std::fmt;
/// use standout_stringify::{to_text, Category, Delimited, Render};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Render for Point {
///     const CATEGORY: Category = Category::Tuple;
///
///     fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
///         let mut tuple = Delimited::open(sink, Self::CATEGORY)?;
///         tuple.entry(&self.x)?;
///         tuple.entry(&self.y)?;
///         tuple.finish()
///     }
/// }
///
/// assert_eq!(to_text((&Point { x: 3, y: -1 },)), "(3, -1)");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no renderable shape",
    label = "not streamable, a pairing, a tuple, or a sequence",
    note = "implement `Render`, derive it with `#[derive(Render)]`, or wrap a `Display` type in `Streamed`"
)]
pub trait Render {
    /// The category this type is classified into.
    const CATEGORY: Category;

    /// Appends the text form of `self` to `sink`.
    ///
    /// Errors come only from the sink and must be passed through unchanged.
    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result;
}

/// Renders one value through its category.
///
/// Every element of every container goes through here. A type that declares
/// [`Category::Unrenderable`] fails the build as soon as this function is
/// instantiated for it, including as an element nested inside a container:
///
/// ```compile_fail
/// use std::fmt;
/// use standout_stringify::{to_text, Category, Render};
///
/// struct Opaque;
///
/// impl Render for Opaque {
///     const CATEGORY: Category = Category::Unrenderable;
///
///     fn render<W: fmt::Write + ?Sized>(&self, _sink: &mut W) -> fmt::Result {
///         Ok(())
///     }
/// }
///
/// let _ = to_text((&vec![Opaque],));
/// ```
pub fn render_value<W, T>(sink: &mut W, value: &T) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: Render + ?Sized,
{
    const {
        assert!(
            T::CATEGORY.is_renderable(),
            "render_value must not be called with an unrenderable type"
        )
    };
    value.render(sink)
}

/// Writer for the delimited, comma-joined output shared by pairings, tuples
/// and sequences.
///
/// ```
/// use standout_stringify::{Category, Delimited};
///
/// let mut out = String::new();
/// let mut seq = Delimited::open(&mut out, Category::Sequence).unwrap();
/// seq.entries([1, 2, 3]).unwrap();
/// seq.finish().unwrap();
/// assert_eq!(out, "[1, 2, 3]");
/// ```
pub struct Delimited<'s, W: fmt::Write + ?Sized> {
    sink: &'s mut W,
    close: char,
    empty: bool,
}

impl<'s, W: fmt::Write + ?Sized> Delimited<'s, W> {
    /// Writes the opening delimiter of `category`.
    ///
    /// Fails without writing for categories that have no delimiters.
    pub fn open(sink: &'s mut W, category: Category) -> Result<Self, fmt::Error> {
        let (open, close) = category.delimiters().ok_or(fmt::Error)?;
        sink.write_char(open)?;
        Ok(Delimited {
            sink,
            close,
            empty: true,
        })
    }

    /// Renders one element, preceded by the separator unless it is the first.
    pub fn entry<T: Render + ?Sized>(&mut self, value: &T) -> fmt::Result {
        if !self.empty {
            self.sink.write_str(SEPARATOR)?;
        }
        self.empty = false;
        render_value(&mut *self.sink, value)
    }

    /// Renders every item of `iter` in iteration order.
    pub fn entries<I>(&mut self, iter: I) -> fmt::Result
    where
        I: IntoIterator,
        I::Item: Render,
    {
        for item in iter {
            self.entry(&item)?;
        }
        Ok(())
    }

    /// Writes the closing delimiter.
    pub fn finish(self) -> fmt::Result {
        self.sink.write_char(self.close)
    }
}

/// Opts any [`fmt::Display`] type into the Streamable category.
///
/// ```
/// use std::path::Path;
/// use standout_stringify::{to_text, Streamed};
///
/// let paths = vec![Streamed(Path::new("/tmp").display())];
/// assert_eq!(to_text((&paths,)), "[/tmp]");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Streamed<T>(pub T);

impl<T: fmt::Display> Render for Streamed<T> {
    const CATEGORY: Category = Category::Streamable;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{}", self.0)
    }
}

macro_rules! streamable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                const CATEGORY: Category = Category::Streamable;

                fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
                    write!(sink, "{}", self)
                }
            }
        )*
    };
}

streamable!(i8, i16, i32, i64, i128, isize);
streamable!(u8, u16, u32, u64, u128, usize);
streamable!(f32, f64, bool);
streamable!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);
streamable!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6);

impl Render for char {
    const CATEGORY: Category = Category::Streamable;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_char(*self)
    }
}

impl Render for str {
    const CATEGORY: Category = Category::Streamable;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self)
    }
}

impl Render for String {
    const CATEGORY: Category = Category::Streamable;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self)
    }
}

impl Render for fmt::Arguments<'_> {
    const CATEGORY: Category = Category::Streamable;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_fmt(*self)
    }
}

// Pointers classify and render as their pointee.
macro_rules! delegate {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Render + ?Sized> Render for $ptr {
                const CATEGORY: Category = T::CATEGORY;

                fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
                    (**self).render(sink)
                }
            }
        )*
    };
}

delegate!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B> Render for Cow<'_, B>
where
    B: Render + ToOwned + ?Sized,
{
    const CATEGORY: Category = B::CATEGORY;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        (**self).render(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text<T: Render + ?Sized>(value: &T) -> String {
        let mut out = String::new();
        render_value(&mut out, value).unwrap();
        out
    }

    /// Accepts a fixed number of bytes, then fails every write.
    struct BoundedSink {
        out: String,
        capacity: usize,
    }

    impl fmt::Write for BoundedSink {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.out.len() + s.len() > self.capacity {
                return Err(fmt::Error);
            }
            self.out.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_streamable_values_render_verbatim() {
        assert_eq!(text(&42), "42");
        assert_eq!(text(&-7i8), "-7");
        assert_eq!(text(&u128::MAX), u128::MAX.to_string());
        assert_eq!(text(&2.5f64), "2.5");
        assert_eq!(text(&true), "true");
        assert_eq!(text(&'x'), "x");
        assert_eq!(text("hello, world"), "hello, world");
        assert_eq!(text(&String::from("[not a list]")), "[not a list]");
    }

    #[test]
    fn test_empty_string_renders_nothing() {
        assert_eq!(text(""), "");
    }

    #[test]
    fn test_std_display_types_are_streamable() {
        assert_eq!(text(&Ipv4Addr::LOCALHOST), "127.0.0.1");
        assert_eq!(text(&NonZeroU8::MIN), "1");
        assert_eq!(text(&format_args!("{}-{}", 1, 2)), "1-2");
    }

    #[test]
    fn test_streamed_wraps_display() {
        struct Celsius(f32);
        impl fmt::Display for Celsius {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}C", self.0)
            }
        }

        assert_eq!(text(&Streamed(Celsius(21.5))), "21.5C");
    }

    #[test]
    fn test_pointers_render_as_pointee() {
        let boxed: Box<str> = "boxed".into();
        assert_eq!(text(&boxed), "boxed");
        assert_eq!(text(&Rc::new(5)), "5");
        assert_eq!(text(&Arc::new('z')), "z");
        assert_eq!(text(&&&"deep"), "deep");

        let borrowed: Cow<'_, str> = Cow::Borrowed("cow");
        let owned: Cow<'_, str> = Cow::Owned("moo".to_string());
        assert_eq!(text(&borrowed), "cow");
        assert_eq!(text(&owned), "moo");
    }

    #[test]
    fn test_delimited_joins_without_trailing_separator() {
        let mut out = String::new();
        let mut seq = Delimited::open(&mut out, Category::Sequence).unwrap();
        seq.entry(&1).unwrap();
        seq.finish().unwrap();
        assert_eq!(out, "[1]");

        let mut out = String::new();
        let tuple = Delimited::open(&mut out, Category::Tuple).unwrap();
        tuple.finish().unwrap();
        assert_eq!(out, "()");
    }

    #[test]
    fn test_delimited_rejects_streamable() {
        let mut out = String::new();
        assert!(Delimited::open(&mut out, Category::Streamable).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut sink = BoundedSink {
            out: String::new(),
            capacity: 4,
        };
        let result = render_value(&mut sink, &vec![10, 20, 30]);
        assert!(result.is_err());
        assert_eq!(sink.out, "[10");
    }

    #[test]
    fn test_renders_into_dyn_sink() {
        let mut out = String::new();
        let sink: &mut dyn fmt::Write = &mut out;
        render_value(sink, &(1, 'a')).unwrap();
        assert_eq!(out, "(1, a)");
    }
}
