//! The Pairing category.
//!
//! Rust has no dedicated pair type: a 2-tuple is an ordinary tuple and is
//! classified as [`Category::Tuple`]. [`Pair`] is the named two-element
//! container, and map entries render through the same rule.

use std::fmt;

use crate::category::Category;
use crate::render::{Delimited, Render};

/// A two-element heterogeneous container with `first` and `second` access.
///
/// ```
/// use standout_stringify::{classify, to_text, Category, Pair};
///
/// let pair = Pair::new("answer", 42);
/// assert_eq!(to_text((&pair,)), "(answer, 42)");
/// assert_eq!(classify::<Pair<&str, i32>>(), Category::Pairing);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    /// Borrows both elements.
    pub fn borrowed(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A: Render, B: Render> Render for Pair<A, B> {
    const CATEGORY: Category = Category::Pairing;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_pair(sink, &self.first, &self.second)
    }
}

/// Writes `(first, second)`.
pub fn render_pair<W, A, B>(sink: &mut W, first: &A, second: &B) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    A: Render + ?Sized,
    B: Render + ?Sized,
{
    let mut pair = Delimited::open(sink, Category::Pairing)?;
    pair.entry(first)?;
    pair.entry(second)?;
    pair.finish()
}
