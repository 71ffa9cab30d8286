//! The Sequence category.
//!
//! Collections render their elements in iteration order between brackets.
//! Maps are sequences of pairings, so `{"a": 1}` renders as `[(a, 1)]`.
//! Unordered collections (`HashSet`, `HashMap`, `BinaryHeap`) render in
//! whatever order they iterate.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::ops::{Range, RangeInclusive};

use crate::category::Category;
use crate::pair::Pair;
use crate::render::{Delimited, Render};

/// Writes `[a, b, ...]` for every item of `items`.
pub fn render_sequence<W, I>(sink: &mut W, items: I) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    I: IntoIterator,
    I::Item: Render,
{
    let mut seq = Delimited::open(sink, Category::Sequence)?;
    seq.entries(items)?;
    seq.finish()
}

fn render_entries<'a, W, K, V, I>(sink: &mut W, entries: I) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    render_sequence(sink, entries.into_iter().map(|(k, v)| Pair::new(k, v)))
}

/// Renders any re-iterable iterator as a Sequence.
///
/// Rendering iterates a clone, so the wrapped value is left untouched and can
/// be rendered again. An infinite iterator never finishes rendering.
///
/// ```
/// use standout_stringify::{to_text, Seq};
///
/// let evens = Seq((1..=4).map(|n| n * 2));
/// assert_eq!(to_text((&evens,)), "[2, 4, 6, 8]");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Seq<I>(pub I);

impl<I> Render for Seq<I>
where
    I: Clone + IntoIterator,
    I::Item: Render,
{
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.0.clone())
    }
}

macro_rules! sequence {
    ($($coll:ident),* $(,)?) => {
        $(
            impl<T: Render> Render for $coll<T> {
                const CATEGORY: Category = Category::Sequence;

                fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
                    render_sequence(sink, self.iter())
                }
            }
        )*
    };
}

sequence!(Vec, VecDeque, LinkedList, BTreeSet, BinaryHeap);

impl<T: Render> Render for [T] {
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.iter())
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.iter())
    }
}

impl<T: Render, S> Render for HashSet<T, S> {
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.iter())
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_entries(sink, self.iter())
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_entries(sink, self.iter())
    }
}

// `Some(x)` is a one-element sequence, `None` an empty one.
impl<T: Render> Render for Option<T> {
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.iter())
    }
}

impl<T> Render for Range<T>
where
    Range<T>: Iterator + Clone,
    <Range<T> as Iterator>::Item: Render,
{
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.clone())
    }
}

impl<T> Render for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator + Clone,
    <RangeInclusive<T> as Iterator>::Item: Render,
{
    const CATEGORY: Category = Category::Sequence;

    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        render_sequence(sink, self.clone())
    }
}
