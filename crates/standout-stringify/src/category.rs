//! Capability classification.
//!
//! Every renderable type belongs to exactly one [`Category`]. The category is
//! fixed per type through [`Render::CATEGORY`](crate::Render::CATEGORY), so
//! classification happens at compile time and costs nothing at runtime.
//!
//! When a shape satisfies more than one capability, the first one in this
//! order wins:
//!
//! 1. [`Category::Streamable`] - the value has its own direct text form
//! 2. [`Category::Pairing`] - a two-element container with `first`/`second`
//! 3. [`Category::Tuple`] - a fixed-size heterogeneous container
//! 4. [`Category::Sequence`] - anything iterable
//!
//! A `String` iterates over characters, yet it is Streamable and renders as
//! its literal text. Shapes that match none of the four are
//! [`Category::Unrenderable`] and are rejected at build time:
//!
//! ```compile_fail
//! use standout_stringify::to_text;
//!
//! struct Opaque;
//!
//! // `Opaque` has no `Render` impl, so this does not build.
//! let _ = to_text((&Opaque,));
//! ```

use std::fmt;

use crate::Render;

/// The rendering strategy assigned to a value's shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Written directly through the value's own text conversion.
    Streamable,
    /// `(first, second)`.
    Pairing,
    /// `(a, b, ...)`, or `()` when empty.
    Tuple,
    /// `[a, b, ...]`, or `[]` when empty.
    Sequence,
    /// Matches none of the other shapes.
    Unrenderable,
}

impl Category {
    /// All categories in classification priority order.
    pub const PRIORITY: [Category; 5] = [
        Category::Streamable,
        Category::Pairing,
        Category::Tuple,
        Category::Sequence,
        Category::Unrenderable,
    ];

    /// Lowercase name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Streamable => "streamable",
            Category::Pairing => "pairing",
            Category::Tuple => "tuple",
            Category::Sequence => "sequence",
            Category::Unrenderable => "unrenderable",
        }
    }

    /// Returns `false` only for [`Category::Unrenderable`].
    pub const fn is_renderable(self) -> bool {
        !matches!(self, Category::Unrenderable)
    }

    /// Opening and closing delimiters for container categories.
    pub const fn delimiters(self) -> Option<(char, char)> {
        match self {
            Category::Pairing | Category::Tuple => Some(('(', ')')),
            Category::Sequence => Some(('[', ']')),
            Category::Streamable | Category::Unrenderable => None,
        }
    }

    /// Position of this category in [`Category::PRIORITY`]; lower wins.
    pub const fn priority(self) -> usize {
        match self {
            Category::Streamable => 0,
            Category::Pairing => 1,
            Category::Tuple => 2,
            Category::Sequence => 3,
            Category::Unrenderable => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the category of `T`, resolved at compile time.
///
/// ```
/// use standout_stringify::{classify, Category};
///
/// assert_eq!(classify::<String>(), Category::Streamable);
/// assert_eq!(classify::<(i32, char, bool)>(), Category::Tuple);
/// assert_eq!(classify::<Vec<(u8, u8)>>(), Category::Sequence);
/// ```
pub const fn classify<T: Render + ?Sized>() -> Category {
    T::CATEGORY
}

/// Returns the category of the type of `value`.
pub const fn category_of<T: Render + ?Sized>(_value: &T) -> Category {
    T::CATEGORY
}
