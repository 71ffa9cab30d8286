//! Proc macros for Standout Stringify.
//!
//! # Available Macros
//!
//! - [`Render`] - Classify a struct or enum into a rendering category and
//!   generate its `Render` impl
//!
//! Most users enable the `derive` feature of `standout-stringify` instead of
//! depending on this crate directly.
//!
//! # Examples
//!
//! For more examples, see `standout-stringify/tests/render_derive.rs`.

mod render;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Render` trait from `standout-stringify`.
///
/// # Container Attributes
///
/// | Attribute | Category | Output |
/// |-----------|----------|--------|
/// | `#[render(display)]` | Streamable | the type's `Display` output |
/// | `#[render(pair)]` | Pairing | `(first, second)` from exactly two fields |
/// | `#[render(tuple)]` (default) | Tuple | `(a, b, ...)` from all fields in order |
/// | `#[render(seq)]` | Sequence | `[a, b, ...]` from `&Self: IntoIterator` |
///
/// When several shapes are listed, the first one in this table wins, the
/// same priority used for built-in types. Aliases: `streamable`, `pairing`,
/// `sequence`.
///
/// # Field Attributes
///
/// - `#[render(skip)]` - leave the field out
///
/// # Example
///
/// ```
/// use std::fmt;
/// use standout_stringify::render;
/// use standout_stringify_macros::Render;
///
/// #[derive(Render)]
/// struct Move {
///     from: (u8, u8),
///     to: (u8, u8),
///     #[render(skip)]
///     cached_score: i32,
/// }
///
/// #[derive(Render)]
/// #[render(display)]
/// enum Piece {
///     King,
///     Pawn,
/// }
///
/// impl fmt::Display for Piece {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             Piece::King => "K",
///             Piece::Pawn => "P",
///         })
///     }
/// }
///
/// let m = Move { from: (4, 1), to: (4, 3), cached_score: 0 };
/// assert_eq!(render!(m), "((4, 1), (4, 3))");
/// assert_eq!(render!(vec![Piece::King, Piece::Pawn]), "[K, P]");
/// ```
///
/// # Compile-Time Errors
///
/// - Enums and unions without `#[render(display)]`
/// - `#[render(pair)]` with a rendered field count other than two
/// - Unknown shapes, `skip` on the type, or shapes on fields
/// - Field types that do not implement `Render`
#[proc_macro_derive(Render, attributes(render))]
pub fn render_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    render::render_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
