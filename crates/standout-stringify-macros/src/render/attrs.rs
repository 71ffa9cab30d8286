//! Attribute parsing for the Render derive macro.
//!
//! This module provides parsers for the `#[render(...)]` attributes used by
//! the `Render` derive macro, on containers and on fields.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Meta, Result, Token,
};

/// The shape a derived type is rendered as.
///
/// Variants are declared in classification priority order, so the derived
/// `Ord` picks the winner when several shapes are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shape {
    /// Streamable through the type's `Display` impl: `#[render(display)]`
    Display,
    /// Two fields as first and second: `#[render(pair)]`
    Pair,
    /// All fields in declaration order: `#[render(tuple)]`
    Tuple,
    /// Elements of `&Self: IntoIterator`: `#[render(seq)]`
    Seq,
}

impl Shape {
    /// Parse a shape from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "display" | "streamable" => Ok(Shape::Display),
            "pair" | "pairing" => Ok(Shape::Pair),
            "tuple" => Ok(Shape::Tuple),
            "seq" | "sequence" => Ok(Shape::Seq),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown render shape: '{}'. Expected one of: display, pair, tuple, seq",
                    other
                ),
            )),
        }
    }
}

/// Attributes from `#[render(...)]`.
#[derive(Debug, Clone)]
pub struct RenderAttr {
    /// Requested shapes, in the order written.
    pub shapes: Vec<Shape>,
    /// Leave this field out of the rendering.
    pub skip: bool,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for RenderAttr {
    fn default() -> Self {
        RenderAttr {
            shapes: Vec::new(),
            skip: false,
            span: Span::call_site(),
        }
    }
}

impl RenderAttr {
    /// The highest-priority shape requested, if any.
    pub fn shape(&self) -> Option<Shape> {
        self.shapes.iter().min().copied()
    }

    fn merge(&mut self, other: RenderAttr) {
        if self.shapes.is_empty() && !self.skip {
            self.span = other.span;
        }
        self.shapes.extend(other.shapes);
        self.skip |= other.skip;
    }
}

impl Parse for RenderAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = RenderAttr {
            span: input.span(),
            ..RenderAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.shapes.push(Shape::from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected render shape: display, pair, tuple, seq, or skip",
                        ));
                    }
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown render attribute. Expected: display, pair, tuple, seq, or skip",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Collect every `#[render(...)]` attribute into one.
pub fn parse_render_attrs(attrs: &[Attribute]) -> Result<RenderAttr> {
    let mut merged = RenderAttr::default();
    for attr in attrs {
        if attr.path().is_ident("render") {
            merged.merge(attr.parse_args::<RenderAttr>()?);
        }
    }
    Ok(merged)
}
