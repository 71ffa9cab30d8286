//! Implementation of the `#[derive(Render)]` macro.
//!
//! This module classifies user types into a rendering category from their
//! `#[render(...)]` annotations and generates the matching `Render` impl.

mod attrs;
mod derive;

pub use derive::render_derive_impl;
