//! Glyph outline decomposition and simple text layout.
//!
//! Strek sits between a FreeType style font engine and code that wants
//! vector paths or positioned glyphs. It provides:
//!
//! * [`Outline`] decomposition into move, line, quadratic and cubic
//!   segments with optional degree elevation, following the rules of
//!   `FT_Outline_Decompose`
//! * serialization of outlines to [path strings](PathFormat) and to
//!   [vertex and opcode arrays](PointsAndCodes)
//! * single line [`Layout`] with pair kerning, ink and layout extents
//!
//! The font engine itself is abstracted by the [`Face`] trait.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Expose the underlying value types.
pub extern crate outline_types as types;

pub mod buffer;
pub mod face;
pub mod layout;
pub mod outline;

mod error;

#[cfg(test)]
mod testing;

pub use error::{Error, OutlineError, Result};
pub use face::{Encoding, Face, GlyphMetrics, KerningMode, LoadFlags};
pub use layout::Layout;
pub use outline::{
    DecomposeSettings, DecompositionEvent, Orientation, Outline, OutlineSink, PathFormat,
    PointCode, PointsAndCodes,
};
