//! Draw-list preparation
//!
//! Turns generator output into data an external rasterizer can consume
//! directly. No fonts, pixels or GPU state live here.

pub mod glyphs;
pub mod vertex;

pub use glyphs::{GlyphPlacement, glyph_layout, image_size};
pub use vertex::{LineVertex, as_bytes, colors, layer_vertices};
