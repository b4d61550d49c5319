//! Glyph positions for drawing a grid as an image

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// One character and the top-left pixel where it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub ch: char,
    pub x: u32,
    pub y: u32,
}

/// Pixel dimensions (width, height) of the rendered grid
pub fn image_size(grid: &Grid, cell_size: u32) -> (u32, u32) {
    let side = grid.size as u32 * cell_size;
    (side, side)
}

/// Row-major glyph placements: `x = col * cell + padding`, `y = row * cell + padding`
pub fn glyph_layout(grid: &Grid, cell_size: u32, padding: u32) -> Vec<GlyphPlacement> {
    grid.rows()
        .enumerate()
        .flat_map(|(row, chars)| {
            chars.iter().enumerate().map(move |(col, &ch)| GlyphPlacement {
                ch,
                x: col as u32 * cell_size + padding,
                y: row as u32 * cell_size + padding,
            })
        })
        .collect()
}
