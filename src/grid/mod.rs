//! Seeded hidden-word grid
//!
//! This module must stay pure and deterministic:
//! - Seeded `Pcg32` streams only, never thread/global RNG
//! - Bounded loops (attempt budget, then one pass over the cells)
//! - No rendering or I/O

pub mod generator;
pub mod placement;

pub use generator::{BLANK_CELL, Grid, GridGenerator, fallback_char, generate};
pub use placement::{DIRECTIONS, Direction, WordPlacement};
