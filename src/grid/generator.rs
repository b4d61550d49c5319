//! Seeded grid generation
//!
//! Two phases, both driven only by the seed:
//! 1. Placement: one `Pcg32` stream seeded from the seed picks the target word
//!    count, then proposes (direction, row, col) until the target is met or
//!    the attempt budget runs out.
//! 2. Fill: every uncovered cell re-seeds its own `Pcg32` from
//!    `seed + row * size + col`, so its character does not depend on
//!    iteration order.

use std::fmt;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::placement::{DIRECTIONS, WordPlacement};
use crate::settings::GridSettings;

/// Character used for fallback cells when the charset is empty
pub const BLANK_CELL: char = ' ';

/// A fully populated square character grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Side length
    pub size: usize,
    /// Row-major cells, `size * size` long
    pub cells: Vec<char>,
    /// Committed word placements, in commit order
    pub placements: Vec<WordPlacement>,
    /// Word count the placement phase aimed for
    pub target_words: u32,
}

impl Grid {
    /// Character at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Number of words actually placed (may be below `target_words`)
    pub fn placed_words(&self) -> usize {
        self.placements.len()
    }

    /// Whether the placement phase reached its target
    pub fn is_complete(&self) -> bool {
        self.placed_words() >= self.target_words as usize
    }

    /// Read back the letters of a placement from the grid
    pub fn read(&self, placement: &WordPlacement) -> Option<String> {
        placement
            .cells()
            .map(|((r, c), _)| self.get(r, c))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, ch) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Character for an uncovered cell: a pure function of (seed, row, col, size)
pub fn fallback_char(seed: u64, row: usize, col: usize, size: usize, charset: &[char]) -> char {
    let cell_seed = seed.wrapping_add((row * size + col) as u64);
    let mut rng = Pcg32::seed_from_u64(cell_seed);
    charset.choose(&mut rng).copied().unwrap_or(BLANK_CELL)
}

/// Generate a grid with `secret_word` hidden along straight lines.
///
/// Out-of-bounds and overlapping proposals both consume an attempt. When the
/// budget runs out the grid is returned with fewer words than targeted; check
/// [`Grid::placed_words`] if a guaranteed count matters.
#[allow(clippy::too_many_arguments)]
pub fn generate(
    seed: u64,
    size: usize,
    secret_word: &str,
    charset: &[char],
    min_words: u32,
    max_words: u32,
    max_attempts: u32,
) -> Grid {
    let (lo, hi) = if min_words <= max_words {
        (min_words, max_words)
    } else {
        (max_words, min_words)
    };

    let mut rng = Pcg32::seed_from_u64(seed);
    let target_words = rng.random_range(lo..=hi);

    // Occupied cells: the committed letter, if any
    let mut occupied: Vec<Option<char>> = vec![None; size * size];
    let mut placements = Vec::new();
    let mut attempts = 0;

    if size > 0 && !secret_word.is_empty() {
        while placements.len() < target_words as usize && attempts < max_attempts {
            attempts += 1;

            let direction = *DIRECTIONS.choose(&mut rng).unwrap_or(&DIRECTIONS[0]);
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            let candidate = WordPlacement::new(row, col, direction, secret_word);

            if !candidate.fits(size) {
                log::debug!("attempt {}: {:?} out of bounds", attempts, candidate);
                continue;
            }

            let overlap = candidate
                .cells()
                .any(|((r, c), _)| occupied[r * size + c].is_some());
            if overlap {
                log::debug!("attempt {}: {:?} overlaps", attempts, candidate);
                continue;
            }

            for ((r, c), ch) in candidate.cells() {
                occupied[r * size + c] = Some(ch);
            }
            placements.push(candidate);
        }
    }

    if placements.len() < target_words as usize {
        log::warn!(
            "Seed {}: placed {} of {} words after {} attempts",
            seed,
            placements.len(),
            target_words,
            attempts
        );
    }

    let cells = occupied
        .iter()
        .enumerate()
        .map(|(idx, slot)| match slot {
            Some(ch) => *ch,
            None => fallback_char(seed, idx / size, idx % size, size, charset),
        })
        .collect();

    log::info!(
        "Grid seed={} size={}: {} words placed (target {})",
        seed,
        size,
        placements.len(),
        target_words
    );

    Grid {
        size,
        cells,
        placements,
        target_words,
    }
}

/// Grid generator bound to a fixed configuration; only the seed varies
#[derive(Debug, Clone)]
pub struct GridGenerator {
    pub size: usize,
    pub secret_word: String,
    pub charset: Vec<char>,
    pub min_words: u32,
    pub max_words: u32,
    pub max_attempts: u32,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::from_settings(&GridSettings::default())
    }
}

impl GridGenerator {
    pub fn from_settings(settings: &GridSettings) -> Self {
        Self {
            size: settings.size,
            secret_word: settings.secret_word.clone(),
            charset: settings.charset.chars().collect(),
            min_words: settings.min_words,
            max_words: settings.max_words,
            max_attempts: settings.max_attempts,
        }
    }

    pub fn generate(&self, seed: u64) -> Grid {
        generate(
            seed,
            self.size,
            &self.secret_word,
            &self.charset,
            self.min_words,
            self.max_words,
            self.max_attempts,
        )
    }
}
