//! Random board generation

use crate::cell::Cell;
use crate::grid::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Number of letters a random cell is drawn from
const ALPHABET_LEN: u8 = 26;

/// Fills boards with uniformly chosen letters
pub struct Randomizer {
    rng: StdRng,
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer {
    /// Create a randomizer seeded from the OS (or the browser's crypto API)
    pub fn new() -> Self {
        Self::with_seed(entropy_seed(getrandom::getrandom))
    }

    /// Create a randomizer with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a letter uniformly from A-Z.
    ///
    /// The index comes from an integer range, so it can never land past 'Z'.
    pub fn random_letter(&mut self) -> Cell {
        let index = self.rng.gen_range(0..ALPHABET_LEN);
        Cell::from_alphabet_index(index).unwrap_or(Cell::EMPTY)
    }

    /// Overwrite every cell of `grid` with an independent random letter
    pub fn randomize_board(&mut self, grid: &mut Grid) {
        grid.fill_all(|| self.random_letter());
        debug!(board = %grid.to_string_compact(), "randomized board");
    }
}

/// Seeds handed out when no entropy source is available
static FALLBACK_SEEDS: AtomicU64 = AtomicU64::new(0x9E37_79B9_7F4A_7C15);

/// Read a seed from `source`, falling back to a distinct per-call seed
fn entropy_seed(source: impl FnOnce(&mut [u8]) -> Result<(), getrandom::Error>) -> u64 {
    let mut bytes = [0u8; 8];
    match source(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(e) => {
            let seed = FALLBACK_SEEDS.fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed);
            warn!(error = %e, seed, "no entropy source, boards will repeat between runs");
            seed
        }
    }
}
