//! Board generation with blocked cells
//!
//! This module provides the board type and the randomized obstacle
//! generator that blocks a bounded fraction of cells.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Fraction of cells blocked when no explicit count is requested
pub const DEFAULT_BLOCKED_FRACTION: f64 = 0.07;

/// Ceiling on the blocked-cell fraction
pub const DEFAULT_MAX_DENSITY: f64 = 0.13;

/// Configuration for board generation
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Explicit blocked-cell count; defaults to `round(0.07 * n^2)` when `None`
    pub blocked_count: Option<usize>,
    /// Maximum fraction of cells that may be blocked
    pub max_density: f64,
}

impl BoardConfig {
    /// Create a config with an explicit blocked-cell count
    pub fn with_blocked_count(count: usize) -> Self {
        Self {
            blocked_count: Some(count),
            ..Self::default()
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            blocked_count: None,
            max_density: DEFAULT_MAX_DENSITY,
        }
    }
}

/// An n×n board with a set of blocked cells
///
/// Created once per run and immutable thereafter. Cells are addressed as
/// `(row, column)` pairs with both coordinates in `[0, n)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    blocked: HashSet<(usize, usize)>,
}

impl Board {
    /// Create a board with no blocked cells
    pub fn open(n: usize) -> Self {
        Self {
            size: n,
            blocked: HashSet::new(),
        }
    }

    /// Create a board from an explicit set of blocked cells
    ///
    /// Coordinates outside the board are ignored. Intended for tests and
    /// callers that bring their own obstacle layout.
    pub fn with_blocked<I>(n: usize, blocked: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            size: n,
            blocked: blocked
                .into_iter()
                .filter(|&(r, c)| r < n && c < n)
                .collect(),
        }
    }

    /// Generate a board with randomly blocked cells
    ///
    /// The target count defaults to `round(0.07 * n^2)`. An explicitly
    /// requested count above [`Board::max_blocked`] fails with
    /// [`BoardError::InvalidConfiguration`] before any cells are drawn.
    /// Cells are chosen by rejection sampling: uniform `(row, column)`
    /// draws, retried on duplicates, until the target count is reached.
    pub fn generate<R: Rng>(
        n: usize,
        config: &BoardConfig,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let max = Self::max_blocked(n, config.max_density);
        let count = match config.blocked_count {
            Some(requested) if requested > max => {
                return Err(BoardError::InvalidConfiguration {
                    n,
                    requested,
                    max,
                });
            }
            Some(requested) => requested,
            None => (DEFAULT_BLOCKED_FRACTION * (n * n) as f64).round() as usize,
        };

        let mut blocked = HashSet::with_capacity(count);
        while blocked.len() < count {
            let row = rng.gen_range(0..n);
            let col = rng.gen_range(0..n);
            blocked.insert((row, col));
        }

        Ok(Self { size: n, blocked })
    }

    /// Generate a board with the default density settings
    pub fn generate_default<R: Rng>(n: usize, rng: &mut R) -> Result<Self, BoardError> {
        Self::generate(n, &BoardConfig::default(), rng)
    }

    /// Maximum blocked-cell count for a board of size `n`:
    /// `floor(min(n^2 - n, max_density * n^2))`
    pub fn max_blocked(n: usize, max_density: f64) -> usize {
        let total = n * n;
        (total - n).min((max_density * total as f64).floor() as usize)
    }

    /// Board size `n`
    pub fn size(&self) -> usize {
        self.size
    }

    /// The set of blocked cells
    pub fn blocked(&self) -> &HashSet<(usize, usize)> {
        &self.blocked
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Check whether a cell is blocked
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.blocked.contains(&(row, col))
    }

    /// Open columns in a row, in ascending order
    pub fn open_columns(&self, row: usize) -> Vec<usize> {
        (0..self.size)
            .filter(|&col| !self.is_blocked(row, col))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let marker = if self.is_blocked(row, col) { 'X' } else { '.' };
                write!(f, "{marker}")?;
                if col + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_max_blocked() {
        // n=8: min(64 - 8, floor(0.13 * 64)) = min(56, 8) = 8
        assert_eq!(Board::max_blocked(8, DEFAULT_MAX_DENSITY), 8);
        // n=4: min(12, floor(2.08)) = 2
        assert_eq!(Board::max_blocked(4, DEFAULT_MAX_DENSITY), 2);
        // n=1: a single cell can never be blocked
        assert_eq!(Board::max_blocked(1, DEFAULT_MAX_DENSITY), 0);
    }

    #[test]
    fn test_generate_default_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::generate_default(10, &mut rng).unwrap();

        // round(0.07 * 100) = 7
        assert_eq!(board.blocked_count(), 7);
        assert_eq!(board.size(), 10);
    }

    #[test]
    fn test_generate_explicit_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = BoardConfig::with_blocked_count(5);
        let board = Board::generate(10, &config, &mut rng).unwrap();

        assert_eq!(board.blocked_count(), 5);
    }

    #[test]
    fn test_generate_rejects_excessive_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = BoardConfig::with_blocked_count(100);
        let err = Board::generate(10, &config, &mut rng).unwrap_err();

        assert_eq!(
            err,
            BoardError::InvalidConfiguration {
                n: 10,
                requested: 100,
                max: 13,
            }
        );
    }

    #[test]
    fn test_generate_at_exact_maximum() {
        let mut rng = StdRng::seed_from_u64(1);
        let max = Board::max_blocked(10, DEFAULT_MAX_DENSITY);
        let config = BoardConfig::with_blocked_count(max);
        let board = Board::generate(10, &config, &mut rng).unwrap();

        assert_eq!(board.blocked_count(), max);
    }

    #[test]
    fn test_generate_respects_ceiling_for_many_sizes() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 1..=25 {
            let board = Board::generate_default(n, &mut rng).unwrap();
            assert!(board.blocked_count() <= Board::max_blocked(n, DEFAULT_MAX_DENSITY));
            for &(row, col) in board.blocked() {
                assert!(row < n && col < n);
            }
        }
    }

    #[test]
    fn test_blocked_cells_are_unique_coordinates() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = BoardConfig::with_blocked_count(8);
        let board = Board::generate(8, &config, &mut rng).unwrap();

        // HashSet already guarantees uniqueness; check membership round-trips
        for &(row, col) in board.blocked() {
            assert!(board.is_blocked(row, col));
        }
    }

    #[test]
    fn test_open_columns() {
        let board = Board::with_blocked(4, vec![(0, 1), (0, 3), (2, 0)]);

        assert_eq!(board.open_columns(0), vec![0, 2]);
        assert_eq!(board.open_columns(1), vec![0, 1, 2, 3]);
        assert_eq!(board.open_columns(2), vec![1, 2, 3]);
    }

    #[test]
    fn test_with_blocked_ignores_out_of_range() {
        let board = Board::with_blocked(3, vec![(0, 0), (5, 5), (2, 9)]);
        assert_eq!(board.blocked_count(), 1);
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::with_blocked(2, vec![(0, 1)]);
        assert_eq!(board.to_string(), ". X\n. .\n");
    }

    #[test]
    fn test_generate_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);

        let b1 = Board::generate_default(12, &mut rng1).unwrap();
        let b2 = Board::generate_default(12, &mut rng2).unwrap();

        assert_eq!(b1, b2);
    }
}
