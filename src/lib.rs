//! # queens-evo
//!
//! A genetic-search library for the N-Queens placement problem on boards
//! where a random subset of cells is blocked and unusable.
//!
//! The search is a heuristic, not an exact solver: it may exhaust its
//! generation budget without finding a conflict-free placement, and that
//! outcome is reported through the returned fitness and history rather
//! than as an error.
//!
//! ## Core Concepts
//!
//! - **Obstacle-aware representation**: one column index per row, drawn
//!   only from that row's open columns
//! - **Elitism-preserving generational loop**: tournament selection,
//!   single-point crossover, a bounded greedy repair pass, and per-row
//!   reset mutation
//! - **Explicit randomness**: every randomized operation takes the
//!   caller's `Rng`, so a seeded stream reproduces the whole run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queens_evo::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), SearchError> {
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let board = Board::generate_default(8, &mut rng)?;
//! let result = GeneticSearch::builder()
//!     .population_size(200)
//!     .max_generations(2000)
//!     .build(board)?
//!     .run(&mut rng)?;
//!
//! println!("solved: {} in {} generations", result.solved(), result.generations);
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod chromosome;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::board::{Board, BoardConfig, DEFAULT_BLOCKED_FRACTION, DEFAULT_MAX_DENSITY};
    pub use crate::chromosome::Chromosome;
    pub use crate::diagnostics::{GenerationRecord, SearchResult, SearchStats};
    pub use crate::engine::{GeneticSearch, SearchBuilder, SearchConfig};
    pub use crate::error::{BoardError, ChromosomeError, SearchError};
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
