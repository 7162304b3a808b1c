//! Column-reset mutation
//!
//! Per-row mutation that re-draws a queen's column from the row's open
//! columns.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::chromosome::Chromosome;

/// Per-row reset mutation restricted to open columns
///
/// For each row independently, with probability `probability`, replaces
/// the row's column with a uniform draw from that row's open columns.
/// Never introduces a blocked placement; a fully blocked row is left
/// untouched (initialization already rejects such boards).
#[derive(Clone, Debug)]
pub struct ColumnResetMutation {
    /// Per-row mutation probability
    pub probability: f64,
}

impl ColumnResetMutation {
    /// Create a new column-reset mutation with the given per-row probability
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self { probability }
    }

    /// Mutate a chromosome in place
    pub fn mutate<R: Rng>(&self, chromosome: &mut Chromosome, board: &Board, rng: &mut R) {
        for row in 0..chromosome.len() {
            if rng.gen::<f64>() < self.probability {
                let open = board.open_columns(row);
                if let Some(&col) = open.choose(rng) {
                    chromosome.cols_mut()[row] = col;
                }
            }
        }
    }
}
