//! Chromosome representation
//!
//! A chromosome encodes one candidate placement: entry `i` is the column
//! of the queen in row `i`. Random initialization only ever draws from a
//! row's open columns; crossover offspring may transiently hold blocked
//! columns until the repair pass runs (see the operators module).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ChromosomeError;
use crate::fitness;

/// One candidate placement of n queens, one per row
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome {
    cols: Vec<usize>,
}

impl Chromosome {
    /// Create a chromosome from an explicit column-per-row vector
    pub fn new(cols: Vec<usize>) -> Self {
        Self { cols }
    }

    /// Draw a random chromosome that avoids every blocked cell
    ///
    /// Each row's column is drawn uniformly from that row's open columns.
    /// Fails with [`ChromosomeError::InfeasibleRow`] if a row is fully
    /// blocked.
    pub fn random<R: Rng>(board: &Board, rng: &mut R) -> Result<Self, ChromosomeError> {
        let n = board.size();
        let mut cols = Vec::with_capacity(n);
        for row in 0..n {
            let open = board.open_columns(row);
            let col = open
                .choose(rng)
                .copied()
                .ok_or(ChromosomeError::InfeasibleRow { row })?;
            cols.push(col);
        }
        Ok(Self { cols })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Whether the chromosome has no rows
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Column of the queen in `row`
    pub fn get(&self, row: usize) -> Option<usize> {
        self.cols.get(row).copied()
    }

    /// The columns, one per row
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Mutable access to the columns (used by the genetic operators)
    pub fn cols_mut(&mut self) -> &mut [usize] {
        &mut self.cols
    }

    /// Number of attacking row pairs
    pub fn conflicts(&self) -> usize {
        fitness::conflicts(&self.cols)
    }

    /// Fitness: non-attacking row pairs, maximal at `n*(n-1)/2`
    pub fn fitness(&self) -> usize {
        fitness::fitness(&self.cols)
    }

    /// Whether this placement is conflict-free
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Whether no queen sits on a blocked cell of `board`
    pub fn respects(&self, board: &Board) -> bool {
        self.cols
            .iter()
            .enumerate()
            .all(|(row, &col)| !board.is_blocked(row, col))
    }

    /// Take the column vector out of this chromosome
    pub fn into_inner(self) -> Vec<usize> {
        self.cols
    }
}
