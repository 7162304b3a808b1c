//! Bounded local-search repair
//!
//! A small greedy pass that nudges a freshly recombined chromosome toward
//! fewer conflicts without ever placing a queen on a blocked cell.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::chromosome::Chromosome;
use crate::fitness;

/// Bounded repair heuristic
///
/// Each iteration picks one conflicting row uniformly at random and moves
/// its queen to the open column with the strictly highest whole-chromosome
/// fitness (first-seen wins on ties, columns scanned in ascending order).
/// Stops early once the chromosome is conflict-free.
#[derive(Clone, Debug)]
pub struct MiniRepair {
    /// Iteration budget per call
    pub max_iters: usize,
}

impl MiniRepair {
    /// Create a new repair pass with the given iteration budget
    pub fn new(max_iters: usize) -> Self {
        Self { max_iters }
    }

    /// Repair a chromosome in place
    ///
    /// Cost is O(`max_iters` * n^2): every candidate column recomputes the
    /// full fitness. Acceptable at the board sizes this crate targets.
    pub fn repair<R: Rng>(&self, chromosome: &mut Chromosome, board: &Board, rng: &mut R) {
        for _ in 0..self.max_iters {
            let conflicted = fitness::conflicted_rows(chromosome.cols());
            let Some(&row) = conflicted.choose(rng) else {
                break;
            };

            let mut scratch = chromosome.cols().to_vec();
            let mut best: Option<(usize, usize)> = None;
            for col in board.open_columns(row) {
                scratch[row] = col;
                let f = fitness::fitness(&scratch);
                if best.map_or(true, |(best_f, _)| f > best_f) {
                    best = Some((f, col));
                }
            }

            // A fully blocked row offers no candidate; leave it as is
            if let Some((_, col)) = best {
                chromosome.cols_mut()[row] = col;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_repair_never_decreases_fitness() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::generate_default(10, &mut rng).unwrap();
        let repair = MiniRepair::new(5);

        for _ in 0..30 {
            let mut chromosome = Chromosome::random(&board, &mut rng).unwrap();
            let before = chromosome.fitness();
            repair.repair(&mut chromosome, &board, &mut rng);
            assert!(chromosome.fitness() >= before);
        }
    }

    #[test]
    fn test_repair_respects_blocked_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::generate_default(8, &mut rng).unwrap();
        let repair = MiniRepair::new(5);

        for _ in 0..30 {
            let mut chromosome = Chromosome::random(&board, &mut rng).unwrap();
            repair.repair(&mut chromosome, &board, &mut rng);
            assert!(chromosome.respects(&board));
        }
    }

    #[test]
    fn test_repair_leaves_solution_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = Board::open(4);
        let repair = MiniRepair::new(5);

        let solved = Chromosome::new(vec![1, 3, 0, 2]);
        let mut chromosome = solved.clone();
        repair.repair(&mut chromosome, &board, &mut rng);

        assert_eq!(chromosome, solved);
    }

    #[test]
    fn test_repair_improves_worst_placement() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::open(4);
        let repair = MiniRepair::new(5);

        // All queens in one column: moving any row strictly improves
        let mut chromosome = Chromosome::new(vec![0, 0, 0, 0]);
        repair.repair(&mut chromosome, &board, &mut rng);

        assert!(chromosome.fitness() > 0);
    }

    #[test]
    fn test_repair_keeps_single_open_column() {
        let mut rng = StdRng::seed_from_u64(3);
        // Row 0 has only column 2 open
        let board = Board::with_blocked(3, vec![(0, 0), (0, 1)]);
        let repair = MiniRepair::new(10);

        let mut chromosome = Chromosome::new(vec![2, 2, 2]);
        repair.repair(&mut chromosome, &board, &mut rng);

        assert_eq!(chromosome.get(0), Some(2));
        assert!(chromosome.respects(&board));
    }

    #[test]
    fn test_zero_budget_is_identity() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = Board::open(5);
        let repair = MiniRepair::new(0);

        let original = Chromosome::new(vec![0, 0, 0, 0, 0]);
        let mut chromosome = original.clone();
        repair.repair(&mut chromosome, &board, &mut rng);

        assert_eq!(chromosome, original);
    }
}
