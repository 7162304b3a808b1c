//! Single-point crossover
//!
//! Recombines two parent placements by swapping their tails at a random
//! cut point.

use rand::Rng;

use crate::chromosome::Chromosome;

/// Single-point crossover operator
///
/// With probability `probability`, picks a cut point uniformly in
/// `[1, n-1]` and swaps the parents' tails; otherwise the offspring are
/// exact copies of the parents. Offspring are not checked against the
/// board: the contract permits transiently blocked placements, which the
/// repair pass is expected to clean up.
#[derive(Clone, Debug)]
pub struct SinglePointCrossover {
    /// Probability that crossover fires at all
    pub probability: f64,
}

impl SinglePointCrossover {
    /// Create a new single-point crossover with the given probability
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self { probability }
    }

    /// Produce two offspring from two parents
    ///
    /// Placements of length below 2 have no valid cut point and are always
    /// returned as copies.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let n = parent1.len();
        debug_assert_eq!(n, parent2.len(), "Parents must have equal length");

        if n < 2 || rng.gen::<f64>() >= self.probability {
            return (parent1.clone(), parent2.clone());
        }

        let cut = rng.gen_range(1..n);
        let mut child1 = parent1.cols().to_vec();
        let mut child2 = parent2.cols().to_vec();
        child1[cut..].copy_from_slice(&parent2.cols()[cut..]);
        child2[cut..].copy_from_slice(&parent1.cols()[cut..]);

        (Chromosome::new(child1), Chromosome::new(child2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_probability_copies_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Chromosome::new(vec![0, 1, 2, 3]);
        let p2 = Chromosome::new(vec![3, 2, 1, 0]);
        let crossover = SinglePointCrossover::new(0.0);

        for _ in 0..20 {
            let (c1, c2) = crossover.crossover(&p1, &p2, &mut rng);
            assert_eq!(c1, p1);
            assert_eq!(c2, p2);
        }
    }

    #[test]
    fn test_certain_probability_swaps_tails() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Chromosome::new(vec![0, 0, 0, 0]);
        let p2 = Chromosome::new(vec![1, 1, 1, 1]);
        let crossover = SinglePointCrossover::new(1.0);

        let (c1, c2) = crossover.crossover(&p1, &p2, &mut rng);

        // Each child starts as one parent and switches to the other exactly once
        let switches = |cols: &[usize]| {
            cols.windows(2).filter(|w| w[0] != w[1]).count()
        };
        assert_eq!(switches(c1.cols()), 1);
        assert_eq!(switches(c2.cols()), 1);

        // Head of child1 comes from parent1, tail from parent2
        assert_eq!(c1.get(0), Some(0));
        assert_eq!(c1.get(3), Some(1));
        assert_eq!(c2.get(0), Some(1));
        assert_eq!(c2.get(3), Some(0));
    }

    #[test]
    fn test_genes_come_from_parents_rowwise() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1 = Chromosome::new(vec![0, 1, 2, 3, 4, 5]);
        let p2 = Chromosome::new(vec![5, 4, 3, 2, 1, 0]);
        let crossover = SinglePointCrossover::new(0.8);

        for _ in 0..50 {
            let (c1, c2) = crossover.crossover(&p1, &p2, &mut rng);
            for row in 0..p1.len() {
                let from_parents = [p1.get(row), p2.get(row)];
                assert!(from_parents.contains(&c1.get(row)));
                assert!(from_parents.contains(&c2.get(row)));
            }
        }
    }

    #[test]
    fn test_single_row_always_copies() {
        let mut rng = StdRng::seed_from_u64(0);
        let p1 = Chromosome::new(vec![0]);
        let p2 = Chromosome::new(vec![0]);
        let crossover = SinglePointCrossover::new(1.0);

        let (c1, c2) = crossover.crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    #[should_panic(expected = "Probability must be in [0, 1]")]
    fn test_probability_out_of_range_panics() {
        SinglePointCrossover::new(1.5);
    }
}
