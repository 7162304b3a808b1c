//! Tournament selection
//!
//! Parent selection by sampling a small subset of the population and
//! keeping the fittest member.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::population::Population;

/// Tournament selection operator
///
/// Samples `tournament_size` distinct individuals uniformly without
/// replacement and returns the index of the fittest among them. Ties are
/// broken in favor of the first-found maximum.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Number of individuals competing in each tournament
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Select one parent from an evaluated population
    ///
    /// Returns the index of the selected individual. The tournament size is
    /// clamped to the population size.
    pub fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let tournament_size = self.tournament_size.min(population.len());
        let indices: Vec<usize> = (0..population.len()).collect();

        let mut winner: Option<(usize, usize)> = None;
        for &idx in indices.choose_multiple(rng, tournament_size) {
            let fitness = population[idx].fitness_value();
            if winner.map_or(true, |(_, best)| fitness > best) {
                winner = Some((idx, fitness));
            }
        }

        // tournament_size >= 1, so at least one competitor was seen
        winner.map(|(idx, _)| idx).unwrap_or(0)
    }
}
