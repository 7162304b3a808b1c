//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::board::Board;
use crate::chromosome::Chromosome;
use crate::error::ChromosomeError;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Current generation number
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            generation: 0,
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a random population of chromosomes that respect the board
    ///
    /// Propagates [`ChromosomeError::InfeasibleRow`] from the first
    /// chromosome that hits a fully blocked row.
    pub fn random<R: Rng>(
        size: usize,
        board: &Board,
        rng: &mut R,
    ) -> Result<Self, ChromosomeError> {
        let individuals = (0..size)
            .map(|_| Chromosome::random(board, rng).map(Individual::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            individuals,
            generation: 0,
        })
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Evaluate all unevaluated individuals (sequential)
    pub fn evaluate(&mut self) {
        for individual in &mut self.individuals {
            individual.evaluate();
        }
    }

    /// Index of the best individual, ties broken by first occurrence
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (idx, individual) in self.individuals.iter().enumerate() {
            if let Some(fitness) = individual.fitness {
                if best.map_or(true, |(_, best_f)| fitness > best_f) {
                    best = Some((idx, fitness));
                }
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Get the best individual (by fitness)
    pub fn best(&self) -> Option<&Individual> {
        self.best_index().map(|idx| &self.individuals[idx])
    }

    /// Maximum fitness among evaluated individuals
    pub fn max_fitness(&self) -> Option<usize> {
        self.individuals.iter().filter_map(|i| i.fitness).max()
    }

    /// Mean fitness among evaluated individuals
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<usize> = self.individuals.iter().filter_map(|i| i.fitness).collect();
        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<usize>() as f64 / evaluated.len() as f64)
        }
    }

    /// Stable-sort the population by fitness (best first)
    ///
    /// Equal-fitness individuals keep their relative order; unevaluated
    /// individuals sort last.
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| b.fitness.cmp(&a.fitness));
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(|i| i.is_evaluated())
    }
}

/// Parallel evaluation support (requires the `parallel` feature)
#[cfg(feature = "parallel")]
impl Population {
    /// Evaluate all unevaluated individuals (parallel)
    ///
    /// Fitness evaluation is pure, so this never perturbs the caller's
    /// random stream or the run's determinism.
    pub fn evaluate_parallel(&mut self) {
        self.individuals
            .par_iter_mut()
            .for_each(|individual| individual.evaluate());
    }
}

/// Sequential fallback for parallel evaluation (when the `parallel` feature is disabled)
#[cfg(not(feature = "parallel"))]
impl Population {
    /// Evaluate all unevaluated individuals (sequential fallback)
    pub fn evaluate_parallel(&mut self) {
        self.evaluate();
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
