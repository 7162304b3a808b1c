//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a chromosome with
//! its cached fitness.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;

/// An individual in the population
///
/// Wraps a chromosome with its computed fitness value and the generation
/// it was created in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Individual {
    /// The chromosome of this individual
    pub chromosome: Chromosome,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<usize>,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create a new individual with an unevaluated chromosome
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: None,
            birth_generation: 0,
        }
    }

    /// Create a new individual with a known fitness
    pub fn with_fitness(chromosome: Chromosome, fitness: usize) -> Self {
        Self {
            chromosome,
            fitness: Some(fitness),
            birth_generation: 0,
        }
    }

    /// Create a new individual with a birth generation
    pub fn with_generation(chromosome: Chromosome, generation: usize) -> Self {
        Self {
            chromosome,
            fitness: None,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Get the fitness value, panicking if not evaluated
    pub fn fitness_value(&self) -> usize {
        self.fitness.expect("Individual has not been evaluated")
    }

    /// Compute and cache the fitness if it is not cached yet
    pub fn evaluate(&mut self) {
        if self.fitness.is_none() {
            self.fitness = Some(self.chromosome.fitness());
        }
    }

    /// Take the chromosome out of this individual
    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }

    /// Get a reference to the chromosome
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Check if this individual is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1 > f2,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome && self.fitness == other.fitness
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1.partial_cmp(&f2),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}
