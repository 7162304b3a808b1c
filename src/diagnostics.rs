//! Run statistics and results
//!
//! This module provides the per-generation history records and the result
//! type returned by the search engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;
use crate::population::Population;

/// Statistics for a single completed generation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation number (1-based)
    pub generation: usize,
    /// Best fitness in this generation
    pub best_fitness: usize,
    /// Mean fitness in this generation
    pub mean_fitness: f64,
}

impl GenerationRecord {
    /// Compute a record from an evaluated population
    ///
    /// Returns `None` for a population with no evaluated individuals.
    pub fn from_population(population: &Population, generation: usize) -> Option<Self> {
        Some(Self {
            generation,
            best_fitness: population.max_fitness()?,
            mean_fitness: population.mean_fitness()?,
        })
    }
}

/// Statistics collector for an entire search run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// One record per completed generation, in order
    pub history: Vec<GenerationRecord>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason the run stopped
    pub termination_reason: Option<String>,
}

impl SearchStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, record: GenerationRecord) {
        self.history.push(record);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.history.len()
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<usize> {
        self.history.iter().map(|r| r.best_fitness).max()
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<usize> {
        self.history.iter().map(|r| r.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.mean_fitness).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the search run
    pub fn summary(&self) -> String {
        format!(
            "Search Summary:\n\
             - Generations: {}\n\
             - Best fitness: {}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            self.best_fitness()
                .map_or_else(|| "n/a".to_string(), |f| f.to_string()),
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

/// Result of a search run
///
/// `best` is `None` only for the degenerate zero-size population; any
/// non-empty run always carries the highest-fitness chromosome seen,
/// whether or not it reaches a full solution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// The best chromosome found across all generations
    pub best: Option<Chromosome>,
    /// The fitness of the best chromosome
    pub best_fitness: Option<usize>,
    /// Number of generations completed
    pub generations: usize,
    /// Statistics for the run
    pub stats: SearchStats,
}

impl SearchResult {
    /// The per-generation history records
    pub fn history(&self) -> &[GenerationRecord] {
        &self.stats.history
    }

    /// Whether the best chromosome is a conflict-free placement
    pub fn solved(&self) -> bool {
        self.best.as_ref().map_or(false, Chromosome::is_solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::Individual;

    fn create_test_population() -> Population {
        vec![
            Individual::with_fitness(Chromosome::new(vec![0, 0, 0, 0]), 0),
            Individual::with_fitness(Chromosome::new(vec![0, 2, 0, 2]), 3),
            Individual::with_fitness(Chromosome::new(vec![1, 3, 0, 2]), 6),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_generation_record_from_population() {
        let population = create_test_population();
        let record = GenerationRecord::from_population(&population, 3).unwrap();

        assert_eq!(record.generation, 3);
        assert_eq!(record.best_fitness, 6);
        assert!((record.mean_fitness - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_generation_record_empty_population() {
        let population = Population::new();
        assert_eq!(GenerationRecord::from_population(&population, 1), None);
    }

    #[test]
    fn test_search_stats_record_and_history() {
        let mut stats = SearchStats::new();
        for generation in 1..=4 {
            stats.record(GenerationRecord {
                generation,
                best_fitness: generation + 2,
                mean_fitness: generation as f64,
            });
        }

        assert_eq!(stats.num_generations(), 4);
        assert_eq!(stats.best_fitness(), Some(6));
        assert_eq!(stats.best_fitness_history(), vec![3, 4, 5, 6]);
        assert_eq!(stats.mean_fitness_history(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_search_stats_summary() {
        let mut stats = SearchStats::new();
        stats.record(GenerationRecord {
            generation: 1,
            best_fitness: 28,
            mean_fitness: 20.5,
        });
        stats.set_termination_reason("solution found");
        stats.set_runtime(Duration::from_millis(1234));

        let summary = stats.summary();
        assert!(summary.contains("Generations: 1"));
        assert!(summary.contains("Best fitness: 28"));
        assert!(summary.contains("solution found"));
    }

    #[test]
    fn test_search_result_solved() {
        let solved = SearchResult {
            best: Some(Chromosome::new(vec![1, 3, 0, 2])),
            best_fitness: Some(6),
            generations: 10,
            stats: SearchStats::new(),
        };
        let unsolved = SearchResult {
            best: Some(Chromosome::new(vec![0, 0, 0, 0])),
            best_fitness: Some(0),
            generations: 10,
            stats: SearchStats::new(),
        };
        let degenerate = SearchResult {
            best: None,
            best_fitness: None,
            generations: 0,
            stats: SearchStats::new(),
        };

        assert!(solved.solved());
        assert!(!unsolved.solved());
        assert!(!degenerate.solved());
    }
}
