//! Generational search engine
//!
//! This module implements the elitism-preserving generational loop:
//! evaluate, record history, carry elites, breed via tournament selection,
//! single-point crossover, bounded repair, and open-column mutation, until
//! a conflict-free placement appears or the generation budget runs out.

use std::time::Instant;

use rand::Rng;

use crate::board::Board;
use crate::diagnostics::{GenerationRecord, SearchResult, SearchStats};
use crate::error::SearchError;
use crate::fitness;
use crate::operators::crossover::SinglePointCrossover;
use crate::operators::mutation::ColumnResetMutation;
use crate::operators::repair::MiniRepair;
use crate::operators::selection::TournamentSelection;
use crate::population::{Individual, Population};

/// Configuration for the genetic search
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Population size
    pub population_size: usize,
    /// Generation budget
    pub max_generations: usize,
    /// Probability that crossover fires for a parent pair
    pub crossover_probability: f64,
    /// Per-row mutation probability
    pub mutation_probability: f64,
    /// Number of elite individuals carried over unchanged
    pub elite_count: usize,
    /// Tournament size for parent selection
    pub tournament_size: usize,
    /// Iteration budget of the repair pass
    pub repair_iterations: usize,
    /// Evaluate fitness in parallel (requires the `parallel` feature)
    pub parallel_evaluation: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 2000,
            crossover_probability: 0.8,
            mutation_probability: 0.2,
            elite_count: 5,
            tournament_size: 3,
            repair_iterations: 5,
            parallel_evaluation: false,
        }
    }
}

/// Builder for [`GeneticSearch`]
#[derive(Clone, Debug, Default)]
pub struct SearchBuilder {
    config: SearchConfig,
}

impl SearchBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the generation budget
    pub fn max_generations(mut self, max: usize) -> Self {
        self.config.max_generations = max;
        self
    }

    /// Set the crossover probability
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.config.crossover_probability = probability;
        self
    }

    /// Set the per-row mutation probability
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Set the number of elites carried over unchanged
    pub fn elite_count(mut self, count: usize) -> Self {
        self.config.elite_count = count;
        self
    }

    /// Set the tournament size
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Set the repair iteration budget
    pub fn repair_iterations(mut self, iterations: usize) -> Self {
        self.config.repair_iterations = iterations;
        self
    }

    /// Enable or disable parallel fitness evaluation
    pub fn parallel_evaluation(mut self, enabled: bool) -> Self {
        self.config.parallel_evaluation = enabled;
        self
    }

    /// Build the search for the given board, validating the configuration
    pub fn build(self, board: Board) -> Result<GeneticSearch, SearchError> {
        let config = self.config;
        if !(0.0..=1.0).contains(&config.crossover_probability) {
            return Err(SearchError::Configuration(format!(
                "crossover probability {} is not in [0, 1]",
                config.crossover_probability
            )));
        }
        if !(0.0..=1.0).contains(&config.mutation_probability) {
            return Err(SearchError::Configuration(format!(
                "mutation probability {} is not in [0, 1]",
                config.mutation_probability
            )));
        }
        if config.tournament_size == 0 {
            return Err(SearchError::Configuration(
                "tournament size must be at least 1".to_string(),
            ));
        }

        Ok(GeneticSearch::with_config(board, config))
    }
}

/// Genetic search over queen placements on a blocked board
///
/// Owns the board and one instance of each operator for the lifetime of
/// the run. The caller provides the random stream, so two runs with the
/// same board, configuration, and seed produce identical results.
#[derive(Debug)]
pub struct GeneticSearch {
    board: Board,
    config: SearchConfig,
    selection: TournamentSelection,
    crossover: SinglePointCrossover,
    mutation: ColumnResetMutation,
    repair: MiniRepair,
}

impl GeneticSearch {
    /// Create a builder for GeneticSearch
    pub fn builder() -> SearchBuilder {
        SearchBuilder::new()
    }

    /// Create a search with the default configuration
    pub fn new(board: Board) -> Self {
        Self::with_config(board, SearchConfig::default())
    }

    fn with_config(board: Board, config: SearchConfig) -> Self {
        let selection = TournamentSelection::new(config.tournament_size);
        let crossover = SinglePointCrossover::new(config.crossover_probability);
        let mutation = ColumnResetMutation::new(config.mutation_probability);
        let repair = MiniRepair::new(config.repair_iterations);
        Self {
            board,
            config,
            selection,
            crossover,
            mutation,
            repair,
        }
    }

    /// The board this search runs on
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn evaluate(&self, population: &mut Population) {
        if self.config.parallel_evaluation {
            population.evaluate_parallel();
        } else {
            population.evaluate();
        }
    }

    /// Run the genetic search to completion
    ///
    /// Stops on the first generation whose best individual is conflict-free,
    /// or after the generation budget is exhausted. Exhaustion is a normal
    /// outcome, reported through the returned fitness and history rather
    /// than as an error.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let target = fitness::max_pairs(self.board.size());
        let mut stats = SearchStats::new();

        let mut population = Population::random(self.config.population_size, &self.board, rng)?;
        let mut best: Option<Individual> = None;

        for generation in 1..=self.config.max_generations {
            self.evaluate(&mut population);

            let Some(record) = GenerationRecord::from_population(&population, generation) else {
                // Zero-size population: nothing to evolve
                break;
            };
            stats.record(record);

            let improved = best
                .as_ref()
                .map_or(true, |b| record.best_fitness > b.fitness_value());
            if improved {
                if let Some(idx) = population.best_index() {
                    best = Some(population[idx].clone());
                }
            }

            if best.as_ref().map_or(false, |b| b.fitness_value() == target) {
                stats.set_termination_reason("solution found");
                break;
            }

            let mut sorted = population.clone();
            sorted.sort_by_fitness();

            let mut next = Population::with_capacity(self.config.population_size);
            next.set_generation(generation);
            for i in 0..self.config.elite_count.min(sorted.len()) {
                next.push(sorted[i].clone());
            }

            while next.len() < self.config.population_size {
                let p1 = self.selection.select(&population, rng);
                let p2 = self.selection.select(&population, rng);

                let (mut child1, mut child2) = self.crossover.crossover(
                    &population[p1].chromosome,
                    &population[p2].chromosome,
                    rng,
                );

                self.repair.repair(&mut child1, &self.board, rng);
                self.repair.repair(&mut child2, &self.board, rng);

                self.mutation.mutate(&mut child1, &self.board, rng);
                next.push(Individual::with_generation(child1, generation));
                if next.len() < self.config.population_size {
                    self.mutation.mutate(&mut child2, &self.board, rng);
                    next.push(Individual::with_generation(child2, generation));
                }
            }

            population = next;
        }

        if stats.termination_reason.is_none() {
            if population.is_empty() {
                stats.set_termination_reason("empty population");
            } else {
                stats.set_termination_reason("generation budget exhausted");
            }
        }
        stats.set_runtime(start.elapsed());

        let generations = stats.history.last().map_or(0, |r| r.generation);
        let best_fitness = best.as_ref().map(|b| b.fitness_value());
        Ok(SearchResult {
            best: best.map(Individual::into_chromosome),
            best_fitness,
            generations,
            stats,
        })
    }
}
