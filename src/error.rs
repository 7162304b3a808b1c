//! Error types for queens-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for board generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The requested blocked-cell count exceeds the density-derived maximum
    #[error("blocked-cell count {requested} exceeds the maximum {max} allowed for n={n}")]
    InvalidConfiguration {
        /// Board size
        n: usize,
        /// Requested blocked-cell count
        requested: usize,
        /// Maximum allowed blocked-cell count
        max: usize,
    },
}

/// Error type for chromosome construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChromosomeError {
    /// A row has no open column left to place a queen in
    #[error("row {row} has no open column")]
    InfeasibleRow {
        /// Index of the fully blocked row
        row: usize,
    },
}

/// Top-level error type for search operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Board generation error
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// Chromosome initialization error
    #[error("chromosome error: {0}")]
    Chromosome(#[from] ChromosomeError),

    /// Invalid search configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
