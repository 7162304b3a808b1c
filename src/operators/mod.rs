//! Genetic operators
//!
//! This module provides the obstacle-aware selection, crossover, mutation,
//! and repair operators used by the search engine.

pub mod crossover;
pub mod mutation;
pub mod repair;
pub mod selection;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::repair::*;
    pub use super::selection::*;
}
