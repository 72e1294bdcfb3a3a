//! Shortest word ladders over a dictionary, plus a few standalone textbook exercises.
//!
//! The solver builds a fresh [`WordGraph`] per call (one vertex per word, an
//! edge between words that differ in exactly one position) and runs a
//! breadth-first search from the start word.

pub mod config;
pub mod error;
pub mod exercises;
pub mod search;
pub mod solver;
pub mod word_graph;

pub use config::{LengthPolicy, SolverConfig};
pub use error::LadderError;
pub use solver::{find_ladder, solve, solve_with};
pub use word_graph::{differs_by_one, WordGraph};
