use crate::config::{LengthPolicy, SolverConfig};
use crate::error::LadderError;
use crate::search::{shortest_distance, shortest_ladder};
use crate::word_graph::WordGraph;

/// Minimum number of single-letter substitutions turning `start` into `end`,
/// with every intermediate word taken from `dictionary`.
///
/// `Ok(None)` means no ladder exists; `Ok(Some(0))` only when `start == end`.
///
/// ```
/// let dictionary = ["hot", "dot", "dog", "lot", "log", "cog"];
/// assert_eq!(word_ladder::solve("hit", "cog", &dictionary), Ok(Some(4)));
/// ```
pub fn solve<S: AsRef<str>>(
    start: &str,
    end: &str,
    dictionary: &[S],
) -> Result<Option<usize>, LadderError> {
    solve_with(start, end, dictionary, &SolverConfig::default())
}

/// Same as [`solve`], with explicit settings.
pub fn solve_with<S: AsRef<str>>(
    start: &str,
    end: &str,
    dictionary: &[S],
    config: &SolverConfig,
) -> Result<Option<usize>, LadderError> {
    let graph = prepare(start, end, dictionary, config)?;
    Ok(shortest_distance(&graph, start, end, config.max_depth))
}

/// One shortest ladder from `start` to `end` inclusive, or `Ok(None)` when unreachable.
pub fn find_ladder<S: AsRef<str>>(
    start: &str,
    end: &str,
    dictionary: &[S],
    config: &SolverConfig,
) -> Result<Option<Vec<String>>, LadderError> {
    let graph = prepare(start, end, dictionary, config)?;
    Ok(shortest_ladder(&graph, start, end, config.max_depth))
}

fn prepare<S: AsRef<str>>(
    start: &str,
    end: &str,
    dictionary: &[S],
    config: &SolverConfig,
) -> Result<WordGraph, LadderError> {
    if start.is_empty() {
        return Err(LadderError::invalid_input("start word is empty"));
    }
    if end.is_empty() {
        return Err(LadderError::invalid_input("end word is empty"));
    }

    let expected = start.chars().count();
    let found = end.chars().count();
    if found != expected && config.length_policy == LengthPolicy::Reject {
        return Err(LadderError::LengthMismatch {
            word: end.to_string(),
            expected,
            found,
        });
    }

    WordGraph::build(start, dictionary, config.length_policy)
}
