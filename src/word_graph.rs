use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::LengthPolicy;
use crate::error::LadderError;

/// Returns true when `a` and `b` have the same length and differ in exactly one position.
///
/// Identical words differ in zero positions and do not qualify. Words of
/// different lengths never qualify.
pub fn differs_by_one(a: &str, b: &str) -> bool {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut diffs = 0;
    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    diffs += 1;
                    if diffs > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return diffs == 1,
            _ => return false, // lengths differ
        }
    }
}

/// Undirected graph over distinct words, one vertex per word.
///
/// Vertices are addressed by index; the start word is always vertex 0.
/// Edges connect words that satisfy [`differs_by_one`] and are fixed once built.
#[derive(Debug, Clone, Serialize)]
pub struct WordGraph {
    words: Vec<String>,
    adjacency: Vec<Vec<usize>>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl WordGraph {
    /// Builds a fresh graph from `start` plus every unique word in `dictionary`.
    ///
    /// Duplicates are ignored. Words whose length differs from `start` are
    /// rejected or skipped according to `policy`.
    pub fn build<S: AsRef<str>>(
        start: &str,
        dictionary: &[S],
        policy: LengthPolicy,
    ) -> Result<Self, LadderError> {
        let expected = start.chars().count();
        let mut graph = WordGraph {
            words: Vec::with_capacity(dictionary.len() + 1),
            adjacency: Vec::new(),
            index: HashMap::with_capacity(dictionary.len() + 1),
        };
        graph.insert(start);

        for word in dictionary {
            let word = word.as_ref();
            let found = word.chars().count();
            if found != expected {
                match policy {
                    LengthPolicy::Reject => {
                        return Err(LadderError::LengthMismatch {
                            word: word.to_string(),
                            expected,
                            found,
                        })
                    }
                    LengthPolicy::Skip => {
                        warn!(word, expected, found, "skipping word with mismatched length");
                        continue;
                    }
                }
            }
            graph.insert(word);
        }

        graph.adjacency = vec![Vec::new(); graph.words.len()];
        for i in 0..graph.words.len() {
            for j in (i + 1)..graph.words.len() {
                if differs_by_one(&graph.words[i], &graph.words[j]) {
                    graph.adjacency[i].push(j);
                    graph.adjacency[j].push(i);
                }
            }
        }

        debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            "built word graph"
        );
        Ok(graph)
    }

    fn insert(&mut self, word: &str) {
        if !self.index.contains_key(word) {
            self.index.insert(word.to_string(), self.words.len());
            self.words.push(word.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Indices adjacent to `index`, empty for an unknown index.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
