use std::collections::VecDeque;

use tracing::debug;

use crate::word_graph::WordGraph;

/// Working state of one breadth-first traversal, kept apart from the graph.
///
/// `distances[v]` is `None` until `v` is discovered; `parents[v]` is the
/// vertex it was discovered from.
#[derive(Debug, Clone)]
pub struct BfsState {
    distances: Vec<Option<usize>>,
    parents: Vec<Option<usize>>,
}

impl BfsState {
    fn new(len: usize) -> Self {
        Self {
            distances: vec![None; len],
            parents: vec![None; len],
        }
    }

    /// Distance of `vertex` from the source, if it was discovered.
    pub fn distance(&self, vertex: usize) -> Option<usize> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Vertices from the source to `vertex`, inclusive.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs BFS from `source` until `target` is dequeued or the reachable
/// component is exhausted.
///
/// Vertices are marked at discovery with `distance(parent) + 1`. Vertices at
/// `max_depth` are not expanded. Returns the traversal state and whether the
/// target was reached.
pub fn bfs(
    graph: &WordGraph,
    source: usize,
    target: usize,
    max_depth: Option<usize>,
) -> (BfsState, bool) {
    let mut state = BfsState::new(graph.len());
    if source >= graph.len() {
        return (state, false);
    }

    let mut queue = VecDeque::new();
    state.distances[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return (state, true);
        }
        let depth = state.distances[current].unwrap_or_default();
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        for &neighbor in graph.neighbors(current) {
            if state.distances[neighbor].is_none() {
                state.distances[neighbor] = Some(depth + 1);
                state.parents[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }
    (state, false)
}

/// Minimum number of transformations from `start` to `end`, or `None` when unreachable.
pub fn shortest_distance(
    graph: &WordGraph,
    start: &str,
    end: &str,
    max_depth: Option<usize>,
) -> Option<usize> {
    let (source, target) = (graph.index_of(start)?, graph.index_of(end)?);
    let (state, found) = bfs(graph, source, target, max_depth);
    let distance = if found { state.distance(target) } else { None };
    debug!(start, end, ?distance, "word ladder search finished");
    distance
}

/// The words of one shortest ladder from `start` to `end`, inclusive.
pub fn shortest_ladder(
    graph: &WordGraph,
    start: &str,
    end: &str,
    max_depth: Option<usize>,
) -> Option<Vec<String>> {
    let (source, target) = (graph.index_of(start)?, graph.index_of(end)?);
    let (state, found) = bfs(graph, source, target, max_depth);
    if !found {
        debug!(start, end, "no ladder found");
        return None;
    }
    state
        .path_to(target)?
        .into_iter()
        .map(|v| graph.word(v).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LengthPolicy;

    fn classic_graph() -> WordGraph {
        let dictionary = ["hot", "dot", "dog", "lot", "log", "cog"];
        WordGraph::build("hit", &dictionary, LengthPolicy::Reject).unwrap()
    }

    #[test]
    fn test_shortest_distance() {
        let graph = classic_graph();
        assert_eq!(shortest_distance(&graph, "hit", "cog", None), Some(4));
        assert_eq!(shortest_distance(&graph, "hit", "hot", None), Some(1));
        assert_eq!(shortest_distance(&graph, "hit", "hit", None), Some(0));
        assert_eq!(shortest_distance(&graph, "hit", "xyz", None), None); // not in graph
    }

    #[test]
    fn test_distances_are_layered() {
        let graph = classic_graph();
        let source = graph.index_of("hit").unwrap();
        let (state, found) = bfs(&graph, source, usize::MAX, None);
        assert!(!found); // whole component explored
        let expected = [("hit", 0), ("hot", 1), ("dot", 2), ("lot", 2), ("dog", 3), ("log", 3), ("cog", 4)];
        for (word, distance) in expected {
            let vertex = graph.index_of(word).unwrap();
            assert_eq!(state.distance(vertex), Some(distance), "distance of {}", word);
        }
    }

    #[test]
    fn test_max_depth() {
        let graph = classic_graph();
        assert_eq!(shortest_distance(&graph, "hit", "cog", Some(3)), None);
        assert_eq!(shortest_distance(&graph, "hit", "cog", Some(4)), Some(4));
        assert_eq!(shortest_distance(&graph, "hit", "hit", Some(0)), Some(0));
    }

    #[test]
    fn test_shortest_ladder() {
        let graph = classic_graph();
        let ladder = shortest_ladder(&graph, "hit", "cog", None).unwrap();
        assert_eq!(ladder.len(), 5);
        assert_eq!(ladder.first().map(String::as_str), Some("hit"));
        assert_eq!(ladder.last().map(String::as_str), Some("cog"));
        for pair in ladder.windows(2) {
            assert!(crate::word_graph::differs_by_one(&pair[0], &pair[1]));
        }
        // dot is discovered before lot, so its branch wins
        assert_eq!(ladder, vec!["hit", "hot", "dot", "dog", "cog"]);
    }

    #[test]
    fn test_unreachable_ladder() {
        let graph = WordGraph::build("abc", &["abd", "abe", "xyz"], LengthPolicy::Reject).unwrap();
        assert_eq!(shortest_ladder(&graph, "abc", "xyz", None), None);
        assert_eq!(shortest_distance(&graph, "abc", "xyz", None), None);
    }
}
