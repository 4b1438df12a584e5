//! Bounded enumeration of simple paths between two nodes
//!
//! Classic backtracking depth-first search. The search space is exponential
//! in the worst case, so every recursion frame re-checks the depth, result
//! and deadline bounds; hitting any of them turns "search space too large"
//! into a partial result instead of unbounded work.

use std::time::{Duration, Instant};

use hashbrown::HashSet;
use log::warn;

use crate::model::RouteGraph;
use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ROUTES, NodeId};

/// Hard bounds on a single path search.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum number of nodes on one path.
    pub max_depth: usize,
    /// Maximum number of distinct paths to return.
    pub max_routes: usize,
    /// Optional wall-clock budget for the whole search. On expiry the search
    /// returns whatever it has found so far.
    pub deadline: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_routes: DEFAULT_MAX_ROUTES,
            deadline: None,
        }
    }
}

/// Enumerates distinct simple paths from `start` to `end` in DFS order.
///
/// Results are in enumeration order, a function of neighbour iteration order;
/// ranking by quality happens downstream. A start or end node absent from the
/// graph yields an empty list, not an error.
///
/// All traversal state (visited set, path stack, dedup set) lives in this
/// call's frame. Nothing is shared across searches, so concurrent calls over
/// one graph cannot poison each other's deduplication.
pub fn find_paths(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    limits: &SearchLimits,
) -> Vec<Vec<NodeId>> {
    let mut search = PathSearch {
        graph,
        end,
        limits,
        started: Instant::now(),
        expired: false,
        visited: HashSet::new(),
        path: Vec::new(),
        seen: HashSet::new(),
        results: Vec::new(),
    };
    search.visit(start, 0);

    if search.expired {
        warn!(
            "path search {start} -> {end} hit its deadline, returning {} partial result(s)",
            search.results.len()
        );
    }
    search.results
}

struct PathSearch<'a> {
    graph: &'a RouteGraph,
    end: &'a str,
    limits: &'a SearchLimits,
    started: Instant,
    expired: bool,
    /// Nodes on the current recursion stack.
    visited: HashSet<NodeId>,
    /// Current path, pushed and popped as the search backtracks.
    path: Vec<NodeId>,
    /// Node sequences already emitted during *this* search.
    seen: HashSet<Vec<NodeId>>,
    results: Vec<Vec<NodeId>>,
}

impl PathSearch<'_> {
    /// Checked at every frame, not just at the root: both breadth and total
    /// work stay bounded no matter how dense the graph is.
    fn out_of_budget(&mut self, depth: usize) -> bool {
        if depth > self.limits.max_depth || self.results.len() >= self.limits.max_routes {
            return true;
        }
        if let Some(budget) = self.limits.deadline
            && self.started.elapsed() >= budget
        {
            self.expired = true;
            return true;
        }
        false
    }

    fn visit(&mut self, node: &str, depth: usize) {
        if self.out_of_budget(depth) {
            return;
        }

        self.visited.insert(node.to_string());
        self.path.push(node.to_string());

        if node == self.end {
            if self.seen.insert(self.path.clone()) {
                self.results.push(self.path.clone());
            }
        } else {
            let graph = self.graph;
            for (next, _) in graph.neighbors(node) {
                if !self.visited.contains(next.as_str()) {
                    self.visit(next, depth + 1);
                }
            }
        }

        self.path.pop();
        self.visited.remove(node);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::SegmentRecord;

    use super::*;

    fn graph(edges: &[(&str, &str)]) -> RouteGraph {
        let mut builder = RouteGraph::builder();
        let mut nodes: Vec<&str> = edges.iter().flat_map(|(a, b)| [*a, *b]).collect();
        nodes.sort_unstable();
        nodes.dedup();
        for (i, node) in nodes.iter().enumerate() {
            builder = builder.node(*node, i as f64, 0.0);
        }
        for (from, to) in edges {
            builder = builder.segment(SegmentRecord::new(*from, *to));
        }
        builder.build().unwrap()
    }

    #[test]
    fn chain_yields_single_path() {
        let graph = graph(&[("a", "b"), ("b", "c")]);
        let paths = find_paths(&graph, "a", "c", &SearchLimits::default());
        assert_eq!(paths, vec![vec!["a".to_string(), "b".into(), "c".into()]]);
    }

    #[test]
    fn diamond_yields_both_branches() {
        let graph = graph(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
        let paths = find_paths(&graph, "a", "d", &SearchLimits::default());
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.first().unwrap(), "a");
            assert_eq!(path.last().unwrap(), "d");
        }
    }

    #[test]
    fn paths_are_simple_and_distinct() {
        // Cycle b -> c -> b must not trap the search or duplicate results
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "b"), ("c", "d"), ("b", "d")]);
        let paths = find_paths(&graph, "a", "d", &SearchLimits::default());

        let mut sequences = HashSet::new();
        for path in &paths {
            let mut nodes: Vec<_> = path.clone();
            nodes.sort_unstable();
            nodes.dedup();
            assert_eq!(nodes.len(), path.len(), "repeated node in {path:?}");
            assert!(sequences.insert(path.clone()), "duplicate path {path:?}");
        }
    }

    #[test]
    fn max_depth_bounds_path_length() {
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]);
        let limits = SearchLimits {
            max_depth: 2,
            ..SearchLimits::default()
        };
        assert!(find_paths(&graph, "a", "e", &limits).is_empty());

        let paths = find_paths(&graph, "a", "c", &limits);
        assert_eq!(paths.len(), 1);
        assert!(paths[0].len() <= limits.max_depth + 1);
    }

    #[test]
    fn max_routes_caps_result_count() {
        // Three parallel two-hop branches
        let graph = graph(&[
            ("s", "x"),
            ("s", "y"),
            ("s", "z"),
            ("x", "t"),
            ("y", "t"),
            ("z", "t"),
        ]);
        let limits = SearchLimits {
            max_routes: 2,
            ..SearchLimits::default()
        };
        assert_eq!(find_paths(&graph, "s", "t", &limits).len(), 2);
    }

    #[test]
    fn unknown_endpoints_yield_empty_result() {
        let graph = graph(&[("a", "b")]);
        let limits = SearchLimits::default();
        assert!(find_paths(&graph, "ghost", "b", &limits).is_empty());
        assert!(find_paths(&graph, "a", "ghost", &limits).is_empty());
    }

    #[test]
    fn expired_deadline_returns_partial_result() {
        let graph = graph(&[("a", "b"), ("b", "c")]);
        let limits = SearchLimits {
            deadline: Some(Duration::ZERO),
            ..SearchLimits::default()
        };
        assert!(find_paths(&graph, "a", "c", &limits).is_empty());
    }
}
