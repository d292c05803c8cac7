//! Shared test utilities for `concord-core`.

use concord_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::CscGraph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `CONCORD_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Path `0 - 1 - ... - (nodes - 1)` stored in both directions.
pub(crate) fn path_graph(nodes: usize) -> CscGraph {
    let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
    CscGraph::from_edges(nodes, &edges).expect("path edges are in range")
}

/// Triangles `{0, 1, 2}` and `{3, 4, 5}`.
pub(crate) fn two_triangles() -> CscGraph {
    CscGraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
        .expect("triangle edges are in range")
}

/// Component count by breadth-first search over the stored entries, treating
/// each entry as an undirected edge.
pub(crate) fn bfs_component_count(graph: &CscGraph) -> usize {
    bfs_labels(graph)
        .iter()
        .enumerate()
        .filter(|&(node, &label)| node == label)
        .count()
}

/// Minimum node of each node's component, found by breadth-first search.
pub(crate) fn bfs_labels(graph: &CscGraph) -> Vec<usize> {
    let nodes = graph.node_count();
    let mut adjacency = vec![Vec::new(); nodes];
    for column in 0..graph.ncols().min(nodes) {
        for &row in graph.column(column) {
            adjacency[column].push(row);
            adjacency[row].push(column);
        }
    }

    let mut labels = vec![usize::MAX; nodes];
    for start in 0..nodes {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = start;
        let mut queue = std::collections::VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in &adjacency[node] {
                if labels[next] == usize::MAX {
                    labels[next] = start;
                    queue.push_back(next);
                }
            }
        }
    }
    labels
}
