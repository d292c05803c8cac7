use concord_core::{Backend, CscGraph, Strategy};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const STRATEGIES: [Strategy; 2] = [Strategy::LabelPropagation, Strategy::UnionFind];

/// Backends compiled into this build.
#[must_use]
pub fn available_backends() -> Vec<Backend> {
    Backend::ALL
        .into_iter()
        .filter(|backend| backend.is_available())
        .collect()
}

/// Path `0 - 1 - ... - (nodes - 1)` stored in both directions.
#[must_use]
pub fn path_graph(nodes: usize) -> CscGraph {
    let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
    CscGraph::from_edges(nodes, &edges).expect("path edges are in range")
}

/// Triangles `{0, 1, 2}` and `{3, 4, 5}`.
#[must_use]
pub fn two_triangles() -> CscGraph {
    CscGraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
        .expect("triangle edges are in range")
}

/// Seeded random graph with `edges` undirected edges.
#[must_use]
pub fn random_sparse_graph(nodes: usize, edges: usize, seed: u64) -> CscGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let pairs: Vec<_> = (0..edges)
        .map(|_| (rng.gen_range(0..nodes), rng.gen_range(0..nodes)))
        .collect();
    CscGraph::from_edges(nodes, &pairs).expect("random edges are in range")
}

/// Same graph with node `i` renumbered `n - 1 - i`, so columns are scanned
/// in the opposite order.
#[must_use]
pub fn mirrored(graph: &CscGraph) -> CscGraph {
    let nodes = graph.node_count();
    let edges: Vec<_> = (0..nodes)
        .flat_map(|column| {
            graph
                .column(column)
                .iter()
                .map(move |&row| (nodes - 1 - column, nodes - 1 - row))
        })
        .collect();
    CscGraph::from_edges(nodes, &edges).expect("mirrored edges are in range")
}
