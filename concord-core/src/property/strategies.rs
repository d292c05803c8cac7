//! Graph generators for the component property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::CscGraph;

use super::types::{GraphFixture, GraphShape};

const MIN_NODES: usize = 1;
const MAX_NODES: usize = 96;
const DENSE_MAX_NODES: usize = 32;

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (
        proptest::sample::select(GraphShape::ALL.to_vec()),
        any::<u64>(),
    )
        .prop_map(|(shape, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(shape, &mut rng)
        })
}

pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    match shape {
        GraphShape::Sparse => {
            let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
            let count = rng.gen_range(nodes..=nodes * 2);
            let edges = random_edges(rng, nodes, count);
            symmetric(shape, nodes, edges)
        }
        GraphShape::Dense => {
            let nodes = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            let probability = rng.gen_range(0.3..=0.8);
            let mut edges = Vec::new();
            for left in 0..nodes {
                for right in left + 1..nodes {
                    if rng.gen_bool(probability) {
                        edges.push((left, right));
                    }
                }
            }
            symmetric(shape, nodes, edges)
        }
        GraphShape::Disconnected => {
            let blocks = rng.gen_range(2..=6);
            let width = rng.gen_range(1..=12);
            let mut edges = Vec::new();
            for block in 0..blocks {
                let base = block * width;
                for offset in 1..width {
                    let other = rng.gen_range(0..offset);
                    edges.push((base + offset, base + other));
                }
            }
            symmetric(shape, blocks * width, edges)
        }
        GraphShape::Isolated => {
            let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
            symmetric(shape, nodes, Vec::new())
        }
        GraphShape::Chains => {
            let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
            let mut order: Vec<usize> = (0..nodes).collect();
            order.shuffle(rng);
            let breaks = rng.gen_range(0..=3);
            let mut edges: Vec<_> = order.windows(2).map(|pair| (pair[0], pair[1])).collect();
            for _ in 0..breaks.min(edges.len()) {
                let cut = rng.gen_range(0..edges.len());
                edges.swap_remove(cut);
            }
            symmetric(shape, nodes, edges)
        }
        GraphShape::OneDirectional => {
            let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
            let count = rng.gen_range(0..=nodes * 2);
            let edges = random_edges(rng, nodes, count);
            let graph = one_directional(nodes, &edges);
            GraphFixture {
                shape,
                edges,
                graph,
            }
        }
    }
}

fn random_edges(rng: &mut SmallRng, nodes: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.gen_range(0..nodes), rng.gen_range(0..nodes)))
        .collect()
}

fn symmetric(shape: GraphShape, nodes: usize, edges: Vec<(usize, usize)>) -> GraphFixture {
    let graph = CscGraph::from_edges(nodes, &edges).expect("generated edges are in range");
    GraphFixture {
        shape,
        edges,
        graph,
    }
}

/// Stores each `(column, row)` pair once, in the column of its first node.
pub(super) fn one_directional(nodes: usize, edges: &[(usize, usize)]) -> CscGraph {
    let mut columns = vec![Vec::new(); nodes];
    for &(column, row) in edges {
        columns[column].push(row);
    }
    let mut col_ptr = vec![0];
    let mut row_idx = Vec::new();
    for mut rows in columns {
        rows.sort_unstable();
        rows.dedup();
        row_idx.extend(rows);
        col_ptr.push(row_idx.len());
    }
    CscGraph::new(nodes, nodes, col_ptr, row_idx).expect("generated layout is valid")
}

/// Renumbers node `i` as `n - 1 - i`, reversing the column scan order.
pub(super) fn mirrored(graph: &CscGraph) -> CscGraph {
    let nodes = graph.node_count();
    let edges: Vec<_> = (0..graph.ncols().min(nodes))
        .flat_map(|column| {
            graph
                .column(column)
                .iter()
                .map(move |&row| (nodes - 1 - column, nodes - 1 - row))
        })
        .collect();
    one_directional(nodes, &edges)
}
