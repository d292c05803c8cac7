//! Union-find strategy: init, union every stored edge, compress, count roots.

use tracing::debug;

use crate::{
    Result,
    backend::{Executor, Partition},
    disjoint_set::DisjointSet,
    graph::CscGraph,
};

/// Builds the fully compressed forest for `graph`.
///
/// On return every node's parent is its component's minimum node.
pub(crate) fn build_forest<E: Executor>(
    executor: &E,
    graph: &CscGraph,
    chunk: usize,
) -> Result<DisjointSet> {
    let nodes = graph.node_count();
    let forest = DisjointSet::try_new(nodes)?;

    executor.for_each(nodes, Partition::Static, |range| forest.reset(range))?;
    debug!(phase = "init", nodes, "union-find phase complete");

    let merges = executor.sum(
        graph.edge_columns(),
        Partition::Dynamic { chunk },
        |columns| {
            let mut merges = 0;
            for column in columns {
                for &row in graph.column(column) {
                    merges += usize::from(forest.union(row, column));
                }
            }
            merges
        },
    )?;
    debug!(phase = "union", merges, "union-find phase complete");

    executor.for_each(nodes, Partition::Static, |range| forest.compress(range))?;
    debug!(phase = "compress", "union-find phase complete");

    Ok(forest)
}

/// Counts the connected components of `graph`.
pub(crate) fn count<E: Executor>(executor: &E, graph: &CscGraph, chunk: usize) -> Result<usize> {
    let forest = build_forest(executor, graph, chunk)?;
    let components = executor.sum(forest.len(), Partition::Static, |range| {
        forest.count_roots(range)
    })?;
    debug!(phase = "count", components, "union-find phase complete");
    Ok(components)
}
