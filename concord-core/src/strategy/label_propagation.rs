//! Label propagation: relax every stored edge towards the smaller label until
//! a full pass observes no disagreement, then count distinct labels.
//!
//! Labels only ever decrease (`fetch_min`), so a write lost to a concurrent
//! reader is picked up by a later pass. A pass that observes no disagreement
//! performed no writes, which means every edge was read in a stable state and
//! the labels are a fixed point. There is deliberately no pass limit.

use std::{
    ops::Range,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::debug;

use super::{AtomicBitmap, try_atomic_vec};
use crate::{
    Result,
    backend::{Executor, Partition},
    graph::CscGraph,
};

/// Runs passes to a fixed point, calling `on_pass` after each pass with the
/// pass number (from 1) and the labels at that boundary.
pub(crate) fn propagate_with<E, O>(
    executor: &E,
    graph: &CscGraph,
    chunk: usize,
    mut on_pass: O,
) -> Result<Vec<AtomicUsize>>
where
    E: Executor,
    O: FnMut(usize, &[AtomicUsize]),
{
    let nodes = graph.node_count();
    let labels = try_atomic_vec("labels", nodes)?;

    executor.for_each(nodes, Partition::Static, |range| {
        for node in range {
            labels[node].store(node, Ordering::Relaxed);
        }
    })?;
    debug!(phase = "init", nodes, "label propagation phase complete");

    let mut pass = 0_usize;
    loop {
        pass += 1;
        let disagreements = executor.sum(
            graph.edge_columns(),
            Partition::Dynamic { chunk },
            |columns| relax(graph, &labels, columns),
        )?;
        debug!(pass, disagreements, "label propagation pass complete");
        on_pass(pass, &labels);
        if disagreements == 0 {
            return Ok(labels);
        }
    }
}

/// Runs passes to a fixed point and returns the converged labels.
pub(crate) fn propagate<E: Executor>(
    executor: &E,
    graph: &CscGraph,
    chunk: usize,
) -> Result<Vec<AtomicUsize>> {
    propagate_with(executor, graph, chunk, |_, _| {})
}

fn relax(graph: &CscGraph, labels: &[AtomicUsize], columns: Range<usize>) -> usize {
    let mut disagreements = 0;
    for column in columns {
        for &row in graph.column(column) {
            let column_label = labels[column].load(Ordering::Relaxed);
            let row_label = labels[row].load(Ordering::Relaxed);
            if column_label < row_label {
                labels[row].fetch_min(column_label, Ordering::Relaxed);
                disagreements += 1;
            } else if row_label < column_label {
                labels[column].fetch_min(row_label, Ordering::Relaxed);
                disagreements += 1;
            }
        }
    }
    disagreements
}

/// Counts the connected components of `graph`.
pub(crate) fn count<E: Executor>(executor: &E, graph: &CscGraph, chunk: usize) -> Result<usize> {
    let labels = propagate(executor, graph, chunk)?;
    let members = AtomicBitmap::try_new(labels.len())?;

    executor.for_each(labels.len(), Partition::Static, |range| {
        for node in range {
            members.insert(labels[node].load(Ordering::Relaxed));
        }
    })?;
    let components = executor.sum(members.word_count(), Partition::Static, |words| {
        members.count_ones(words)
    })?;
    debug!(phase = "count", components, "label propagation phase complete");
    Ok(components)
}
