//! Execution backends that realise the parallel phases of every strategy.
//!
//! Strategies express each phase as a closure over a contiguous index range
//! and hand it to an [`Executor`]. Returning from [`Executor::sum`] or
//! [`Executor::for_each`] is the barrier between phases: every worker has
//! joined and all of its writes are visible to the caller.

#[cfg(feature = "parallel")]
mod bulk;
#[cfg(feature = "parallel")]
mod fork_join;
mod sequential;
mod worker_pool;

use std::ops::Range;

use crate::Result;

#[cfg(feature = "parallel")]
pub(crate) use self::{bulk::BulkSynchronous, fork_join::ForkJoin};
pub(crate) use self::{sequential::Sequential, worker_pool::WorkerPool};

/// How a phase's index range is divided among workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Partition {
    /// One contiguous, near-equal slice per worker.
    Static,
    /// Fixed-size chunks handed out on demand.
    Dynamic {
        /// Indices per chunk; always at least one.
        chunk: usize,
    },
}

/// Runs a range-shaped phase to completion.
///
/// Implementations may call `body` from several threads at once with
/// disjoint sub-ranges whose union is exactly `0..len`.
pub(crate) trait Executor: Sync {
    /// Runs `body` over `0..len` and returns the sum of its results.
    fn sum<F>(&self, len: usize, partition: Partition, body: F) -> Result<usize>
    where
        F: Fn(Range<usize>) -> usize + Sync;

    /// Runs `body` over `0..len`.
    fn for_each<F>(&self, len: usize, partition: Partition, body: F) -> Result<()>
    where
        F: Fn(Range<usize>) + Sync,
    {
        self.sum(len, partition, |range| {
            body(range);
            0
        })
        .map(|_| ())
    }
}

/// Splits `0..len` into `parts` contiguous slices and returns slice `index`.
pub(crate) fn static_slice(index: usize, parts: usize, len: usize) -> Range<usize> {
    let width = len.div_ceil(parts.max(1));
    let start = index.saturating_mul(width).min(len);
    start..start.saturating_add(width).min(len)
}

/// Returns chunk `index` of width `chunk` within `0..len`.
pub(crate) fn chunk_range(index: usize, chunk: usize, len: usize) -> Range<usize> {
    let start = index.saturating_mul(chunk).min(len);
    start..start.saturating_add(chunk).min(len)
}

#[cfg(test)]
mod tests;
