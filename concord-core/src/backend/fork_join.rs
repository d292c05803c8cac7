//! Recursive fork-join executor on a work-stealing pool.

use std::{ops::Range, sync::Arc};

use rayon::ThreadPool;

use super::{Executor, Partition};
use crate::{Result, builder::Backend, error::ComponentsError};

const MAX_GRAIN: usize = 2048;

/// Splits ranges in half with [`rayon::join`] until they fall below the
/// grain, leaving granularity and placement to the scheduler.
#[derive(Debug, Clone)]
pub(crate) struct ForkJoin {
    pool: Arc<ThreadPool>,
    workers: usize,
}

impl ForkJoin {
    pub(crate) fn new(workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("concord-fj-{index}"))
            .build()
            .map_err(|err| ComponentsError::ThreadPool {
                backend: Backend::ForkJoin,
                message: Arc::from(err.to_string()),
            })?;
        Ok(Self {
            pool: Arc::new(pool),
            workers,
        })
    }

    /// `min(2048, ceil(len / 8P))`, never below one.
    pub(crate) fn grain(&self, len: usize) -> usize {
        len.div_ceil(self.workers.saturating_mul(8))
            .clamp(1, MAX_GRAIN)
    }
}

impl Executor for ForkJoin {
    fn sum<F>(&self, len: usize, _partition: Partition, body: F) -> Result<usize>
    where
        F: Fn(Range<usize>) -> usize + Sync,
    {
        if len == 0 {
            return Ok(0);
        }
        let grain = self.grain(len);
        Ok(self.pool.install(|| split(0..len, grain, &body)))
    }
}

fn split<F>(range: Range<usize>, grain: usize, body: &F) -> usize
where
    F: Fn(Range<usize>) -> usize + Sync,
{
    if range.len() <= grain {
        return body(range);
    }
    let mid = range.start + range.len() / 2;
    let (left, right) = rayon::join(
        || split(range.start..mid, grain, body),
        || split(mid..range.end, grain, body),
    );
    left + right
}
