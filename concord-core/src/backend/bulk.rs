//! Bulk-synchronous executor over a fixed rayon worker team.

use std::{
    ops::Range,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use rayon::{ThreadPool, prelude::*};

use super::{Executor, Partition, chunk_range, static_slice};
use crate::{Result, builder::Backend, error::ComponentsError};

/// Fixed team of `workers` threads. Static phases give each worker one
/// contiguous slice; dynamic phases let the team pull fixed-size chunks.
#[derive(Debug, Clone)]
pub(crate) struct BulkSynchronous {
    pool: Arc<ThreadPool>,
    workers: usize,
}

impl BulkSynchronous {
    pub(crate) fn new(workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("concord-bsp-{index}"))
            .build()
            .map_err(|err| ComponentsError::ThreadPool {
                backend: Backend::BulkSynchronous,
                message: Arc::from(err.to_string()),
            })?;
        Ok(Self {
            pool: Arc::new(pool),
            workers,
        })
    }
}

impl Executor for BulkSynchronous {
    fn sum<F>(&self, len: usize, partition: Partition, body: F) -> Result<usize>
    where
        F: Fn(Range<usize>) -> usize + Sync,
    {
        if len == 0 {
            return Ok(0);
        }

        match partition {
            Partition::Static => {
                let total = AtomicUsize::new(0);
                let parts = self.workers.min(len);
                let (body, total_ref) = (&body, &total);
                self.pool.scope(|scope| {
                    for index in 0..parts {
                        scope.spawn(move |_| {
                            let partial = body(static_slice(index, parts, len));
                            total_ref.fetch_add(partial, Ordering::Relaxed);
                        });
                    }
                });
                Ok(total.into_inner())
            }
            Partition::Dynamic { chunk } => {
                let chunks = len.div_ceil(chunk);
                Ok(self.pool.install(|| {
                    (0..chunks)
                        .into_par_iter()
                        .map(|index| body(chunk_range(index, chunk, len)))
                        .sum::<usize>()
                }))
            }
        }
    }
}
