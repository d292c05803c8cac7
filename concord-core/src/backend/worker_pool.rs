//! Explicit worker threads claiming chunks from a shared atomic cursor.

use std::{
    ops::Range,
    panic,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use crossbeam_utils::CachePadded;

use super::{Executor, Partition, static_slice};
use crate::{Result, error::ComponentsError};

/// Spawns up to `workers` scoped threads per phase; joining them is the
/// barrier. Dynamic phases claim chunks with `fetch_add` on a padded cursor
/// until it passes the end of the range.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub(crate) fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Executor for WorkerPool {
    fn sum<F>(&self, len: usize, partition: Partition, body: F) -> Result<usize>
    where
        F: Fn(Range<usize>) -> usize + Sync,
    {
        if len == 0 {
            return Ok(0);
        }

        let partition = match partition {
            Partition::Dynamic { chunk } => Partition::Dynamic {
                chunk: chunk.clamp(1, len),
            },
            Partition::Static => Partition::Static,
        };
        let threads = match partition {
            Partition::Static => self.workers.min(len),
            Partition::Dynamic { chunk } => self.workers.min(len.div_ceil(chunk)),
        };
        let cursor = CachePadded::new(AtomicUsize::new(0));
        let (body, cursor) = (&body, &cursor);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(threads);
            for worker in 0..threads {
                let handle = thread::Builder::new()
                    .name(format!("concord-worker-{worker}"))
                    .spawn_scoped(scope, move || match partition {
                        Partition::Static => body(static_slice(worker, threads, len)),
                        Partition::Dynamic { chunk } => claim_chunks(cursor, chunk, len, body),
                    })
                    .map_err(|err| ComponentsError::WorkerSpawn {
                        worker,
                        message: Arc::from(err.to_string()),
                    })?;
                handles.push(handle);
            }

            let mut total = 0;
            for handle in handles {
                match handle.join() {
                    Ok(partial) => total += partial,
                    Err(payload) => panic::resume_unwind(payload),
                }
            }
            Ok(total)
        })
    }
}

fn claim_chunks<F>(cursor: &AtomicUsize, chunk: usize, len: usize, body: &F) -> usize
where
    F: Fn(Range<usize>) -> usize + Sync,
{
    let mut partial = 0;
    loop {
        let start = cursor.fetch_add(chunk, Ordering::Relaxed);
        if start >= len {
            return partial;
        }
        partial += body(start..start.saturating_add(chunk).min(len));
    }
}
