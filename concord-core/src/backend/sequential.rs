use std::ops::Range;

use super::{Executor, Partition};
use crate::Result;

/// Single-threaded executor; the worker hint is accepted and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Sequential;

impl Executor for Sequential {
    fn sum<F>(&self, len: usize, _partition: Partition, body: F) -> Result<usize>
    where
        F: Fn(Range<usize>) -> usize + Sync,
    {
        Ok(body(0..len))
    }
}
