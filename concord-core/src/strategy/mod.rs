//! Connected-components algorithms written once against [`Executor`].
//!
//! Each strategy owns its per-node state for the duration of one call and
//! releases it on return.

mod bitmap;
pub(crate) mod label_propagation;
pub(crate) mod union_find;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Result, error::ComponentsError};

pub(crate) use bitmap::AtomicBitmap;

/// Allocates `len` zeroed atomic slots, reporting exhaustion as an error.
pub(crate) fn try_atomic_vec(buffer: &'static str, len: usize) -> Result<Vec<AtomicUsize>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| ComponentsError::Allocation { buffer, len })?;
    values.resize_with(len, AtomicUsize::default);
    Ok(values)
}

/// Copies atomic slots into plain values once every worker has joined.
pub(crate) fn snapshot(values: &[AtomicUsize]) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    out.try_reserve_exact(values.len())
        .map_err(|_| ComponentsError::Allocation {
            buffer: "labels",
            len: values.len(),
        })?;
    out.extend(values.iter().map(|value| value.load(Ordering::Relaxed)));
    Ok(out)
}
