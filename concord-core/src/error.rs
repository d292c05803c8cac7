//! Error types for the concord core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::Backend;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::CscGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The column pointer array did not hold `ncols + 1` offsets.
    #[error("column pointer array has length {len} but {ncols} columns need {expected}")]
    ColumnPointerLength {
        /// Length of the supplied column pointer array.
        len: usize,
        /// Declared column count.
        ncols: usize,
        /// Required length (`ncols + 1`).
        expected: usize,
    },
    /// The first column offset was not zero.
    #[error("column pointer array must start at 0 (got {got})")]
    ColumnPointerStart {
        /// The offending first offset.
        got: usize,
    },
    /// Column offsets decreased between two adjacent columns.
    #[error("column pointer decreases at column {column}: {current} > {next}")]
    ColumnPointerNotMonotonic {
        /// Column whose end offset is smaller than its start offset.
        column: usize,
        /// Start offset of the column.
        current: usize,
        /// End offset of the column.
        next: usize,
    },
    /// The final column offset did not match the number of stored entries.
    #[error("column pointer ends at {last} but {nnz} row indices were supplied")]
    ColumnPointerEnd {
        /// Final offset in the column pointer array.
        last: usize,
        /// Number of supplied row indices.
        nnz: usize,
    },
    /// A stored row index was outside `[0, nrows)`.
    #[error("row index {row} at entry {entry} is out of bounds for {nrows} rows")]
    RowIndexOutOfBounds {
        /// Position of the entry in the row index array.
        entry: usize,
        /// The offending row index.
        row: usize,
        /// Declared row count.
        nrows: usize,
    },
    /// An edge endpoint referenced a node outside the graph.
    #[error("edge ({left}, {right}) references a node outside 0..{node_count}")]
    EdgeOutOfBounds {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The column pointer array had the wrong length.
        ColumnPointerLength => ColumnPointerLength { .. } => "GRAPH_COLUMN_POINTER_LENGTH",
        /// The first column offset was not zero.
        ColumnPointerStart => ColumnPointerStart { .. } => "GRAPH_COLUMN_POINTER_START",
        /// Column offsets decreased.
        ColumnPointerNotMonotonic => ColumnPointerNotMonotonic { .. } => "GRAPH_COLUMN_POINTER_NOT_MONOTONIC",
        /// The final offset did not match the entry count.
        ColumnPointerEnd => ColumnPointerEnd { .. } => "GRAPH_COLUMN_POINTER_END",
        /// A row index was out of bounds.
        RowIndexOutOfBounds => RowIndexOutOfBounds { .. } => "GRAPH_ROW_INDEX_OUT_OF_BOUNDS",
        /// An edge endpoint was out of bounds.
        EdgeOutOfBounds => EdgeOutOfBounds { .. } => "GRAPH_EDGE_OUT_OF_BOUNDS",
    }
}

/// Error type produced when configuring or running a
/// [`crate::ComponentsEngine`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComponentsError {
    /// The worker count hint must be positive.
    #[error("worker count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The rejected worker count.
        got: usize,
    },
    /// Dynamic scheduling chunks must hold at least one column.
    #[error("chunk size must be at least 1 (got {got})")]
    InvalidChunkSize {
        /// The rejected chunk size.
        got: usize,
    },
    /// The raw strategy selector did not name a known strategy.
    #[error("unknown strategy variant {got}; expected 0 (label propagation) or 1 (union-find)")]
    InvalidStrategy {
        /// The rejected selector.
        got: u32,
    },
    /// A per-node buffer could not be allocated.
    #[error("failed to allocate {buffer} for {len} elements")]
    Allocation {
        /// Name of the buffer that could not be reserved.
        buffer: &'static str,
        /// Requested element count.
        len: usize,
    },
    /// The requested backend is not compiled into this build.
    #[error("the requested backend `{requested}` is not available in this build")]
    BackendUnavailable {
        /// Backend that could not be satisfied by the current build.
        requested: Backend,
    },
    /// The backend's thread pool could not be constructed.
    #[error("failed to build the `{backend}` thread pool: {message}")]
    ThreadPool {
        /// Backend whose runtime failed to start.
        backend: Backend,
        /// Message reported by the runtime.
        message: Arc<str>,
    },
    /// An operating-system worker thread could not be spawned.
    #[error("failed to spawn worker {worker}: {message}")]
    WorkerSpawn {
        /// Index of the worker that failed to start.
        worker: usize,
        /// Message reported by the operating system.
        message: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`ComponentsError`] variants.
    enum ComponentsErrorCode for ComponentsError {
        /// The worker count hint must be positive.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "CONCORD_INVALID_WORKER_COUNT",
        /// Dynamic scheduling chunks must be non-empty.
        InvalidChunkSize => InvalidChunkSize { .. } => "CONCORD_INVALID_CHUNK_SIZE",
        /// The strategy selector was not recognised.
        InvalidStrategy => InvalidStrategy { .. } => "CONCORD_INVALID_STRATEGY",
        /// A per-node buffer could not be allocated.
        Allocation => Allocation { .. } => "CONCORD_ALLOCATION_FAILED",
        /// The requested backend is not compiled in.
        BackendUnavailable => BackendUnavailable { .. } => "CONCORD_BACKEND_UNAVAILABLE",
        /// The backend thread pool could not be built.
        ThreadPool => ThreadPool { .. } => "CONCORD_THREAD_POOL_FAILED",
        /// A worker thread could not be spawned.
        WorkerSpawn => WorkerSpawn { .. } => "CONCORD_WORKER_SPAWN_FAILED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ComponentsError>;
