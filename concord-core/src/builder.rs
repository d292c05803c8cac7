//! Builder utilities for configuring a [`ComponentsEngine`].
//!
//! Exposes the strategy and backend selection surface together with the
//! validation performed before an engine is constructed.

use std::{fmt, num::NonZeroUsize};

use crate::{Result, engine::ComponentsEngine, error::ComponentsError};

/// Default number of workers, matching the command-line default.
pub const DEFAULT_WORKERS: usize = 8;

/// Default number of columns a worker claims per dynamic chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Selects the algorithm used to find connected components.
///
/// The raw selectors `0` and `1` are accepted through [`TryFrom<u32>`].
///
/// # Examples
/// ```
/// use concord_core::Strategy;
///
/// assert_eq!(Strategy::try_from(0)?, Strategy::LabelPropagation);
/// assert_eq!(Strategy::try_from(1)?, Strategy::UnionFind);
/// assert!(Strategy::try_from(2).is_err());
/// # Ok::<(), concord_core::ComponentsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Iterative minimum-label relaxation until a fixed point.
    #[default]
    LabelPropagation,
    /// Lock-free disjoint-set union followed by full compression.
    UnionFind,
}

impl Strategy {
    /// Returns the raw selector for this strategy.
    #[must_use]
    pub const fn variant(self) -> u32 {
        match self {
            Self::LabelPropagation => 0,
            Self::UnionFind => 1,
        }
    }

    /// Returns the stable name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LabelPropagation => "label-propagation",
            Self::UnionFind => "union-find",
        }
    }
}

impl TryFrom<u32> for Strategy {
    type Error = ComponentsError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::LabelPropagation),
            1 => Ok(Self::UnionFind),
            got => Err(ComponentsError::InvalidStrategy { got }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects the parallel execution model used by an engine.
///
/// `Sequential` is always available. The other backends need a thread
/// runtime and are compiled behind the `parallel` feature, except
/// `WorkerPool` which only uses scoped operating-system threads.
///
/// # Examples
/// ```
/// use concord_core::Backend;
///
/// assert_eq!(Backend::ForkJoin.to_string(), "fork-join");
/// assert_eq!(Backend::from_name("worker-pool"), Some(Backend::WorkerPool));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Single-threaded reference execution.
    #[default]
    Sequential,
    /// Fixed worker team with a barrier between phases.
    BulkSynchronous,
    /// Recursive divide-and-conquer over a work-stealing pool.
    ForkJoin,
    /// Explicit threads claiming column chunks from a shared cursor.
    WorkerPool,
}

impl Backend {
    /// Every backend, in report order.
    pub const ALL: [Self; 4] = [
        Self::Sequential,
        Self::BulkSynchronous,
        Self::ForkJoin,
        Self::WorkerPool,
    ];

    /// Returns the stable name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::BulkSynchronous => "bulk-synchronous",
            Self::ForkJoin => "fork-join",
            Self::WorkerPool => "worker-pool",
        }
    }

    /// Parses a stable backend name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|backend| backend.as_str() == name)
    }

    /// Returns whether the backend is compiled into this build.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Sequential | Self::WorkerPool => true,
            Self::BulkSynchronous | Self::ForkJoin => cfg!(feature = "parallel"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`ComponentsEngine`] instances.
///
/// # Examples
/// ```
/// use concord_core::{Backend, EngineBuilder, Strategy};
///
/// let engine = EngineBuilder::new()
///     .with_workers(4)
///     .with_strategy(Strategy::UnionFind)
///     .with_backend(Backend::WorkerPool)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.workers().get(), 4);
/// assert_eq!(engine.strategy(), Strategy::UnionFind);
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    workers: usize,
    strategy: Strategy,
    backend: Backend,
    chunk_size: usize,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            strategy: Strategy::default(),
            backend: Backend::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl EngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use concord_core::{Backend, EngineBuilder, Strategy};
    ///
    /// let builder = EngineBuilder::new();
    /// assert_eq!(builder.workers(), 8);
    /// assert_eq!(builder.strategy(), Strategy::LabelPropagation);
    /// assert_eq!(builder.backend(), Backend::Sequential);
    /// assert_eq!(builder.chunk_size(), 4096);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the worker count hint.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Returns the configured worker count hint.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Selects the algorithm.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Selects the execution backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Returns the configured execution backend.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Overrides the number of columns claimed per dynamic chunk.
    ///
    /// Only the worker-pool backend and label propagation's dynamic
    /// partitioning read this value.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Returns the configured chunk size.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the configuration and constructs a [`ComponentsEngine`].
    ///
    /// Thread pools needed by the selected backend are built here, once.
    ///
    /// # Errors
    /// Returns [`ComponentsError::InvalidWorkerCount`] or
    /// [`ComponentsError::InvalidChunkSize`] for zero values,
    /// [`ComponentsError::BackendUnavailable`] when the backend is not compiled
    /// in, and [`ComponentsError::ThreadPool`] when its runtime cannot start.
    ///
    /// # Examples
    /// ```
    /// use concord_core::{ComponentsError, EngineBuilder};
    ///
    /// let err = EngineBuilder::new().with_workers(0).build().unwrap_err();
    /// assert!(matches!(err, ComponentsError::InvalidWorkerCount { got: 0 }));
    /// ```
    pub fn build(self) -> Result<ComponentsEngine> {
        let workers = NonZeroUsize::new(self.workers)
            .ok_or(ComponentsError::InvalidWorkerCount { got: self.workers })?;
        let chunk_size = NonZeroUsize::new(self.chunk_size)
            .ok_or(ComponentsError::InvalidChunkSize {
                got: self.chunk_size,
            })?;

        ComponentsEngine::new(workers, chunk_size, self.strategy, self.backend)
    }
}
