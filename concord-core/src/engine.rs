//! Connected-components engine and the uniform `compute_components` entry
//! point.
//!
//! A [`ComponentsEngine`] resolves its backend once, at build time, to a
//! concrete executor. Every call then dispatches to strategy code that is
//! monomorphised for that executor.

use std::num::NonZeroUsize;

use tracing::instrument;

#[cfg(feature = "parallel")]
use crate::backend::{BulkSynchronous, ForkJoin};
#[cfg(not(feature = "parallel"))]
use crate::error::ComponentsError;
use crate::{
    Result,
    backend::{Executor, Sequential, WorkerPool},
    builder::{Backend, EngineBuilder, Strategy},
    graph::CscGraph,
    labels::ComponentLabels,
    strategy::{label_propagation, snapshot, union_find},
};

#[derive(Debug, Clone)]
enum Runtime {
    Sequential(Sequential),
    #[cfg(feature = "parallel")]
    BulkSynchronous(BulkSynchronous),
    #[cfg(feature = "parallel")]
    ForkJoin(ForkJoin),
    WorkerPool(WorkerPool),
}

impl Runtime {
    fn new(backend: Backend, workers: usize) -> Result<Self> {
        match backend {
            Backend::Sequential => Ok(Self::Sequential(Sequential)),
            #[cfg(feature = "parallel")]
            Backend::BulkSynchronous => Ok(Self::BulkSynchronous(BulkSynchronous::new(workers)?)),
            #[cfg(feature = "parallel")]
            Backend::ForkJoin => Ok(Self::ForkJoin(ForkJoin::new(workers)?)),
            #[cfg(not(feature = "parallel"))]
            Backend::BulkSynchronous | Backend::ForkJoin => {
                Err(ComponentsError::BackendUnavailable { requested: backend })
            }
            Backend::WorkerPool => Ok(Self::WorkerPool(WorkerPool::new(workers))),
        }
    }
}

/// Computes connected components of [`CscGraph`]s with a fixed strategy and
/// backend.
///
/// Engines are cheap to clone and may be reused across graphs; thread pools
/// are shared between clones.
///
/// # Examples
/// ```
/// use concord_core::{Backend, CscGraph, EngineBuilder, Strategy};
///
/// let graph = CscGraph::from_edges(5, &[(0, 1), (1, 2), (3, 4)])?;
/// let engine = EngineBuilder::new()
///     .with_workers(2)
///     .with_strategy(Strategy::LabelPropagation)
///     .with_backend(Backend::WorkerPool)
///     .build()?;
/// assert_eq!(engine.count(&graph)?, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComponentsEngine {
    workers: NonZeroUsize,
    chunk_size: NonZeroUsize,
    strategy: Strategy,
    backend: Backend,
    runtime: Runtime,
}

impl ComponentsEngine {
    pub(crate) fn new(
        workers: NonZeroUsize,
        chunk_size: NonZeroUsize,
        strategy: Strategy,
        backend: Backend,
    ) -> Result<Self> {
        let runtime = Runtime::new(backend, workers.get())?;
        Ok(Self {
            workers,
            chunk_size,
            strategy,
            backend,
            runtime,
        })
    }

    /// Returns the worker count hint.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Returns the number of columns per dynamic chunk.
    #[must_use]
    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the configured backend.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Counts the connected components of `graph`.
    ///
    /// A graph without nodes has zero components.
    ///
    /// # Errors
    /// Returns [`crate::ComponentsError::Allocation`] when per-node state
    /// cannot be reserved and [`crate::ComponentsError::WorkerSpawn`] when a
    /// worker thread cannot be started.
    #[instrument(
        name = "components.count",
        err,
        skip(self, graph),
        fields(
            strategy = %self.strategy,
            backend = %self.backend,
            workers = self.workers.get(),
            nodes = graph.node_count(),
            edges = graph.nnz(),
        ),
    )]
    pub fn count(&self, graph: &CscGraph) -> Result<usize> {
        if graph.is_empty() {
            return Ok(0);
        }
        match &self.runtime {
            Runtime::Sequential(executor) => self.count_with(executor, graph),
            #[cfg(feature = "parallel")]
            Runtime::BulkSynchronous(executor) => self.count_with(executor, graph),
            #[cfg(feature = "parallel")]
            Runtime::ForkJoin(executor) => self.count_with(executor, graph),
            Runtime::WorkerPool(executor) => self.count_with(executor, graph),
        }
    }

    /// Labels every node of `graph` with the minimum node of its component.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::count`].
    #[instrument(
        name = "components.labels",
        err,
        skip(self, graph),
        fields(
            strategy = %self.strategy,
            backend = %self.backend,
            workers = self.workers.get(),
            nodes = graph.node_count(),
            edges = graph.nnz(),
        ),
    )]
    pub fn labels(&self, graph: &CscGraph) -> Result<ComponentLabels> {
        if graph.is_empty() {
            return Ok(ComponentLabels::default());
        }
        match &self.runtime {
            Runtime::Sequential(executor) => self.labels_with(executor, graph),
            #[cfg(feature = "parallel")]
            Runtime::BulkSynchronous(executor) => self.labels_with(executor, graph),
            #[cfg(feature = "parallel")]
            Runtime::ForkJoin(executor) => self.labels_with(executor, graph),
            Runtime::WorkerPool(executor) => self.labels_with(executor, graph),
        }
    }

    fn count_with<E: Executor>(&self, executor: &E, graph: &CscGraph) -> Result<usize> {
        let chunk = self.chunk_size.get();
        match self.strategy {
            Strategy::LabelPropagation => label_propagation::count(executor, graph, chunk),
            Strategy::UnionFind => union_find::count(executor, graph, chunk),
        }
    }

    fn labels_with<E: Executor>(&self, executor: &E, graph: &CscGraph) -> Result<ComponentLabels> {
        let chunk = self.chunk_size.get();
        let labels = match self.strategy {
            Strategy::LabelPropagation => {
                snapshot(&label_propagation::propagate(executor, graph, chunk)?)?
            }
            Strategy::UnionFind => {
                snapshot(union_find::build_forest(executor, graph, chunk)?.parents())?
            }
        };
        Ok(ComponentLabels::from_canonical(labels))
    }
}

/// Counts the connected components of `graph` with a one-shot engine.
///
/// `worker_count` is a hint; the sequential backend accepts and ignores it.
///
/// # Errors
/// Returns [`crate::ComponentsError::InvalidWorkerCount`] when
/// `worker_count` is zero, plus any error from [`EngineBuilder::build`] or
/// [`ComponentsEngine::count`].
///
/// # Examples
/// ```
/// use concord_core::{Backend, CscGraph, Strategy, compute_components};
///
/// let graph = CscGraph::empty(5);
/// for backend in [Backend::Sequential, Backend::WorkerPool] {
///     assert_eq!(compute_components(&graph, 4, Strategy::UnionFind, backend)?, 5);
/// }
/// # Ok::<(), concord_core::ComponentsError>(())
/// ```
pub fn compute_components(
    graph: &CscGraph,
    worker_count: usize,
    strategy: Strategy,
    backend: Backend,
) -> Result<usize> {
    EngineBuilder::new()
        .with_workers(worker_count)
        .with_strategy(strategy)
        .with_backend(backend)
        .build()?
        .count(graph)
}
