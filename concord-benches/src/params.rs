//! Benchmark parameter types used as Criterion ids.

use std::fmt;

use concord_core::{Backend, Strategy};

/// Parameters identifying one engine benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct EngineBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Worker count handed to the engine.
    pub workers: usize,
    /// Backend under test.
    pub backend: Backend,
}

impl fmt::Display for EngineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},w={}",
            self.backend, self.node_count, self.workers
        )
    }
}

/// Parameters identifying one strategy comparison run.
#[derive(Clone, Copy, Debug)]
pub struct StrategyBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Nodes per chain component.
    pub chain_length: usize,
    /// Strategy under test.
    pub strategy: Strategy,
}

impl fmt::Display for StrategyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},chain={}",
            self.strategy, self.node_count, self.chain_length
        )
    }
}
