//! Random and chain graph generators.

use concord_core::CscGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::SyntheticError;

/// Uniform random sparse graph.
///
/// # Examples
///
/// ```
/// use concord_benches::source::RandomGraphConfig;
///
/// let config = RandomGraphConfig { node_count: 100, edge_count: 150, seed: 7 };
/// let graph = config.generate().expect("valid config");
/// assert_eq!(graph.node_count(), 100);
/// assert!(graph.nnz() <= 300);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Undirected edges to draw; duplicates and self-loops collapse.
    pub edge_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Draws `edge_count` endpoint pairs uniformly and stores both
    /// directions.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero.
    pub fn generate(&self) -> Result<CscGraph, SyntheticError> {
        if self.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let edges: Vec<(usize, usize)> = (0..self.edge_count)
            .map(|_| {
                (
                    rng.gen_range(0..self.node_count),
                    rng.gen_range(0..self.node_count),
                )
            })
            .collect();
        Ok(CscGraph::from_edges(self.node_count, &edges)?)
    }
}

/// Disjoint paths over a shuffled node order.
///
/// Consecutive nodes of a path have unrelated indices, so minimum labels
/// travel one hop per label-propagation pass.
///
/// # Examples
///
/// ```
/// use concord_benches::source::ChainConfig;
///
/// let config = ChainConfig { node_count: 10, chain_length: 4, seed: 3 };
/// assert_eq!(config.component_count(), 3);
/// let graph = config.generate().expect("valid config");
/// assert_eq!(graph.nnz(), 2 * (10 - 3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ChainConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Nodes per chain; the last chain may be shorter.
    pub chain_length: usize,
    /// RNG seed for the node order.
    pub seed: u64,
}

impl ChainConfig {
    /// Returns the number of chains, and so of components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        match self.node_count.checked_div(self.chain_length) {
            Some(full) if matches!(self.node_count.checked_rem(self.chain_length), Some(0)) => full,
            Some(full) => full.saturating_add(1),
            None => 0,
        }
    }

    /// Shuffles the nodes and links each run of `chain_length` into a path.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] or
    /// [`SyntheticError::ZeroChainLength`] for empty configurations.
    pub fn generate(&self) -> Result<CscGraph, SyntheticError> {
        if self.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if self.chain_length == 0 {
            return Err(SyntheticError::ZeroChainLength);
        }
        let mut order: Vec<usize> = (0..self.node_count).collect();
        order.shuffle(&mut SmallRng::seed_from_u64(self.seed));

        let edges: Vec<(usize, usize)> = order
            .chunks(self.chain_length)
            .flat_map(|chain| chain.windows(2))
            .filter_map(|pair| match pair {
                &[left, right] => Some((left, right)),
                _ => None,
            })
            .collect();
        Ok(CscGraph::from_edges(self.node_count, &edges)?)
    }
}
