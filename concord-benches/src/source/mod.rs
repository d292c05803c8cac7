//! Seeded synthetic graphs for benchmarking.
//!
//! Two generators cover the regimes that separate the strategies: uniform
//! random sparse graphs, where label propagation converges in a few passes,
//! and shuffled chains, where it needs roughly one pass per chain hop.

mod errors;
mod graphs;

pub use errors::SyntheticError;
pub use graphs::{ChainConfig, RandomGraphConfig};
