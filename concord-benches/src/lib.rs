//! Benchmark support crate for concord.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks of every strategy and backend.

pub mod error;
pub mod params;
pub mod source;
