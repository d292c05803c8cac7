//! Shared test utilities used across concord crates.

pub mod ci;
pub mod tracing;
