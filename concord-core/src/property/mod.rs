//! Property-based tests for the connected-components engine.
//!
//! Checks every strategy and backend against a breadth-first-search oracle,
//! verifies that relabelling the graph does not change the partition, and
//! repeats runs to catch scheduling-dependent results.

mod agreement;
mod ordering;
mod repetition;
mod strategies;
mod types;
