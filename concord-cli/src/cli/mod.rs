//! Command-line interface for counting connected components of Matrix
//! Market graphs.
//!
//! `concord count` prints the component count of one matrix. `concord bench`
//! times every selected backend on the same matrix and prints a combined
//! JSON report.

mod bench;
mod commands;
mod report;
mod system;

pub use bench::{TrialRun, run_trials};
pub use commands::{
    BenchCommand, Cli, CliError, Command, CommandOutput, CountCommand, CountSummary,
    DEFAULT_TRIALS, parse_backend, render_output, run_cli,
};
pub use report::{AlgorithmResult, BenchReport, BenchmarkInfo, MatrixInfo, Statistics};
pub use system::{SystemInfo, peak_memory_mb};

#[cfg(test)]
mod test_helpers;
