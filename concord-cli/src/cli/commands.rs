//! Argument parsing and command execution for the `concord` binary.

use std::{
    io::{self, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use concord_core::{
    Backend, ComponentsError, CscGraph, DEFAULT_CHUNK_SIZE, DEFAULT_WORKERS, EngineBuilder,
    Strategy,
};
use concord_providers_matrix_market::{MatrixMarketError, load_matrix_market};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{
    bench::run_trials,
    report::{AlgorithmResult, BenchReport, BenchmarkInfo, MatrixInfo},
    system::{SystemInfo, peak_memory_mb},
};

/// Timed trials per backend when `--trials` is omitted.
pub const DEFAULT_TRIALS: NonZeroUsize = NonZeroUsize::MIN.saturating_add(2);

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "concord",
    about = "Count connected components of sparse boolean matrices."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the number of connected components of a matrix.
    Count(CountCommand),
    /// Time one or more backends and print a JSON report.
    Bench(BenchCommand),
}

/// Options accepted by `concord count`.
#[derive(Debug, Args, Clone)]
pub struct CountCommand {
    /// Worker threads used by the parallel backends.
    #[arg(long, short = 't', default_value_t = DEFAULT_WORKERS)]
    pub threads: usize,

    /// Algorithm variant: 0 for label propagation, 1 for union-find.
    #[arg(long, short = 'v', default_value_t = 0)]
    pub variant: u32,

    /// Backend to run on.
    #[arg(long, short = 'b', value_parser = parse_backend)]
    pub backend: Option<Backend>,

    /// Columns per dynamically scheduled chunk.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Matrix Market file holding the adjacency matrix.
    pub matrix: PathBuf,
}

/// Options accepted by `concord bench`.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Worker threads used by the parallel backends.
    #[arg(long, short = 't', default_value_t = DEFAULT_WORKERS)]
    pub threads: usize,

    /// Timed trials per backend, after one untimed warm-up.
    #[arg(long, short = 'n', default_value_t = DEFAULT_TRIALS)]
    pub trials: NonZeroUsize,

    /// Algorithm variant: 0 for label propagation, 1 for union-find.
    #[arg(long, short = 'v', default_value_t = 0)]
    pub variant: u32,

    /// Backends to time; repeat the flag to select several. Defaults to every
    /// backend compiled into this build.
    #[arg(long = "backend", short = 'b', value_parser = parse_backend)]
    pub backends: Vec<Backend>,

    /// Columns per dynamically scheduled chunk.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Matrix Market file holding the adjacency matrix.
    pub matrix: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The matrix file could not be loaded.
    #[error("failed to load `{path}`: {source}")]
    Load {
        /// Path of the matrix file.
        path: PathBuf,
        /// Loader failure.
        #[source]
        source: MatrixMarketError,
    },
    /// Engine construction or execution failed.
    #[error(transparent)]
    Core(#[from] ComponentsError),
    /// Two runs on the same matrix disagreed.
    #[error("[{backend}] component counts differ between runs: expected {expected}, got {found}")]
    InconsistentResults {
        /// Backend whose run disagreed.
        backend: Backend,
        /// Count established by the first run.
        expected: usize,
        /// Count returned by the disagreeing run.
        found: usize,
    },
}

impl CliError {
    /// Returns the stable code of an underlying engine error.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => Some(error.code().as_str()),
            Self::Load { .. } | Self::InconsistentResults { .. } => None,
        }
    }
}

/// Result of `concord count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    /// Matrix that was analysed.
    pub matrix: PathBuf,
    /// Algorithm that produced the count.
    pub strategy: Strategy,
    /// Backend that produced the count.
    pub backend: Backend,
    /// Number of connected components.
    pub components: usize,
}

/// Output of one CLI invocation.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// A single component count.
    Count(CountSummary),
    /// A combined benchmark report.
    Bench(BenchReport),
}

/// Parses a backend name such as `worker-pool`.
///
/// # Errors
/// Returns a message listing the accepted names when `raw` is unknown.
///
/// # Examples
/// ```
/// use concord_cli::cli::parse_backend;
/// use concord_core::Backend;
///
/// assert_eq!(parse_backend("fork-join"), Ok(Backend::ForkJoin));
/// assert!(parse_backend("cilk").is_err());
/// ```
pub fn parse_backend(raw: &str) -> Result<Backend, String> {
    Backend::from_name(raw).ok_or_else(|| {
        let names: Vec<_> = Backend::ALL.iter().map(|backend| backend.as_str()).collect();
        format!("unknown backend `{raw}`; expected one of: {}", names.join(", "))
    })
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, engine setup or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use concord_cli::cli::{Cli, Command, CommandOutput, CountCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     "%%MatrixMarket matrix coordinate pattern symmetric\n3 3 1\n2 1\n",
/// )?;
/// let cli = Cli {
///     command: Command::Count(CountCommand {
///         threads: 2,
///         variant: 1,
///         backend: None,
///         chunk_size: 16,
///         matrix: file.path().to_path_buf(),
///     }),
/// };
/// let CommandOutput::Count(summary) = run_cli(cli)? else {
///     unreachable!("count returns a count summary");
/// };
/// assert_eq!(summary.components, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Count(count) => {
            span.record("command", "count");
            run_count(count).map(CommandOutput::Count)
        }
        Command::Bench(bench) => {
            span.record("command", "bench");
            run_bench(bench).map(CommandOutput::Bench)
        }
    }
}

#[instrument(
    name = "cli.count",
    err,
    skip(command),
    fields(matrix = %command.matrix.display(), threads = command.threads, variant = command.variant),
)]
pub(super) fn run_count(command: CountCommand) -> Result<CountSummary, CliError> {
    let strategy = Strategy::try_from(command.variant)?;
    let backend = command.backend.unwrap_or_default();
    let engine = EngineBuilder::new()
        .with_workers(command.threads)
        .with_strategy(strategy)
        .with_backend(backend)
        .with_chunk_size(command.chunk_size)
        .build()?;
    let graph = load(&command.matrix)?;
    let components = engine.count(&graph)?;
    info!(%strategy, %backend, components, "count completed");
    Ok(CountSummary {
        matrix: command.matrix,
        strategy,
        backend,
        components,
    })
}

#[instrument(
    name = "cli.bench",
    err,
    skip(command),
    fields(matrix = %command.matrix.display(), threads = command.threads, trials = command.trials.get()),
)]
pub(super) fn run_bench(command: BenchCommand) -> Result<BenchReport, CliError> {
    let strategy = Strategy::try_from(command.variant)?;
    let backends = if command.backends.is_empty() {
        Backend::ALL
            .into_iter()
            .filter(|backend| backend.is_available())
            .collect()
    } else {
        command.backends.clone()
    };
    let engines = backends
        .iter()
        .map(|&backend| {
            EngineBuilder::new()
                .with_workers(command.threads)
                .with_strategy(strategy)
                .with_backend(backend)
                .with_chunk_size(command.chunk_size)
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let graph = load(&command.matrix)?;
    let mut expected: Option<usize> = None;
    let mut results = Vec::with_capacity(engines.len());
    for engine in &engines {
        let backend = engine.backend();
        info!(%backend, "benchmarking backend");
        let run = run_trials(backend, command.trials, || engine.count(&graph))?;
        if let Some(expected) = expected
            && expected != run.components
        {
            return Err(CliError::InconsistentResults {
                backend,
                expected,
                found: run.components,
            });
        }
        expected = Some(run.components);
        results.push(AlgorithmResult::new(
            backend,
            strategy,
            &run,
            graph.nnz(),
            peak_memory_mb(),
        ));
    }
    AlgorithmResult::apply_baseline(&mut results, command.threads);

    Ok(BenchReport {
        sys_info: SystemInfo::collect(),
        matrix_info: MatrixInfo::new(&command.matrix, &graph),
        benchmark_info: BenchmarkInfo {
            threads: command.threads,
            trials: command.trials.get(),
            variant: strategy.variant(),
            strategy: strategy.as_str(),
            chunk_size: command.chunk_size,
        },
        results,
    })
}

fn load(path: &Path) -> Result<CscGraph, CliError> {
    load_matrix_market(path).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `output` to `writer`: the bare count for `count`, pretty-printed
/// JSON for `bench`.
///
/// # Errors
/// Returns [`io::Error`] if writing or serialisation fails.
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Count(summary) => writeln!(writer, "{}", summary.components),
        CommandOutput::Bench(report) => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)
        }
    }
}
