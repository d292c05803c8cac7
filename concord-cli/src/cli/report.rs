//! Benchmark report layout and trial statistics.
//!
//! Times are serialised in seconds with six decimals; memory, throughput and
//! sizes in MB with two; speedup and efficiency with four.

use std::path::Path;

use concord_core::{Backend, CscGraph, Strategy};
use serde::{Serialize, Serializer};

use super::{bench::TrialRun, system::SystemInfo};

/// Combined report printed by `concord bench`.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Host description captured when the report was built.
    pub sys_info: SystemInfo,
    /// Shape of the benchmarked matrix.
    pub matrix_info: MatrixInfo,
    /// Parameters shared by every result.
    pub benchmark_info: BenchmarkInfo,
    /// One entry per backend, in run order.
    pub results: Vec<AlgorithmResult>,
}

/// Shape of the benchmarked matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixInfo {
    /// Path as given on the command line.
    pub path: String,
    /// Row count, equal to the node count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
    /// Stored entries.
    pub nnz: usize,
}

impl MatrixInfo {
    /// Describes `graph`, loaded from `path`.
    #[must_use]
    pub fn new(path: &Path, graph: &CscGraph) -> Self {
        Self {
            path: path.display().to_string(),
            rows: graph.nrows(),
            cols: graph.ncols(),
            nnz: graph.nnz(),
        }
    }
}

/// Parameters shared by every result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkInfo {
    /// Worker count hint handed to each engine.
    pub threads: usize,
    /// Timed trials per backend.
    pub trials: usize,
    /// Numeric algorithm selector.
    pub variant: u32,
    /// Algorithm name.
    pub strategy: &'static str,
    /// Columns per dynamically scheduled chunk.
    pub chunk_size: usize,
}

/// Timing summary of a set of trials, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    /// Arithmetic mean.
    #[serde(serialize_with = "six_places")]
    pub mean_time_s: f64,
    /// Sample standard deviation; zero for a single trial.
    #[serde(serialize_with = "six_places")]
    pub std_dev_s: f64,
    /// Median; the mean of the two middle samples for an even count.
    #[serde(serialize_with = "six_places")]
    pub median_time_s: f64,
    /// Fastest trial.
    #[serde(serialize_with = "six_places")]
    pub min_time_s: f64,
    /// Slowest trial.
    #[serde(serialize_with = "six_places")]
    pub max_time_s: f64,
}

impl Statistics {
    /// Summarises `samples`, or returns `None` when there are none.
    ///
    /// # Examples
    /// ```
    /// use concord_cli::cli::Statistics;
    ///
    /// let stats = Statistics::from_samples(&[3.0, 1.0, 2.0]).expect("non-empty");
    /// assert_eq!(stats.median_time_s, 2.0);
    /// assert_eq!(stats.min_time_s, 1.0);
    /// assert_eq!(stats.std_dev_s, 1.0);
    /// ```
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let min = *sorted.first()?;
        let max = *sorted.last()?;

        let len = sorted.len();
        let middle = sorted.get(len / 2).copied()?;
        let median = if len % 2 == 1 {
            middle
        } else {
            let lower = sorted.get(len / 2 - 1).copied()?;
            (lower + middle) / 2.0
        };

        let count = len as f64;
        let mean = sorted.iter().sum::<f64>() / count;
        let std_dev = if len > 1 {
            let squares: f64 = sorted.iter().map(|time| (time - mean).powi(2)).sum();
            (squares / (count - 1.0)).sqrt()
        } else {
            0.0
        };

        Some(Self {
            mean_time_s: mean,
            std_dev_s: std_dev,
            median_time_s: median,
            min_time_s: min,
            max_time_s: max,
        })
    }
}

/// Outcome of benchmarking one backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    /// Backend name.
    pub algorithm: &'static str,
    /// Numeric algorithm selector.
    pub algorithm_variant: u32,
    /// Component count agreed by the warm-up and every trial.
    pub connected_components: usize,
    /// Trial timings.
    pub statistics: Statistics,
    /// Stored entries processed per second of mean trial time.
    #[serde(serialize_with = "two_places")]
    pub throughput_edges_per_sec: f64,
    /// Process peak resident memory after the trials, when the host reports it.
    #[serde(serialize_with = "optional_two_places")]
    pub memory_peak_mb: Option<f64>,
    /// Sequential mean time divided by this mean time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_four_places"
    )]
    pub speedup: Option<f64>,
    /// Speedup divided by the worker count.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_four_places"
    )]
    pub efficiency: Option<f64>,
    #[serde(skip)]
    backend: Backend,
}

impl AlgorithmResult {
    /// Summarises `run` for `backend` on a matrix with `nnz` stored entries.
    #[must_use]
    pub fn new(
        backend: Backend,
        strategy: Strategy,
        run: &TrialRun,
        nnz: usize,
        memory_peak_mb: Option<f64>,
    ) -> Self {
        let statistics = Statistics::from_samples(&run.times).unwrap_or_default();
        let throughput_edges_per_sec = if statistics.mean_time_s > 0.0 {
            nnz as f64 / statistics.mean_time_s
        } else {
            0.0
        };
        Self {
            algorithm: backend.as_str(),
            algorithm_variant: strategy.variant(),
            connected_components: run.components,
            statistics,
            throughput_edges_per_sec,
            memory_peak_mb,
            speedup: None,
            efficiency: None,
            backend,
        }
    }

    /// Returns the backend that produced this result.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Fills speedup and efficiency of every parallel result against the
    /// sequential one. Leaves them empty when no sequential run is present.
    pub fn apply_baseline(results: &mut [Self], threads: usize) {
        let Some(baseline) = results
            .iter()
            .find(|result| result.backend == Backend::Sequential)
            .map(|result| result.statistics.mean_time_s)
        else {
            return;
        };
        for result in results
            .iter_mut()
            .filter(|result| result.backend != Backend::Sequential)
        {
            let mean = result.statistics.mean_time_s;
            if mean > 0.0 && threads > 0 {
                let speedup = baseline / mean;
                result.speedup = Some(speedup);
                result.efficiency = Some(speedup / threads as f64);
            }
        }
    }
}

pub(super) fn round_places(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

fn six_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_places(*value, 6))
}

fn two_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_places(*value, 2))
}

fn optional_two_places<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(*value, 2, serializer)
}

fn optional_four_places<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(*value, 4, serializer)
}

fn serialize_rounded<S: Serializer>(
    value: Option<f64>,
    places: i32,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_f64(round_places(value, places)),
        None => serializer.serialize_none(),
    }
}
