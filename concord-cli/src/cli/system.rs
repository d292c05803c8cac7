//! Host description read from `/proc` and the local clock.
//!
//! Every probe degrades to `"unknown"`, zero or `None` when the file is
//! missing, so reports still build on hosts without procfs.

use std::fs;

use serde::Serialize;

use super::report::round_places;

const KIB_PER_MB: f64 = 1024.0;

/// Host description included in every benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInfo {
    /// Local time the report was built, `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String,
    /// CPU model name.
    pub cpu_info: String,
    /// Total RAM in MB.
    pub ram_mb: f64,
    /// Total swap in MB.
    pub swap_mb: f64,
}

impl SystemInfo {
    /// Probes the current host.
    #[must_use]
    pub fn collect() -> Self {
        let cpu_info = fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|text| cpu_model(&text))
            .unwrap_or_else(|| "unknown".to_owned());
        let meminfo = fs::read_to_string("/proc/meminfo").unwrap_or_default();
        Self {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            cpu_info,
            ram_mb: kib_field_mb(&meminfo, "MemTotal").unwrap_or(0.0),
            swap_mb: kib_field_mb(&meminfo, "SwapTotal").unwrap_or(0.0),
        }
    }
}

/// Peak resident set size of this process in MB (`VmHWM`), when available.
#[must_use]
pub fn peak_memory_mb() -> Option<f64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    kib_field_mb(&status, "VmHWM")
}

/// Returns the first `model name` entry of a `/proc/cpuinfo` dump.
pub(super) fn cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim() == "model name")
        .map(|(_, value)| value.trim().to_owned())
        .filter(|model| !model.is_empty())
}

/// Reads a `Name:  1234 kB` field and converts it to MB.
pub(super) fn kib_field_mb(text: &str, field: &str) -> Option<f64> {
    let value = text.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key == field).then_some(value)
    })?;
    let mut parts = value.split_whitespace();
    let kibibytes = parts.next()?.parse::<u64>().ok()?;
    if parts.next().is_some_and(|unit| unit != "kB") {
        return None;
    }
    Some(round_places(kibibytes as f64 / KIB_PER_MB, 2))
}
