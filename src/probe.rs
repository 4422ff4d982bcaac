//! Process introspection: uptime, memory, runtime and timestamps.

use std::time::{Duration, Instant};

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

/// `2024-03-05T07:08:09.123Z`
const ISO_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Memory footprint of the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Resident set size in bytes.
    pub resident_bytes: u64,
    /// Virtual memory size in bytes.
    pub virtual_bytes: u64,
}

impl MemoryUsage {
    /// Resident memory in whole megabytes (rounded).
    pub fn resident_mb(&self) -> u64 {
        to_megabytes(self.resident_bytes)
    }

    /// Virtual memory in whole megabytes (rounded).
    pub fn virtual_mb(&self) -> u64 {
        to_megabytes(self.virtual_bytes)
    }
}

/// Time elapsed since `started`.
pub fn uptime(started: Instant) -> Duration {
    started.elapsed()
}

/// Sample the current process's memory usage.
///
/// Returns `None` when the process table cannot be read.
pub fn memory_usage() -> Option<MemoryUsage> {
    let pid = sysinfo::get_current_pid()
        .inspect_err(|e| warn!("Unable to resolve current pid: {}", e))
        .ok()?;

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );

    let process = system.process(pid)?;
    Some(MemoryUsage {
        resident_bytes: process.memory(),
        virtual_bytes: process.virtual_memory(),
    })
}

/// Compiler version the binary was built with.
pub fn runtime_version() -> &'static str {
    env!("SHOWCASE_RUSTC_VERSION")
}

/// Target operating system (`linux`, `macos`, `windows`, ...).
pub fn platform() -> &'static str {
    std::env::consts::OS
}

/// Format a timestamp as UTC ISO-8601 with millisecond precision.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    at.to_offset(UtcOffset::UTC)
        .format(ISO_MILLIS)
        .inspect_err(|e| warn!("Unable to format {} as ISO-8601: {:?}", at, e))
        .unwrap_or_default()
}

/// Current time as UTC ISO-8601.
pub fn now_iso() -> String {
    iso_timestamp(OffsetDateTime::now_utc())
}

fn to_megabytes(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_MB).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn iso_timestamp_has_millis_and_zulu_suffix() {
        let at = datetime!(2024-12-31 23:59:59.5 UTC);
        assert_eq!(iso_timestamp(at), "2024-12-31T23:59:59.500Z");
    }

    #[test]
    fn iso_timestamp_normalizes_offset_to_utc() {
        let at = datetime!(2024-01-01 02:00:00 +02:00);
        assert_eq!(iso_timestamp(at), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn megabytes_round_to_nearest() {
        assert_eq!(to_megabytes(0), 0);
        assert_eq!(to_megabytes(1024 * 1024), 1);
        assert_eq!(to_megabytes(1024 * 1024 * 3 / 2), 2);
        assert_eq!(to_megabytes(1024 * 1024 * 5 / 4), 1);
    }

    #[test]
    fn uptime_is_monotonic() {
        let started = Instant::now();
        let first = uptime(started);
        let second = uptime(started);
        assert!(second >= first);
    }

    #[test]
    fn memory_usage_reports_current_process() {
        if let Some(usage) = memory_usage() {
            assert!(usage.resident_bytes > 0);
        }
    }

    #[test]
    fn runtime_version_names_rustc() {
        assert!(runtime_version().starts_with("rustc"));
        assert!(!platform().is_empty());
    }
}
