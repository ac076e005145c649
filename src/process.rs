//! Host process statistics reported by `GET /health`.

use std::time::Instant;

use serde::Serialize;

/// Resident/virtual memory of the current process, in bytes.
///
/// Fields the host does not expose are reported as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    pub rss: u64,
    #[serde(rename = "virtual")]
    pub virtual_size: u64,
    pub peak_rss: u64,
}

impl MemoryUsage {
    /// Take a fresh snapshot from the host.
    pub fn sample() -> Self {
        match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => Self::from_proc_status(&status),
            Err(e) => {
                tracing::debug!(error = %e, "memory statistics unavailable");
                Self::default()
            }
        }
    }

    /// Parse the `Vm*` lines of a Linux `/proc/<pid>/status` file.
    pub fn from_proc_status(status: &str) -> Self {
        let mut usage = Self::default();
        for line in status.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let Some(bytes) = parse_kb(value) else {
                continue;
            };
            match key {
                "VmRSS" => usage.rss = bytes,
                "VmSize" => usage.virtual_size = bytes,
                "VmHWM" => usage.peak_rss = bytes,
                _ => {}
            }
        }
        usage
    }
}

// "   1234 kB" -> 1263616
fn parse_kb(value: &str) -> Option<u64> {
    let mut parts = value.split_whitespace();
    let n: u64 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some("kB") | None => Some(n * 1024),
        Some(_) => None,
    }
}

/// Seconds elapsed since `started`.
pub fn uptime_secs(started: Instant) -> f64 {
    started.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = "Name:\theroku-fixture\n\
        Umask:\t0022\n\
        State:\tS (sleeping)\n\
        VmPeak:\t  120000 kB\n\
        VmSize:\t  110000 kB\n\
        VmHWM:\t    9000 kB\n\
        VmRSS:\t    8000 kB\n\
        Threads:\t5\n";

    #[test]
    fn parses_proc_status() {
        let usage = MemoryUsage::from_proc_status(STATUS);
        assert_eq!(usage.rss, 8000 * 1024);
        assert_eq!(usage.virtual_size, 110000 * 1024);
        assert_eq!(usage.peak_rss, 9000 * 1024);
    }

    #[test]
    fn missing_fields_stay_zero() {
        let usage = MemoryUsage::from_proc_status("Name:\tx\nVmRSS:\tgarbage kB\n");
        assert_eq!(usage, MemoryUsage::default());
    }

    #[test]
    fn serializes_virtual_field_name() {
        let json = serde_json::to_value(MemoryUsage { rss: 1, virtual_size: 2, peak_rss: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "rss": 1, "virtual": 2, "peak_rss": 3 }));
    }

    #[test]
    fn uptime_is_non_negative() {
        assert!(uptime_secs(Instant::now()) >= 0.0);
    }
}
