// src/benchmark/timer.rs

use log::info;
use std::time::{Duration, Instant};

/// Unit a [`Benchmark`] reports its elapsed time in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Secs,
}

impl TimeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "s",
        }
    }

    fn convert(&self, elapsed: Duration) -> u128 {
        match self {
            TimeUnit::Nanos => elapsed.as_nanos(),
            TimeUnit::Micros => elapsed.as_micros(),
            TimeUnit::Millis => elapsed.as_millis(),
            TimeUnit::Secs => elapsed.as_secs() as u128,
        }
    }
}

/// Scoped elapsed-time probe: captures a start timestamp on construction and
/// reports the elapsed duration when it is dropped, so the report runs on
/// every exit path from the scope that owns it.
pub struct Benchmark {
    label: String,
    unit: TimeUnit,
    start: Instant,
}

impl Benchmark {
    pub fn new(label: &str) -> Self {
        Benchmark::with_unit(label, TimeUnit::Millis)
    }

    pub fn with_unit(label: &str, unit: TimeUnit) -> Self {
        Benchmark {
            label: label.to_string(),
            unit,
            start: Instant::now(),
        }
    }

    /// Elapsed time so far, without waiting for the drop report.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Benchmark {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        info!(
            "{}: {}{}",
            self.label,
            self.unit.convert(elapsed),
            self.unit.label()
        );
    }
}
