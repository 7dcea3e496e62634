// src/benchmark/results.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageTiming {
    pub name: String,
    pub elapsed_ns: u64,
}

/// Named stage timings for one run, timestamped at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSuite {
    pub timestamp: DateTime<Utc>,
    pub timings: Vec<StageTiming>,
}

impl TimingSuite {
    pub fn new() -> Self {
        TimingSuite {
            timestamp: Utc::now(),
            timings: Vec::new(),
        }
    }

    pub fn record(&mut self, name: &str, elapsed: std::time::Duration) {
        self.timings.push(StageTiming {
            name: name.to_string(),
            elapsed_ns: elapsed.as_nanos() as u64,
        });
    }

    pub fn total_ns(&self) -> u64 {
        self.timings.iter().map(|timing| timing.elapsed_ns).sum()
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "-".repeat(60));
        println!("TIMING SUMMARY");
        println!("{}", "-".repeat(60));
        println!("Timestamp: {}", self.timestamp);
        println!("{:<30} {:>15}", "Stage", "Elapsed");
        for timing in &self.timings {
            println!(
                "{:<30} {:>15}",
                timing.name,
                Self::format_duration(timing.elapsed_ns)
            );
        }
        println!(
            "{:<30} {:>15}",
            "total",
            Self::format_duration(self.total_ns())
        );
        println!("{}", "-".repeat(60));
    }

    fn format_duration(ns: u64) -> String {
        if ns < 1_000 {
            format!("{} ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2} µs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2} ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2} s", ns as f64 / 1_000_000_000.0)
        }
    }
}

impl Default for TimingSuite {
    fn default() -> Self {
        Self::new()
    }
}
