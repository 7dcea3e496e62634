// src/benchmark/mod.rs

pub mod results;
pub mod timer;

pub use results::{StageTiming, TimingSuite};
pub use timer::{Benchmark, TimeUnit};
