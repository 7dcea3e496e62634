// src/main.rs

use env_logger::Env;
use log::info;
use std::time::Instant;

use bitsieve::benchmark::{Benchmark, TimeUnit, TimingSuite};
use bitsieve::config::SieveConfig;
use bitsieve::core::display_sequence;
use bitsieve::sieve::{extract_primes, print_table, sieve};

fn main() {
    let config = SieveConfig::load().unwrap_or_else(|err| {
        eprintln!("config error ({}), using defaults", err);
        SieveConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("BITSIEVE_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("BITSIEVE_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    info!("sieving primes up to {}", config.bound);
    let mut suite = TimingSuite::new();

    let start = Instant::now();
    let table = {
        let _probe = Benchmark::with_unit("sieve", TimeUnit::Millis);
        sieve(config.bound)
    };
    suite.record("sieve", start.elapsed());

    let start = Instant::now();
    let primes = {
        let _probe = Benchmark::with_unit("extract", TimeUnit::Micros);
        extract_primes(&table)
    };
    suite.record("extract", start.elapsed());

    info!("found {} primes <= {}", primes.len(), config.bound);

    if config.print_table {
        print_table(&table);
    }
    if config.print_primes {
        display_sequence(&primes);
    }

    suite.print_summary();
    if let Some(path) = &config.results_path {
        if let Err(err) = suite.save_to_file(path) {
            eprintln!("failed to save timing results to {}: {}", path, err);
        }
    }
}
