// src/sieve/mod.rs

pub mod bit_table;
pub mod eratosthenes;
pub mod extract;
pub mod printer;

// Re-export main types for convenience
pub use bit_table::BitTable;
pub use eratosthenes::sieve;
pub use extract::{extract_primes, Primes};
pub use printer::{print_table, render_table};
