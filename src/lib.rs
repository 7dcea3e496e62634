// src/lib.rs

pub mod benchmark;
pub mod config;
pub mod core;
pub mod integer_math;
pub mod sieve;
