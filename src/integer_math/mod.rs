// src/integer_math/mod.rs

pub mod divisor_sum;

pub use divisor_sum::sum_of_proper_divisors;
