// src/core/display.rs

use std::fmt::Display;

/// Print every element of a sequence, one per line.
pub fn display_sequence<T: Display>(items: &[T]) {
    for item in items {
        println!("{}", item);
    }
}
