// src/core/mod.rs

pub mod display;

pub use display::display_sequence;
