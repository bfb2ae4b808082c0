//! Command implementations.
//!
//! Each command renders its output to a `String` so it can be tested
//! without a terminal; `main` writes the result to stdout.

pub mod collections;
pub mod describe;
pub mod validate;
