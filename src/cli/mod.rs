//! Command-line interface module
//!
//! Argument parsing and scenarios for the `relay-demo` binary

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
