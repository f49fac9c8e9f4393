//! Error handling module
//!
//! Defines the exit-code carrier and the capability the default handler
//! reads exit codes through

pub mod coder;
pub mod types;

pub use coder::*;
pub use types::*;
