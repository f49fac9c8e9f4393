//! Handlers receive the error that tripped a relay
//!
//! A handler is a plain function value. The stock one reports the error as
//! `"{program}: {message}"` on standard error and terminates the process.

pub mod default;

pub use default::*;

/// Function a relay hands its tripped error to
pub type Handler = Box<dyn Fn(anyhow::Error)>;
