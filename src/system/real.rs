//! Real system implementation using the running process

use super::System;
use std::io::{self, Write as _};
use std::path::PathBuf;

/// Production implementation of System trait
///
/// Delegates directly to the standard library's view of the current process.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn program_path(&self) -> Option<PathBuf> {
        std::env::args_os().next().map(PathBuf::from)
    }

    fn write_stderr(&self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(text.as_bytes())?;
        stderr.flush()
    }

    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}
