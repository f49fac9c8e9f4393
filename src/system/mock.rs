//! Mock system implementation for testing

use super::System;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` records everything written to standard error and every
/// requested exit code instead of touching the process, so handlers can be
/// observed from a unit test.
///
/// # Example
/// ```
/// use relay::system::{mock::MockSystem, System};
///
/// let system = MockSystem::new()
///     .with_program_path("/usr/bin/tool").unwrap();
///
/// system.write_stderr("tool: failed\n").unwrap();
/// system.exit(3);
///
/// assert_eq!(system.stderr().unwrap(), "tool: failed\n");
/// assert_eq!(system.exit_code().unwrap(), Some(3));
/// ```
#[derive(Clone, Default)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

#[derive(Default)]
struct MockSystemState {
    program_path: Option<PathBuf>,
    stderr: String,
    exit_codes: Vec<i32>,
}

impl MockSystem {
    /// Create a new `MockSystem` with no program path and no recorded output
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program path reported as argument zero (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn with_program_path<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.program_path = Some(path.as_ref().to_path_buf());
        drop(state);
        Ok(self)
    }

    /// Everything written to standard error so far
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn stderr(&self) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.stderr.clone())
    }

    /// The most recent exit code requested, if any
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn exit_code(&self) -> io::Result<Option<i32>> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.exit_codes.last().copied())
    }

    /// Number of times `exit` was requested
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn exit_count(&self) -> io::Result<usize> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.exit_codes.len())
    }
}

impl System for MockSystem {
    #[inline]
    fn program_path(&self) -> Option<PathBuf> {
        let state = self.state.read().ok()?;
        state.program_path.clone()
    }

    #[inline]
    fn write_stderr(&self, text: &str) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.stderr.push_str(text);
        Ok(())
    }

    #[inline]
    fn exit(&self, code: i32) {
        // A poisoned lock means a test already panicked; nothing to record.
        if let Ok(mut state) = self.state.write() {
            state.exit_codes.push(code);
        }
    }
}
