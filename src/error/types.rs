//! Error type pairing an underlying error with a process exit code

use crate::error::ExitCoder;
use thiserror::Error;

/// An error tagged with the exit code the process should terminate with
///
/// Produced by [`Relay::coded_check`](crate::Relay::coded_check). Its message
/// is the wrapped error's message, context chain included.
#[derive(Error, Debug)]
#[error("{err:#}")]
pub struct CodedError {
    err: anyhow::Error,
    code: i32,
}

impl CodedError {
    /// Wrap an error together with an exit code
    #[inline]
    pub fn new<E: Into<anyhow::Error>>(err: E, code: i32) -> Self {
        Self {
            err: err.into(),
            code,
        }
    }

    /// Get the exit code carried by this error
    #[must_use]
    #[inline]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Borrow the wrapped error
    #[must_use]
    #[inline]
    pub const fn inner(&self) -> &anyhow::Error {
        &self.err
    }

    /// Unwrap into the wrapped error, dropping the code
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> anyhow::Error {
        self.err
    }
}

impl ExitCoder for CodedError {
    #[inline]
    fn exit_code(&self) -> i32 {
        self.code
    }
}
