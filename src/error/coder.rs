//! Exit-code capability

use crate::error::CodedError;

/// Exit code used when a handled error carries none
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Any error that knows which exit code the process should end with
///
/// Implement this on your own error types and trip them through
/// [`Relay::check_coder`](crate::Relay::check_coder) to have the default
/// handler honour the code without wrapping them yourself.
pub trait ExitCoder {
    /// The exit code for this error
    fn exit_code(&self) -> i32;
}

/// Find the exit code for a handled error
///
/// The first [`CodedError`] in the chain wins. Errors without one map to
/// [`DEFAULT_EXIT_CODE`].
#[must_use]
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CodedError>())
        .map_or(DEFAULT_EXIT_CODE, ExitCoder::exit_code)
}
