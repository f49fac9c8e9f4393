//! System abstraction for the process operations a handler performs
//!
//! Reporting an error touches three pieces of ambient process state: the
//! program's own path, the standard error stream and the exit status. This
//! module puts them behind one trait so the default handler can be exercised
//! with an in-memory implementation.

use std::io;
use std::path::PathBuf;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for the process operations used when handling an error
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env`, `std::io` and `std::process`
/// - `MockSystem`: Test implementation recording output and exit codes in memory
pub trait System: Send + Sync {
    /// Path the program was invoked as (argument zero), if any
    fn program_path(&self) -> Option<PathBuf>;

    /// Write text to the standard error stream
    fn write_stderr(&self, text: &str) -> io::Result<()>;

    /// Terminate the process with `code`
    ///
    /// The real implementation never returns.
    fn exit(&self, code: i32);
}
