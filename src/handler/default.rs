//! Stock handler: report to stderr, exit with the error's code

use super::Handler;
use crate::error::exit_code_of;
use crate::system::{RealSystem, System};

/// Program name used when argument zero is missing or empty
const UNKNOWN_PROGRAM: &str = ".";

/// The default handler, bound to the real process
///
/// Writes `"{program}: {message}\n"` to standard error and exits with the
/// error's code, `1` unless a [`CodedError`](crate::CodedError) says
/// otherwise. It never returns.
#[must_use]
pub fn default_handler() -> Handler {
    handler_for(RealSystem::new())
}

/// The default handling policy over an arbitrary [`System`]
#[must_use]
pub fn handler_for<S>(system: S) -> Handler
where
    S: System + 'static,
{
    Box::new(move |err| handle(&system, &err))
}

/// Report `err` through `system` and exit with its code
pub fn handle(system: &dyn System, err: &anyhow::Error) {
    let program = program_name(system);
    // Nowhere left to report a failed write; the exit still happens.
    let _ = system.write_stderr(&format!("{program}: {err:#}\n"));
    system.exit(exit_code_of(err));
}

/// Base name of the running program, from argument zero
#[must_use]
pub fn program_name(system: &dyn System) -> String {
    let Some(path) = system.program_path() else {
        return UNKNOWN_PROGRAM.to_owned();
    };
    if path.as_os_str().is_empty() {
        return UNKNOWN_PROGRAM.to_owned();
    }

    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned()
}
