//! `Relay` - Check errors anywhere in a command, handle them in one place
//!
//! This library lets a command check an error at any call depth and, when it
//! is present, abandon the rest of the command, unwind to a single recovery
//! point and hand the error to a handler. The default handler prints
//! `"{program}: {message}"` to standard error and exits with the error's
//! exit code.
//!
//! ```no_run
//! use relay::Relay;
//!
//! fn main() {
//!     let relay = Relay::new();
//!     relay.run(|| {
//!         let text = relay.check(std::fs::read_to_string("settings.toml"));
//!         let port: u16 = relay.coded_check(2, text.trim().parse());
//!         println!("listening on {port}");
//!     });
//! }
//! ```
//!
//! Trips unwind the stack, so the crate needs `panic = "unwind"` (the
//! default). Each relay belongs to one call stack; trips never cross threads.

pub mod cli;
pub mod error;
pub mod handler;
pub mod relay;
pub mod system;
pub mod trip;

pub use anyhow;

pub use error::{CodedError, DEFAULT_EXIT_CODE, ExitCoder, exit_code_of};
pub use handler::{Handler, default_handler, handler_for};
pub use relay::{Relay, RelayId, Trip};
pub use trip::{coded_trip_fn, trip_fn};
