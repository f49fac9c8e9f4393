//! # `relay-demo`
//!
//! Runs small commands that check errors with a [`relay::Relay`] and shows
//! how each trip is reported.
//!
//! ```sh
//! relay-demo fail            # "relay-demo: always fails" on stderr, exit 1
//! relay-demo coded --code 3  # same message, exit 3
//! relay-demo custom          # custom handler, exit 0
//! ```

use clap::Parser as _;
use relay::cli::{Args, execute};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    execute(&args);
}
