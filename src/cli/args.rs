use clap::{Parser, Subcommand};

/// Command-line arguments for relay-demo
#[derive(Parser, Debug, Clone)]
#[command(name = "relay-demo")]
#[command(about = "Demonstrates relaying checked errors to a single handler")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Scenario to run
    #[command(subcommand)]
    pub scenario: Scenario,
}

/// Scenarios the demo can run, each with its own relay
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// Check a successful result and finish normally
    Ok,

    /// Trip with a plain error through the default handler
    Fail,

    /// Trip with an error tagged with an exit code
    Coded {
        /// Exit code to attach to the error
        #[arg(long, env = "RELAY_DEMO_CODE", default_value_t = 3, allow_negative_numbers = true)]
        code: i32,
    },

    /// Trip with a custom error type that carries its own exit code
    Coder,

    /// Trip into a custom handler that reports without exiting
    Custom,

    /// Trip with a formatted message
    Format {
        /// Exit code to attach to the formatted error
        #[arg(long)]
        code: Option<i32>,
    },

    /// Trip an outer relay from inside an inner relay's unit of work
    Nested,
}
