//! Demo scenarios, one relay per scenario

use crate::cli::{Args, Scenario};
use crate::error::ExitCoder;
use crate::{Relay, coded_trip, trip_fn};
use anyhow::{Result, anyhow};
use thiserror::Error;
use tracing::debug;

/// Error reported when the demo is given the wrong number of values
#[derive(Error, Debug)]
#[error("must receive {expected} values, got {actual}")]
pub struct UsageError {
    pub expected: usize,
    pub actual: usize,
}

impl ExitCoder for UsageError {
    fn exit_code(&self) -> i32 {
        2
    }
}

/// Prints its message when dropped, including while a trip unwinds past it
struct Announce(&'static str);

impl Drop for Announce {
    fn drop(&mut self) {
        println!("{}", self.0);
    }
}

fn always_fails() -> Result<()> {
    Err(anyhow!("always fails"))
}

fn count_values(values: &[&str]) -> Result<usize, UsageError> {
    if values.len() == 2 {
        Ok(values.len())
    } else {
        Err(UsageError {
            expected: 2,
            actual: values.len(),
        })
    }
}

/// Execute the scenario selected on the command line
pub fn execute(args: &Args) {
    debug!(scenario = ?args.scenario, "running scenario");
    match args.scenario {
        Scenario::Ok => execute_ok(),
        Scenario::Fail => execute_fail(),
        Scenario::Coded { code } => execute_coded(code),
        Scenario::Coder => execute_coder(),
        Scenario::Custom => execute_custom(),
        Scenario::Format { code } => execute_format(code),
        Scenario::Nested => execute_nested(),
    }
}

/// A present value passes through `check` untouched
pub fn execute_ok() {
    let relay = Relay::new();
    relay.run(|| {
        let count = relay.check(count_values(&["a", "b"]));
        println!("completed with {count} values");
    });
}

/// Plain error, default handler: exit code 1
pub fn execute_fail() {
    let relay = Relay::new();
    relay.run(|| {
        relay.check(always_fails());
        println!("should not print");
    });
}

/// Coded error, default handler: exit with `code`
pub fn execute_coded(code: i32) {
    let relay = Relay::new();
    let (coded_check, filter) = relay.coded_fns();
    filter(std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        coded_check(code, always_fails());
    })));
}

/// Custom error type supplying its own exit code
pub fn execute_coder() {
    let relay = Relay::new();
    relay.run(|| {
        relay.check_coder(count_values(&["a", "b", "c"]));
    });
}

/// Custom handler prints to stdout and lets the process carry on
pub fn execute_custom() {
    let relay = Relay::with_handler(|err| println!("{err:#}"));
    relay.run(|| {
        let _reached = Announce("reached");
        relay.check(always_fails());
        println!("should not print");
    });
}

/// Formatted message, optionally with an exit code
pub fn execute_format(code: Option<i32>) {
    let relay = Relay::new();
    relay.run(|| match code {
        Some(code) => {
            let (coded_check, _) = relay.coded_fns();
            coded_trip!(coded_check, code, "must receive {}: {} is invalid", 2, 3);
        }
        None => {
            let trip = trip_fn(|result| relay.check(result));
            trip(format_args!("must receive {}: {} is invalid", 2, 3));
        }
    });
}

/// The inner relay passes the outer relay's trip through to it
pub fn execute_nested() {
    let outer = Relay::with_handler(|err| println!("outer handled: {err:#}"));
    let inner = Relay::with_handler(|err| println!("inner handled: {err:#}"));

    outer.run(|| {
        inner.run(|| outer.check(always_fails()));
        println!("should not print");
    });
    println!("nested done");
}
