//! Trip a relay with a formatted message in one call
//!
//! Rust has no variadic functions, so the returned trip functions take
//! [`fmt::Arguments`] built with [`format_args!`]. The [`trip!`](crate::trip!)
//! and [`coded_trip!`](crate::coded_trip!) macros hide that step.

mod macros;

use std::fmt;

/// Wrap a check function so it can be tripped with a formatted message
///
/// ```
/// use relay::{Relay, trip_fn};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(String::new()));
/// let sink = Rc::clone(&seen);
/// let relay = Relay::with_handler(move |err| *sink.borrow_mut() = err.to_string());
///
/// relay.run(|| {
///     let trip = trip_fn(|result| relay.check(result));
///     trip(format_args!("must receive {}: {} is invalid", 2, 3));
/// });
///
/// assert_eq!(*seen.borrow(), "must receive 2: 3 is invalid");
/// ```
pub fn trip_fn<C>(check: C) -> impl Fn(fmt::Arguments<'_>)
where
    C: Fn(anyhow::Result<()>),
{
    move |args: fmt::Arguments<'_>| check(Err(anyhow::Error::msg(fmt::format(args))))
}

/// Wrap a coded check function so it can be tripped with a code and a formatted message
pub fn coded_trip_fn<C>(coded_check: C) -> impl Fn(i32, fmt::Arguments<'_>)
where
    C: Fn(i32, anyhow::Result<()>),
{
    move |code: i32, args: fmt::Arguments<'_>| {
        coded_check(code, Err(anyhow::Error::msg(fmt::format(args))));
    }
}
