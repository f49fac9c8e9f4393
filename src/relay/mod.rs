//! Relay a checked error from any call depth to a single recovery point
//!
//! A [`Relay`] is built once per unit of work (usually a command's body).
//! Anywhere inside that unit, [`Relay::check`] either hands back the `Ok`
//! value or stores the error and unwinds. The recovery point, registered with
//! [`Relay::run`] or by feeding a [`std::panic::catch_unwind`] result to
//! [`Relay::filter`], hands the stored error to the relay's handler.
//!
//! Unwinds the relay did not raise, including trips of other relays, pass
//! through its recovery point unchanged.
//!
//! # Example
//! ```
//! use relay::Relay;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let relay = Relay::with_handler(move |err| sink.borrow_mut().push(err.to_string()));
//!
//! let finished = relay.run(|| {
//!     let count: u32 = relay.check("12".parse::<u32>());
//!     relay.check("twelve".parse::<u32>());
//!     count
//! });
//!
//! assert_eq!(finished, None);
//! assert_eq!(*seen.borrow(), ["invalid digit found in string"]);
//! ```

pub mod token;

pub use token::{RelayId, Trip};

use crate::error::{CodedError, ExitCoder};
use crate::handler::{Handler, default_handler};
use crate::trip::{coded_trip_fn, trip_fn};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use tracing::{debug, trace};

/// Tracks the error that tripped a unit of work and the handler it goes to
///
/// A relay lives on one call stack; it is neither `Send` nor `Sync`.
pub struct Relay {
    id: RelayId,
    pending: RefCell<Option<anyhow::Error>>,
    handler: Handler,
}

impl Relay {
    /// Create a relay that reports through the [default handler](default_handler)
    #[must_use]
    pub fn new() -> Self {
        Self::from_handler(default_handler())
    }

    /// Create a relay that hands tripped errors to `handler`
    ///
    /// The handler replaces the default one entirely and does not have to
    /// terminate the process.
    #[must_use]
    pub fn with_handler<H>(handler: H) -> Self
    where
        H: Fn(anyhow::Error) + 'static,
    {
        Self::from_handler(Box::new(handler))
    }

    fn from_handler(handler: Handler) -> Self {
        let id = RelayId::next();
        trace!(relay = %id, "relay created");
        Self {
            id,
            pending: RefCell::new(None),
            handler,
        }
    }

    /// Identity stamped on this relay's trips
    #[must_use]
    #[inline]
    pub const fn id(&self) -> RelayId {
        self.id
    }

    /// Whether an error is waiting to be dispatched
    #[must_use]
    pub fn is_tripped(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Return the `Ok` value, or trip the relay with the error
    ///
    /// Tripping never returns: the error is stored and the stack unwinds to
    /// this relay's recovery point.
    pub fn check<T, E>(&self, result: Result<T, E>) -> T
    where
        E: Into<anyhow::Error>,
    {
        match result {
            Ok(value) => value,
            Err(err) => self.raise(err.into()),
        }
    }

    /// Like [`check`](Self::check), tagging the error with an exit code
    pub fn coded_check<T, E>(&self, code: i32, result: Result<T, E>) -> T
    where
        E: Into<anyhow::Error>,
    {
        match result {
            Ok(value) => value,
            Err(err) => self.check(Err(CodedError::new(err, code))),
        }
    }

    /// Like [`coded_check`](Self::coded_check), reading the code from the error
    pub fn check_coder<T, E>(&self, result: Result<T, E>) -> T
    where
        E: ExitCoder + std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => value,
            Err(err) => {
                let code = err.exit_code();
                self.coded_check(code, Err(err))
            }
        }
    }

    fn raise(&self, err: anyhow::Error) -> ! {
        debug!(relay = %self.id, error = %err, "relay tripped");
        *self.pending.borrow_mut() = Some(err);
        panic::resume_unwind(Box::new(Trip::new(self.id)))
    }

    /// Close the unwind started by [`check`](Self::check)
    ///
    /// Feed it the result of [`std::panic::catch_unwind`] around the unit of
    /// work. A normal completion yields `Some(value)`. This relay's own trip
    /// is handed to the handler and yields `None`. Any other unwind payload
    /// is re-raised as is, so an enclosing recovery point can claim it.
    pub fn filter<T>(&self, outcome: thread::Result<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(payload) => {
                self.claim(payload);
                None
            }
        }
    }

    fn claim(&self, payload: Box<dyn Any + Send>) {
        let ours = payload
            .downcast_ref::<Trip>()
            .is_some_and(|trip| trip.relay_id() == self.id);
        if !ours {
            panic::resume_unwind(payload);
        }

        if let Some(err) = self.pending.take() {
            debug!(relay = %self.id, "dispatching tripped error to handler");
            (self.handler)(err);
        }
    }

    /// Run a unit of work with this relay's recovery point around it
    ///
    /// Returns `None` when the unit was abandoned by a trip.
    pub fn run<T, F>(&self, unit: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        self.filter(panic::catch_unwind(AssertUnwindSafe(unit)))
    }

    /// Split the relay into free-standing check and filter functions
    pub fn fns(
        &self,
    ) -> (
        impl Fn(anyhow::Result<()>) + '_,
        impl Fn(thread::Result<()>) + '_,
    ) {
        (
            move |result: anyhow::Result<()>| self.check(result),
            move |outcome: thread::Result<()>| {
                self.filter(outcome);
            },
        )
    }

    /// Split the relay into free-standing coded check and filter functions
    pub fn coded_fns(
        &self,
    ) -> (
        impl Fn(i32, anyhow::Result<()>) + '_,
        impl Fn(thread::Result<()>) + '_,
    ) {
        (
            move |code: i32, result: anyhow::Result<()>| self.coded_check(code, result),
            move |outcome: thread::Result<()>| {
                self.filter(outcome);
            },
        )
    }

    /// Check function paired with a trip function that formats its error
    pub fn trip_fns(
        &self,
    ) -> (
        impl Fn(anyhow::Result<()>) + '_,
        impl Fn(fmt::Arguments<'_>) + '_,
    ) {
        let check = move |result: anyhow::Result<()>| self.check(result);
        (check, trip_fn(check))
    }

    /// Coded check function paired with a coded trip function
    pub fn coded_trip_fns(
        &self,
    ) -> (
        impl Fn(i32, anyhow::Result<()>) + '_,
        impl Fn(i32, fmt::Arguments<'_>) + '_,
    ) {
        let coded_check = move |code: i32, result: anyhow::Result<()>| self.coded_check(code, result);
        (coded_check, coded_trip_fn(coded_check))
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("id", &self.id)
            .field("tripped", &self.is_tripped())
            .finish_non_exhaustive()
    }
}
