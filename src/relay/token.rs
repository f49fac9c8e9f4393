//! Identity carried by a tripped relay's unwind

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Global counter for handing out relay identities
static RELAY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a [`Relay`](crate::Relay)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelayId(u64);

impl RelayId {
    /// Allocate a fresh identity
    #[must_use]
    #[inline]
    pub(crate) fn next() -> Self {
        Self(RELAY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "relay#{}", self.0)
    }
}

/// Unwind payload raised when a relay trips
///
/// Only the relay whose identity matches may consume it; every other
/// recovery point passes it on untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    relay: RelayId,
}

impl Trip {
    #[must_use]
    #[inline]
    pub(crate) const fn new(relay: RelayId) -> Self {
        Self { relay }
    }

    /// Identity of the relay that raised this trip
    #[must_use]
    #[inline]
    pub const fn relay_id(&self) -> RelayId {
        self.relay
    }
}
