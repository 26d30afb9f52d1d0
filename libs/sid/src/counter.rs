//! Per-millisecond sequence numbers.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace};

use crate::types::COUNTER_CAPACITY;

#[derive(Debug, Default)]
struct CounterState {
    last_timestamp: Option<i64>,
    counter: u16,
}

/// Disambiguates Sids minted within the same millisecond.
///
/// Each call compares only against the previous call's timestamp, not a
/// running maximum, so callers that pass timestamps out of order restart the
/// sequence every time the value changes.
///
/// The counter has two base62 digits of room. The 3845th call within one
/// millisecond wraps back to 0, after which ordering inside that millisecond
/// is no longer guaranteed.
#[derive(Debug, Default)]
pub struct MonotonicCounter {
    state: Mutex<CounterState>,
}

impl MonotonicCounter {
    /// Creates a counter that has not observed any timestamp yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sequence number for `timestamp`.
    pub fn next(&self, timestamp: i64) -> u16 {
        // The state is two plain integers, so a poisoned lock still holds a usable value.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.last_timestamp == Some(timestamp) {
            state.counter += 1;
            if state.counter == COUNTER_CAPACITY {
                debug!(timestamp, "sid counter capacity exhausted, wrapping to 0");
                state.counter = 0;
            }
        } else {
            trace!(
                previous = ?state.last_timestamp,
                timestamp,
                "sid counter reset"
            );
            state.last_timestamp = Some(timestamp);
            state.counter = 0;
        }

        state.counter
    }
}
