//! Generation-tokened fetch plumbing shared by the screens.
//!
//! Each screen issues at most one interesting request at a time: the newest.
//! `begin` hands out a ticket; the spawned task delivers its outcome into the
//! shared slot; the UI thread polls once per frame and accepts the outcome
//! only if its ticket is still the newest one issued. Older requests are not
//! aborted, their completions just land and get discarded.

use std::sync::{Arc, Mutex};
use tracing::debug;

/// Where the current search attempt stands. `Invalid` is terminal for the
/// attempt: validation failed and no request went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Invalid,
    Fetching,
    Success,
    Error,
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Landing area for completions, shared with spawned tasks. Holds at most one
/// outcome and keeps the newest-generation one when deliveries race.
pub struct FetchSlot<T> {
    inner: Arc<Mutex<Option<(u64, T)>>>,
}

impl<T> Clone for FetchSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn deliver(&self, ticket: FetchTicket, value: T) {
        let mut slot = self.inner.lock().unwrap();
        match &*slot {
            // A newer request already landed; drop this one.
            Some((generation, _)) if *generation > ticket.0 => {}
            _ => *slot = Some((ticket.0, value)),
        }
    }
}

/// UI-thread side of the handshake. Owns the generation counter and the busy
/// flag the screens render from.
pub struct FetchController<T> {
    generation: u64,
    in_flight: Option<u64>,
    slot: FetchSlot<T>,
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            in_flight: None,
            slot: FetchSlot {
                inner: Arc::new(Mutex::new(None)),
            },
        }
    }
}

impl<T> FetchController<T> {
    /// Start a new request, superseding any outstanding one.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        FetchTicket(self.generation)
    }

    /// Slot handle for the task that will complete this request.
    pub fn slot(&self) -> FetchSlot<T> {
        self.slot.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Take the newest request's outcome if it has landed. Superseded
    /// completions are discarded here; the busy flag stays up until the
    /// newest request itself resolves.
    pub fn poll(&mut self) -> Option<T> {
        let landed = self.slot.inner.lock().unwrap().take();
        match landed {
            Some((generation, value)) if Some(generation) == self.in_flight => {
                self.in_flight = None;
                Some(value)
            }
            Some((generation, _)) => {
                debug!(generation, "Discarding superseded fetch result");
                None
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut fetch: FetchController<&str> = FetchController::default();
        assert!(!fetch.is_fetching());
        assert_eq!(fetch.poll(), None);

        let ticket = fetch.begin();
        assert!(fetch.is_fetching());
        assert_eq!(fetch.poll(), None);

        fetch.slot().deliver(ticket, "rows");
        assert_eq!(fetch.poll(), Some("rows"));
        assert!(!fetch.is_fetching());
    }

    #[test]
    fn test_superseded_completion_is_discarded() {
        let mut fetch: FetchController<&str> = FetchController::default();
        let first = fetch.begin();
        let second = fetch.begin();

        fetch.slot().deliver(first, "stale");
        assert_eq!(fetch.poll(), None);
        assert!(fetch.is_fetching(), "newest request is still outstanding");

        fetch.slot().deliver(second, "fresh");
        assert_eq!(fetch.poll(), Some("fresh"));
        assert!(!fetch.is_fetching());
    }

    #[test]
    fn test_out_of_order_delivery_keeps_newest() {
        let mut fetch: FetchController<&str> = FetchController::default();
        let first = fetch.begin();
        let second = fetch.begin();

        // Newest lands first, stale one afterwards
        fetch.slot().deliver(second, "fresh");
        fetch.slot().deliver(first, "stale");
        assert_eq!(fetch.poll(), Some("fresh"));
        assert_eq!(fetch.poll(), None);
    }

    #[test]
    fn test_stale_arrival_after_completion() {
        let mut fetch: FetchController<&str> = FetchController::default();
        let first = fetch.begin();
        let second = fetch.begin();

        fetch.slot().deliver(second, "fresh");
        assert_eq!(fetch.poll(), Some("fresh"));

        fetch.slot().deliver(first, "stale");
        assert_eq!(fetch.poll(), None);
        assert!(!fetch.is_fetching());
    }
}
