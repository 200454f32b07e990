//! Request bookkeeping shared by the controllers.
//!
//! [`Generation`] hands out tickets so a late response for a superseded
//! fetch is dropped instead of applied. [`InFlight`] is the busy flag behind
//! each submit control.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::PortalError;

/// Source of fetch tickets. Beginning a new fetch supersedes every older
/// ticket; disposing supersedes all of them for good.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: Arc<AtomicU64>,
    disposed: Arc<AtomicBool>,
}

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch. Every earlier ticket stops being current.
    #[must_use]
    pub fn begin(&self) -> Ticket {
        let id = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            id,
            current: Arc::clone(&self.current),
            disposed: Arc::clone(&self.disposed),
        }
    }

    /// Invalidate every outstanding ticket, now and for later ones.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

/// Tag carried by one fetch.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    current: Arc<AtomicU64>,
    disposed: Arc<AtomicBool>,
}

impl Ticket {
    /// Whether results tagged with this ticket may still be applied.
    #[must_use]
    pub fn is_current(&self) -> bool {
        !self.disposed.load(Ordering::Acquire) && self.current.load(Ordering::Acquire) == self.id
    }
}

/// Busy flag for one control. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the control busy until the guard drops.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Busy`] when a request is already outstanding.
    pub fn start(&self) -> Result<InFlightGuard, PortalError> {
        if self.0.swap(true, Ordering::AcqRel) {
            return Err(PortalError::Busy);
        }
        Ok(InFlightGuard(Arc::clone(&self.0)))
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Clears the busy flag on drop.
#[derive(Debug)]
pub struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let generation = Generation::new();
        let first = generation.begin();
        assert!(first.is_current());
        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn dispose_invalidates_everything() {
        let generation = Generation::new();
        let ticket = generation.begin();
        generation.dispose();
        assert!(!ticket.is_current());
        assert!(!generation.begin().is_current());
    }

    #[test]
    fn in_flight_rejects_second_start() {
        let busy = InFlight::new();
        let guard = busy.start().unwrap();
        assert!(busy.is_busy());
        assert!(matches!(busy.clone().start(), Err(PortalError::Busy)));
        drop(guard);
        assert!(!busy.is_busy());
        assert!(busy.start().is_ok());
    }
}
