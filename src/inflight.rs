//! Per-registro in-flight tracking for fichaje requests.
//!
//! DESIGN
//! ======
//! At most one fichaje per registro may be outstanding. `try_acquire`
//! inserts the id into a shared set and hands back a permit; dropping the
//! permit removes it again, so early returns and errors cannot leak a slot.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct InFlight {
    ids: Arc<Mutex<HashSet<i64>>>,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id`. Returns `None` if a request for it is already running.
    #[must_use]
    pub fn try_acquire(&self, id: i64) -> Option<InFlightPermit> {
        let mut ids = self.ids.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if !ids.insert(id) {
            return None;
        }
        Some(InFlightPermit { ids: Arc::clone(&self.ids), id })
    }

    /// Ids currently claimed, ascending.
    #[must_use]
    pub fn busy_ids(&self) -> Vec<i64> {
        let ids = self.ids.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut out: Vec<i64> = ids.iter().copied().collect();
        out.sort_unstable();
        out
    }
}

/// Releases its id on drop.
pub struct InFlightPermit {
    ids: Arc<Mutex<HashSet<i64>>>,
    id: i64,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&self.id);
    }
}

#[cfg(test)]
#[path = "inflight_test.rs"]
mod tests;
