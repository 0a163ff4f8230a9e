//! Cancellation plumbing for component-owned fetch cycles.
//!
//! Every data-fetching component owns one [`LoadGuard`]. Starting a new
//! cycle aborts the previous request and stamps the new one with an
//! epoch; only the ticket whose epoch is still current may write state,
//! so the latest trigger always wins regardless of completion order.

use leptos::prelude::*;
use web_sys::{AbortController, AbortSignal};

#[derive(Clone, Copy)]
pub struct LoadGuard {
    epoch: StoredValue<u64>,
    // The controller is a JS handle; LocalStorage keeps it off the Send path.
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self {
            epoch: StoredValue::new(0),
            controller: StoredValue::new_local(None),
        }
    }

    /// Start a new load cycle: abort the in-flight request, if any, and
    /// hand out a ticket for the new one.
    pub fn begin(&self) -> LoadTicket {
        self.controller.update_value(|slot| {
            if let Some(prev) = slot.take() {
                prev.abort();
            }
            // The JS controller only exists in the browser; the epoch
            // half works on any target.
            *slot = if cfg!(target_arch = "wasm32") {
                AbortController::new().ok()
            } else {
                None
            };
        });
        let epoch = self.epoch.get_value() + 1;
        self.epoch.set_value(epoch);
        LoadTicket {
            guard: *self,
            epoch,
        }
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LoadTicket {
    guard: LoadGuard,
    epoch: u64,
}

impl LoadTicket {
    pub fn abort_signal(&self) -> Option<AbortSignal> {
        self.guard
            .controller
            .with_value(|slot| slot.as_ref().map(|c| c.signal()))
    }

    /// False once a newer cycle has begun; a stale ticket must not write
    /// any state.
    pub fn is_current(&self) -> bool {
        self.guard.epoch.get_value() == self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_cycle_invalidates_older_ticket() {
        let guard = LoadGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn stale_ticket_stays_stale_across_cycles() {
        let guard = LoadGuard::new();
        let first = guard.begin();
        guard.begin();
        guard.begin();
        assert!(!first.is_current());
    }
}
