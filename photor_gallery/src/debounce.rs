// Copyright 2025 the Photor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncing driven by caller-supplied timestamps.

/// Fires once a burst of triggers has been followed by `idle` milliseconds of quiet.
///
/// The debouncer holds no clock. Hosts call [`trigger`](Self::trigger) for every
/// event and [`poll`](Self::poll) from their timer or frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    idle: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates a debouncer with the given idle gap in milliseconds.
    #[must_use]
    pub const fn new(idle: u64) -> Self {
        Self {
            idle,
            deadline: None,
        }
    }

    /// Records an event at `now`, pushing the deadline back.
    pub fn trigger(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.idle));
    }

    /// Returns `true` exactly once when the deadline has passed at `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time at which a pending burst will fire, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Forgets a pending burst.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
