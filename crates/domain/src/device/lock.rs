//! Lock — a bolt that is either engaged or not.

use serde::Serialize;

/// Variant state of a lock. Starts locked.
///
/// The bolt is independent of the baseline power state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lock {
    is_locked: bool,
}

impl Default for Lock {
    fn default() -> Self {
        Self { is_locked: true }
    }
}

impl Lock {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// `"locked"` or `"unlocked"`.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_locked { "locked" } else { "unlocked" }
    }

    pub(super) fn engage(&mut self) {
        self.is_locked = true;
    }

    pub(super) fn release(&mut self) {
        self.is_locked = false;
    }
}
