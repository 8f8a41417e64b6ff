//! Report — the human-readable outcome of a device operation.

use serde::{Deserialize, Serialize};

/// Outcome message of a single device operation.
///
/// `applied` is `false` for read-only queries and for operations the device
/// declined to perform in its current state (e.g. dimming a light that is off).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub message: String,
    pub applied: bool,
}

impl Report {
    /// The operation mutated (or re-applied) device state.
    #[must_use]
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
        }
    }

    /// The operation left device state untouched.
    #[must_use]
    pub fn not_applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
