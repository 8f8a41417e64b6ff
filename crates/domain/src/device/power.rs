//! Power state — the baseline status every device reports.

use serde::{Deserialize, Serialize};

/// Status returned by `get_status`.
///
/// Most kinds only use [`Off`](Self::Off) and [`On`](Self::On). A security
/// camera reports [`Active`](Self::Active) instead of `On`, and a garage door
/// reports [`Open`](Self::Open) / [`Closed`](Self::Closed) once it has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    #[default]
    Off,
    On,
    Active,
    Open,
    Closed,
}

impl PowerState {
    #[must_use]
    pub fn is_off(self) -> bool {
        matches!(self, Self::Off)
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::On => f.write_str("on"),
            Self::Active => f.write_str("active"),
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}
