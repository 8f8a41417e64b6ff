//! Device kind — the fixed variant identity of a device.

use serde::{Deserialize, Serialize};

/// The closed set of device kinds the hub knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Lightbulb,
    Thermostat,
    SecurityCamera,
    Television,
    Refrigerator,
    Lock,
    AirPurifier,
    GarageDoor,
}

impl DeviceKind {
    pub const ALL: [Self; 8] = [
        Self::Lightbulb,
        Self::Thermostat,
        Self::SecurityCamera,
        Self::Television,
        Self::Refrigerator,
        Self::Lock,
        Self::AirPurifier,
        Self::GarageDoor,
    ];

    /// Human-readable label used as the subject of reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lightbulb => "Smart Lightbulb",
            Self::Thermostat => "Thermostat",
            Self::SecurityCamera => "Security Camera",
            Self::Television => "Television",
            Self::Refrigerator => "Refrigerator",
            Self::Lock => "Lock",
            Self::AirPurifier => "Air Purifier",
            Self::GarageDoor => "Garage Door",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
