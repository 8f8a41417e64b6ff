//! Refrigerator — two compartments and a door sensor.

use serde::Serialize;

pub const DEFAULT_REFRIGERATOR_TEMP: i64 = 38;
pub const DEFAULT_FREEZER_TEMP: i64 = 26;

/// Variant state of a refrigerator. Temperatures are in °F and not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Refrigerator {
    refrigerator_temp: i64,
    freezer_temp: i64,
    door_open: bool,
}

impl Default for Refrigerator {
    fn default() -> Self {
        Self {
            refrigerator_temp: DEFAULT_REFRIGERATOR_TEMP,
            freezer_temp: DEFAULT_FREEZER_TEMP,
            door_open: false,
        }
    }
}

impl Refrigerator {
    #[must_use]
    pub fn refrigerator_temp(&self) -> i64 {
        self.refrigerator_temp
    }

    #[must_use]
    pub fn freezer_temp(&self) -> i64 {
        self.freezer_temp
    }

    #[must_use]
    pub fn door_open(&self) -> bool {
        self.door_open
    }

    pub(super) fn set_refrigerator_temp(&mut self, temp: i64) {
        self.refrigerator_temp = temp;
    }

    pub(super) fn set_freezer_temp(&mut self, temp: i64) {
        self.freezer_temp = temp;
    }

    pub(super) fn set_door_open(&mut self, open: bool) {
        self.door_open = open;
    }
}
