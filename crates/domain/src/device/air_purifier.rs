//! Air purifier — purification level and fan speed, both `0..=3`.

use serde::Serialize;

use super::clamp_level;

pub const MAX_SETTING: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AirPurifier {
    purification_level: u8,
    fan_speed: u8,
}

impl AirPurifier {
    #[must_use]
    pub fn purification_level(&self) -> u8 {
        self.purification_level
    }

    #[must_use]
    pub fn fan_speed(&self) -> u8 {
        self.fan_speed
    }

    pub(super) fn power_on(&mut self) {
        self.purification_level = 1;
        self.fan_speed = 1;
    }

    pub(super) fn power_off(&mut self) {
        self.purification_level = 0;
        self.fan_speed = 0;
    }

    pub(super) fn set_purification_level(&mut self, level: i64) -> u8 {
        self.purification_level = clamp_level(level, MAX_SETTING);
        self.purification_level
    }

    pub(super) fn set_fan_speed(&mut self, speed: i64) -> u8 {
        self.fan_speed = clamp_level(speed, MAX_SETTING);
        self.fan_speed
    }
}
