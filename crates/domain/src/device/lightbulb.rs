//! Lightbulb — dimmable light, full brightness when switched on.

use serde::Serialize;

use super::clamp_level;

pub const MAX_BRIGHTNESS: u8 = 100;

/// Variant state of a smart lightbulb.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Lightbulb {
    brightness: u8,
}

impl Lightbulb {
    /// Brightness in percent, `0..=100`.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub(super) fn power_on(&mut self) {
        self.brightness = MAX_BRIGHTNESS;
    }

    pub(super) fn power_off(&mut self) {
        self.brightness = 0;
    }

    pub(super) fn set_brightness(&mut self, level: i64) -> u8 {
        self.brightness = clamp_level(level, MAX_BRIGHTNESS);
        self.brightness
    }
}
