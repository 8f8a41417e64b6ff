//! Thermostat — holds a target temperature in °F.

use serde::Serialize;

pub const DEFAULT_TEMPERATURE: f64 = 65.0;

/// Variant state of a thermostat. The setpoint is not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thermostat {
    temperature: f64,
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Thermostat {
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub(super) fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }
}
