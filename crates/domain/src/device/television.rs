//! Television — volume and input source.

use serde::Serialize;

use super::clamp_level;

pub const DEFAULT_VOLUME: u8 = 30;
pub const MAX_VOLUME: u8 = 100;
pub const DEFAULT_SOURCE: &str = "Cable";

/// Variant state of a television. Volume and source survive power cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Television {
    volume: u8,
    input_source: String,
}

impl Default for Television {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            input_source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl Television {
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    #[must_use]
    pub fn input_source(&self) -> &str {
        &self.input_source
    }

    pub(super) fn set_volume(&mut self, volume: i64) -> u8 {
        self.volume = clamp_level(volume, MAX_VOLUME);
        self.volume
    }

    pub(super) fn change_source(&mut self, source: String) {
        self.input_source = source;
    }
}
