//! Security camera — records the result of the latest motion scan.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SecurityCamera {
    motion_detected: bool,
}

impl SecurityCamera {
    /// Result of the most recent `detect_motion`, `false` before the first scan.
    #[must_use]
    pub fn motion_detected(&self) -> bool {
        self.motion_detected
    }

    pub(super) fn record_motion(&mut self, detected: bool) -> bool {
        self.motion_detected = detected;
        detected
    }
}
