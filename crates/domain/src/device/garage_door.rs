//! Garage door — open or closed.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GarageDoor {
    is_open: bool,
}

impl GarageDoor {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub(super) fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}
