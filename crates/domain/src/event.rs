//! Event — an immutable record of something the hub did or refused to do.
//!
//! Every registry change, every executed command and every reported failure
//! produces one event. Events are the operator's side channel: the hub's
//! public operations are fire-and-forget, the event stream is how outcomes
//! are observed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, EventId};

/// UTC timestamp attached to every event.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// What kind of thing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DeviceAdded,
    DeviceRemoved,
    /// `add_device` was called with an identifier that is already registered.
    DuplicateDevice,
    /// An operation named an identifier that is not registered.
    DeviceNotFound,
    /// A dispatched command ran against its device.
    CommandExecuted,
    /// A dispatched command was unknown, not supported by the device kind,
    /// or carried malformed arguments.
    CommandRejected,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DeviceAdded => "device_added",
            Self::DeviceRemoved => "device_removed",
            Self::DuplicateDevice => "duplicate_device",
            Self::DeviceNotFound => "device_not_found",
            Self::CommandExecuted => "command_executed",
            Self::CommandRejected => "command_rejected",
        })
    }
}

/// A single observable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub device_id: Option<DeviceId>,
    /// Human-readable report, e.g. `"Television Samsung TV volume set to 45"`.
    pub message: String,
    /// Structured payload (command name, device snapshot, …).
    #[serde(default)]
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(
        event_type: EventType,
        device_id: Option<DeviceId>,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            device_id,
            message: message.into(),
            data,
            timestamp: now(),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
