//! Error types shared across the workspace.
//!
//! Every variant of [`HubError`] is recoverable: the hub reports it and keeps
//! running. Out-of-range numeric input is never an error, it is clamped.

use crate::id::DeviceId;

/// Top-level error for hub operations.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateError),

    #[error(transparent)]
    UnsupportedCommand(#[from] UnsupportedCommandError),

    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    /// The task running a dispatched command did not complete normally.
    #[error("dispatch task failed")]
    Dispatch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A device failed its construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyId,
}

/// No device is registered under the given identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Device {device_id} not found in the system.")]
pub struct NotFoundError {
    pub device_id: DeviceId,
}

/// A device with the same identifier is already registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Device {device_id} already exists in the system.")]
pub struct DuplicateError {
    pub device_id: DeviceId,
}

/// The command is unknown, or not applicable to the target device's kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Command '{command}' not supported for device {device_id}")]
pub struct UnsupportedCommandError {
    pub command: String,
    pub device_id: DeviceId,
}

/// The argument list does not have the shape a known command expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("command '{command}' expects {expected}")]
pub struct ArgumentError {
    pub command: &'static str,
    pub expected: &'static str,
}
