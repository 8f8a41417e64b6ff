//! Port definitions — traits the hub is generic over.
//!
//! Ports are the boundaries between the hub and its collaborators. The binary
//! crate picks concrete implementations; tests substitute their own.

pub mod event_bus;
pub mod motion;

pub use event_bus::EventPublisher;
pub use motion::MotionSource;
