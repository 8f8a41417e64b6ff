//! # smarthub-app
//!
//! Application layer — the hub, the command dispatcher and **port definitions**.
//!
//! ## Responsibilities
//! - Define **port traits** the hub is wired against:
//!   - `EventPublisher` — where outcome events go
//!   - `MotionSource` — where security cameras get their scan results
//! - Own the device registry (`Hub`) and guard each device behind its own lock
//! - Schedule every command on its own tokio task (`Dispatcher`)
//! - Provide **in-process infrastructure** (event bus, motion sources)
//!
//! ## Dependency rule
//! Depends on `smarthub-domain` only (plus `tokio` for tasks and channels).
//! The binary crate depends on *this* crate, not the reverse.

pub mod dispatcher;
pub mod event_bus;
pub mod hub;
pub mod motion;
pub mod ports;
pub mod shared_device;
