//! # smarthub-domain
//!
//! Pure domain model for the smarthub control plane.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, event identifiers, error conventions
//! - Define **Devices** (a closed set of kinds, each with its own state and invariants)
//! - Define **Commands** (named operations and their typed arguments)
//! - Define **Reports** (human-readable outcome of applying an operation)
//! - Define **Events** (observable records of what the hub did)
//! - Contain all clamping and capability-gating logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or any runtime crate.
//! Locking and task scheduling belong to the `app` crate.

pub mod error;
pub mod id;

pub mod command;
pub mod device;
pub mod event;
pub mod report;
