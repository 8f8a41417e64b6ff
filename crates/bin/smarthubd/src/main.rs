//! # smarthubd — smarthub daemon
//!
//! Composition root that wires the hub to the event bus and runs the
//! operator script.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the event bus and motion source, inject them into the hub
//! - Register the configured devices and run the command script
//! - Drain the console once every sender is gone
//!
//! ## Dependency rule
//! This is the **only** crate that depends on every other crate.
//! It is the wiring layer — no device logic belongs here.

mod config;
mod demo;
mod operator;

use smarthub_app::event_bus::InProcessEventBus;
use smarthub_app::hub::Hub;
use smarthub_domain::device::Device;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Event bus
    let event_bus = InProcessEventBus::new(config.hub.event_capacity);
    let console = operator::spawn_console(event_bus.subscribe());

    // Hub
    let hub = Hub::new(event_bus.clone(), config.hub.motion_source());
    for device in &config.devices {
        // Duplicates are reported by the hub and skipped.
        let _ = hub
            .add_device(Device::new(device.id.as_str(), device.kind))
            .await;
    }
    tracing::info!(devices = hub.len(), "smarthubd ready");

    // Script
    let summary = operator::run_script(&hub, &config.script).await;
    tracing::info!(%summary, "script finished");

    for id in hub.list_devices() {
        if let Some(device) = hub.snapshot(id.as_str()) {
            tracing::info!(
                device = %id,
                kind = %device.kind(),
                status = %device.status(),
                "final state"
            );
        }
    }

    drop(hub);
    drop(event_bus);
    let rendered = console.await?;
    tracing::debug!(rendered, "console drained");

    Ok(())
}
