//! Operator: runs the configured command script against a hub and renders
//! the event stream as console log lines.

use std::fmt;

use smarthub_app::dispatcher::DispatchHandle;
use smarthub_app::hub::Hub;
use smarthub_app::ports::{EventPublisher, MotionSource};
use smarthub_domain::error::HubError;
use smarthub_domain::event::{Event, EventType};
use smarthub_domain::id::DeviceId;
use smarthub_domain::report::Report;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::ScriptConfig;

/// Tally of the outcomes of one script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands that changed device state.
    pub applied: usize,
    /// Commands that ran but left the device as it was.
    pub not_applied: usize,
    /// Unsupported, unknown or malformed commands.
    pub rejected: usize,
    /// Steps addressed to an unregistered device.
    pub not_found: usize,
    /// Tasks that panicked or never finished.
    pub failed: usize,
}

impl ScriptSummary {
    fn record(&mut self, outcome: Result<Report, HubError>) {
        match outcome {
            Ok(report) if report.applied => self.applied += 1,
            Ok(_) => self.not_applied += 1,
            Err(HubError::UnsupportedCommand(_) | HubError::InvalidArguments(_)) => {
                self.rejected += 1;
            }
            Err(HubError::NotFound(_)) => self.not_found += 1,
            Err(err) => {
                tracing::error!(error = %err, "command failed");
                self.failed += 1;
            }
        }
    }
}

impl fmt::Display for ScriptSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} applied, {} not applied, {} rejected, {} not found, {} failed",
            self.applied, self.not_applied, self.rejected, self.not_found, self.failed
        )
    }
}

/// Send every step of `script` to `hub`.
///
/// In sequential mode each command is awaited before the next is sent.
/// Otherwise every command is scheduled first and the handles are awaited
/// once the whole script has been sent.
pub async fn run_script<P, M>(hub: &Hub<P, M>, script: &ScriptConfig) -> ScriptSummary
where
    P: EventPublisher + Send + Sync + 'static,
    M: MotionSource + 'static,
{
    let mut summary = ScriptSummary::default();
    let mut pending: Vec<DispatchHandle> = Vec::new();

    for step in &script.steps {
        match hub
            .send_command(&step.device, &step.command, step.args.clone())
            .await
        {
            Ok(handle) if script.sequential => summary.record(handle.outcome().await),
            Ok(handle) => pending.push(handle),
            Err(err) => summary.record(Err(err)),
        }
    }

    for handle in pending {
        summary.record(handle.outcome().await);
    }
    summary
}

/// Log every event published on the bus until all senders are gone.
///
/// Resolves to the number of events rendered.
pub fn spawn_console(mut receiver: broadcast::Receiver<Event>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut rendered = 0;
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    render(&event);
                    rendered += 1;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "console fell behind the event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        rendered
    })
}

fn render(event: &Event) {
    let device = event.device_id.as_ref().map_or("-", DeviceId::as_str);
    let kind = event.event_type;
    match kind {
        EventType::DeviceAdded | EventType::DeviceRemoved | EventType::CommandExecuted => {
            tracing::info!(target: "smarthubd::console", %kind, device, "{event}");
        }
        EventType::DuplicateDevice | EventType::DeviceNotFound | EventType::CommandRejected => {
            tracing::warn!(target: "smarthubd::console", %kind, device, "{event}");
        }
    }
}
