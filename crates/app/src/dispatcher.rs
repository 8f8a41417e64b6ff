//! Command dispatcher — runs one named command against one device.
//!
//! The dispatcher resolves `(name, args)` into a typed [`Command`], applies it
//! under the target device's lock, and publishes the outcome. It never touches
//! the registry: by the time it runs, the hub has already handed it the device.

use std::sync::Arc;

use tokio::task::JoinHandle;

use smarthub_domain::command::{Command, CommandArg, CommandError};
use smarthub_domain::error::{HubError, UnsupportedCommandError};
use smarthub_domain::event::{Event, EventType};
use smarthub_domain::id::DeviceId;
use smarthub_domain::report::Report;

use crate::ports::{EventPublisher, MotionSource};
use crate::shared_device::SharedDevice;

/// Stateless executor shared by every dispatch task.
pub struct Dispatcher<P, M> {
    publisher: Arc<P>,
    motion: M,
}

impl<P, M> Dispatcher<P, M>
where
    P: EventPublisher + Send + Sync,
    M: MotionSource,
{
    pub fn new(publisher: Arc<P>, motion: M) -> Self {
        Self { publisher, motion }
    }

    /// Execute and report a single command.
    ///
    /// Every outcome is published: [`EventType::CommandExecuted`] on success,
    /// [`EventType::CommandRejected`] for unknown, unsupported or malformed
    /// commands.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::UnsupportedCommand`] when the command is unknown or
    /// gated on another device kind, and [`HubError::InvalidArguments`] when
    /// the argument list has the wrong shape. The device is not mutated.
    #[tracing::instrument(skip(self, device, args), fields(device_id = %device.id()))]
    pub async fn dispatch(
        &self,
        device: &SharedDevice,
        name: &str,
        args: &[CommandArg],
    ) -> Result<Report, HubError> {
        match self.execute(device, name, args) {
            Ok((report, snapshot)) => {
                tracing::info!(applied = report.applied, "{report}");
                let data = serde_json::json!({
                    "command": name,
                    "applied": report.applied,
                    "device": snapshot,
                });
                let event = Event::new(
                    EventType::CommandExecuted,
                    Some(device.id().clone()),
                    report.message.clone(),
                    data,
                );
                self.publisher.publish(event).await;
                Ok(report)
            }
            Err(err) => {
                let message = rejection_message(&err);
                tracing::warn!("{message}");
                let event = Event::new(
                    EventType::CommandRejected,
                    Some(device.id().clone()),
                    message,
                    serde_json::json!({ "command": name }),
                );
                self.publisher.publish(event).await;
                Err(err)
            }
        }
    }

    fn execute(
        &self,
        device: &SharedDevice,
        name: &str,
        args: &[CommandArg],
    ) -> Result<(Report, serde_json::Value), HubError> {
        let command = Command::parse(name, args).map_err(|err| match err {
            CommandError::Unknown(command) => HubError::from(UnsupportedCommandError {
                command,
                device_id: device.id().clone(),
            }),
            CommandError::Arguments(err) => HubError::from(err),
        })?;

        device.with_lock(|target| -> Result<_, HubError> {
            let report = target.execute(&command, || self.motion.detect())?;
            let snapshot = serde_json::to_value(&*target).unwrap_or_default();
            Ok((report, snapshot))
        })
    }
}

fn rejection_message(err: &HubError) -> String {
    match err {
        HubError::UnsupportedCommand(inner) => inner.to_string(),
        HubError::InvalidArguments(inner) => format!("Invalid arguments: {inner}"),
        other => other.to_string(),
    }
}

/// Handle to a command running on its own task.
///
/// Dropping the handle detaches the task; it still runs to completion and its
/// outcome is still published.
#[derive(Debug)]
pub struct DispatchHandle {
    device_id: DeviceId,
    command: String,
    task: JoinHandle<Result<Report, HubError>>,
}

impl DispatchHandle {
    pub(crate) fn spawn<P, M>(
        dispatcher: Arc<Dispatcher<P, M>>,
        device: Arc<SharedDevice>,
        command: String,
        args: Vec<CommandArg>,
    ) -> Self
    where
        P: EventPublisher + Send + Sync + 'static,
        M: MotionSource + 'static,
    {
        let device_id = device.id().clone();
        let name = command.clone();
        let task =
            tokio::spawn(async move { dispatcher.dispatch(&device, &name, &args).await });
        Self {
            device_id,
            command,
            task,
        }
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Wait for the command to finish.
    ///
    /// # Errors
    ///
    /// Returns the dispatch error, or [`HubError::Dispatch`] if the task
    /// panicked or the runtime shut down first.
    pub async fn outcome(self) -> Result<Report, HubError> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(join) => Err(HubError::Dispatch(Box::new(join))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::InProcessEventBus;
    use crate::motion::FixedMotion;
    use smarthub_domain::device::{Device, DeviceKind, DeviceState, PowerState};

    type TestDispatcher = Dispatcher<InProcessEventBus, FixedMotion>;

    fn dispatcher(motion: bool) -> (TestDispatcher, InProcessEventBus) {
        let bus = InProcessEventBus::new(16);
        let dispatcher = Dispatcher::new(Arc::new(bus.clone()), FixedMotion(motion));
        (dispatcher, bus)
    }

    #[tokio::test]
    async fn should_apply_baseline_command_to_any_kind() {
        let (dispatcher, _bus) = dispatcher(false);
        for kind in DeviceKind::ALL {
            let device = SharedDevice::new(Device::new("d", kind));
            dispatcher.dispatch(&device, "turn_on", &[]).await.unwrap();
            assert!(!device.status().is_off(), "{kind}");
        }
    }

    #[tokio::test]
    async fn should_publish_executed_event_with_snapshot() {
        let (dispatcher, bus) = dispatcher(false);
        let mut rx = bus.subscribe();
        let device = SharedDevice::new(Device::new("Samsung TV", DeviceKind::Television));

        let report = dispatcher
            .dispatch(&device, "set_volume", &[45.into()])
            .await
            .unwrap();
        assert_eq!(report.message, "Television Samsung TV volume set to 45");

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::CommandExecuted);
        assert_eq!(event.message, report.message);
        assert_eq!(event.data["command"], "set_volume");
        assert_eq!(event.data["device"]["volume"], 45);
    }

    #[tokio::test]
    async fn should_reject_command_gated_on_other_kind() {
        let (dispatcher, bus) = dispatcher(false);
        let mut rx = bus.subscribe();
        let device = SharedDevice::new(Device::new("Nest Thermostat", DeviceKind::Thermostat));
        let before = device.snapshot();

        let err = dispatcher
            .dispatch(&device, "change_brightness", &[40.into()])
            .await
            .unwrap_err();

        assert!(matches!(err, HubError::UnsupportedCommand(_)));
        assert_eq!(device.snapshot(), before);
        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::CommandRejected);
        assert_eq!(
            event.message,
            "Command 'change_brightness' not supported for device Nest Thermostat"
        );
    }

    #[tokio::test]
    async fn should_reject_unknown_command_as_unsupported() {
        let (dispatcher, _bus) = dispatcher(false);
        let device = SharedDevice::new(Device::new("Garage Door", DeviceKind::GarageDoor));

        let err = dispatcher
            .dispatch(&device, "open_garage", &[])
            .await
            .unwrap_err();

        let HubError::UnsupportedCommand(inner) = err else {
            panic!("expected unsupported command");
        };
        assert_eq!(inner.command, "open_garage");
        assert_eq!(device.status(), PowerState::Off);
    }

    #[tokio::test]
    async fn should_reject_malformed_arguments_without_mutation() {
        let (dispatcher, bus) = dispatcher(false);
        let mut rx = bus.subscribe();
        let device = SharedDevice::new(Device::new("Samsung TV", DeviceKind::Television));

        let err = dispatcher
            .dispatch(&device, "set_volume", &["loud".into()])
            .await
            .unwrap_err();

        assert!(matches!(err, HubError::InvalidArguments(_)));
        let event = rx.recv().await.unwrap();
        assert_eq!(
            event.message,
            "Invalid arguments: command 'set_volume' expects one integer argument"
        );
    }

    #[tokio::test]
    async fn should_feed_motion_source_into_camera() {
        let (dispatcher, _bus) = dispatcher(true);
        let device = SharedDevice::new(Device::new("Driveway Camera", DeviceKind::SecurityCamera));

        let report = dispatcher
            .dispatch(&device, "detect_motion", &[])
            .await
            .unwrap();

        assert_eq!(report.message, "Security Camera Driveway Camera detected motion");
        assert!(matches!(
            device.snapshot().state(),
            DeviceState::SecurityCamera(camera) if camera.motion_detected()
        ));
    }

    #[tokio::test]
    async fn should_resolve_spawned_handle_to_outcome() {
        let (dispatcher, _bus) = dispatcher(false);
        let device = Arc::new(SharedDevice::new(Device::new("Masterlock", DeviceKind::Lock)));

        let handle = DispatchHandle::spawn(
            Arc::new(dispatcher),
            Arc::clone(&device),
            "unlock".to_string(),
            Vec::new(),
        );
        assert_eq!(handle.device_id().as_str(), "Masterlock");
        assert_eq!(handle.command(), "unlock");

        let report = handle.outcome().await.unwrap();
        assert_eq!(report.message, "Lock Masterlock is now unlocked.");
    }
}
