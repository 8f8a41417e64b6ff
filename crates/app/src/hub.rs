//! Hub — the device registry and the entry point for operators.
//!
//! The registry maps identifiers to [`SharedDevice`]s behind a single mutex.
//! That mutex only ever guards the map itself; device state has its own
//! per-device lock, and the two are never held together.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use smarthub_domain::command::CommandArg;
use smarthub_domain::device::{Device, PowerState};
use smarthub_domain::error::{DuplicateError, HubError, NotFoundError};
use smarthub_domain::event::{Event, EventType};
use smarthub_domain::id::DeviceId;

use crate::dispatcher::{DispatchHandle, Dispatcher};
use crate::ports::{EventPublisher, MotionSource};
use crate::shared_device::SharedDevice;

type Registry = HashMap<DeviceId, Arc<SharedDevice>>;

/// Central hub owning every registered device.
///
/// No operation is fatal: failures are logged, published on the
/// [`EventPublisher`] and returned as a [`HubError`] the caller is free to
/// ignore.
pub struct Hub<P, M> {
    registry: Mutex<Registry>,
    publisher: Arc<P>,
    dispatcher: Arc<Dispatcher<P, M>>,
}

impl<P, M> Hub<P, M>
where
    P: EventPublisher + Send + Sync + 'static,
    M: MotionSource + 'static,
{
    /// Create an empty hub reporting to `publisher`.
    pub fn new(publisher: P, motion: M) -> Self {
        let publisher = Arc::new(publisher);
        let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&publisher), motion));
        Self {
            registry: Mutex::new(HashMap::new()),
            publisher,
            dispatcher,
        }
    }

    /// Register a device.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] when the device id is empty and
    /// [`HubError::Duplicate`] when the id is already registered; the
    /// registered device is left untouched.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id()))]
    pub async fn add_device(&self, device: Device) -> Result<(), HubError> {
        device.validate()?;
        let device_id = device.id().clone();
        let inserted = {
            let mut registry = self.lock_registry();
            if registry.contains_key(&device_id) {
                false
            } else {
                registry.insert(device_id.clone(), Arc::new(SharedDevice::new(device)));
                true
            }
        };

        if inserted {
            let message = format!("Device {device_id} added.");
            tracing::info!("{message}");
            self.report(EventType::DeviceAdded, device_id, message)
                .await;
            Ok(())
        } else {
            let err = DuplicateError { device_id };
            tracing::warn!("{err}");
            self.report(EventType::DuplicateDevice, err.device_id.clone(), err.to_string())
                .await;
            Err(err.into())
        }
    }

    /// Unregister a device. Commands already dispatched to it still complete.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no device is registered under `id`.
    #[tracing::instrument(skip(self))]
    pub async fn remove_device(&self, id: &str) -> Result<(), HubError> {
        let removed = self.lock_registry().remove(id);
        match removed {
            Some(device) => {
                let message = format!("Device {id} removed.");
                tracing::info!("{message}");
                self.report(EventType::DeviceRemoved, device.id().clone(), message)
                    .await;
                Ok(())
            }
            None => Err(self.not_found(id).await),
        }
    }

    /// Current status of a device, or `None` when `id` is unknown.
    #[tracing::instrument(skip(self))]
    pub async fn get_device_status(&self, id: &str) -> Option<PowerState> {
        match self.device(id) {
            Some(device) => Some(device.status()),
            None => {
                self.not_found(id).await;
                None
            }
        }
    }

    /// Schedule `command` on its own task and return without waiting for it.
    ///
    /// The lookup and the spawn happen under the registry lock, so a device
    /// removed concurrently is either fully dispatched to or not at all. The
    /// task itself only takes the device's lock.
    ///
    /// Commands sent concurrently to the *same* device complete in no
    /// particular order.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no device is registered under `id`;
    /// nothing is scheduled in that case. Unsupported commands are reported
    /// through the returned handle, not here.
    #[tracing::instrument(skip(self, args))]
    pub async fn send_command(
        &self,
        id: &str,
        command: &str,
        args: Vec<CommandArg>,
    ) -> Result<DispatchHandle, HubError> {
        let scheduled = {
            let registry = self.lock_registry();
            registry.get(id).map(|device| {
                DispatchHandle::spawn(
                    Arc::clone(&self.dispatcher),
                    Arc::clone(device),
                    command.to_string(),
                    args,
                )
            })
        };

        match scheduled {
            Some(handle) => {
                tracing::debug!("command scheduled");
                Ok(handle)
            }
            None => Err(self.not_found(id).await),
        }
    }

    /// The registered device under `id`, shared with the registry.
    #[must_use]
    pub fn device(&self, id: &str) -> Option<Arc<SharedDevice>> {
        self.lock_registry().get(id).cloned()
    }

    /// A copy of the full state of the device under `id`.
    #[must_use]
    pub fn snapshot(&self, id: &str) -> Option<Device> {
        self.device(id).map(|device| device.snapshot())
    }

    /// Identifiers of every registered device, sorted.
    #[must_use]
    pub fn list_devices(&self) -> Vec<DeviceId> {
        let mut ids: Vec<DeviceId> = self.lock_registry().keys().cloned().collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_registry().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_registry().is_empty()
    }

    async fn not_found(&self, id: &str) -> HubError {
        let err = NotFoundError {
            device_id: DeviceId::from(id),
        };
        tracing::warn!("{err}");
        self.report(EventType::DeviceNotFound, err.device_id.clone(), err.to_string())
            .await;
        err.into()
    }

    async fn report(&self, event_type: EventType, device_id: DeviceId, message: String) {
        let event = Event::new(event_type, Some(device_id), message, serde_json::Value::Null);
        self.publisher.publish(event).await;
    }

    fn lock_registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
