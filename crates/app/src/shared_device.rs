//! A registered device behind its own exclusive lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smarthub_domain::device::{Device, DeviceKind, PowerState};
use smarthub_domain::id::DeviceId;

/// A [`Device`] owned by the hub and shared with in-flight dispatch tasks.
///
/// Every read and write of device state goes through the device's own mutex,
/// so a read-modify-report sequence on one device never interleaves with
/// another operation on the same device. Different devices share no lock.
///
/// The identifier and kind are copied out at construction; both are immutable,
/// so they can be read without locking.
#[derive(Debug)]
pub struct SharedDevice {
    id: DeviceId,
    kind: DeviceKind,
    device: Mutex<Device>,
}

impl SharedDevice {
    #[must_use]
    pub fn new(device: Device) -> Self {
        Self {
            id: device.id().clone(),
            kind: device.kind(),
            device: Mutex::new(device),
        }
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    #[must_use]
    pub fn status(&self) -> PowerState {
        self.lock().status()
    }

    /// Copy of the full device state at this instant.
    #[must_use]
    pub fn snapshot(&self) -> Device {
        self.lock().clone()
    }

    /// Run `f` with exclusive access to the device.
    ///
    /// `f` must stay short and non-blocking: it runs inside the critical section.
    pub fn with_lock<T>(&self, f: impl FnOnce(&mut Device) -> T) -> T {
        f(&mut self.lock())
    }

    // A panic inside a critical section leaves the device in whatever state the
    // last completed field write produced; keep serving it.
    fn lock(&self) -> MutexGuard<'_, Device> {
        self.device.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
