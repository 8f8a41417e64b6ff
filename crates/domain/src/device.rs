//! Device — a controllable thing registered with the hub.
//!
//! A [`Device`] pairs an identifier and a baseline [`PowerState`] with
//! kind-specific [`DeviceState`]. The kind is fixed by the state variant and
//! can never change after construction.
//!
//! All mutation goes through [`Device::turn_on`], [`Device::turn_off`] and
//! [`Device::execute`]; variant fields are read-only from outside this module,
//! which keeps every clamping rule in one place. Each operation returns a
//! [`Report`] describing what happened.

mod air_purifier;
mod garage_door;
mod kind;
mod lightbulb;
mod lock;
mod power;
mod refrigerator;
mod security_camera;
mod television;
mod thermostat;

pub use air_purifier::AirPurifier;
pub use garage_door::GarageDoor;
pub use kind::DeviceKind;
pub use lightbulb::Lightbulb;
pub use lock::Lock;
pub use power::PowerState;
pub use refrigerator::Refrigerator;
pub use security_camera::SecurityCamera;
pub use television::Television;
pub use thermostat::Thermostat;

use serde::Serialize;

use crate::command::Command;
use crate::error::{UnsupportedCommandError, ValidationError};
use crate::id::DeviceId;
use crate::report::Report;

/// Clamp `value` into `0..=max`.
fn clamp_level(value: i64, max: u8) -> u8 {
    u8::try_from(value.clamp(0, i64::from(max))).unwrap_or(max)
}

/// Kind-specific state, one variant per [`DeviceKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceState {
    Lightbulb(Lightbulb),
    Thermostat(Thermostat),
    SecurityCamera(SecurityCamera),
    Television(Television),
    Refrigerator(Refrigerator),
    Lock(Lock),
    AirPurifier(AirPurifier),
    GarageDoor(GarageDoor),
}

impl DeviceState {
    /// Factory-default state for `kind`.
    #[must_use]
    pub fn for_kind(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Lightbulb => Self::Lightbulb(Lightbulb::default()),
            DeviceKind::Thermostat => Self::Thermostat(Thermostat::default()),
            DeviceKind::SecurityCamera => Self::SecurityCamera(SecurityCamera::default()),
            DeviceKind::Television => Self::Television(Television::default()),
            DeviceKind::Refrigerator => Self::Refrigerator(Refrigerator::default()),
            DeviceKind::Lock => Self::Lock(Lock::default()),
            DeviceKind::AirPurifier => Self::AirPurifier(AirPurifier::default()),
            DeviceKind::GarageDoor => Self::GarageDoor(GarageDoor::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Lightbulb(_) => DeviceKind::Lightbulb,
            Self::Thermostat(_) => DeviceKind::Thermostat,
            Self::SecurityCamera(_) => DeviceKind::SecurityCamera,
            Self::Television(_) => DeviceKind::Television,
            Self::Refrigerator(_) => DeviceKind::Refrigerator,
            Self::Lock(_) => DeviceKind::Lock,
            Self::AirPurifier(_) => DeviceKind::AirPurifier,
            Self::GarageDoor(_) => DeviceKind::GarageDoor,
        }
    }
}

/// A device: identity, baseline power state and kind-specific state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    id: DeviceId,
    power: PowerState,
    #[serde(flatten)]
    state: DeviceState,
}

impl Device {
    /// Create a device of `kind` in its factory-default, powered-off state.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            power: PowerState::Off,
            state: DeviceState::for_kind(kind),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when the identifier is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.state.kind()
    }

    /// Current baseline status. Never mutates.
    #[must_use]
    pub fn status(&self) -> PowerState {
        self.power
    }

    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Switch the device on.
    ///
    /// Cameras become [`PowerState::Active`]; lightbulbs go to full brightness;
    /// air purifiers start at level 1 / speed 1. Calling it again re-applies
    /// the same state.
    pub fn turn_on(&mut self) -> Report {
        let label = self.kind().label();
        let id = &self.id;
        let message = match &mut self.state {
            DeviceState::Lightbulb(bulb) => {
                self.power = PowerState::On;
                bulb.power_on();
                format!(
                    "{label} {id} turned on with brightness {}%",
                    bulb.brightness()
                )
            }
            DeviceState::Thermostat(thermostat) => {
                self.power = PowerState::On;
                format!(
                    "{label} {id} turned on, temperature set to {}°F",
                    thermostat.temperature()
                )
            }
            DeviceState::SecurityCamera(_) => {
                self.power = PowerState::Active;
                format!("{label} {id} activated")
            }
            DeviceState::Television(tv) => {
                self.power = PowerState::On;
                format!(
                    "{label} {id} turned on. Volume: {}, Source: {}",
                    tv.volume(),
                    tv.input_source()
                )
            }
            DeviceState::Refrigerator(fridge) => {
                self.power = PowerState::On;
                format!(
                    "{label} {id} turned on. Refrigerator temp: {}°F, Freezer temp: {}°F",
                    fridge.refrigerator_temp(),
                    fridge.freezer_temp()
                )
            }
            DeviceState::AirPurifier(purifier) => {
                purifier.power_on();
                self.power = PowerState::On;
                format!(
                    "{label} {id} turned on at purification level {} with fan speed {}",
                    purifier.purification_level(),
                    purifier.fan_speed()
                )
            }
            DeviceState::Lock(_) | DeviceState::GarageDoor(_) => {
                self.power = PowerState::On;
                format!("{label} {id} turned on")
            }
        };
        Report::applied(message)
    }

    /// Switch the device off, resetting kind fields that depend on power.
    pub fn turn_off(&mut self) -> Report {
        let label = self.kind().label();
        let id = &self.id;
        self.power = PowerState::Off;
        let message = match &mut self.state {
            DeviceState::Lightbulb(bulb) => {
                bulb.power_off();
                format!("{label} {id} turned off")
            }
            DeviceState::AirPurifier(purifier) => {
                purifier.power_off();
                format!("{label} {id} turned off")
            }
            DeviceState::SecurityCamera(_) => format!("{label} {id} deactivated"),
            DeviceState::Thermostat(_)
            | DeviceState::Television(_)
            | DeviceState::Refrigerator(_)
            | DeviceState::Lock(_)
            | DeviceState::GarageDoor(_) => format!("{label} {id} turned off"),
        };
        Report::applied(message)
    }

    /// Run `command` against this device.
    ///
    /// `sense_motion` is consulted only by [`Command::DetectMotion`] on a
    /// security camera; it supplies the scan result.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCommandError`] when the command is gated on a kind
    /// other than this device's. State is left untouched in that case.
    pub fn execute(
        &mut self,
        command: &Command,
        sense_motion: impl FnOnce() -> bool,
    ) -> Result<Report, UnsupportedCommandError> {
        match command {
            Command::TurnOn => return Ok(self.turn_on()),
            Command::TurnOff => return Ok(self.turn_off()),
            _ => {}
        }

        let label = self.kind().label();
        let id = &self.id;
        let report = match (command, &mut self.state) {
            (Command::SetTemperature(temp), DeviceState::Thermostat(thermostat)) => {
                thermostat.set_temperature(*temp);
                Report::applied(format!(
                    "{label} {id} temperature set to {}°F",
                    thermostat.temperature()
                ))
            }
            (Command::ChangeBrightness(level), DeviceState::Lightbulb(bulb)) => {
                if self.power == PowerState::On {
                    let brightness = bulb.set_brightness(*level);
                    Report::applied(format!(
                        "{label} {id} brightness adjusted to {brightness}%"
                    ))
                } else {
                    Report::not_applied(format!(
                        "{label} {id} is off. Please turn it on to change the brightness."
                    ))
                }
            }
            (Command::DetectMotion, DeviceState::SecurityCamera(camera)) => {
                if camera.record_motion(sense_motion()) {
                    Report::applied(format!("{label} {id} detected motion"))
                } else {
                    Report::applied(format!("{label} {id} no motion detected"))
                }
            }
            (Command::SetVolume(volume), DeviceState::Television(tv)) => {
                let volume = tv.set_volume(*volume);
                Report::applied(format!("{label} {id} volume set to {volume}"))
            }
            (Command::ChangeSource(source), DeviceState::Television(tv)) => {
                tv.change_source(source.clone());
                Report::applied(format!(
                    "{label} {id} input source changed to {}",
                    tv.input_source()
                ))
            }
            (Command::SetRefrigeratorTemp(temp), DeviceState::Refrigerator(fridge)) => {
                fridge.set_refrigerator_temp(*temp);
                Report::applied(format!(
                    "{label} {id} refrigerator temperature set to {temp}°F"
                ))
            }
            (Command::SetFreezerTemp(temp), DeviceState::Refrigerator(fridge)) => {
                fridge.set_freezer_temp(*temp);
                Report::applied(format!("{label} {id} freezer temperature set to {temp}°F"))
            }
            (Command::DoorStatus(open), DeviceState::Refrigerator(fridge)) => {
                fridge.set_door_open(*open);
                let status = if *open { "open" } else { "closed" };
                Report::applied(format!("{label} {id} door is {status}"))
            }
            (Command::Lock, DeviceState::Lock(lock)) => {
                lock.engage();
                Report::applied(format!("{label} {id} is now locked."))
            }
            (Command::Unlock, DeviceState::Lock(lock)) => {
                lock.release();
                Report::applied(format!("{label} {id} is now unlocked."))
            }
            (Command::GetLockStatus, DeviceState::Lock(lock)) => {
                Report::not_applied(format!("{label} {id} is {}", lock.status_label()))
            }
            (Command::SetPurificationLevel(level), DeviceState::AirPurifier(purifier)) => {
                let level = purifier.set_purification_level(*level);
                if level > 0 {
                    self.power = PowerState::On;
                }
                Report::applied(format!("{label} {id} purification level set to {level}"))
            }
            (Command::SetFanSpeed(speed), DeviceState::AirPurifier(purifier)) => {
                let speed = purifier.set_fan_speed(*speed);
                Report::applied(format!("{label} {id} fan speed set to {speed}"))
            }
            (Command::GetFanSpeed, DeviceState::AirPurifier(purifier)) => Report::not_applied(
                format!("{label} {id} fan speed is {}", purifier.fan_speed()),
            ),
            (Command::GetPurificationStatus, DeviceState::AirPurifier(purifier)) => {
                Report::not_applied(format!(
                    "{label} {id} purification level is {}",
                    purifier.purification_level()
                ))
            }
            (Command::OpenDoor, DeviceState::GarageDoor(door)) => {
                door.set_open(true);
                self.power = PowerState::Open;
                Report::applied(format!("{label} {id} is now open."))
            }
            (Command::CloseDoor, DeviceState::GarageDoor(door)) => {
                door.set_open(false);
                self.power = PowerState::Closed;
                Report::applied(format!("{label} {id} is now closed."))
            }
            (other, _) => {
                return Err(UnsupportedCommandError {
                    command: other.name().to_string(),
                    device_id: self.id.clone(),
                });
            }
        };
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(device: &mut Device, command: Command) -> Report {
        device.execute(&command, || false).unwrap()
    }

    fn bulb(device: &Device) -> &Lightbulb {
        match device.state() {
            DeviceState::Lightbulb(bulb) => bulb,
            other => panic!("expected lightbulb, got {other:?}"),
        }
    }

    fn purifier(device: &Device) -> &AirPurifier {
        match device.state() {
            DeviceState::AirPurifier(purifier) => purifier,
            other => panic!("expected air purifier, got {other:?}"),
        }
    }

    #[test]
    fn should_start_off_for_every_kind() {
        for kind in DeviceKind::ALL {
            let device = Device::new("d", kind);
            assert_eq!(device.status(), PowerState::Off);
            assert_eq!(device.kind(), kind);
        }
    }

    #[test]
    fn should_reject_empty_id() {
        let device = Device::new("", DeviceKind::Lock);
        assert_eq!(device.validate(), Err(ValidationError::EmptyId));
        assert!(Device::new("Shed Lock", DeviceKind::Lock).validate().is_ok());
    }

    #[test]
    fn should_cycle_lightbulb_brightness_with_power() {
        let mut device = Device::new("Kitchen Light", DeviceKind::Lightbulb);
        assert_eq!(bulb(&device).brightness(), 0);

        let report = device.turn_on();
        assert_eq!(device.status(), PowerState::On);
        assert_eq!(bulb(&device).brightness(), 100);
        assert_eq!(
            report.message,
            "Smart Lightbulb Kitchen Light turned on with brightness 100%"
        );

        device.turn_off();
        assert_eq!(device.status(), PowerState::Off);
        assert_eq!(bulb(&device).brightness(), 0);
    }

    #[test]
    fn should_ignore_brightness_change_while_off() {
        let mut device = Device::new("Kitchen Light", DeviceKind::Lightbulb);
        for level in [-50, 0, 50, 100, 150] {
            let report = run(&mut device, Command::ChangeBrightness(level));
            assert!(!report.applied);
            assert_eq!(bulb(&device).brightness(), 0);
        }
        assert_eq!(
            run(&mut device, Command::ChangeBrightness(10)).message,
            "Smart Lightbulb Kitchen Light is off. Please turn it on to change the brightness."
        );
    }

    #[test]
    fn should_clamp_brightness_while_on() {
        let mut device = Device::new("Kitchen Light", DeviceKind::Lightbulb);
        device.turn_on();

        run(&mut device, Command::ChangeBrightness(150));
        assert_eq!(bulb(&device).brightness(), 100);
        run(&mut device, Command::ChangeBrightness(-10));
        assert_eq!(bulb(&device).brightness(), 0);
        let report = run(&mut device, Command::ChangeBrightness(50));
        assert_eq!(bulb(&device).brightness(), 50);
        assert_eq!(
            report.message,
            "Smart Lightbulb Kitchen Light brightness adjusted to 50%"
        );
    }

    #[test]
    fn should_activate_camera_instead_of_on() {
        let mut device = Device::new("Geeni Camera", DeviceKind::SecurityCamera);
        let report = device.turn_on();
        assert_eq!(device.status(), PowerState::Active);
        assert_eq!(report.message, "Security Camera Geeni Camera activated");
        device.turn_off();
        assert_eq!(device.status(), PowerState::Off);
    }

    #[test]
    fn should_record_injected_motion_result() {
        let mut device = Device::new("Geeni Camera", DeviceKind::SecurityCamera);
        let report = device.execute(&Command::DetectMotion, || true).unwrap();
        assert_eq!(report.message, "Security Camera Geeni Camera detected motion");
        assert!(matches!(
            device.state(),
            DeviceState::SecurityCamera(camera) if camera.motion_detected()
        ));

        let report = device.execute(&Command::DetectMotion, || false).unwrap();
        assert_eq!(report.message, "Security Camera Geeni Camera no motion detected");
        assert!(matches!(
            device.state(),
            DeviceState::SecurityCamera(camera) if !camera.motion_detected()
        ));
    }

    #[test]
    fn should_leave_thermostat_setpoint_across_power_cycle() {
        let mut device = Device::new("Honeywell Thermostat", DeviceKind::Thermostat);
        let report = device.turn_on();
        assert_eq!(
            report.message,
            "Thermostat Honeywell Thermostat turned on, temperature set to 65°F"
        );
        run(&mut device, Command::SetTemperature(72.5));
        device.turn_off();
        assert!(matches!(
            device.state(),
            DeviceState::Thermostat(t) if (t.temperature() - 72.5).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn should_clamp_television_volume_and_switch_source() {
        let mut device = Device::new("Samsung TV", DeviceKind::Television);
        run(&mut device, Command::SetVolume(150));
        let report = run(&mut device, Command::ChangeSource("Playstation 5".to_string()));
        assert_eq!(
            report.message,
            "Television Samsung TV input source changed to Playstation 5"
        );
        let DeviceState::Television(tv) = device.state() else {
            panic!("expected television");
        };
        assert_eq!(tv.volume(), 100);
        assert_eq!(tv.input_source(), "Playstation 5");

        run(&mut device, Command::SetVolume(-5));
        let DeviceState::Television(tv) = device.state() else {
            panic!("expected television");
        };
        assert_eq!(tv.volume(), 0);
    }

    #[test]
    fn should_set_refrigerator_compartments_and_door() {
        let mut device = Device::new("LG Fridge", DeviceKind::Refrigerator);
        run(&mut device, Command::SetRefrigeratorTemp(42));
        run(&mut device, Command::SetFreezerTemp(30));
        let report = run(&mut device, Command::DoorStatus(true));
        assert_eq!(report.message, "Refrigerator LG Fridge door is open");

        device.turn_on();
        device.turn_off();
        let DeviceState::Refrigerator(fridge) = device.state() else {
            panic!("expected refrigerator");
        };
        assert_eq!(fridge.refrigerator_temp(), 42);
        assert_eq!(fridge.freezer_temp(), 30);
        assert!(fridge.door_open());
    }

    #[test]
    fn should_toggle_lock_without_touching_power() {
        let mut device = Device::new("Shed Lock", DeviceKind::Lock);
        run(&mut device, Command::Unlock);
        assert_eq!(
            run(&mut device, Command::GetLockStatus).message,
            "Lock Shed Lock is unlocked"
        );
        run(&mut device, Command::Lock);
        assert_eq!(
            run(&mut device, Command::GetLockStatus).message,
            "Lock Shed Lock is locked"
        );
        assert_eq!(device.status(), PowerState::Off);
    }

    #[test]
    fn should_cycle_air_purifier_settings_with_power() {
        let mut device = Device::new("Dyson Air Purifier", DeviceKind::AirPurifier);
        device.turn_on();
        assert_eq!(purifier(&device).purification_level(), 1);
        assert_eq!(purifier(&device).fan_speed(), 1);
        device.turn_off();
        assert_eq!(purifier(&device).purification_level(), 0);
        assert_eq!(purifier(&device).fan_speed(), 0);
        assert_eq!(device.status(), PowerState::Off);
    }

    #[test]
    fn should_power_on_purifier_when_level_set_above_zero() {
        let mut device = Device::new("Dyson Air Purifier", DeviceKind::AirPurifier);
        run(&mut device, Command::SetPurificationLevel(2));
        assert_eq!(device.status(), PowerState::On);
        assert_eq!(purifier(&device).purification_level(), 2);
        assert_eq!(purifier(&device).fan_speed(), 0);
    }

    #[test]
    fn should_keep_purifier_off_when_level_set_to_zero() {
        let mut device = Device::new("Dyson Air Purifier", DeviceKind::AirPurifier);
        run(&mut device, Command::SetPurificationLevel(0));
        assert_eq!(device.status(), PowerState::Off);
    }

    #[test]
    fn should_report_purifier_settings_with_label_and_id() {
        let mut device = Device::new("Dyson", DeviceKind::AirPurifier);
        assert_eq!(
            device.turn_on().message,
            "Air Purifier Dyson turned on at purification level 1 with fan speed 1"
        );
        let report = device
            .execute(&Command::SetPurificationLevel(5), || false)
            .unwrap();
        assert_eq!(report.message, "Air Purifier Dyson purification level set to 3");
        let report = device.execute(&Command::SetFanSpeed(2), || false).unwrap();
        assert_eq!(report.message, "Air Purifier Dyson fan speed set to 2");
    }

    #[test]
    fn should_show_door_position_as_status() {
        let mut device = Device::new("Garage Door", DeviceKind::GarageDoor);
        run(&mut device, Command::OpenDoor);
        assert_eq!(device.status(), PowerState::Open);
        assert!(matches!(device.state(), DeviceState::GarageDoor(d) if d.is_open()));
        run(&mut device, Command::CloseDoor);
        assert_eq!(device.status(), PowerState::Closed);
        assert!(matches!(device.state(), DeviceState::GarageDoor(d) if !d.is_open()));
    }

    #[test]
    fn should_be_idempotent_when_turned_on_twice() {
        for kind in DeviceKind::ALL {
            let mut once = Device::new("d", kind);
            once.turn_on();
            let mut twice = once.clone();
            twice.turn_on();
            assert_eq!(once, twice, "{kind}");
        }
    }

    #[test]
    fn should_reject_command_gated_on_another_kind() {
        let mut device = Device::new("Nest Thermostat", DeviceKind::Thermostat);
        let before = device.clone();
        let err = device
            .execute(&Command::ChangeBrightness(40), || false)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Command 'change_brightness' not supported for device Nest Thermostat"
        );
        assert_eq!(device, before);
    }

    #[test]
    fn should_gate_exactly_as_required_kind_declares() {
        let commands = [
            Command::SetTemperature(70.0),
            Command::ChangeBrightness(10),
            Command::DetectMotion,
            Command::SetVolume(10),
            Command::ChangeSource("HDMI 1".to_string()),
            Command::SetRefrigeratorTemp(37),
            Command::SetFreezerTemp(0),
            Command::DoorStatus(false),
            Command::Lock,
            Command::Unlock,
            Command::GetLockStatus,
            Command::SetPurificationLevel(1),
            Command::SetFanSpeed(1),
            Command::GetFanSpeed,
            Command::GetPurificationStatus,
            Command::OpenDoor,
            Command::CloseDoor,
        ];
        for kind in DeviceKind::ALL {
            for command in &commands {
                let mut device = Device::new("d", kind);
                let result = device.execute(command, || false);
                assert_eq!(
                    result.is_ok(),
                    command.is_supported_by(kind),
                    "{command} on {kind}"
                );
            }
        }
    }

    #[test]
    fn should_serialize_snapshot_with_kind_tag() {
        let mut device = Device::new("Samsung TV", DeviceKind::Television);
        device.turn_on();
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "Samsung TV",
                "power": "on",
                "kind": "television",
                "volume": 30,
                "input_source": "Cable",
            })
        );
    }
}
