//! Command — a named operation routed by the hub to a single device.
//!
//! Operators address commands by name with a loose argument list
//! (`"set_volume", [45]`). [`Command::parse`] turns that pair into a typed
//! [`Command`]; whether the target device can run it is decided later by
//! [`Device::execute`](crate::device::Device::execute).

mod arg;

pub use arg::CommandArg;

use crate::device::DeviceKind;
use crate::error::ArgumentError;

/// A typed, argument-checked command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    TurnOn,
    TurnOff,
    SetTemperature(f64),
    ChangeBrightness(i64),
    DetectMotion,
    SetVolume(i64),
    ChangeSource(String),
    SetRefrigeratorTemp(i64),
    SetFreezerTemp(i64),
    DoorStatus(bool),
    Lock,
    Unlock,
    GetLockStatus,
    SetPurificationLevel(i64),
    SetFanSpeed(i64),
    GetFanSpeed,
    GetPurificationStatus,
    OpenDoor,
    CloseDoor,
}

/// Why a `(name, args)` pair could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error(transparent)]
    Arguments(#[from] ArgumentError),
}

impl Command {
    /// Every command name the hub understands.
    pub const NAMES: [&'static str; 19] = [
        "turn_on",
        "turn_off",
        "set_temperature",
        "change_brightness",
        "detect_motion",
        "set_volume",
        "change_source",
        "set_refrigerator_temp",
        "set_freezer_temp",
        "door_status",
        "lock",
        "unlock",
        "get_lock_status",
        "set_purification_level",
        "set_fan_speed",
        "get_fan_speed",
        "get_purification_status",
        "open_door",
        "close_door",
    ];

    /// Resolve a command name and its arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unknown`] for a name outside [`Self::NAMES`] and
    /// [`CommandError::Arguments`] when the argument list has the wrong shape.
    pub fn parse(name: &str, args: &[CommandArg]) -> Result<Self, CommandError> {
        let command = match name {
            "turn_on" => arg::none("turn_on", args).map(|()| Self::TurnOn)?,
            "turn_off" => arg::none("turn_off", args).map(|()| Self::TurnOff)?,
            "set_temperature" => Self::SetTemperature(arg::float("set_temperature", args)?),
            "change_brightness" => Self::ChangeBrightness(arg::int("change_brightness", args)?),
            "detect_motion" => arg::none("detect_motion", args).map(|()| Self::DetectMotion)?,
            "set_volume" => Self::SetVolume(arg::int("set_volume", args)?),
            "change_source" => Self::ChangeSource(arg::text("change_source", args)?),
            "set_refrigerator_temp" => {
                Self::SetRefrigeratorTemp(arg::int("set_refrigerator_temp", args)?)
            }
            "set_freezer_temp" => Self::SetFreezerTemp(arg::int("set_freezer_temp", args)?),
            "door_status" => Self::DoorStatus(arg::boolean("door_status", args)?),
            "lock" => arg::none("lock", args).map(|()| Self::Lock)?,
            "unlock" => arg::none("unlock", args).map(|()| Self::Unlock)?,
            "get_lock_status" => arg::none("get_lock_status", args).map(|()| Self::GetLockStatus)?,
            "set_purification_level" => {
                Self::SetPurificationLevel(arg::int("set_purification_level", args)?)
            }
            "set_fan_speed" => Self::SetFanSpeed(arg::int("set_fan_speed", args)?),
            "get_fan_speed" => arg::none("get_fan_speed", args).map(|()| Self::GetFanSpeed)?,
            "get_purification_status" => arg::none("get_purification_status", args)
                .map(|()| Self::GetPurificationStatus)?,
            "open_door" => arg::none("open_door", args).map(|()| Self::OpenDoor)?,
            "close_door" => arg::none("close_door", args).map(|()| Self::CloseDoor)?,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    /// The wire name of this command.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::SetTemperature(_) => "set_temperature",
            Self::ChangeBrightness(_) => "change_brightness",
            Self::DetectMotion => "detect_motion",
            Self::SetVolume(_) => "set_volume",
            Self::ChangeSource(_) => "change_source",
            Self::SetRefrigeratorTemp(_) => "set_refrigerator_temp",
            Self::SetFreezerTemp(_) => "set_freezer_temp",
            Self::DoorStatus(_) => "door_status",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::GetLockStatus => "get_lock_status",
            Self::SetPurificationLevel(_) => "set_purification_level",
            Self::SetFanSpeed(_) => "set_fan_speed",
            Self::GetFanSpeed => "get_fan_speed",
            Self::GetPurificationStatus => "get_purification_status",
            Self::OpenDoor => "open_door",
            Self::CloseDoor => "close_door",
        }
    }

    /// The device kind this command is gated on, or `None` for the baseline
    /// power commands every kind accepts.
    #[must_use]
    pub fn required_kind(&self) -> Option<DeviceKind> {
        match self {
            Self::TurnOn | Self::TurnOff => None,
            Self::SetTemperature(_) => Some(DeviceKind::Thermostat),
            Self::ChangeBrightness(_) => Some(DeviceKind::Lightbulb),
            Self::DetectMotion => Some(DeviceKind::SecurityCamera),
            Self::SetVolume(_) | Self::ChangeSource(_) => Some(DeviceKind::Television),
            Self::SetRefrigeratorTemp(_) | Self::SetFreezerTemp(_) | Self::DoorStatus(_) => {
                Some(DeviceKind::Refrigerator)
            }
            Self::Lock | Self::Unlock | Self::GetLockStatus => Some(DeviceKind::Lock),
            Self::SetPurificationLevel(_)
            | Self::SetFanSpeed(_)
            | Self::GetFanSpeed
            | Self::GetPurificationStatus => Some(DeviceKind::AirPurifier),
            Self::OpenDoor | Self::CloseDoor => Some(DeviceKind::GarageDoor),
        }
    }

    /// Whether a device of `kind` accepts this command.
    #[must_use]
    pub fn is_supported_by(&self, kind: DeviceKind) -> bool {
        self.required_kind().is_none_or(|required| required == kind)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_baseline_commands_without_arguments() {
        assert_eq!(Command::parse("turn_on", &[]).unwrap(), Command::TurnOn);
        assert_eq!(Command::parse("turn_off", &[]).unwrap(), Command::TurnOff);
    }

    #[test]
    fn should_parse_commands_with_typed_arguments() {
        assert_eq!(
            Command::parse("change_brightness", &[75.into()]).unwrap(),
            Command::ChangeBrightness(75)
        );
        assert_eq!(
            Command::parse("change_source", &["Playstation 5".into()]).unwrap(),
            Command::ChangeSource("Playstation 5".to_string())
        );
        assert_eq!(
            Command::parse("door_status", &[true.into()]).unwrap(),
            Command::DoorStatus(true)
        );
        assert_eq!(
            Command::parse("set_temperature", &[72.5.into()]).unwrap(),
            Command::SetTemperature(72.5)
        );
    }

    #[test]
    fn should_reject_unknown_command_name() {
        let err = Command::parse("open_garage", &[]).unwrap_err();
        assert_eq!(err, CommandError::Unknown("open_garage".to_string()));
    }

    #[test]
    fn should_reject_wrong_argument_shape() {
        let err = Command::parse("set_volume", &["loud".into()]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Arguments(ArgumentError {
                command: "set_volume",
                ..
            })
        ));
        assert!(Command::parse("lock", &[1.into()]).is_err());
        assert!(Command::parse("set_fan_speed", &[]).is_err());
    }

    #[test]
    fn should_keep_out_of_range_numbers_for_clamping_later() {
        assert_eq!(
            Command::parse("set_volume", &[150.into()]).unwrap(),
            Command::SetVolume(150)
        );
        assert_eq!(
            Command::parse("change_brightness", &[(-10).into()]).unwrap(),
            Command::ChangeBrightness(-10)
        );
    }

    #[test]
    fn should_report_name_matching_parse_input_for_every_command() {
        for name in Command::NAMES {
            let args: Vec<CommandArg> = match name {
                "set_temperature" => vec![70.0.into()],
                "change_source" => vec!["Cable".into()],
                "door_status" => vec![false.into()],
                "change_brightness"
                | "set_volume"
                | "set_refrigerator_temp"
                | "set_freezer_temp"
                | "set_purification_level"
                | "set_fan_speed" => vec![1.into()],
                _ => vec![],
            };
            let command = Command::parse(name, &args).unwrap();
            assert_eq!(command.name(), name);
        }
    }

    #[test]
    fn should_accept_power_commands_for_every_kind() {
        for kind in DeviceKind::ALL {
            assert!(Command::TurnOn.is_supported_by(kind));
            assert!(Command::TurnOff.is_supported_by(kind));
        }
    }

    #[test]
    fn should_gate_variant_commands_on_kind() {
        let command = Command::SetTemperature(70.0);
        assert!(command.is_supported_by(DeviceKind::Thermostat));
        assert!(!command.is_supported_by(DeviceKind::Refrigerator));
        assert!(!Command::Lock.is_supported_by(DeviceKind::GarageDoor));
    }
}
