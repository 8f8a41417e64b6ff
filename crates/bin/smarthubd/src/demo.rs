//! The built-in demo home used when `smarthub.toml` does not list devices or
//! script steps.

use smarthub_domain::command::CommandArg;
use smarthub_domain::device::DeviceKind;

use crate::config::{DeviceConfig, StepConfig};

pub fn devices() -> Vec<DeviceConfig> {
    [
        ("Living Room Light", DeviceKind::Lightbulb),
        ("Nest Thermostat", DeviceKind::Thermostat),
        ("Driveway Camera", DeviceKind::SecurityCamera),
        ("Samsung TV", DeviceKind::Television),
        ("LG Refrigerator", DeviceKind::Refrigerator),
        ("Masterlock", DeviceKind::Lock),
        ("Dyson Air Purifier", DeviceKind::AirPurifier),
        ("Garage Door", DeviceKind::GarageDoor),
    ]
    .into_iter()
    .map(|(id, kind)| DeviceConfig {
        id: id.to_string(),
        kind,
    })
    .collect()
}

fn step(device: &str, command: &str, args: Vec<CommandArg>) -> StepConfig {
    StepConfig {
        device: device.to_string(),
        command: command.to_string(),
        args,
    }
}

pub fn steps() -> Vec<StepConfig> {
    let light = "Living Room Light";
    let thermostat = "Nest Thermostat";
    let camera = "Driveway Camera";
    let tv = "Samsung TV";
    let fridge = "LG Refrigerator";
    let lock = "Masterlock";
    let purifier = "Dyson Air Purifier";
    let garage = "Garage Door";

    vec![
        step(light, "turn_on", vec![]),
        step(light, "change_brightness", vec![75.into()]),
        step(light, "change_brightness", vec![40.into()]),
        step(light, "turn_off", vec![]),
        step(light, "turn_off", vec![]),
        step(thermostat, "turn_on", vec![]),
        step(thermostat, "set_temperature", vec![72.5.into()]),
        step(thermostat, "set_temperature", vec![70.2.into()]),
        step(thermostat, "turn_off", vec![]),
        step(camera, "turn_on", vec![]),
        step(camera, "detect_motion", vec![]),
        step(camera, "detect_motion", vec![]),
        step(camera, "turn_off", vec![]),
        step(tv, "turn_on", vec![]),
        step(tv, "set_volume", vec![30.into()]),
        step(tv, "change_source", vec!["Youtube TV".into()]),
        step(tv, "change_source", vec!["Playstation 5".into()]),
        step(tv, "set_volume", vec![45.into()]),
        step(tv, "change_source", vec!["Xbox Series X".into()]),
        step(tv, "turn_off", vec![]),
        step(fridge, "turn_on", vec![]),
        step(fridge, "set_refrigerator_temp", vec![40.into()]),
        step(fridge, "set_freezer_temp", vec![30.into()]),
        step(fridge, "door_status", vec![true.into()]),
        step(fridge, "set_refrigerator_temp", vec![38.into()]),
        step(fridge, "set_freezer_temp", vec![26.into()]),
        step(fridge, "door_status", vec![false.into()]),
        step(fridge, "turn_off", vec![]),
        step(lock, "lock", vec![]),
        step(lock, "get_lock_status", vec![]),
        step(lock, "unlock", vec![]),
        step(lock, "get_lock_status", vec![]),
        step(lock, "lock", vec![]),
        step(purifier, "turn_on", vec![]),
        step(purifier, "set_purification_level", vec![2.into()]),
        step(purifier, "get_purification_status", vec![]),
        step(purifier, "set_fan_speed", vec![3.into()]),
        step(purifier, "get_fan_speed", vec![]),
        step(purifier, "set_purification_level", vec![3.into()]),
        step(purifier, "get_purification_status", vec![]),
        step(purifier, "set_fan_speed", vec![1.into()]),
        step(purifier, "turn_off", vec![]),
        step(garage, "open_door", vec![]),
        step(garage, "close_door", vec![]),
        step(garage, "open_door", vec![]),
        step(garage, "close_door", vec![]),
        step(garage, "open_garage", vec![]),
    ]
}
