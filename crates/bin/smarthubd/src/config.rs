//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthub.toml` in the working directory (or the path in
//! `SMARTHUB_CONFIG`). Every field has a default so the file is optional;
//! without `[[devices]]` or `[[script.steps]]` the built-in demo home is used.
//! Environment variables take precedence over file values.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use smarthub_app::motion::{FixedMotion, RandomMotion};
use smarthub_app::ports::MotionSource;
use smarthub_domain::command::CommandArg;
use smarthub_domain::device::DeviceKind;

use crate::demo;

const DEFAULT_PATH: &str = "smarthub.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub hub: HubConfig,
    /// Devices registered at startup.
    pub devices: Vec<DeviceConfig>,
    /// Commands sent once every device is registered.
    pub script: ScriptConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Hub wiring.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Capacity of the in-process event bus.
    pub event_capacity: usize,
    /// Where security cameras get their scan results.
    pub motion: MotionMode,
    /// Seed for [`MotionMode::Random`]; entropy-seeded when absent.
    pub motion_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    #[default]
    Random,
    Always,
    Never,
}

/// A device to register.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    pub id: String,
    pub kind: DeviceKind,
}

/// The operator script.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Await each command before sending the next one. When `false`, every
    /// command is fire-and-forget and commands to the same device race.
    pub sequential: bool,
    pub steps: Vec<StepConfig>,
}

/// One `send_command` call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StepConfig {
    pub device: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<CommandArg>,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up through `var`. `RUST_LOG` wins over
    /// `SMARTHUB_LOG`; values that fail to parse are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SMARTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(capacity) = var("SMARTHUB_EVENT_CAPACITY").and_then(|v| v.parse().ok()) {
            self.hub.event_capacity = capacity;
        }
        if let Some(seed) = var("SMARTHUB_MOTION_SEED").and_then(|v| v.parse().ok()) {
            self.hub.motion_seed = Some(seed);
        }
        if let Some(sequential) = var("SMARTHUB_SEQUENTIAL").and_then(|v| v.parse().ok()) {
            self.script.sequential = sequential;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hub.event_capacity == 0 {
            return Err(ConfigError::Validation(
                "event_capacity must be non-zero".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "device '{}' is listed more than once",
                    device.id
                )));
            }
        }
        Ok(())
    }
}

impl HubConfig {
    /// Build the configured motion source.
    #[must_use]
    pub fn motion_source(&self) -> Arc<dyn MotionSource> {
        match (self.motion, self.motion_seed) {
            (MotionMode::Random, Some(seed)) => Arc::new(RandomMotion::seeded(seed)),
            (MotionMode::Random, None) => Arc::new(RandomMotion::default()),
            (MotionMode::Always, _) => Arc::new(FixedMotion(true)),
            (MotionMode::Never, _) => Arc::new(FixedMotion(false)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            hub: HubConfig::default(),
            devices: demo::devices(),
            script: ScriptConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthubd=info,smarthub_app=info".to_string(),
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
            motion: MotionMode::Random,
            motion_seed: None,
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            sequential: false,
            steps: demo::steps(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
