//! Untyped command arguments as supplied by an operator.

use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;

/// A single loosely-typed argument to a named command.
///
/// Deserializes from plain JSON/TOML scalars: `true`, `75`, `72.5`, `"Cable"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandArg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for CommandArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CommandArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CommandArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for CommandArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CommandArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CommandArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for CommandArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Text(v) => f.write_str(v),
        }
    }
}

pub(super) fn none(command: &'static str, args: &[CommandArg]) -> Result<(), ArgumentError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ArgumentError {
            command,
            expected: "no arguments",
        })
    }
}

pub(super) fn int(command: &'static str, args: &[CommandArg]) -> Result<i64, ArgumentError> {
    match args {
        [CommandArg::Int(v)] => Ok(*v),
        _ => Err(ArgumentError {
            command,
            expected: "one integer argument",
        }),
    }
}

/// Integers are widened, so `set_temperature 72` is accepted.
#[allow(clippy::cast_precision_loss)]
pub(super) fn float(command: &'static str, args: &[CommandArg]) -> Result<f64, ArgumentError> {
    match args {
        [CommandArg::Float(v)] => Ok(*v),
        [CommandArg::Int(v)] => Ok(*v as f64),
        _ => Err(ArgumentError {
            command,
            expected: "one numeric argument",
        }),
    }
}

pub(super) fn boolean(command: &'static str, args: &[CommandArg]) -> Result<bool, ArgumentError> {
    match args {
        [CommandArg::Bool(v)] => Ok(*v),
        _ => Err(ArgumentError {
            command,
            expected: "one boolean argument",
        }),
    }
}

pub(super) fn text(command: &'static str, args: &[CommandArg]) -> Result<String, ArgumentError> {
    match args {
        [CommandArg::Text(v)] => Ok(v.clone()),
        _ => Err(ArgumentError {
            command,
            expected: "one string argument",
        }),
    }
}
