//! Shared CLI plumbing: error type, exit codes and argument helpers.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::config::{Config, MAX_TARGET_COUNT};
use crate::engine::color_space::{is_valid_hex, normalize_hex};
use crate::models::Color;

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: malformed color, out-of-range count, unparsable file
    Validation = 1,
    /// File system failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Failure of a command handler.
#[derive(Debug, Error)]
pub enum CliError {
    /// User input was rejected
    #[error("{0}")]
    Validation(String),
    /// Reading or writing a file failed
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::Validation,
            Self::Io(_) => ExitCode::Io,
        }
    }
}

/// Loads the config from `path`, or from the platform location when `None`.
///
/// A missing explicit file is an I/O error; unparsable or out-of-range
/// settings are validation errors.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    match path {
        Some(path) if !path.exists() => Err(CliError::io(format!(
            "Config file not found: {}",
            path.display()
        ))),
        Some(path) => Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load config: {e:#}"))),
        None => {
            Config::load().map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))
        }
    }
}

/// Parses a `ROLE=HEX` argument into a locked color with a `#RRGGBB` hex.
pub fn parse_role_hex(arg: &str, is_custom: bool) -> CliResult<Color> {
    let (role, hex) = arg.split_once('=').ok_or_else(|| {
        CliError::validation(format!("Invalid color '{arg}'. Expected ROLE=HEX, e.g. Primary=#3B82F6"))
    })?;
    let role = role.trim();
    let hex = hex.trim();

    if role.is_empty() {
        return Err(CliError::validation(format!("Missing role in '{arg}'")));
    }
    if !is_valid_hex(hex) {
        return Err(CliError::validation(format!(
            "Invalid hex color '{hex}' for role '{role}'. Use #RRGGBB or #RGB"
        )));
    }

    Ok(Color::locked(normalize_hex(hex), role).with_custom(is_custom))
}

/// Parses every `--lock` and `--custom` argument, locks first.
pub fn parse_locked(locks: &[String], customs: &[String]) -> CliResult<Vec<Color>> {
    locks
        .iter()
        .map(|arg| parse_role_hex(arg, false))
        .chain(customs.iter().map(|arg| parse_role_hex(arg, true)))
        .collect()
}

/// Rejects a hex color the engine would treat as malformed.
pub fn require_hex(hex: &str) -> CliResult<()> {
    if is_valid_hex(hex) {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "Invalid hex color '{hex}'. Use #RRGGBB or #RGB"
        )))
    }
}

/// Rejects a color count outside 1-64.
pub fn require_count(count: usize) -> CliResult<()> {
    if (1..=MAX_TARGET_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "Count must be between 1 and {MAX_TARGET_COUNT}, got {count}"
        )))
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
