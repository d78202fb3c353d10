//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use harmonia::models::{Color, PaletteCategory, UiPalette};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the harmonia binary (set by cargo at compile time)
pub fn harmonia_bin() -> &'static str {
    env!("CARGO_BIN_EXE_harmonia")
}

/// Runs the binary with an isolated config location.
///
/// `XDG_CONFIG_HOME` and `HOME` point into `config_home` so a developer's
/// own config file never leaks into the test.
pub fn run_harmonia(config_home: &Path, args: &[&str]) -> Output {
    Command::new(harmonia_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Writes a config file into a fresh temp directory.
pub fn temp_config(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (path, temp_dir)
}

/// A small hand-built palette with one color in most categories.
pub fn sample_palette() -> UiPalette {
    let mut palette = UiPalette::new();
    palette.push(PaletteCategory::Brand, Color::locked("#3B82F6", "Primary"));
    palette.push(PaletteCategory::Brand, Color::new("#F59E0B", "Secondary"));
    palette.push(PaletteCategory::Surface, Color::new("#FAFAFA", "Background"));
    palette.push(PaletteCategory::Text, Color::new("#111827", "Text Primary"));
    palette.push(PaletteCategory::Feedback, Color::new("#10B981", "Success"));
    palette.push(PaletteCategory::Custom, Color::new("#AA3366", "Logo & Mark").with_custom(true));
    palette
}

/// Writes a palette as JSON into a fresh temp directory.
pub fn create_temp_palette_file(palette: &UiPalette, name: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    let json = serde_json::to_string_pretty(palette).expect("Failed to serialize palette");
    fs::write(&path, json).expect("Failed to write palette");
    (path, temp_dir)
}
