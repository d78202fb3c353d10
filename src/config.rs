//! Configuration management for the application.
//!
//! This module handles loading and validating generator and export defaults
//! in TOML format with platform-specific directory resolution. The file is
//! only ever read; command-line flags override whatever it sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_BINARY_NAME;
use crate::export::ExportFormat;
use crate::models::{
    AlgorithmicConfig, HarmonyType, SaturationLevel, Temperature, DEFAULT_SIMILARITY_THRESHOLD,
};

/// Largest palette the generator will build.
pub const MAX_TARGET_COUNT: usize = 64;

/// Palette generation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of colors in a generated palette
    pub target_count: usize,
    /// Minimum RGB distance between generated and locked colors
    pub similarity_threshold: f64,
    /// Harmony used for base-color and professional palettes
    pub harmony: HarmonyType,
    /// Hue bias for procedural palettes
    pub temperature: Option<Temperature>,
    /// Saturation bias for procedural palettes
    pub saturation: Option<SaturationLevel>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_count: 12,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            harmony: HarmonyType::default(),
            temperature: None,
            saturation: None,
        }
    }
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when `--format` is not given
    pub format: ExportFormat,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/harmonia/config.toml`
/// - macOS: `~/Library/Application Support/harmonia/config.toml`
/// - Windows: `%APPDATA%\harmonia\config.toml`
///
/// # Validation
///
/// - `generator.target_count` must be within 1-64
/// - `generator.similarity_threshold` must be a non-negative number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Generator defaults
    pub generator: GeneratorConfig,
    /// Export defaults
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let count = self.generator.target_count;
        if !(1..=MAX_TARGET_COUNT).contains(&count) {
            anyhow::bail!("generator.target_count must be between 1 and {MAX_TARGET_COUNT}, got {count}");
        }

        let threshold = self.generator.similarity_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            anyhow::bail!("generator.similarity_threshold must be a non-negative number, got {threshold}");
        }

        Ok(())
    }

    /// Generator settings as an [`AlgorithmicConfig`] without base color or seed.
    #[must_use]
    pub fn algorithmic_config(&self) -> AlgorithmicConfig {
        AlgorithmicConfig {
            harmony_type: self.generator.harmony,
            temperature: self.generator.temperature,
            saturation_level: self.generator.saturation,
            similarity_threshold: self.generator.similarity_threshold,
            ..AlgorithmicConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.generator.target_count, 12);
        assert!((config.generator.similarity_threshold - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.generator.harmony, HarmonyType::Complementary);
        assert_eq!(config.export.format, ExportFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_bounds() {
        let mut config = Config::new();
        config.generator.target_count = 0;
        assert!(config.validate().is_err());
        config.generator.target_count = 65;
        assert!(config.validate().is_err());
        config.generator.target_count = 64;
        assert!(config.validate().is_ok());

        config.generator.similarity_threshold = -1.0;
        assert!(config.validate().is_err());
        config.generator.similarity_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[generator]\ntarget_count = 8\nharmony = \"triadic\"\ntemperature = \"warm\"\n\n[export]\nformat = \"css\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.generator.target_count, 8);
        assert_eq!(config.generator.harmony, HarmonyType::Triadic);
        assert_eq!(config.generator.temperature, Some(Temperature::Warm));
        assert!((config.generator.similarity_threshold - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.export.format, ExportFormat::Css);

        let algorithmic = config.algorithmic_config();
        assert_eq!(algorithmic.harmony_type, HarmonyType::Triadic);
        assert!(algorithmic.seed.is_none());
    }

    #[test]
    fn test_load_from_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[generator]\ntarget_count = 500\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("target_count"));

        fs::write(&path, "not = [valid").unwrap();
        assert!(Config::load_from(&path).is_err());

        assert!(Config::load_from(&temp_dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_config_file_path_ends_with_app_dir() {
        if let Ok(path) = Config::config_file_path() {
            assert!(path.ends_with("harmonia/config.toml"));
        }
    }
}
