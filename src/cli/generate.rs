//! Generate command for full UI palettes.

use crate::cli::common::{parse_locked, require_count, require_hex, CliError, CliResult};
use crate::config::Config;
use crate::engine::generate_ui_palette;
use crate::export::ExportFormat;
use crate::models::{HarmonyType, SaturationLevel, Temperature};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Generate a UI palette around optional locked colors
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Number of colors in the palette (defaults to config, 12)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Harmony type (complementary, analogous, triadic, tetradic, split-complementary, monochromatic)
    #[arg(long, value_name = "TYPE")]
    pub harmony: Option<HarmonyType>,

    /// Base color to build the palette around
    #[arg(short, long, value_name = "HEX")]
    pub base: Option<String>,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Hue bias: warm, cool or neutral
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<Temperature>,

    /// Saturation bias: moderate, vibrant, muted or neutral
    #[arg(long, value_name = "LEVEL")]
    pub saturation: Option<SaturationLevel>,

    /// Minimum RGB distance between generated and locked colors
    #[arg(long, value_name = "DIST")]
    pub threshold: Option<f64>,

    /// Lock a color to a role (repeatable)
    #[arg(long = "lock", value_name = "ROLE=HEX")]
    pub locks: Vec<String>,

    /// Add a custom locked color (repeatable)
    #[arg(long = "custom", value_name = "ROLE=HEX")]
    pub customs: Vec<String>,

    /// Output format: json, css, hex or svg (defaults to config, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let count = self.count.unwrap_or(config.generator.target_count);
        require_count(count)?;

        if let Some(base) = &self.base {
            require_hex(base)?;
        }

        let locked = parse_locked(&self.locks, &self.customs)?;

        let mut algorithmic = config.algorithmic_config();
        if let Some(harmony) = self.harmony {
            algorithmic.harmony_type = harmony;
        }
        if self.temperature.is_some() {
            algorithmic.temperature = self.temperature;
        }
        if self.saturation.is_some() {
            algorithmic.saturation_level = self.saturation;
        }
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(CliError::validation(format!(
                    "Threshold must be a non-negative number, got {threshold}"
                )));
            }
            algorithmic.similarity_threshold = threshold;
        }
        algorithmic.base_color.clone_from(&self.base);
        algorithmic.seed = self.seed;

        let palette = generate_ui_palette(&algorithmic, &locked, count, rand::random());
        info!(colors = palette.len(), locked = locked.len(), "Generated palette");

        let format = self.format.unwrap_or(config.export.format);
        let rendered = format
            .render(&palette)
            .map_err(|e| CliError::io(format!("Failed to render palette: {e:#}")))?;

        match &self.output {
            Some(path) => {
                fs::write(path, rendered)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                println!("✓ Wrote {} colors to: {}", palette.len(), path.display());
            }
            None => println!("{rendered}"),
        }

        Ok(())
    }
}
