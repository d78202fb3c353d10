//! Export command: render a saved palette in another format.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{default_file_name, ExportFormat};
use crate::models::UiPalette;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export a palette JSON file to CSS, hex, SVG or JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Palette JSON file (as written by `generate --format json`)
    #[arg(short, long, value_name = "FILE")]
    pub palette: PathBuf,

    /// Output format: json, css, hex or svg (defaults to config, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Output path (defaults to [palette_name]_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let content = fs::read_to_string(&self.palette)
            .map_err(|e| CliError::io(format!("Failed to read palette file: {e}")))?;
        let palette: UiPalette = serde_json::from_str(&content)
            .map_err(|e| CliError::validation(format!("Invalid palette file: {e}")))?;

        let format = self.format.unwrap_or(config.export.format);
        let rendered = format
            .render(&palette)
            .map_err(|e| CliError::io(format!("Failed to render palette: {e:#}")))?;

        let output_path = self.get_output_path(format);
        fs::write(&output_path, rendered)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported palette to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, format: ExportFormat) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let stem = self
            .palette
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = default_file_name(&stem, chrono::Local::now().date_naive(), format);

        self.palette
            .parent()
            .map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
    }
}
