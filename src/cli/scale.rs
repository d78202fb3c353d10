//! Scale command: lightness ramps of a single color.

use crate::cli::common::{print_json, require_count, require_hex, CliResult};
use crate::engine::color_space::normalize_hex;
use crate::engine::harmony::{generate_monochromatic_palette, generate_shades, generate_tints};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Kind of lightness ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Black to white through the color
    Shades,
    /// The color to white
    Tints,
    /// Lightness 20-85 at fixed hue and saturation
    Mono,
}

/// Generate shades, tints or a monochromatic ramp
#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// Base color
    #[arg(short, long, value_name = "HEX")]
    pub base: String,

    /// Ramp kind
    #[arg(short, long, value_enum, default_value = "shades")]
    pub kind: ScaleKind,

    /// Number of steps
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScaleResponse {
    base: String,
    kind: ScaleKind,
    colors: Vec<String>,
}

impl ScaleArgs {
    /// Execute the scale command
    pub fn execute(&self) -> CliResult<()> {
        require_hex(&self.base)?;
        require_count(self.count)?;

        let colors = match self.kind {
            ScaleKind::Shades => generate_shades(&self.base, self.count),
            ScaleKind::Tints => generate_tints(&self.base, self.count),
            ScaleKind::Mono => generate_monochromatic_palette(&self.base, self.count),
        };

        let response = ScaleResponse {
            base: normalize_hex(&self.base),
            kind: self.kind,
            colors,
        };

        if self.json {
            print_json(&response)
        } else {
            for hex in &response.colors {
                println!("{hex}");
            }
            Ok(())
        }
    }
}
