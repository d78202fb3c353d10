//! Harmony command: derive related colors from a base color.

use crate::cli::common::{print_json, require_hex, CliResult};
use crate::config::Config;
use crate::engine::color_space::{hex_to_hsl, normalize_hex};
use crate::engine::harmony::{
    calculate_color_harmony_score, generate_harmony_colors, generate_professional_ui_harmony,
};
use crate::models::HarmonyType;
use clap::Args;
use serde::Serialize;

/// Derive harmony colors from a base color
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color
    #[arg(short, long, value_name = "HEX")]
    pub base: String,

    /// Harmony type (defaults to config, complementary)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub harmony: Option<HarmonyType>,

    /// Nudge colors into UI-usable saturation and lightness ranges
    #[arg(long)]
    pub professional: bool,

    /// With --professional, darken colors until their text reaches WCAG AA
    #[arg(long, requires = "professional")]
    pub accessible: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HarmonyResponse {
    base: String,
    harmony_type: HarmonyType,
    colors: Vec<String>,
    score: f64,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        require_hex(&self.base)?;

        let harmony = self.harmony.unwrap_or(config.generator.harmony);
        let colors = if self.professional {
            generate_professional_ui_harmony(&self.base, harmony, self.accessible)
        } else {
            generate_harmony_colors(&self.base, harmony)
        };

        let base = normalize_hex(&self.base);
        let mut scored = vec![base.clone()];
        scored.extend(colors.iter().cloned());

        let response = HarmonyResponse {
            score: calculate_color_harmony_score(&scored),
            base,
            harmony_type: harmony,
            colors,
        };

        if self.json {
            return print_json(&response);
        }

        println!("{} harmony of {}:", response.harmony_type, response.base);
        println!();
        if response.colors.is_empty() {
            println!("  (no distinct colors; the base has no saturation to rotate)");
        }
        for hex in &response.colors {
            let hsl = hex_to_hsl(hex).map(|h| h.to_string()).unwrap_or_default();
            println!("  {hex}  {hsl}");
        }
        println!();
        println!("Harmony score: {:.2}", response.score);

        Ok(())
    }
}
