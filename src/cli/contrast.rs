//! Contrast command: WCAG checks for a foreground/background pair.

use crate::cli::common::{print_json, require_hex, CliResult};
use crate::engine::color_space::{
    contrast_ratio, meets_wcag_aa_large, meets_wcag_aa_normal, normalize_hex, text_color_for,
};
use clap::Args;
use serde::Serialize;

/// Check WCAG contrast between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground (text) color
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Background color
    #[arg(value_name = "BG")]
    pub background: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastResponse {
    foreground: String,
    background: String,
    ratio: f64,
    aa_normal: bool,
    aa_large: bool,
    recommended_text: &'static str,
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        require_hex(&self.foreground)?;
        require_hex(&self.background)?;

        let response = ContrastResponse {
            foreground: normalize_hex(&self.foreground),
            background: normalize_hex(&self.background),
            ratio: contrast_ratio(&self.foreground, &self.background),
            aa_normal: meets_wcag_aa_normal(&self.foreground, &self.background),
            aa_large: meets_wcag_aa_large(&self.foreground, &self.background),
            recommended_text: text_color_for(&self.background),
        };

        if self.json {
            return print_json(&response);
        }

        println!("{} on {}", response.foreground, response.background);
        println!("  Contrast ratio:   {:.2}:1", response.ratio);
        println!("  AA normal text:   {}", verdict(response.aa_normal));
        println!("  AA large text:    {}", verdict(response.aa_large));
        println!("  Recommended text: {}", response.recommended_text);

        Ok(())
    }
}
