//! Analyze command: harmony quality and color psychology.

use crate::cli::common::{print_json, require_hex, CliResult};
use crate::engine::analyzer::{
    analyze_color_psychology, calculate_palette_harmony_score, ColorPsychology, HarmonyAnalysis,
};
use crate::engine::harmony::calculate_color_harmony_score;
use clap::Args;
use serde::Serialize;

/// Score a set of colors and describe each one
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Colors to analyze
    #[arg(value_name = "HEX", required = true, num_args = 1..)]
    pub colors: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    analysis: HarmonyAnalysis,
    hue_regularity: f64,
    psychology: Vec<ColorPsychology>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> CliResult<()> {
        for hex in &self.colors {
            require_hex(hex)?;
        }

        let response = AnalyzeResponse {
            analysis: calculate_palette_harmony_score(&self.colors),
            hue_regularity: calculate_color_harmony_score(&self.colors),
            psychology: self
                .colors
                .iter()
                .filter_map(|hex| analyze_color_psychology(hex))
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        let analysis = &response.analysis;
        println!("Harmony score: {:.2}", analysis.score);
        match analysis.harmony_type {
            Some(harmony) => println!("Harmony type:  {harmony}"),
            None => println!("Harmony type:  none detected"),
        }
        println!("Hue regularity: {:.2}", response.hue_regularity);

        if !analysis.strengths.is_empty() {
            println!();
            println!("Strengths:");
            for strength in &analysis.strengths {
                println!("  + {strength}");
            }
        }
        if !analysis.improvements.is_empty() {
            println!();
            println!("Improvements:");
            for improvement in &analysis.improvements {
                println!("  - {improvement}");
            }
        }

        println!();
        println!("Colors:");
        for reading in &response.psychology {
            println!(
                "  {}  {:<7} {:<5} {:<8} {:<7} {}",
                reading.hex,
                reading.family,
                reading.temperature,
                reading.intensity,
                reading.tone,
                reading.emotions.join(", ")
            );
        }

        Ok(())
    }
}
