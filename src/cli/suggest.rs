//! Suggest command: rank harmony alternatives for locked colors.

use crate::cli::common::{parse_locked, print_json, require_count, CliError, CliResult};
use crate::config::Config;
use crate::engine::suggest_harmonies;
use clap::Args;

/// Rank harmony types for a set of locked colors
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Locked color (repeatable); the first brand color is the base
    #[arg(long = "lock", value_name = "ROLE=HEX", required = true)]
    pub locks: Vec<String>,

    /// Size of each preview palette (defaults to config, 12)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Output results as JSON (includes preview palettes)
    #[arg(long)]
    pub json: bool,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let count = self.count.unwrap_or(config.generator.target_count);
        require_count(count)?;

        let locked = parse_locked(&self.locks, &[])?;
        let suggestions = suggest_harmonies(&locked, count);
        if suggestions.is_empty() {
            return Err(CliError::validation("No usable locked color to build suggestions from"));
        }

        if self.json {
            return print_json(&suggestions);
        }

        println!("Suggestions for base {}:", suggestions[0].base_color);
        println!();
        for (rank, suggestion) in suggestions.iter().enumerate() {
            let colors: Vec<&str> = suggestion.colors.iter().map(|c| c.hex.as_str()).collect();
            println!(
                "{}. {:<20} confidence {:.2}  accessible {:>3.0}%  {}",
                rank + 1,
                suggestion.harmony_type,
                suggestion.confidence,
                suggestion.accessibility_score * 100.0,
                colors.join(" ")
            );
            println!("   {}", suggestion.reasoning);
        }

        Ok(())
    }
}
