//! Palette export formats.
//!
//! Every exporter walks the palette in category order (brand, surface, text,
//! feedback, extended, custom), so output is stable for a given palette.

pub mod css;
pub mod hex_list;
pub mod svg;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::UiPalette;

pub use css::to_css;
pub use hex_list::to_hex_list;
pub use svg::to_svg;

/// Output format for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed `UiPalette` JSON
    #[default]
    Json,
    /// CSS custom properties on `:root`
    Css,
    /// Comma-separated `0xRRGGBB` literals
    Hex,
    /// Horizontal swatch strip
    Svg,
}

impl ExportFormat {
    /// All formats.
    pub const ALL: [Self; 4] = [Self::Json, Self::Css, Self::Hex, Self::Svg];

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Hex => "txt",
            Self::Svg => "svg",
        }
    }

    /// Renders a palette in this format.
    ///
    /// # Errors
    ///
    /// Only JSON serialization can fail.
    pub fn render(self, palette: &UiPalette) -> Result<String> {
        match self {
            Self::Json => {
                serde_json::to_string_pretty(palette).context("Failed to serialize palette")
            }
            Self::Css => Ok(to_css(palette)),
            Self::Hex => Ok(to_hex_list(palette)),
            Self::Svg => Ok(to_svg(palette)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Hex => "hex",
            Self::Svg => "svg",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            "hex" | "txt" => Ok(Self::Hex),
            "svg" => Ok(Self::Svg),
            _ => bail!("Unknown export format '{s}'. Expected json, css, hex or svg"),
        }
    }
}

/// Default export file name: `<stem>_<date>.<ext>`, with the stem lowercased
/// and spaces turned into underscores.
#[must_use]
pub fn default_file_name(stem: &str, date: chrono::NaiveDate, format: ExportFormat) -> String {
    let stem = stem.trim().replace(' ', "_").to_lowercase();
    let stem = if stem.is_empty() { "palette".to_string() } else { stem };
    format!("{stem}_{}.{}", date.format("%Y-%m-%d"), format.extension())
}
