//! Data models for colors, palettes and generation settings.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models are independent of the generation engine and of the CLI.

pub mod color;
pub mod harmony;
pub mod hsl;
pub mod palette;
pub mod rgb;
pub mod suggestion;

// Re-export all model types
pub use color::Color;
pub use harmony::{
    AlgorithmicConfig, HarmonyType, SaturationLevel, Temperature, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use hsl::{hue_distance, HslColor};
pub use palette::{PaletteCategory, UiPalette};
pub use rgb::RgbColor;
pub use suggestion::HarmonySuggestion;
