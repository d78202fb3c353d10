//! Ranked harmony alternatives for the current locked colors.

use serde::{Deserialize, Serialize};

use super::{Color, HarmonyType, UiPalette};

/// One harmony alternative derived from the locked colors.
///
/// Suggestions are recomputed whenever the locked set changes and are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonySuggestion {
    /// Harmony this suggestion applies.
    pub harmony_type: HarmonyType,
    /// Normalized base color the harmony was derived from.
    pub base_color: String,
    /// Harmony colors (base excluded).
    pub colors: Vec<Color>,
    /// Hue-regularity score, 0.0-1.0.
    pub confidence: f64,
    /// Share of `colors` reaching WCAG AA against their text color, 0.0-1.0.
    pub accessibility_score: f64,
    /// Full palette generated from the base color with this harmony.
    pub preview_palette: UiPalette,
    /// One-line explanation for display.
    pub reasoning: String,
}
