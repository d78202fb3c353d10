//! Ranked harmony suggestions for a locked color set.

#![allow(clippy::cast_precision_loss)]

use tracing::debug;

use crate::engine::color_space::{hex_to_rgb, meets_wcag_aa_normal, normalize_hex, text_color_for};
use crate::engine::generator::generate_ui_palette;
use crate::engine::harmony::{calculate_color_harmony_score, generate_professional_ui_harmony};
use crate::engine::roles::classify_role;
use crate::models::{AlgorithmicConfig, Color, HarmonySuggestion, HarmonyType, PaletteCategory};

/// Builds one suggestion per harmony type, best first.
///
/// The base is the first locked color whose role classifies as brand, or
/// failing that the first locked color with a valid hex. Returns an empty
/// list when no locked color is usable.
#[must_use]
pub fn suggest_harmonies(locked: &[Color], target_count: usize) -> Vec<HarmonySuggestion> {
    let Some(base) = pick_base(locked) else {
        debug!("No usable locked color, no suggestions");
        return Vec::new();
    };

    let mut suggestions: Vec<HarmonySuggestion> = HarmonyType::ALL
        .iter()
        .enumerate()
        .map(|(index, harmony)| build_suggestion(&base, *harmony, index, locked, target_count))
        .collect();

    // sort_by is stable, so equal confidences keep harmony order
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    suggestions
}

fn pick_base(locked: &[Color]) -> Option<String> {
    let valid = || locked.iter().filter(|c| hex_to_rgb(&c.hex).is_some());
    valid()
        .find(|c| classify_role(&c.role, c.is_custom) == PaletteCategory::Brand)
        .or_else(|| valid().next())
        .map(|c| normalize_hex(&c.hex))
}

/// Seed for a preview palette: the base color's 24 RGB bits mixed with the
/// harmony index in the byte above them.
fn preview_seed(base: &str, harmony_index: usize) -> u64 {
    let rgb = hex_to_rgb(base).unwrap_or_default();
    let packed = (u64::from(rgb.r) << 16) | (u64::from(rgb.g) << 8) | u64::from(rgb.b);
    packed ^ ((harmony_index as u64) << 24)
}

fn build_suggestion(
    base: &str,
    harmony: HarmonyType,
    harmony_index: usize,
    locked: &[Color],
    target_count: usize,
) -> HarmonySuggestion {
    let hexes = generate_professional_ui_harmony(base, harmony, true);

    let mut scored = Vec::with_capacity(hexes.len() + 1);
    scored.push(base.to_string());
    scored.extend(hexes.iter().cloned());
    let confidence = calculate_color_harmony_score(&scored);

    let accessible = hexes
        .iter()
        .filter(|hex| meets_wcag_aa_normal(hex, text_color_for(hex)))
        .count();
    let accessibility_score = if hexes.is_empty() {
        0.0
    } else {
        accessible as f64 / hexes.len() as f64
    };

    let seed = preview_seed(base, harmony_index);
    let config = AlgorithmicConfig {
        harmony_type: harmony,
        base_color: Some(base.to_string()),
        seed: Some(seed),
        ..AlgorithmicConfig::default()
    };
    let preview_palette = generate_ui_palette(&config, locked, target_count, seed);

    let reasoning = format!(
        "{}: {} from {base}, {:.0}% of colors readable at WCAG AA",
        title(harmony),
        description(harmony),
        accessibility_score * 100.0
    );

    let colors = hexes
        .into_iter()
        .enumerate()
        .map(|(i, hex)| Color::new(hex, format!("Harmony {}", i + 1)))
        .collect();

    HarmonySuggestion {
        harmony_type: harmony,
        base_color: base.to_string(),
        colors,
        confidence,
        accessibility_score,
        preview_palette,
        reasoning,
    }
}

const fn title(harmony: HarmonyType) -> &'static str {
    match harmony {
        HarmonyType::Complementary => "Complementary",
        HarmonyType::Analogous => "Analogous",
        HarmonyType::Triadic => "Triadic",
        HarmonyType::Tetradic => "Tetradic",
        HarmonyType::SplitComplementary => "Split-complementary",
        HarmonyType::Monochromatic => "Monochromatic",
    }
}

const fn description(harmony: HarmonyType) -> &'static str {
    match harmony {
        HarmonyType::Complementary => "strong contrast with the opposite hue",
        HarmonyType::Analogous => "calm neighbors on the color wheel",
        HarmonyType::Triadic => "three evenly spaced hues",
        HarmonyType::Tetradic => "four hues in two complementary pairs",
        HarmonyType::SplitComplementary => "contrast softened by splitting the opposite hue",
        HarmonyType::Monochromatic => "lightness steps of a single hue",
    }
}
