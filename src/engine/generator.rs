//! Full UI palette generation around a set of locked colors.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use std::collections::HashSet;
use std::f64::consts::TAU;

use tracing::{debug, warn};

use crate::engine::color_space::{hex_to_rgb, hsl_to_hex, is_valid_hex, normalize_hex, rgb_to_hex};
use crate::engine::harmony::{
    generate_harmony_colors, generate_monochromatic_palette, generate_professional_ui_harmony,
    MONO_HARMONY_STEPS,
};
use crate::engine::random::SeededRandom;
use crate::engine::roles::{assign_roles, classify_role};
use crate::models::{AlgorithmicConfig, Color, HslColor, SaturationLevel, Temperature, UiPalette};

/// Lightness window for seeded procedural colors.
const PROCEDURAL_LIGHTNESS: (f64, f64) = (20.0, 90.0);

/// Lightness window for the base color of a professional palette.
const PROFESSIONAL_BASE_LIGHTNESS: (f64, f64) = (40.0, 60.0);

/// Hue-anchored neutrals added to professional palettes as `(s, l)`.
const PROFESSIONAL_NEUTRALS: [(i32, i32); 4] = [(10, 97), (8, 90), (15, 15), (10, 40)];

/// How the candidate pool was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Base color, its harmony colors and a monochromatic ramp
    BaseColor,
    /// Seeded procedural colors
    Seeded,
    /// Professional procedural palette
    Professional,
}

/// Picks the candidate strategy for a config. An invalid base color is
/// ignored.
#[must_use]
pub fn strategy_for(config: &AlgorithmicConfig) -> Strategy {
    match config.base_color.as_deref() {
        Some(base) if is_valid_hex(base) => Strategy::BaseColor,
        Some(base) => {
            warn!(base, "Ignoring invalid base color");
            fallback_strategy(config)
        }
        None => fallback_strategy(config),
    }
}

fn fallback_strategy(config: &AlgorithmicConfig) -> Strategy {
    if config.seed.is_some() {
        Strategy::Seeded
    } else {
        Strategy::Professional
    }
}

/// Generates a palette of (at most) `target_count` colors around `locked`.
///
/// Locked colors are classified by role and placed with their hex normalized
/// to `#RRGGBB`; role and flags are kept as given. The rest
/// of the palette is chosen from candidates produced by the configured
/// strategy, filtered against the locked colors, and assigned to roles.
///
/// `entropy` seeds the generator when `config.seed` is `None`; with a seed
/// the output depends only on `config`, `locked` and `target_count`. The
/// result never holds more than `max(target_count, locked.len())` colors.
#[must_use]
pub fn generate_ui_palette(
    config: &AlgorithmicConfig,
    locked: &[Color],
    target_count: usize,
    entropy: u64,
) -> UiPalette {
    let mut palette = UiPalette::new();
    for color in locked {
        palette.push(classify_role(&color.role, color.is_custom), color.normalized());
    }

    let budget = target_count.saturating_sub(locked.len());
    if budget == 0 {
        debug!(locked = locked.len(), target_count, "Locked colors fill the palette");
        return palette;
    }

    let seed = config.seed.unwrap_or(entropy);
    let mut rng = SeededRandom::new(seed);
    let strategy = strategy_for(config);
    debug!(?strategy, seed, budget, "Generating palette");

    let mut candidates = match strategy {
        Strategy::BaseColor => base_color_candidates(config),
        Strategy::Seeded => generate_seeded_palette(&mut rng, config, budget),
        Strategy::Professional => generate_professional_palette(&mut rng, config),
    };

    if candidates.len() < budget {
        let missing = budget - candidates.len();
        debug!(missing, "Topping up with cosine gradient");
        candidates.extend(generate_cosine_palette(&mut rng, missing));
    }

    let candidates = filter_candidates(&candidates, locked, config.similarity_threshold);
    assign_roles(&mut palette, &candidates, target_count, budget);
    palette
}

fn base_color_candidates(config: &AlgorithmicConfig) -> Vec<String> {
    let Some(base) = config.base_color.as_deref() else {
        return Vec::new();
    };
    let mut candidates = vec![normalize_hex(base)];
    candidates.extend(generate_harmony_colors(base, config.harmony_type));
    candidates.extend(generate_monochromatic_palette(base, MONO_HARMONY_STEPS));
    candidates
}

fn draw_hue(rng: &mut SeededRandom, temperature: Temperature) -> i32 {
    let (min, max) = temperature.hue_range();
    rng.next_float(min, max).round() as i32
}

fn draw_saturation(rng: &mut SeededRandom, level: SaturationLevel) -> i32 {
    let (min, max) = level.range();
    rng.next_float(min, max).round() as i32
}

/// `count` random colors biased by the config's temperature and saturation.
pub fn generate_seeded_palette(
    rng: &mut SeededRandom,
    config: &AlgorithmicConfig,
    count: usize,
) -> Vec<String> {
    let temperature = config.temperature.unwrap_or_default();
    let saturation = config.saturation_level.unwrap_or_default();

    (0..count)
        .map(|_| {
            let h = draw_hue(rng, temperature);
            let s = draw_saturation(rng, saturation);
            let l = rng
                .next_float(PROCEDURAL_LIGHTNESS.0, PROCEDURAL_LIGHTNESS.1)
                .round() as i32;
            hsl_to_hex(HslColor::new(h, s, l))
        })
        .collect()
}

/// A mid-light random base, its accessible harmony colors, and four
/// neutrals sharing the base hue.
pub fn generate_professional_palette(
    rng: &mut SeededRandom,
    config: &AlgorithmicConfig,
) -> Vec<String> {
    let h = draw_hue(rng, config.temperature.unwrap_or_default());
    let s = draw_saturation(rng, config.saturation_level.unwrap_or_default());
    let l = rng
        .next_float(PROFESSIONAL_BASE_LIGHTNESS.0, PROFESSIONAL_BASE_LIGHTNESS.1)
        .round() as i32;
    let base = hsl_to_hex(HslColor::new(h, s, l));

    let mut colors = vec![base.clone()];
    colors.extend(generate_professional_ui_harmony(&base, config.harmony_type, true));
    colors.extend(
        PROFESSIONAL_NEUTRALS
            .iter()
            .map(|(s, l)| hsl_to_hex(HslColor::new(h, *s, *l))),
    );
    colors
}

/// Cosine-gradient palette: `color(t) = a + b * cos(2pi * (c * t + d))` per
/// channel with random coefficients.
pub fn generate_cosine_palette(rng: &mut SeededRandom, count: usize) -> Vec<String> {
    let mut coefficients = [[0.0; 4]; 3];
    for channel in &mut coefficients {
        *channel = [
            rng.next_float(0.3, 0.7),
            rng.next_float(0.2, 0.5),
            rng.next_float(0.5, 1.5),
            rng.next_float(0.0, 1.0),
        ];
    }

    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            let [r, g, b] = coefficients.map(|[a, amp, freq, phase]| {
                let value = a + amp * (TAU * (freq * t + phase)).cos();
                (value.clamp(0.0, 1.0) * 255.0).round() as u8
            });
            rgb_to_hex(r, g, b)
        })
        .collect()
}

/// Drops invalid candidates, candidates within `threshold` RGB distance of a
/// locked color, and repeats. Survivors are normalized and keep their order.
#[must_use]
pub fn filter_candidates(candidates: &[String], locked: &[Color], threshold: f64) -> Vec<String> {
    let locked_rgb: Vec<_> = locked.iter().filter_map(|c| hex_to_rgb(&c.hex)).collect();
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(candidates.len());
    let mut dropped = 0usize;

    for hex in candidates {
        let Some(rgb) = hex_to_rgb(hex) else {
            dropped += 1;
            continue;
        };
        if locked_rgb.iter().any(|l| rgb.distance(l) < threshold) {
            dropped += 1;
            continue;
        }
        let hex = rgb.to_hex();
        if seen.insert(hex.clone()) {
            kept.push(hex);
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = kept.len(), threshold, "Filtered candidates");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::color_space::hex_to_hsl;
    use crate::models::{HarmonyType, PaletteCategory};

    fn seeded(seed: u64) -> AlgorithmicConfig {
        AlgorithmicConfig {
            seed: Some(seed),
            ..AlgorithmicConfig::default()
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let config = seeded(42);
        let locked = vec![Color::locked("#3B82F6", "Primary")];
        let a = generate_ui_palette(&config, &locked, 12, 1);
        let b = generate_ui_palette(&config, &locked, 12, 999);
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_strategy_varies_with_entropy() {
        let config = AlgorithmicConfig::default();
        let a = generate_ui_palette(&config, &[], 12, 1);
        let b = generate_ui_palette(&config, &[], 12, 2);
        assert_eq!(a, generate_ui_palette(&config, &[], 12, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_locked_colors_survive_normalized() {
        let locked = vec![
            Color::locked("#3b82f6", "Primary"),
            Color::locked("#fff", "Background"),
            Color::locked("#ABCDEF", "Logo").with_custom(true),
        ];
        let palette = generate_ui_palette(&seeded(7), &locked, 12, 0);

        assert_eq!(palette.brand[0], Color::locked("#3B82F6", "Primary"));
        assert_eq!(palette.surface[0], Color::locked("#FFFFFF", "Background"));
        assert_eq!(palette.custom, vec![locked[2].clone()]);
        let primaries = palette.iter().filter(|c| c.role == "Primary").count();
        assert_eq!(primaries, 1);
    }

    #[test]
    fn test_short_locked_hex_exports_as_full_hex() {
        let locked = vec![Color::locked("fa0", "Primary")];
        let palette = generate_ui_palette(&seeded(1), &locked, 8, 0);

        assert_eq!(palette.brand[0].hex, "#FFAA00");
        assert!(palette.brand[0].locked);
        let css = crate::export::to_css(&palette);
        assert!(css.contains("  --color-brand-primary: #FFAA00;\n"));
        assert!(palette
            .iter()
            .all(|c| c.hex.len() == 7 && c.hex == c.hex.to_uppercase()));
    }

    #[test]
    fn test_count_bounds() {
        let locked = vec![Color::locked("#10B981", "Success")];
        for target in 1..=20 {
            for config in [seeded(3), AlgorithmicConfig::default()] {
                let palette = generate_ui_palette(&config, &locked, target, 11);
                assert!(palette.len() <= target.max(1), "target {target}: {}", palette.len());
                assert!(palette.len() >= locked.len());
            }
        }
    }

    #[test]
    fn test_more_locked_than_target_keeps_all() {
        let locked: Vec<Color> = ["#111111", "#222222", "#333333"]
            .iter()
            .map(|h| Color::locked(*h, "Extended 1"))
            .collect();
        let palette = generate_ui_palette(&seeded(1), &locked, 2, 0);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.extended, locked);
    }

    #[test]
    fn test_structural_roles_present() {
        let palette = generate_ui_palette(&seeded(5), &[], 12, 0);
        for role in [
            "Background",
            "Surface",
            "Text Primary",
            "Text Secondary",
            "Success",
            "Warning",
            "Error",
        ] {
            assert!(palette.find_role(role).is_some(), "missing {role}");
        }
    }

    #[test]
    fn test_base_color_strategy_uses_base() {
        let config = AlgorithmicConfig {
            base_color: Some("#3B82F6".to_string()),
            harmony_type: HarmonyType::Triadic,
            ..AlgorithmicConfig::default()
        };
        assert_eq!(strategy_for(&config), Strategy::BaseColor);
        let palette = generate_ui_palette(&config, &[], 12, 0);
        assert_eq!(palette.brand[0].hex, "#3B82F6");
        assert_eq!(palette.brand[0].role, "Primary");
    }

    #[test]
    fn test_invalid_base_falls_back() {
        let config = AlgorithmicConfig {
            base_color: Some("not-a-color".to_string()),
            seed: Some(1),
            ..AlgorithmicConfig::default()
        };
        assert_eq!(strategy_for(&config), Strategy::Seeded);
        assert_eq!(strategy_for(&AlgorithmicConfig::default()), Strategy::Professional);
    }

    #[test]
    fn test_generated_brand_colors_respect_similarity() {
        let locked = vec![Color::locked("#808080", "Logo")];
        let config = seeded(21);
        let palette = generate_ui_palette(&config, &locked, 16, 0);
        let anchor = hex_to_rgb("#808080").unwrap();
        for category in [PaletteCategory::Brand, PaletteCategory::Extended] {
            for color in palette.colors(category).iter().filter(|c| !c.locked) {
                let distance = hex_to_rgb(&color.hex).unwrap().distance(&anchor);
                assert!(distance >= config.similarity_threshold, "{} too close", color.hex);
            }
        }
    }

    #[test]
    fn test_filter_candidates() {
        let locked = vec![Color::locked("#FF0000", "Primary")];
        let candidates: Vec<String> = ["#FE0101", "#00ff00", "#00FF00", "bad", "#0F0"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(filter_candidates(&candidates, &locked, 30.0), vec!["#00FF00"]);
    }

    #[test]
    fn test_seeded_palette_respects_knobs() {
        let config = AlgorithmicConfig {
            temperature: Some(Temperature::Cool),
            saturation_level: Some(SaturationLevel::Vibrant),
            ..AlgorithmicConfig::default()
        };
        let mut rng = SeededRandom::new(8);
        let colors = generate_seeded_palette(&mut rng, &config, 20);
        assert_eq!(colors.len(), 20);
        for hex in colors {
            let hsl = hex_to_hsl(&hex).unwrap();
            // Integer HSL round trips drift a few units
            assert!((145..=275).contains(&hsl.h), "{hex} hue {}", hsl.h);
            assert!((15..=95).contains(&hsl.l), "{hex} lightness {}", hsl.l);
        }
    }

    #[test]
    fn test_professional_palette_shape() {
        let mut rng = SeededRandom::new(4);
        let config = AlgorithmicConfig::default();
        let colors = generate_professional_palette(&mut rng, &config);
        // base + one complementary + four neutrals
        assert_eq!(colors.len(), 6);
        let lightest = hex_to_hsl(&colors[2]).unwrap();
        assert!(lightest.l >= 95);
    }

    #[test]
    fn test_cosine_palette_is_valid_and_seeded() {
        let mut a = SeededRandom::new(10);
        let mut b = SeededRandom::new(10);
        let colors = generate_cosine_palette(&mut a, 6);
        assert_eq!(colors, generate_cosine_palette(&mut b, 6));
        assert!(colors.iter().all(|h| is_valid_hex(h)));
        assert_eq!(generate_cosine_palette(&mut a, 1).len(), 1);
        assert!(generate_cosine_palette(&mut a, 0).is_empty());
    }
}
