//! Harmony derivation, lightness ramps and hue-regularity scoring.
//!
//! All generators take a base hex and return `#RRGGBB` strings. An invalid
//! base yields an empty list.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use crate::engine::color_space::{
    contrast_ratio, hex_to_hsl, hsl_to_hex, normalize_hex, text_color_for, WCAG_AA_NORMAL,
};
use crate::models::{hue_distance, HarmonyType, HslColor};

/// Lightness span used by monochromatic ramps; keeps clear of pure black/white.
pub const MONO_LIGHTNESS_RANGE: (i32, i32) = (20, 85);

/// Number of lightness steps a monochromatic harmony expands into.
pub const MONO_HARMONY_STEPS: usize = 5;

const UI_SATURATION_RANGE: (u8, u8) = (30, 80);
const UI_LIGHTNESS_RANGE: (u8, u8) = (35, 65);
const UI_LIGHTNESS_STEP: i32 = 5;
const UI_MAX_STEPS: usize = 6;

/// Hue spacing that pairwise angles are scored against.
const CANONICAL_ANGLE: f64 = 30.0;

/// Raw harmony colors in HSL, base excluded only by the callers.
fn harmony_hsl(base: HslColor, harmony: HarmonyType) -> Vec<HslColor> {
    match harmony {
        HarmonyType::Monochromatic => mono_ramp(base, MONO_HARMONY_STEPS),
        _ => harmony
            .offsets()
            .iter()
            .map(|offset| base.rotate(*offset))
            .collect(),
    }
}

fn mono_ramp(base: HslColor, count: usize) -> Vec<HslColor> {
    let (min, max) = MONO_LIGHTNESS_RANGE;
    match count {
        0 => Vec::new(),
        1 => vec![base.with_lightness(i32::from(base.l).clamp(min, max))],
        n => (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let l = f64::from(min) + t * f64::from(max - min);
                base.with_lightness(l.round() as i32)
            })
            .collect(),
    }
}

fn lightness_ramp(base: HslColor, from: f64, to: f64, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let t = if count == 1 {
                0.0
            } else {
                i as f64 / (count - 1) as f64
            };
            let l = from + t * (to - from);
            hsl_to_hex(base.with_lightness(l.round() as i32))
        })
        .collect()
}

/// Derives harmony colors from a base color.
///
/// Offsets per type: complementary +180; analogous +30/-30; triadic
/// +120/+240; tetradic +90/+180/+270; split-complementary +150/+210.
/// Saturation and lightness are held. Monochromatic expands into a
/// five-step lightness ramp. Results equal to the base are dropped.
///
/// # Examples
///
/// ```
/// use harmonia::engine::harmony::generate_harmony_colors;
/// use harmonia::models::HarmonyType;
///
/// assert_eq!(
///     generate_harmony_colors("#FF0000", HarmonyType::Triadic),
///     vec!["#00FF00", "#0000FF"]
/// );
/// ```
#[must_use]
pub fn generate_harmony_colors(base: &str, harmony: HarmonyType) -> Vec<String> {
    let Some(base_hsl) = hex_to_hsl(base) else {
        return Vec::new();
    };
    let base_hex = normalize_hex(base);

    harmony_hsl(base_hsl, harmony)
        .into_iter()
        .map(hsl_to_hex)
        .filter(|hex| *hex != base_hex)
        .collect()
}

/// Harmony colors nudged toward UI-usable ranges.
///
/// With `enforce_accessibility`, saturation is clamped to 30-80 and
/// lightness to 35-65, then lightness drops in 5-point steps until the color
/// reaches 4.5:1 against its binary text color (six steps at most). Hue is
/// never touched.
#[must_use]
pub fn generate_professional_ui_harmony(
    base: &str,
    harmony: HarmonyType,
    enforce_accessibility: bool,
) -> Vec<String> {
    let Some(base_hsl) = hex_to_hsl(base) else {
        return Vec::new();
    };
    let base_hex = normalize_hex(base);

    harmony_hsl(base_hsl, harmony)
        .into_iter()
        .map(|hsl| {
            if enforce_accessibility {
                ui_safe(hsl)
            } else {
                hsl
            }
        })
        .map(hsl_to_hex)
        .filter(|hex| *hex != base_hex)
        .collect()
}

fn ui_safe(hsl: HslColor) -> HslColor {
    let s = hsl.s.clamp(UI_SATURATION_RANGE.0, UI_SATURATION_RANGE.1);
    let mut l = i32::from(hsl.l.clamp(UI_LIGHTNESS_RANGE.0, UI_LIGHTNESS_RANGE.1));

    let mut color = HslColor::new(i32::from(hsl.h), i32::from(s), l);
    for _ in 0..UI_MAX_STEPS {
        let hex = hsl_to_hex(color);
        if contrast_ratio(&hex, text_color_for(&hex)) >= WCAG_AA_NORMAL {
            break;
        }
        // Anything above 0.5 luminance already passes with black text, so a
        // failing color has white text and only gets better darker.
        l -= UI_LIGHTNESS_STEP;
        color = color.with_lightness(l);
    }
    color
}

/// Fixed hue and saturation with `count` lightness steps spread evenly over
/// 20-85. A single step sits at the base lightness clamped into that span.
#[must_use]
pub fn generate_monochromatic_palette(base: &str, count: usize) -> Vec<String> {
    hex_to_hsl(base)
        .map(|hsl| mono_ramp(hsl, count).into_iter().map(hsl_to_hex).collect())
        .unwrap_or_default()
}

/// Lightness stepped linearly from 0 to 100 (both inclusive).
#[must_use]
pub fn generate_shades(hex: &str, count: usize) -> Vec<String> {
    hex_to_hsl(hex)
        .map(|hsl| lightness_ramp(hsl, 0.0, 100.0, count))
        .unwrap_or_default()
}

/// Lightness stepped linearly from the color's own lightness to 100.
#[must_use]
pub fn generate_tints(hex: &str, count: usize) -> Vec<String> {
    hex_to_hsl(hex)
        .map(|hsl| lightness_ramp(hsl, f64::from(hsl.l), 100.0, count))
        .unwrap_or_default()
}

/// Shifts lightness by `delta` percentage points, clamped to 0-100.
#[must_use]
pub fn adjust_color_lightness(hex: &str, delta: i32) -> Option<String> {
    let hsl = hex_to_hsl(hex)?;
    Some(hsl_to_hex(hsl.with_lightness(i32::from(hsl.l) + delta)))
}

/// Shifts saturation by `delta` percentage points, clamped to 0-100.
#[must_use]
pub fn adjust_color_saturation(hex: &str, delta: i32) -> Option<String> {
    let hsl = hex_to_hsl(hex)?;
    Some(hsl_to_hex(hsl.with_saturation(i32::from(hsl.s) + delta)))
}

/// Scores how closely pairwise hue angles follow 30-degree harmony steps.
///
/// `0.8 * regularity + 0.2 * min(n, 5) / 5`, where regularity averages
/// `1 - d / 15` over all pairs and `d` is the pair's distance to the nearest
/// multiple of 30 degrees. Fewer than two valid colors score 0.
#[must_use]
pub fn calculate_color_harmony_score(hexes: &[String]) -> f64 {
    let hues: Vec<f64> = hexes
        .iter()
        .filter_map(|hex| hex_to_hsl(hex))
        .map(|hsl| f64::from(hsl.h))
        .collect();

    if hues.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in hues.iter().enumerate() {
        for b in &hues[i + 1..] {
            let angle = hue_distance(*a, *b);
            let remainder = angle % CANONICAL_ANGLE;
            let off = remainder.min(CANONICAL_ANGLE - remainder);
            total += 1.0 - off / (CANONICAL_ANGLE / 2.0);
            pairs += 1;
        }
    }

    let regularity = total / pairs as f64;
    let count_factor = hues.len().min(5) as f64 / 5.0;
    (0.8 * regularity + 0.2 * count_factor).clamp(0.0, 1.0)
}
