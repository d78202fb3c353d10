//! Hex/RGB/HSL conversions and WCAG contrast checks on hex strings.
//!
//! Every function here accepts loosely formatted hex and fails closed:
//! malformed input yields `None`, `false`, or a documented sentinel, never a
//! panic or an error.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{HslColor, RgbColor};

/// Minimum contrast for normal-size text (WCAG 2.x AA).
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// Minimum contrast for large text and UI components (WCAG 2.x AA).
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Returned by [`contrast_ratio`] when either color is malformed.
pub const NO_CONTRAST: f64 = 1.0;

/// Black text, for light backgrounds.
pub const BLACK: &str = "#000000";

/// White text, for dark backgrounds.
pub const WHITE: &str = "#FFFFFF";

static HEX_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").ok());

/// True iff `s` is a 3- or 6-digit hex literal, optionally prefixed with `#`.
///
/// # Examples
///
/// ```
/// use harmonia::engine::color_space::is_valid_hex;
///
/// assert!(is_valid_hex("#1a2B3c"));
/// assert!(is_valid_hex("f0a"));
/// assert!(!is_valid_hex("#12345"));
/// ```
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    HEX_PATTERN.as_ref().is_some_and(|re| re.is_match(s))
}

/// Upper-cases, expands 3-digit forms and prefixes `#`.
///
/// Does not validate: garbage in, normalized garbage out. Idempotent for any
/// input.
///
/// # Examples
///
/// ```
/// use harmonia::engine::color_space::normalize_hex;
///
/// assert_eq!(normalize_hex("f0a"), "#FF00AA");
/// assert_eq!(normalize_hex("#3b82f6"), "#3B82F6");
/// ```
#[must_use]
pub fn normalize_hex(s: &str) -> String {
    let digits = s.strip_prefix('#').unwrap_or(s).to_uppercase();

    if digits.chars().count() == 3 {
        let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{doubled}")
    } else {
        format!("#{digits}")
    }
}

/// Parses a hex literal into RGB. `None` on malformed input.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    if !is_valid_hex(hex) {
        return None;
    }
    RgbColor::from_hex(&normalize_hex(hex))
}

/// Formats channels as `#RRGGBB`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    RgbColor::new(r, g, b).to_hex()
}

/// Converts a hex literal to integer HSL. `None` on malformed input.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<HslColor> {
    hex_to_rgb(hex).map(|rgb| rgb.to_hsl())
}

/// Converts integer HSL to `#RRGGBB`.
#[must_use]
pub fn hsl_to_hex(hsl: HslColor) -> String {
    RgbColor::from_hsl(hsl).to_hex()
}

/// WCAG relative luminance of raw channels, in 0.0-1.0.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    RgbColor::new(r, g, b).relative_luminance()
}

/// WCAG contrast ratio of two hex colors, in 1.0-21.0.
///
/// Symmetric in its arguments. Returns [`NO_CONTRAST`] if either side is
/// malformed.
///
/// # Examples
///
/// ```
/// use harmonia::engine::color_space::contrast_ratio;
///
/// assert!((contrast_ratio("#000000", "#FFFFFF") - 21.0).abs() < 1e-9);
/// assert_eq!(contrast_ratio("#000000", "bogus"), 1.0);
/// ```
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (hex_to_rgb(a), hex_to_rgb(b)) {
        (Some(a), Some(b)) => a.contrast_ratio(&b),
        _ => NO_CONTRAST,
    }
}

/// Contrast of at least 4.5:1.
#[must_use]
pub fn meets_wcag_aa_normal(fg: &str, bg: &str) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL
}

/// Contrast of at least 3:1.
#[must_use]
pub fn meets_wcag_aa_large(fg: &str, bg: &str) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_LARGE
}

/// Binary text-color choice for a background: black when its luminance is
/// above 0.5, white otherwise. Malformed input gets black.
#[must_use]
pub fn text_color_for(bg: &str) -> &'static str {
    match hex_to_rgb(bg) {
        Some(rgb) if rgb.relative_luminance() <= 0.5 => WHITE,
        _ => BLACK,
    }
}
