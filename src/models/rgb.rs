//! RGB color handling with hex parsing, HSL conversion and WCAG luminance.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HslColor;

/// Linear-light threshold used by the WCAG 2.x relative luminance formula.
const SRGB_LINEAR_THRESHOLD: f64 = 0.039_28;

/// Hue offsets tried when snapping to an exact integer-HSL form.
const SNAP_HUE_STEPS: [i32; 3] = [0, -1, 1];

/// Largest saturation offset tried when snapping. Near black and white a
/// single RGB step moves saturation by several points.
const SNAP_SATURATION_SPAN: i32 = 10;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// All palette math (HSL, luminance, contrast, similarity) hangs off this type;
/// the hex-string functions in [`crate::engine::color_space`] are thin wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a 6-digit hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb". Short
    /// `#RGB` forms must be expanded first (see
    /// [`normalize_hex`](crate::engine::color_space::normalize_hex)).
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("#FFF").is_none());
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Parses either a 3-digit or a 6-digit hex literal, `#` optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse("f0a"), Some(RgbColor::new(255, 0, 170)));
    /// assert_eq!(RgbColor::parse("#F0A0A0"), Some(RgbColor::new(240, 160, 160)));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            return Self::from_hex(&expanded);
        }

        Self::from_hex(digits)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the RGB color to integer HSL.
    ///
    /// Hue follows the max-channel case analysis and is wrapped into 0..360;
    /// grays report hue 0 and saturation 0.
    ///
    /// When the rounded HSL does not convert back to this exact color, nearby
    /// integer HSL values (hue +-1, saturation +-10, same lightness) are tried
    /// and the first exact one wins. Every color produced by
    /// [`RgbColor::from_hsl`] therefore round-trips unchanged, which makes
    /// `from_hsl(to_hsl(c))` idempotent. Colors with no exact integer-HSL form
    /// move at most 5 units per channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia::models::{HslColor, RgbColor};
    ///
    /// assert_eq!(RgbColor::new(0, 255, 255).to_hsl(), HslColor::new(180, 100, 50));
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        let rounded = self.rounded_hsl();
        if Self::from_hsl(rounded) == *self {
            return rounded;
        }

        (0..=SNAP_SATURATION_SPAN)
            .flat_map(|step| [step, -step])
            .flat_map(|ds| SNAP_HUE_STEPS.map(move |dh| (dh, ds)))
            .map(|(dh, ds)| {
                HslColor::new(
                    i32::from(rounded.h) + dh,
                    i32::from(rounded.s) + ds,
                    i32::from(rounded.l),
                )
            })
            .find(|candidate| Self::from_hsl(*candidate) == *self)
            .unwrap_or(rounded)
    }

    /// HSL with each channel rounded to the nearest integer.
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    fn rounded_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return HslColor::new(0, 0, (l * 100.0).round() as i32);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        HslColor::new(
            h.round() as i32,
            (s * 100.0).round() as i32,
            (l * 100.0).round() as i32,
        )
    }

    /// Creates an `RgbColor` from integer HSL.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia::models::{HslColor, RgbColor};
    ///
    /// let green = RgbColor::from_hsl(HslColor::new(120, 100, 50));
    /// assert_eq!(green, RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsl(hsl: HslColor) -> Self {
        let h = f64::from(hsl.h);
        let s = f64::from(hsl.s) / 100.0;
        let l = f64::from(hsl.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Relative luminance per WCAG 2.x (ITU-R BT.709 weights), in 0.0-1.0.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= SRGB_LINEAR_THRESHOLD {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio against another color, in 1.0-21.0.
    ///
    /// Symmetric: the lighter of the two always goes in the numerator.
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Euclidean distance to another color in 0-255 RGB space.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
