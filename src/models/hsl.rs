//! Integer HSL representation used by the harmony math.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue/Saturation/Lightness color with integer channels.
///
/// Hue is in degrees (0-359), saturation and lightness are percentages
/// (0-100). Values only ever come out of [`HslColor::new`], which wraps the
/// hue and clamps the percentages, so every instance is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl HslColor {
    /// Creates an HSL color, wrapping hue modulo 360 and clamping s/l to 0-100.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia::models::HslColor;
    ///
    /// let wrapped = HslColor::new(-30, 120, 50);
    /// assert_eq!((wrapped.h, wrapped.s, wrapped.l), (330, 100, 50));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
        }
    }

    /// Returns this color rotated around the hue wheel.
    #[must_use]
    pub fn rotate(self, degrees: i32) -> Self {
        Self::new(i32::from(self.h) + degrees, i32::from(self.s), i32::from(self.l))
    }

    /// Returns this color with a different lightness (clamped).
    #[must_use]
    pub fn with_lightness(self, lightness: i32) -> Self {
        Self::new(i32::from(self.h), i32::from(self.s), lightness)
    }

    /// Returns this color with a different saturation (clamped).
    #[must_use]
    pub fn with_saturation(self, saturation: i32) -> Self {
        Self::new(i32::from(self.h), saturation, i32::from(self.l))
    }
}

/// Shortest angular distance between two hues, in 0-180 degrees.
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
