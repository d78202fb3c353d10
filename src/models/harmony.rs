//! Harmony types and generation preferences.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named angular relationship between hues on the HSL wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyType {
    /// +180 degrees
    #[default]
    Complementary,
    /// +30 and -30 degrees
    Analogous,
    /// +120 and +240 degrees
    Triadic,
    /// +90, +180 and +270 degrees
    Tetradic,
    /// +150 and +210 degrees
    SplitComplementary,
    /// Same hue, lightness steps
    Monochromatic,
}

impl HarmonyType {
    /// All harmony types, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::SplitComplementary,
        Self::Monochromatic,
    ];

    /// Hue offsets in degrees relative to the base color.
    ///
    /// Monochromatic has no offsets; it varies lightness instead.
    #[must_use]
    pub const fn offsets(self) -> &'static [i32] {
        match self {
            Self::Complementary => &[180],
            Self::Analogous => &[30, -30],
            Self::Triadic => &[120, 240],
            Self::Tetradic => &[90, 180, 270],
            Self::SplitComplementary => &[150, 210],
            Self::Monochromatic => &[],
        }
    }

    /// Wire name (matches the serde representation).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "splitComplementary",
            Self::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Lowercases and drops `-`/`_`/spaces so "split-complementary",
/// "split_complementary" and "splitComplementary" compare equal.
fn canonical(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for HarmonyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = canonical(s);
        match Self::ALL.into_iter().find(|t| canonical(t.name()) == key) {
            Some(harmony) => Ok(harmony),
            None => bail!(
                "Unknown harmony type '{s}'. Expected one of: complementary, analogous, triadic, tetradic, split-complementary, monochromatic"
            ),
        }
    }
}

/// Color temperature bias for procedural palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// Reds, oranges, yellows
    Warm,
    /// Greens, blues, purples
    Cool,
    /// Full hue wheel
    #[default]
    Neutral,
}

impl Temperature {
    /// Hue window in degrees as `[start, end)`; `end` may exceed 360 and is
    /// wrapped by the caller.
    #[must_use]
    pub const fn hue_range(self) -> (f64, f64) {
        match self {
            Self::Warm => (330.0, 420.0),
            Self::Cool => (150.0, 270.0),
            Self::Neutral => (0.0, 360.0),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        })
    }
}

impl FromStr for Temperature {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warm" => Ok(Self::Warm),
            "cool" => Ok(Self::Cool),
            "neutral" => Ok(Self::Neutral),
            _ => bail!("Unknown temperature '{s}'. Expected warm, cool or neutral"),
        }
    }
}

/// Saturation bias for procedural palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationLevel {
    /// 45-70%
    #[default]
    Moderate,
    /// 70-95%
    Vibrant,
    /// 20-45%
    Muted,
    /// 0-15%
    Neutral,
}

impl SaturationLevel {
    /// Saturation window in percent as `[min, max)`.
    #[must_use]
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Moderate => (45.0, 70.0),
            Self::Vibrant => (70.0, 95.0),
            Self::Muted => (20.0, 45.0),
            Self::Neutral => (0.0, 15.0),
        }
    }
}

impl fmt::Display for SaturationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Moderate => "moderate",
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
            Self::Neutral => "neutral",
        })
    }
}

impl FromStr for SaturationLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moderate" => Ok(Self::Moderate),
            "vibrant" => Ok(Self::Vibrant),
            "muted" => Ok(Self::Muted),
            "neutral" => Ok(Self::Neutral),
            _ => bail!("Unknown saturation level '{s}'. Expected moderate, vibrant, muted or neutral"),
        }
    }
}

/// Inputs that drive [`generate_ui_palette`](crate::engine::generator::generate_ui_palette).
///
/// Identical configs with a `seed` and identical locked colors always produce
/// identical palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmicConfig {
    /// Harmony used when expanding a base color or building a professional palette.
    #[serde(default)]
    pub harmony_type: HarmonyType,
    /// Explicit base color (takes priority over `seed`).
    #[serde(default)]
    pub base_color: Option<String>,
    /// Hue bias for procedural palettes.
    #[serde(default)]
    pub temperature: Option<Temperature>,
    /// Saturation bias for procedural palettes.
    #[serde(default)]
    pub saturation_level: Option<SaturationLevel>,
    /// Seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Minimum RGB distance between a generated color and any locked color.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

/// Default "too similar to a locked color" distance in 0-255 RGB space.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 30.0;

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for AlgorithmicConfig {
    fn default() -> Self {
        Self {
            harmony_type: HarmonyType::default(),
            base_color: None,
            temperature: None,
            saturation_level: None,
            seed: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmony_from_str_accepts_spellings() {
        assert_eq!(
            "split-complementary".parse::<HarmonyType>().unwrap(),
            HarmonyType::SplitComplementary
        );
        assert_eq!(
            "splitComplementary".parse::<HarmonyType>().unwrap(),
            HarmonyType::SplitComplementary
        );
        assert_eq!("TRIADIC".parse::<HarmonyType>().unwrap(), HarmonyType::Triadic);
        assert!("pentadic".parse::<HarmonyType>().is_err());
    }

    #[test]
    fn test_harmony_serde_name() {
        let json = serde_json::to_string(&HarmonyType::SplitComplementary).unwrap();
        assert_eq!(json, "\"splitComplementary\"");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(HarmonyType::Tetradic.offsets(), &[90, 180, 270]);
        assert!(HarmonyType::Monochromatic.offsets().is_empty());
    }

    #[test]
    fn test_temperature_and_saturation_parse() {
        assert_eq!("Warm".parse::<Temperature>().unwrap(), Temperature::Warm);
        assert!("hot".parse::<Temperature>().is_err());
        assert_eq!("muted".parse::<SaturationLevel>().unwrap(), SaturationLevel::Muted);
        assert!("loud".parse::<SaturationLevel>().is_err());
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: AlgorithmicConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.harmony_type, HarmonyType::Complementary);
        assert!((config.similarity_threshold - 30.0).abs() < f64::EPSILON);
    }
}
