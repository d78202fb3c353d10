//! Palette-level harmony analysis and per-color psychology.

#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use std::fmt;

use crate::engine::color_space::{hex_to_hsl, meets_wcag_aa_normal, normalize_hex};
use crate::models::{HarmonyType, HslColor, Temperature};

/// Result of [`calculate_palette_harmony_score`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyAnalysis {
    /// Overall quality, 0.0-1.0.
    pub score: f64,
    /// Detected relationship, if any.
    pub harmony_type: Option<HarmonyType>,
    /// What the palette does well.
    pub strengths: Vec<String>,
    /// What could be better.
    pub improvements: Vec<String>,
}

impl HarmonyAnalysis {
    fn empty() -> Self {
        Self {
            score: 0.0,
            harmony_type: None,
            strengths: Vec::new(),
            improvements: vec!["Add at least two valid colors to analyze harmony".to_string()],
        }
    }
}

/// Scores a palette on hue relationship, saturation consistency, lightness
/// range, pairwise contrast and size.
///
/// Hue deltas are plain absolute differences from the first color (not
/// wrapped around the wheel). Weights:
///
/// | check | points |
/// |---|---|
/// | complementary, analogous or triadic | 0.3 |
/// | saturation variance below 20 | 0.2 |
/// | lightness spread of 40-80 | 0.2 |
/// | 80% of pairs reach AA | 0.2 |
/// | 5-8 colors | 0.1 |
///
/// Invalid hex entries are skipped. Fewer than two valid colors score 0.
///
/// # Examples
///
/// ```
/// use harmonia::engine::analyzer::calculate_palette_harmony_score;
/// use harmonia::models::HarmonyType;
///
/// let analysis = calculate_palette_harmony_score(&["#FF0000".into(), "#00FFFF".into()]);
/// assert_eq!(analysis.harmony_type, Some(HarmonyType::Complementary));
/// assert!(analysis.score >= 0.3);
/// ```
#[must_use]
pub fn calculate_palette_harmony_score(hexes: &[String]) -> HarmonyAnalysis {
    let colors: Vec<(String, HslColor)> = hexes
        .iter()
        .filter_map(|hex| hex_to_hsl(hex).map(|hsl| (normalize_hex(hex), hsl)))
        .collect();

    if colors.len() < 2 {
        return HarmonyAnalysis::empty();
    }

    let mut score = 0.0;
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    let first_hue = f64::from(colors[0].1.h);
    let deltas: Vec<f64> = colors[1..]
        .iter()
        .map(|(_, hsl)| (f64::from(hsl.h) - first_hue).abs())
        .collect();

    let harmony_type = detect_harmony(&deltas);
    match harmony_type {
        Some(harmony) => {
            score += 0.3;
            strengths.push(format!("Follows a {harmony} hue relationship"));
        }
        None => improvements.push(
            "Hues follow no recognizable harmony; try complementary or analogous accents"
                .to_string(),
        ),
    }

    let saturations: Vec<f64> = colors.iter().map(|(_, hsl)| f64::from(hsl.s)).collect();
    if variance(&saturations) < 20.0 {
        score += 0.2;
        strengths.push("Consistent saturation across colors".to_string());
    } else {
        improvements.push("Saturation varies widely; align the intensity of colors".to_string());
    }

    let (min_l, max_l) = colors.iter().fold((u8::MAX, u8::MIN), |(lo, hi), (_, hsl)| {
        (lo.min(hsl.l), hi.max(hsl.l))
    });
    let spread = max_l - min_l;
    if (40..=80).contains(&spread) {
        score += 0.2;
        strengths.push(format!("Balanced lightness range ({spread} points)"));
    } else if spread < 40 {
        improvements.push(format!(
            "Lightness range is narrow ({spread} points); add lighter or darker tones"
        ));
    } else {
        improvements.push(format!(
            "Lightness range is extreme ({spread} points); soften the darkest or lightest tone"
        ));
    }

    let mut pairs = 0usize;
    let mut accessible = 0usize;
    for (i, (a, _)) in colors.iter().enumerate() {
        for (b, _) in &colors[i + 1..] {
            pairs += 1;
            if meets_wcag_aa_normal(a, b) {
                accessible += 1;
            }
        }
    }
    let accessible_share = accessible as f64 / pairs as f64;
    if accessible_share >= 0.8 {
        score += 0.2;
        strengths.push("Most color pairs reach WCAG AA contrast".to_string());
    } else {
        improvements.push(format!(
            "Only {:.0}% of color pairs reach WCAG AA contrast",
            accessible_share * 100.0
        ));
    }

    if (5..=8).contains(&colors.len()) {
        score += 0.1;
        strengths.push(format!("Practical palette size ({} colors)", colors.len()));
    }

    HarmonyAnalysis {
        score: f64::min(score, 1.0),
        harmony_type,
        strengths,
        improvements,
    }
}

fn detect_harmony(deltas: &[f64]) -> Option<HarmonyType> {
    let within = |d: &f64, min: f64, max: f64| (min..=max).contains(d);

    if deltas.iter().any(|d| within(d, 150.0, 210.0)) {
        Some(HarmonyType::Complementary)
    } else if deltas.iter().all(|d| *d <= 60.0) {
        Some(HarmonyType::Analogous)
    } else if deltas.iter().any(|d| within(d, 110.0, 130.0))
        && deltas.iter().any(|d| within(d, 230.0, 250.0))
    {
        Some(HarmonyType::Triadic)
    } else {
        None
    }
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Hue family of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    /// 0-30 and 330-360 degrees
    Red,
    /// 30-60 degrees
    Orange,
    /// 60-90 degrees
    Yellow,
    /// 90-150 degrees
    Green,
    /// 150-210 degrees
    Blue,
    /// 210-270 degrees
    Purple,
    /// 270-330 degrees
    Pink,
}

impl ColorFamily {
    /// Family for a hue in degrees.
    #[must_use]
    pub fn from_hue(hue: u16) -> Self {
        match hue % 360 {
            0..30 | 330..360 => Self::Red,
            30..60 => Self::Orange,
            60..90 => Self::Yellow,
            90..150 => Self::Green,
            150..210 => Self::Blue,
            210..270 => Self::Purple,
            _ => Self::Pink,
        }
    }

    /// Emotions commonly tied to the family, strongest first.
    #[must_use]
    pub const fn emotions(self) -> &'static [&'static str] {
        match self {
            Self::Red => &["energy", "passion", "urgency"],
            Self::Orange => &["enthusiasm", "warmth", "creativity"],
            Self::Yellow => &["optimism", "cheerfulness", "attention"],
            Self::Green => &["growth", "balance", "renewal"],
            Self::Blue => &["trust", "stability", "calm"],
            Self::Purple => &["luxury", "imagination", "mystery"],
            Self::Pink => &["playfulness", "compassion", "romance"],
        }
    }

    /// Warm for red/orange/yellow/pink, cool for green/blue/purple.
    #[must_use]
    pub const fn temperature(self) -> Temperature {
        match self {
            Self::Red | Self::Orange | Self::Yellow | Self::Pink => Temperature::Warm,
            Self::Green | Self::Blue | Self::Purple => Temperature::Cool,
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        })
    }
}

/// Psychological reading of a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPsychology {
    /// Normalized hex.
    pub hex: String,
    /// Hue family.
    pub family: ColorFamily,
    /// Warm or cool.
    pub temperature: Temperature,
    /// First emotion of the family.
    pub dominant_emotion: String,
    /// All emotions of the family.
    pub emotions: Vec<String>,
    /// Saturation band: muted, moderate or vivid.
    pub intensity: String,
    /// Lightness band: dark, medium or light.
    pub tone: String,
}

/// Classifies a color into a hue family with its emotions.
///
/// The dominant emotion is always the family's first one; saturation and
/// lightness are reported as bands but do not change it. `None` for
/// malformed hex.
#[must_use]
pub fn analyze_color_psychology(hex: &str) -> Option<ColorPsychology> {
    let hsl = hex_to_hsl(hex)?;
    let family = ColorFamily::from_hue(hsl.h);
    let emotions = family.emotions();

    let intensity = match hsl.s {
        0..30 => "muted",
        30..70 => "moderate",
        _ => "vivid",
    };
    let tone = match hsl.l {
        0..30 => "dark",
        30..70 => "medium",
        _ => "light",
    };

    Some(ColorPsychology {
        hex: normalize_hex(hex),
        family,
        temperature: family.temperature(),
        dominant_emotion: emotions[0].to_string(),
        emotions: emotions.iter().map(|e| (*e).to_string()).collect(),
        intensity: intensity.to_string(),
        tone: tone.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_complementary_pair() {
        let analysis = calculate_palette_harmony_score(&owned(&["#FF0000", "#00FFFF"]));
        assert_eq!(analysis.harmony_type, Some(HarmonyType::Complementary));
        // hue relationship plus identical saturation
        assert!((analysis.score - 0.5).abs() < 1e-9);
        assert!(!analysis.improvements.is_empty());
    }

    #[test]
    fn test_too_few_colors() {
        let analysis = calculate_palette_harmony_score(&owned(&["#FF0000", "oops"]));
        assert_eq!(analysis.score, 0.0);
        assert!(analysis.harmony_type.is_none());
        assert_eq!(calculate_palette_harmony_score(&[]).score, 0.0);
    }

    #[test]
    fn test_analogous_and_triadic_detection() {
        let analogous = calculate_palette_harmony_score(&owned(&["#FF0000", "#FF8000", "#FFFF00"]));
        assert_eq!(analogous.harmony_type, Some(HarmonyType::Analogous));

        let triadic = calculate_palette_harmony_score(&owned(&["#FF0000", "#00FF00", "#0000FF"]));
        assert_eq!(triadic.harmony_type, Some(HarmonyType::Triadic));
    }

    #[test]
    fn test_hue_deltas_do_not_wrap() {
        // 350 and 10 are 20 degrees apart on the wheel, but 340 as a plain delta
        let analysis = calculate_palette_harmony_score(&owned(&["#FF002B", "#FF2B00"]));
        assert!(analysis.harmony_type.is_none());
    }

    #[test]
    fn test_score_caps_at_one() {
        let palette = owned(&["#1E3A8A", "#F59E0B", "#FFFFFF", "#000000", "#DBEAFE"]);
        let analysis = calculate_palette_harmony_score(&palette);
        assert!(analysis.score <= 1.0);
        assert!(analysis.score > 0.0);
    }

    #[test]
    fn test_lightness_spread_reward() {
        let balanced = calculate_palette_harmony_score(&owned(&["#FF8080", "#800000"]));
        let flat = calculate_palette_harmony_score(&owned(&["#FF0000", "#FE0000"]));
        assert!(balanced.strengths.iter().any(|s| s.contains("lightness")));
        assert!(flat.improvements.iter().any(|s| s.contains("narrow")));
    }

    #[test]
    fn test_psychology_families() {
        let red = analyze_color_psychology("#FF0000").unwrap();
        assert_eq!(red.family, ColorFamily::Red);
        assert_eq!(red.dominant_emotion, "energy");
        assert_eq!(red.temperature, Temperature::Warm);

        let blue = analyze_color_psychology("#00BFFF").unwrap();
        assert_eq!(blue.family, ColorFamily::Blue);
        assert_eq!(blue.temperature, Temperature::Cool);

        assert_eq!(ColorFamily::from_hue(345), ColorFamily::Red);
        assert_eq!(ColorFamily::from_hue(300), ColorFamily::Pink);
        assert_eq!(ColorFamily::from_hue(240), ColorFamily::Purple);
        assert!(analyze_color_psychology("#12").is_none());
    }

    #[test]
    fn test_dominant_emotion_ignores_bands() {
        let vivid = analyze_color_psychology("#FF0000").unwrap();
        let muted = analyze_color_psychology("#8C7373").unwrap();
        assert_eq!(vivid.family, muted.family);
        assert_eq!(vivid.dominant_emotion, muted.dominant_emotion);
        assert_ne!(vivid.intensity, muted.intensity);
    }
}
