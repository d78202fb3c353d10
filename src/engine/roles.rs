//! Role classification and slot filling for generated palettes.
//!
//! Slots are filled in a fixed order (brand, surface, text, feedback, then
//! extended) from a pool of candidate colors. Structural slots that find no
//! suitable candidate get a synthesized fallback so a palette always has a
//! background, text and semantic colors.

#![allow(clippy::cast_precision_loss)]

use tracing::{debug, trace};

use crate::engine::color_space::{
    contrast_ratio, hex_to_hsl, hsl_to_hex, normalize_hex, text_color_for, BLACK, WCAG_AA_LARGE,
    WCAG_AA_NORMAL, WHITE,
};
use crate::models::{hue_distance, Color, HslColor, PaletteCategory, UiPalette};

/// Keyword table for locked-color classification. Checked top to bottom;
/// the first row with a matching keyword wins, so "Accent Border" is brand.
const ROLE_KEYWORDS: [(PaletteCategory, &[&str]); 4] = [
    (PaletteCategory::Brand, &["primary", "secondary", "accent"]),
    (PaletteCategory::Surface, &["background", "surface"]),
    (PaletteCategory::Text, &["text", "border"]),
    (
        PaletteCategory::Feedback,
        &["success", "error", "warning", "info"],
    ),
];

/// Hue window around a semantic target that still reads as that meaning.
const SEMANTIC_HUE_WINDOW: f64 = 30.0;

/// Places a locked color by its role label.
///
/// Case-insensitive substring match against the keyword table. Colors whose
/// role matches nothing go to `custom` when flagged as custom, otherwise to
/// `extended`.
///
/// # Examples
///
/// ```
/// use harmonia::engine::roles::classify_role;
/// use harmonia::models::PaletteCategory;
///
/// assert_eq!(classify_role("Accent Border", false), PaletteCategory::Brand);
/// assert_eq!(classify_role("Mascot", true), PaletteCategory::Custom);
/// ```
#[must_use]
pub fn classify_role(role: &str, is_custom: bool) -> PaletteCategory {
    let role = role.to_lowercase();
    for (category, keywords) in ROLE_KEYWORDS {
        if keywords.iter().any(|k| role.contains(k)) {
            return category;
        }
    }
    if is_custom {
        PaletteCategory::Custom
    } else {
        PaletteCategory::Extended
    }
}

/// A named structural position in a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Main brand color
    Primary,
    /// Supporting brand color
    Secondary,
    /// Highlight color, from 10 colors up
    Accent,
    /// Page background
    Background,
    /// Card/panel surface
    Surface,
    /// Alternate surface, from 12 colors up
    SurfaceVariant,
    /// Body text
    TextPrimary,
    /// Muted text
    TextSecondary,
    /// Hint text, from 14 colors up
    TextTertiary,
    /// Dividers, from 16 colors up
    Border,
    /// Positive feedback (hue 140)
    Success,
    /// Caution feedback (hue 45)
    Warning,
    /// Negative feedback (hue 0)
    Error,
    /// Neutral feedback (hue 210), from 14 colors up
    Info,
}

impl Slot {
    /// Every slot in fill order.
    pub const ALL: [Self; 14] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::Surface,
        Self::SurfaceVariant,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextTertiary,
        Self::Border,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
    ];

    /// Role label written into the palette.
    #[must_use]
    pub const fn role(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Accent => "Accent",
            Self::Background => "Background",
            Self::Surface => "Surface",
            Self::SurfaceVariant => "Surface Variant",
            Self::TextPrimary => "Text Primary",
            Self::TextSecondary => "Text Secondary",
            Self::TextTertiary => "Text Tertiary",
            Self::Border => "Border",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    /// Category the slot's color lands in.
    #[must_use]
    pub const fn category(self) -> PaletteCategory {
        match self {
            Self::Primary | Self::Secondary | Self::Accent => PaletteCategory::Brand,
            Self::Background | Self::Surface | Self::SurfaceVariant => PaletteCategory::Surface,
            Self::TextPrimary | Self::TextSecondary | Self::TextTertiary | Self::Border => {
                PaletteCategory::Text
            }
            Self::Success | Self::Warning | Self::Error | Self::Info => PaletteCategory::Feedback,
        }
    }

    /// Smallest target count that includes this slot.
    #[must_use]
    pub const fn min_count(self) -> usize {
        match self {
            Self::Accent => 10,
            Self::SurfaceVariant => 12,
            Self::TextTertiary | Self::Info => 14,
            Self::Border => 16,
            _ => 0,
        }
    }

    /// Target hue of a semantic slot.
    #[must_use]
    pub const fn semantic_hue(self) -> Option<u16> {
        match self {
            Self::Success => Some(140),
            Self::Warning => Some(45),
            Self::Error => Some(0),
            Self::Info => Some(210),
            _ => None,
        }
    }
}

/// Slots included for a palette of `target_count` colors, in fill order.
#[must_use]
pub fn slots_for(target_count: usize) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| target_count >= slot.min_count())
        .collect()
}

#[derive(Debug, Clone)]
struct Candidate {
    hex: String,
    hsl: HslColor,
}

impl Candidate {
    fn l(&self) -> f64 {
        f64::from(self.hsl.l)
    }

    fn s(&self) -> f64 {
        f64::from(self.hsl.s)
    }

    fn h(&self) -> f64 {
        f64::from(self.hsl.h)
    }
}

/// Index of the highest-scoring candidate; ineligible ones score `None`.
/// Ties go to the earliest candidate.
fn best_by(pool: &[Candidate], score: impl Fn(&Candidate) -> Option<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in pool.iter().enumerate() {
        if let Some(value) = score(candidate) {
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((index, value));
            }
        }
    }
    best.map(|(index, _)| index)
}

fn in_window(value: f64, (min, max): (f64, f64)) -> bool {
    (min..=max).contains(&value)
}

/// Mean contrast grade of `hex` against the text colors already placed:
/// 1.0 for AA, 0.5 for AA-large, 0.0 otherwise. No text colors scores 0.
fn contrast_score(hex: &str, palette: &UiPalette) -> f64 {
    let grades: Vec<f64> = palette
        .iter()
        .filter(|c| c.role.to_lowercase().contains("text"))
        .map(|c| {
            let ratio = contrast_ratio(hex, &c.hex);
            if ratio >= WCAG_AA_NORMAL {
                1.0
            } else if ratio >= WCAG_AA_LARGE {
                0.5
            } else {
                0.0
            }
        })
        .collect();

    if grades.is_empty() {
        0.0
    } else {
        grades.iter().sum::<f64>() / grades.len() as f64
    }
}

/// Fills the structural slots and then `Extended N` entries from `candidates`.
///
/// `palette` should already hold the locked colors; slots whose role one of
/// them carries are skipped. At most `budget` colors are added.
pub fn assign_roles(
    palette: &mut UiPalette,
    candidates: &[String],
    target_count: usize,
    budget: usize,
) {
    let mut pool: Vec<Candidate> = candidates
        .iter()
        .filter_map(|hex| {
            hex_to_hsl(hex).map(|hsl| Candidate {
                hex: normalize_hex(hex),
                hsl,
            })
        })
        .collect();
    let mut remaining = budget;

    for slot in slots_for(target_count) {
        if remaining == 0 {
            break;
        }
        if palette.find_role(slot.role()).is_some() {
            trace!(role = slot.role(), "Slot held by a locked color");
            continue;
        }

        let Some(hex) = fill_slot(slot, palette, &mut pool) else {
            debug!(role = slot.role(), "No candidate left, slot left empty");
            continue;
        };
        trace!(role = slot.role(), %hex, "Slot filled");
        palette.push(slot.category(), Color::new(hex, slot.role()));
        remaining -= 1;
    }

    let mut number = 1;
    for candidate in pool {
        if remaining == 0 {
            break;
        }
        while palette.find_role(&extended_role(number)).is_some() {
            number += 1;
        }
        palette.push(
            PaletteCategory::Extended,
            Color::new(candidate.hex, extended_role(number)),
        );
        number += 1;
        remaining -= 1;
    }
}

fn extended_role(number: usize) -> String {
    format!("Extended {number}")
}

/// Picks (and removes from the pool) a color for one slot, or synthesizes a
/// fallback. `None` only for brand slots with nothing left to pick.
fn fill_slot(slot: Slot, palette: &UiPalette, pool: &mut Vec<Candidate>) -> Option<String> {
    match slot {
        Slot::Primary => {
            let index = best_by(pool, |c| {
                (c.s() >= 30.0 && in_window(c.l(), (25.0, 75.0))).then_some(0.0)
            })
            .or_else(|| (!pool.is_empty()).then_some(0));
            take(pool, index)
        }
        Slot::Secondary => {
            let primary_hue = role_hue(palette, Slot::Primary);
            let index = best_by(pool, |c| {
                let apart = primary_hue.is_none_or(|h| hue_distance(c.h(), h) >= 30.0);
                (apart && c.s() >= 20.0).then_some(0.0)
            })
            .or_else(|| (!pool.is_empty()).then_some(0));
            take(pool, index)
        }
        Slot::Accent => {
            let primary_hue = role_hue(palette, Slot::Primary);
            let index = best_by(pool, |c| {
                (c.s() >= 40.0).then(|| primary_hue.map_or(0.0, |h| hue_distance(c.h(), h)))
            })
            .or_else(|| (!pool.is_empty()).then_some(0));
            take(pool, index)
        }
        Slot::Background => {
            let index = best_by(pool, |c| {
                (c.l() >= 85.0).then(|| c.l() + 10.0 * contrast_score(&c.hex, palette))
            });
            Some(take(pool, index).unwrap_or_else(|| fallback(slot, HslColor::new(0, 0, 95))))
        }
        Slot::Surface => {
            let index = best_by(pool, |c| {
                in_window(c.l(), (75.0, 95.0))
                    .then(|| -(c.l() - 85.0).abs() + 10.0 * contrast_score(&c.hex, palette))
            });
            Some(take(pool, index).unwrap_or_else(|| fallback(slot, HslColor::new(0, 5, 90))))
        }
        Slot::SurfaceVariant => {
            let index = best_by(pool, |c| {
                in_window(c.l(), (65.0, 90.0))
                    .then(|| -(c.l() - 78.0).abs() + 10.0 * contrast_score(&c.hex, palette))
            });
            Some(take(pool, index).unwrap_or_else(|| fallback(slot, HslColor::new(0, 5, 82))))
        }
        Slot::TextPrimary => {
            let background = background_hex(palette);
            let index = best_by(pool, |c| {
                let ratio = contrast_ratio(&c.hex, &background);
                (c.l() <= 40.0 && ratio >= WCAG_AA_LARGE).then(|| {
                    let grade = if ratio >= WCAG_AA_NORMAL { 100.0 } else { 50.0 };
                    grade + (30.0 - c.l())
                })
            });
            Some(take(pool, index).unwrap_or_else(|| {
                debug!(role = slot.role(), "Using binary text color fallback");
                text_color_for(&background).to_string()
            }))
        }
        Slot::TextSecondary => {
            let background = background_hex(palette);
            let index = best_by(pool, |c| {
                let ratio = contrast_ratio(&c.hex, &background);
                (in_window(c.l(), (25.0, 60.0)) && ratio >= WCAG_AA_LARGE).then(|| {
                    let bonus = if ratio >= WCAG_AA_NORMAL { 10.0 } else { 0.0 };
                    -(c.l() - 45.0).abs() + bonus
                })
            });
            Some(take(pool, index).unwrap_or_else(|| text_step(slot, palette, 25)))
        }
        Slot::TextTertiary => {
            let index = best_by(pool, |c| {
                in_window(c.l(), (40.0, 70.0)).then(|| -(c.l() - 55.0).abs())
            });
            Some(take(pool, index).unwrap_or_else(|| text_step(slot, palette, 40)))
        }
        Slot::Border => {
            let index = best_by(pool, |c| {
                (in_window(c.l(), (70.0, 90.0)) && c.s() <= 30.0).then(|| -(c.l() - 80.0).abs())
            });
            Some(take(pool, index).unwrap_or_else(|| fallback(slot, HslColor::new(0, 0, 80))))
        }
        Slot::Success | Slot::Warning | Slot::Error | Slot::Info => {
            let hue = slot.semantic_hue().map_or(0.0, f64::from);
            let index = best_by(pool, |c| {
                let distance = hue_distance(c.h(), hue);
                let vivid = c.s() > 40.0 && c.s() < 100.0;
                let readable = c.l() > 35.0 && c.l() < 70.0;
                (distance <= SEMANTIC_HUE_WINDOW && vivid && readable).then_some(-distance)
            });
            Some(take(pool, index).unwrap_or_else(|| {
                let hue = slot.semantic_hue().map_or(0, i32::from);
                fallback(slot, HslColor::new(hue, 65, 50))
            }))
        }
    }
}

fn take(pool: &mut Vec<Candidate>, index: Option<usize>) -> Option<String> {
    index.map(|i| pool.remove(i).hex)
}

fn fallback(slot: Slot, hsl: HslColor) -> String {
    debug!(role = slot.role(), %hsl, "No suitable candidate, using fallback");
    hsl_to_hex(hsl)
}

fn role_hue(palette: &UiPalette, slot: Slot) -> Option<f64> {
    palette
        .find_role(slot.role())
        .and_then(|c| hex_to_hsl(&c.hex))
        .map(|hsl| f64::from(hsl.h))
}

/// Background in effect for text checks; white when none is placed.
fn background_hex(palette: &UiPalette) -> String {
    palette
        .find_role(Slot::Background.role())
        .map_or_else(|| WHITE.to_string(), |c| c.hex.clone())
}

/// Text Primary moved `delta` lightness points toward the background.
fn text_step(slot: Slot, palette: &UiPalette, delta: i32) -> String {
    let background = background_hex(palette);
    let text = palette
        .find_role(Slot::TextPrimary.role())
        .map_or_else(|| text_color_for(&background).to_string(), |c| c.hex.clone());
    let light_background = text_color_for(&background) == BLACK;
    let delta = if light_background { delta } else { -delta };

    debug!(role = slot.role(), delta, "Deriving from Text Primary");
    hex_to_hsl(&text).map_or_else(
        || text_color_for(&background).to_string(),
        |hsl| hsl_to_hex(hsl.with_lightness(i32::from(hsl.l) + delta)),
    )
}
