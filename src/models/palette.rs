//! Structured UI palette with six ordered color categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Color, RgbColor};

/// One of the six named lists of a [`UiPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteCategory {
    /// Primary, Secondary, Accent
    Brand,
    /// Background, Surface, Surface Variant
    Surface,
    /// Text Primary/Secondary/Tertiary, Border
    Text,
    /// Success, Warning, Error, Info
    Feedback,
    /// Auto-numbered overflow colors
    Extended,
    /// User-added colors
    Custom,
}

impl PaletteCategory {
    /// All categories in palette order. Flattening, previews and exports
    /// always walk this order.
    pub const ALL: [Self; 6] = [
        Self::Brand,
        Self::Surface,
        Self::Text,
        Self::Feedback,
        Self::Extended,
        Self::Custom,
    ];

    /// Lowercase category name as used in JSON and CSS variables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Surface => "surface",
            Self::Text => "text",
            Self::Feedback => "feedback",
            Self::Extended => "extended",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for PaletteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A multi-role palette.
///
/// The palette has a single logical owner at a time; every mutation goes
/// through `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPalette {
    /// Brand colors
    #[serde(default)]
    pub brand: Vec<Color>,
    /// Background and surface colors
    #[serde(default)]
    pub surface: Vec<Color>,
    /// Text and border colors
    #[serde(default)]
    pub text: Vec<Color>,
    /// Semantic feedback colors
    #[serde(default)]
    pub feedback: Vec<Color>,
    /// Overflow colors
    #[serde(default)]
    pub extended: Vec<Color>,
    /// User-added colors
    #[serde(default)]
    pub custom: Vec<Color>,
}

impl UiPalette {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors of one category.
    #[must_use]
    pub fn colors(&self, category: PaletteCategory) -> &[Color] {
        match category {
            PaletteCategory::Brand => &self.brand,
            PaletteCategory::Surface => &self.surface,
            PaletteCategory::Text => &self.text,
            PaletteCategory::Feedback => &self.feedback,
            PaletteCategory::Extended => &self.extended,
            PaletteCategory::Custom => &self.custom,
        }
    }

    /// Mutable colors of one category.
    pub fn colors_mut(&mut self, category: PaletteCategory) -> &mut Vec<Color> {
        match category {
            PaletteCategory::Brand => &mut self.brand,
            PaletteCategory::Surface => &mut self.surface,
            PaletteCategory::Text => &mut self.text,
            PaletteCategory::Feedback => &mut self.feedback,
            PaletteCategory::Extended => &mut self.extended,
            PaletteCategory::Custom => &mut self.custom,
        }
    }

    /// Iterates over `(category, color)` pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (PaletteCategory, &Color)> {
        PaletteCategory::ALL
            .into_iter()
            .flat_map(move |category| self.colors(category).iter().map(move |c| (category, c)))
    }

    /// Iterates over all colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.entries().map(|(_, color)| color)
    }

    /// Total number of colors across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        PaletteCategory::ALL
            .iter()
            .map(|category| self.colors(*category).len())
            .sum()
    }

    /// Returns true if no category holds a color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All hex values in palette order.
    #[must_use]
    pub fn hexes(&self) -> Vec<String> {
        self.iter().map(|c| c.hex.clone()).collect()
    }

    /// The first `count` hex values in palette order.
    #[must_use]
    pub fn preview(&self, count: usize) -> Vec<String> {
        self.iter().take(count).map(|c| c.hex.clone()).collect()
    }

    /// Appends a color to a category.
    pub fn push(&mut self, category: PaletteCategory, color: Color) {
        self.colors_mut(category).push(color);
    }

    /// Appends several colors to a category.
    pub fn extend(&mut self, category: PaletteCategory, colors: impl IntoIterator<Item = Color>) {
        self.colors_mut(category).extend(colors);
    }

    /// Replaces the unlocked colors of a category.
    ///
    /// Locked entries stay, in their original order, ahead of the new colors.
    pub fn replace_category(&mut self, category: PaletteCategory, colors: Vec<Color>) {
        let list = self.colors_mut(category);
        list.retain(|c| c.locked);
        list.extend(colors);
    }

    /// Finds a color by role name (case-insensitive, exact) in any category.
    #[must_use]
    pub fn find_role(&self, role: &str) -> Option<&Color> {
        self.iter().find(|c| c.role.eq_ignore_ascii_case(role))
    }

    /// All locked colors in palette order.
    #[must_use]
    pub fn locked_colors(&self) -> Vec<Color> {
        self.iter().filter(|c| c.locked).cloned().collect()
    }

    /// Manually sets the hex value of a color.
    ///
    /// The new value is normalized to `#RRGGBB`. Returns `false` (and leaves
    /// the palette untouched) for malformed hex or an out-of-range index.
    pub fn set_hex(&mut self, category: PaletteCategory, index: usize, hex: &str) -> bool {
        let Some(rgb) = RgbColor::parse(hex) else {
            return false;
        };
        match self.colors_mut(category).get_mut(index) {
            Some(color) => {
                color.hex = rgb.to_hex();
                true
            }
            None => false,
        }
    }

    /// Flips the lock flag of a color. Returns the new state.
    pub fn toggle_lock(&mut self, category: PaletteCategory, index: usize) -> Option<bool> {
        let color = self.colors_mut(category).get_mut(index)?;
        color.locked = !color.locked;
        Some(color.locked)
    }

    /// Removes a color.
    pub fn remove(&mut self, category: PaletteCategory, index: usize) -> Option<Color> {
        let list = self.colors_mut(category);
        (index < list.len()).then(|| list.remove(index))
    }

    /// Moves a color to the end of another category.
    pub fn reassign(
        &mut self,
        from: PaletteCategory,
        index: usize,
        to: PaletteCategory,
    ) -> bool {
        match self.remove(from, index) {
            Some(color) => {
                self.push(to, color);
                true
            }
            None => false,
        }
    }
}
