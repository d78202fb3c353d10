//! A single palette entry: a hex value plus its UI role.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// A color slot in a palette.
///
/// Every color placed in a generated palette carries the normalized
/// `#RRGGBB` form, locked ones included. `hex` itself is stored as given, so
/// a color read from a file may still hold a short or lowercase literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// Hex color code (e.g., "#3B82F6").
    pub hex: String,
    /// Free-form role label (e.g., "Primary", "Text Secondary").
    pub role: String,
    /// Pinned by the caller; must survive regeneration unchanged.
    #[serde(default)]
    pub locked: bool,
    /// Added by hand rather than produced by a generator.
    #[serde(default)]
    pub is_custom: bool,
}

impl Color {
    /// Creates an unlocked, non-custom color.
    #[must_use]
    pub fn new(hex: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            role: role.into(),
            locked: false,
            is_custom: false,
        }
    }

    /// Creates a locked color.
    #[must_use]
    pub fn locked(hex: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            locked: true,
            ..Self::new(hex, role)
        }
    }

    /// Marks the color as user-added.
    #[must_use]
    pub fn with_custom(mut self, is_custom: bool) -> Self {
        self.is_custom = is_custom;
        self
    }

    /// Parsed RGB value. Accepts `#RRGGBB`, `#RGB` and either without `#`.
    #[must_use]
    pub fn rgb(&self) -> Option<RgbColor> {
        RgbColor::parse(&self.hex)
    }

    /// The same color with `hex` in `#RRGGBB` form. Malformed hex is left
    /// untouched.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self.rgb() {
            Some(rgb) => Self {
                hex: rgb.to_hex(),
                ..self.clone()
            },
            None => self.clone(),
        }
    }
}
