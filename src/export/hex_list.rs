//! Plain hex literal export.

use crate::models::{RgbColor, UiPalette};

/// Renders the palette as `0xRRGGBB, 0xRRGGBB, ...`.
///
/// Entries whose hex does not parse are skipped.
#[must_use]
pub fn to_hex_list(palette: &UiPalette) -> String {
    palette
        .iter()
        .filter_map(|color| RgbColor::parse(&color.hex))
        .map(|rgb| format!("0x{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, PaletteCategory};

    #[test]
    fn test_hex_list() {
        let mut palette = UiPalette::new();
        palette.push(PaletteCategory::Surface, Color::new("#fff", "Background"));
        palette.push(PaletteCategory::Brand, Color::new("#3B82F6", "Primary"));
        palette.push(PaletteCategory::Custom, Color::new("nope", "Broken"));
        assert_eq!(to_hex_list(&palette), "0x3B82F6, 0xFFFFFF");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_hex_list(&UiPalette::new()), "");
    }
}
