//! CSS custom property export.

use std::fmt::Write as _;

use crate::models::UiPalette;

/// Renders the palette as custom properties on `:root`.
///
/// Each color becomes `--color-<category>-<role-slug>: <hex>;`.
///
/// # Examples
///
/// ```
/// use harmonia::export::to_css;
/// use harmonia::models::{Color, PaletteCategory, UiPalette};
///
/// let mut palette = UiPalette::new();
/// palette.push(PaletteCategory::Text, Color::new("#111827", "Text Primary"));
/// assert_eq!(to_css(&palette), ":root {\n  --color-text-text-primary: #111827;\n}\n");
/// ```
#[must_use]
pub fn to_css(palette: &UiPalette) -> String {
    let mut output = String::from(":root {\n");
    for (category, color) in palette.entries() {
        let _ = writeln!(
            output,
            "  --color-{}-{}: {};",
            category,
            slug(&color.role),
            color.hex
        );
    }
    output.push_str("}\n");
    output
}

/// Lowercase ASCII alphanumerics joined by single dashes.
fn slug(role: &str) -> String {
    let mut slug = String::with_capacity(role.len());
    for c in role.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "color".to_string()
    } else {
        trimmed.to_string()
    }
}
