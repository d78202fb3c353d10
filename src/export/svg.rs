//! SVG swatch strip export.

use std::fmt::Write as _;

use crate::engine::color_space::{is_valid_hex, normalize_hex, text_color_for};
use crate::models::UiPalette;

const SWATCH_SIZE: usize = 100;
const STRIP_HEIGHT: usize = 120;
const LABEL_Y: usize = 115;

/// Renders one 100x100 swatch per color, left to right in palette order.
///
/// Each swatch carries its hex in the readable text color, with the role
/// label underneath. Colors with malformed hex are drawn as empty outlines.
#[must_use]
pub fn to_svg(palette: &UiPalette) -> String {
    let width = palette.len() * SWATCH_SIZE;
    let mut output = String::new();

    let _ = writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{STRIP_HEIGHT}" viewBox="0 0 {width} {STRIP_HEIGHT}">"#
    );

    for (index, color) in palette.iter().enumerate() {
        let x = index * SWATCH_SIZE;
        let center = x + SWATCH_SIZE / 2;

        if is_valid_hex(&color.hex) {
            let fill = normalize_hex(&color.hex);
            let _ = writeln!(
                output,
                r#"  <rect x="{x}" y="0" width="{SWATCH_SIZE}" height="{SWATCH_SIZE}" fill="{fill}"/>"#
            );
            let _ = writeln!(
                output,
                r#"  <text x="{center}" y="55" font-family="monospace" font-size="14" text-anchor="middle" fill="{}">{fill}</text>"#,
                text_color_for(&fill)
            );
        } else {
            let _ = writeln!(
                output,
                r##"  <rect x="{x}" y="0" width="{SWATCH_SIZE}" height="{SWATCH_SIZE}" fill="none" stroke="#999999"/>"##
            );
        }

        let _ = writeln!(
            output,
            r##"  <text x="{center}" y="{LABEL_Y}" font-family="sans-serif" font-size="10" text-anchor="middle" fill="#333333">{}</text>"##,
            escape_xml(&color.role)
        );
    }

    output.push_str("</svg>\n");
    output
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
