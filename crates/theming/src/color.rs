//! Color utilities for the style engine
//!
//! Colors are represented as RGBA hex strings ("#RRGGBB" or "#RRGGBBAA"),
//! the same convention the rendering host consumes. This module provides
//! parsing, formatting, and the alpha-flattening helper used by the
//! reduced-transparency adjustment.

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse a hex color string to RGBA components
///
/// Six-digit strings get an implicit opaque alpha.
pub fn parse_hex_rgba(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let stripped = hex.trim_start_matches('#');
    let (r, g, b) = parse_hex_color(hex)?;
    let a = match stripped.len() {
        6 => 0xFF,
        8 => u8::from_str_radix(&stripped[6..8], 16).ok()?,
        _ => return None,
    };
    Some((r, g, b, a))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Convert RGBA to an eight-digit hex string
pub fn rgba_to_hex(r: u8, g: u8, b: u8, a: u8) -> String {
    format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
}

/// Whether a color carries partial transparency
///
/// Only eight-digit hex strings with alpha below 0xFF qualify; anything the
/// parser does not understand is treated as opaque.
pub fn is_translucent(color: &str) -> bool {
    matches!(parse_hex_rgba(color), Some((_, _, _, a)) if a < 0xFF)
}

/// Flatten a translucent color onto an opaque backdrop
///
/// Standard source-over compositing. Opaque inputs are returned unchanged;
/// unparseable inputs fall back to the backdrop.
pub fn flatten_onto(color: &str, backdrop: &str) -> Color {
    let Some((r, g, b, a)) = parse_hex_rgba(color) else {
        return backdrop.to_string();
    };
    if a == 0xFF {
        return rgb_to_hex(r, g, b);
    }
    let Some((br, bg, bb)) = parse_hex_color(backdrop) else {
        return rgb_to_hex(r, g, b);
    };

    let alpha = f32::from(a) / 255.0;
    let blend = |fg: u8, bk: u8| -> u8 {
        (f32::from(fg) * alpha + f32::from(bk) * (1.0 - alpha)).round() as u8
    };
    rgb_to_hex(blend(r, br), blend(g, bg), blend(b, bb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#4F46E5"), Some((79, 70, 229)));
        assert_eq!(parse_hex_color("4F46E5"), Some((79, 70, 229)));
        assert_eq!(parse_hex_color("#FF"), None); // Too short
    }

    #[test]
    fn test_parse_hex_rgba() {
        assert_eq!(parse_hex_rgba("#FFFFFF"), Some((255, 255, 255, 255)));
        assert_eq!(parse_hex_rgba("#FFFFFF80"), Some((255, 255, 255, 128)));
        assert_eq!(parse_hex_rgba("#4F46E500"), Some((79, 70, 229, 0)));
        assert_eq!(parse_hex_rgba("#4F46E5F"), None); // Seven digits
        assert_eq!(parse_hex_rgba("not-a-color"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(79, 70, 229), "#4F46E5");
    }

    #[test]
    fn test_rgba_to_hex() {
        assert_eq!(rgba_to_hex(255, 255, 255, 128), "#FFFFFF80");
        assert_eq!(rgba_to_hex(79, 70, 229, 0), "#4F46E500");
    }

    #[test]
    fn test_is_translucent() {
        assert!(is_translucent("#FFFFFF80"));
        assert!(is_translucent("#00000000"));
        assert!(!is_translucent("#FFFFFF"));
        assert!(!is_translucent("#FFFFFFFF"));
        assert!(!is_translucent("garbage"));
    }

    #[test]
    fn test_flatten_opaque_passthrough() {
        assert_eq!(flatten_onto("#4F46E5", "#FFFFFF"), "#4F46E5");
        assert_eq!(flatten_onto("#4F46E5FF", "#FFFFFF"), "#4F46E5");
    }

    #[test]
    fn test_flatten_fully_transparent_yields_backdrop() {
        assert_eq!(flatten_onto("#4F46E500", "#FFFFFF"), "#FFFFFF");
        assert_eq!(flatten_onto("#00000000", "#111827"), "#111827");
    }

    #[test]
    fn test_flatten_half_alpha() {
        // 50% black over white lands mid-gray
        let flattened = flatten_onto("#00000080", "#FFFFFF");
        let (r, g, b) = parse_hex_color(&flattened).unwrap();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((120..=135).contains(&r));
    }

    #[test]
    fn test_flatten_unparseable_falls_back() {
        assert_eq!(flatten_onto("transparent", "#FFFFFF"), "#FFFFFF");
    }

    #[test]
    fn test_flatten_result_is_opaque() {
        let flattened = flatten_onto("#4F46E51F", "#FFFFFF");
        assert!(!is_translucent(&flattened));
    }
}
