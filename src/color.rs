//! Border color parsing.
//!
//! The border color comes from config or the command line as a CSS color
//! string. Anything lightningcss understands is accepted:
//!
//! - Named: `white`, `black`, `ivory`, `lightgray`, ...
//! - Hex: `#fff`, `#f0f0f0`
//! - Functional: `rgb(250, 250, 245)`, `hsl(0 0% 95%)`
//!
//! Pages are plain RGB, so any alpha component is dropped.

use image::Rgb;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid color '{input}': {reason}")]
    CssParse { input: String, reason: String },
}

/// Parse a CSS color string into an opaque RGB pixel.
///
/// ```
/// use quadsheet::color::parse_color;
///
/// assert_eq!(parse_color("white").unwrap(), image::Rgb([255, 255, 255]));
/// assert_eq!(parse_color("#102030").unwrap(), image::Rgb([16, 32, 48]));
/// ```
pub fn parse_color(s: &str) -> Result<Rgb<u8>, ColorError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }
    let fail = |reason: String| ColorError::CssParse {
        input: trimmed.to_string(),
        reason,
    };

    let css_color = CssColor::parse_string(trimmed).map_err(|e| fail(e.to_string()))?;
    css_color_to_rgb(css_color).ok_or_else(|| fail("cannot convert color to sRGB".to_string()))
}

fn css_color_to_rgb(color: CssColor) -> Option<Rgb<u8>> {
    use lightningcss::values::color::FloatColor;

    match color.to_rgb().ok()? {
        CssColor::RGBA(rgba) => Some(Rgb([rgba.red, rgba.green, rgba.blue])),
        // Components given as `none` come back as floats
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => Some(Rgb([
                unit_to_u8(rgb.r),
                unit_to_u8(rgb.g),
                unit_to_u8(rgb.b),
            ])),
            _ => None,
        },
        _ => None,
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("white").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color("black").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_color("red").unwrap(), Rgb([255, 0, 0]));
    }

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(parse_color("White").unwrap(), Rgb([255, 255, 255]));
    }

    #[test]
    fn hex_short_and_long() {
        assert_eq!(parse_color("#fff").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color("#0a0b0c").unwrap(), Rgb([10, 11, 12]));
    }

    #[test]
    fn functional_rgb() {
        assert_eq!(parse_color("rgb(250, 250, 245)").unwrap(), Rgb([250, 250, 245]));
    }

    #[test]
    fn alpha_is_dropped() {
        assert_eq!(parse_color("#ff000080").unwrap(), Rgb([255, 0, 0]));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_color("  black ").unwrap(), Rgb([0, 0, 0]));
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(parse_color(""), Err(ColorError::Empty));
        assert_eq!(parse_color("   "), Err(ColorError::Empty));
    }

    #[test]
    fn garbage_is_error() {
        assert!(matches!(
            parse_color("not-a-color"),
            Err(ColorError::CssParse { .. })
        ));
    }
}
