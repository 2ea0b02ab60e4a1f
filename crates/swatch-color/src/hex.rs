//! `#rrggbb` hex strings.
//!
//! Output is always lower-case with a leading `#`. Input accepts either case
//! and an optional `#`, but must be exactly six hex digits.

use swatch_core::{Rgb, ValidationError};

/// Formats byte RGB as `#rrggbb`.
///
/// # Example
///
/// ```rust
/// use swatch_color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
/// assert_eq!(rgb_to_hex([255, 255, 255]), "#ffffff");
/// assert_eq!(rgb_to_hex([10, 171, 3]), "#0aab03");
/// ```
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Parses `#rrggbb` into byte RGB.
///
/// # Errors
///
/// [`ValidationError::MalformedHex`] if the string (after an optional `#`) is
/// not exactly six hex digits.
///
/// # Example
///
/// ```rust
/// use swatch_color::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#ff0000").unwrap(), [255, 0, 0]);
/// assert!(hex_to_rgb("#ff00").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], ValidationError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 {
        return Err(ValidationError::malformed_hex(hex, "expected 6 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ValidationError::malformed_hex(hex, "non-hex character"));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| ValidationError::malformed_hex(hex, "non-hex character"))
    };
    Ok([byte(0)?, byte(1)?, byte(2)?])
}

/// Parses `#rrggbb` into [`Rgb`].
#[inline]
pub fn hex_to_color(hex: &str) -> Result<Rgb, ValidationError> {
    hex_to_rgb(hex).map(Rgb::from_bytes)
}

/// Formats [`Rgb`] as `#rrggbb`, rounding and clamping each channel.
#[inline]
pub fn color_to_hex(rgb: Rgb) -> String {
    rgb_to_hex(rgb.to_bytes())
}
