//! sRGB transfer function.
//!
//! Piecewise: a linear segment near black, a 2.4 power curve above it.
//!
//! # Range
//!
//! - Input/Output: [0, 1] (values outside pass through the same formulas)
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded value at which the decode curve leaves the linear segment.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value at which the encode curve leaves the linear segment.
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V > 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v > DECODE_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L >= 0.0031308:
///     V = 1.055 * L^(1/2.4) - 0.055
/// else:
///     V = L * 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l >= ENCODE_THRESHOLD {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * l
    }
}
