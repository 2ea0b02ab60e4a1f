//! RGB <-> CIE XYZ.
//!
//! ```text
//! RGB [0,255] -> /255 -> sRGB EOTF -> *100 -> SRGB_TO_XYZ -> XYZ (Y in [0,100])
//! XYZ -> /100 -> XYZ_TO_SRGB -> sRGB OETF -> *255 -> RGB
//! ```
//!
//! The reverse matrix is the computed inverse of the forward one, so the two
//! functions are exact inverses up to floating-point error.

use swatch_core::{Rgb, Xyz};
use swatch_math::Vec3;
use swatch_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use swatch_transfer::srgb;

/// Converts gamma-encoded RGB in [0, 255] to XYZ.
///
/// # Example
///
/// ```rust
/// use swatch_color::rgb_to_xyz;
/// use swatch_core::Rgb;
///
/// let white = rgb_to_xyz(Rgb::WHITE);
/// assert!((white.x - 95.047).abs() < 1e-4);
/// assert!((white.y - 100.0).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = Vec3::from_array(rgb.to_array()).map(|v| srgb::eotf(v / 255.0) * 100.0);
    Xyz::from_array((SRGB_TO_XYZ * linear).to_array())
}

/// Converts XYZ to gamma-encoded RGB.
///
/// The result is not clamped: colors outside the sRGB gamut come back with
/// channels below 0 or above 255.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let linear = *XYZ_TO_SRGB * (Vec3::from_array(xyz.to_array()) / 100.0);
    Rgb::from_array(linear.map(|v| srgb::oetf(v) * 255.0).to_array())
}
