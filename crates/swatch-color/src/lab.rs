//! CIE XYZ <-> CIE L*a*b*.
//!
//! Relative to the fixed D65 reference white ([`D65_WHITE`]):
//!
//! ```text
//! fx, fy, fz = f(X/Xn), f(Y/Yn), f(Z/Zn)
//! L = 116 fy - 16
//! a = 500 (fx - fy)
//! b = 200 (fy - fz)
//! ```
//!
//! See [`swatch_transfer::cie`] for `f` and its inverse.

use swatch_core::{Lab, Xyz};
use swatch_math::Vec3;
use swatch_primaries::D65_WHITE;
use swatch_transfer::cie;

#[inline]
fn white() -> Vec3 {
    Vec3::from_array(D65_WHITE.to_array())
}

/// Converts XYZ (Y in [0, 100]) to Lab.
///
/// # Example
///
/// ```rust
/// use swatch_color::xyz_to_lab;
/// use swatch_color::primaries::D65_WHITE;
///
/// let lab = xyz_to_lab(D65_WHITE);
/// assert_eq!(lab.l, 100.0);
/// assert_eq!(lab.a, 0.0);
/// assert_eq!(lab.b, 0.0);
/// ```
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let f = (Vec3::from_array(xyz.to_array()) / white()).map(cie::f);
    Lab::new(116.0 * f.y - 16.0, 500.0 * (f.x - f.y), 200.0 * (f.y - f.z))
}

/// Converts Lab to XYZ (Y in [0, 100]).
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let f = Vec3::new(lab.a / 500.0 + fy, fy, fy - lab.b / 200.0);
    Xyz::from_array((f.map(cie::f_inv) * white()).to_array())
}
