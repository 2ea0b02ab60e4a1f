//! Composite conversions built from the single steps.
//!
//! | Function | Chain |
//! |----------|-------|
//! | [`rgb_to_lab`] | RGB -> XYZ -> Lab |
//! | [`lab_to_rgb`] | Lab -> XYZ -> RGB |
//! | [`cmyk_to_lab`] | CMYK -> RGB -> XYZ -> Lab |
//! | [`lab_to_cmyk`] | Lab -> XYZ -> RGB -> CMYK |
//!
//! Intermediate values are passed through at full precision.

use swatch_core::{Cmyk, Lab, Rgb};

use crate::cmyk::{cmyk_to_rgb, rgb_to_cmyk};
use crate::lab::{lab_to_xyz, xyz_to_lab};
use crate::xyz::{rgb_to_xyz, xyz_to_rgb};

/// RGB -> XYZ -> Lab.
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Lab -> XYZ -> RGB. Not clamped.
#[inline]
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// CMYK -> RGB -> XYZ -> Lab.
#[inline]
pub fn cmyk_to_lab(cmyk: Cmyk) -> Lab {
    rgb_to_lab(cmyk_to_rgb(cmyk))
}

/// Lab -> XYZ -> RGB -> CMYK.
#[inline]
pub fn lab_to_cmyk(lab: Lab) -> Cmyk {
    rgb_to_cmyk(lab_to_rgb(lab))
}
