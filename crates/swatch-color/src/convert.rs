//! Generic conversion trait and the three-way color set.
//!
//! # Traits
//!
//! - [`Convert`] - converts any value type to any other through the pipeline
//!
//! # Example
//!
//! ```rust
//! use swatch_color::Convert;
//! use swatch_core::{Cmyk, Lab, Rgb, Xyz};
//!
//! let rgb = Rgb::new(0.0, 128.0, 255.0);
//! let lab: Lab = rgb.convert();
//! let cmyk: Cmyk = lab.convert();
//! let xyz: Xyz = cmyk.convert();
//! ```

use swatch_core::{Cmyk, Lab, Representation, Rgb, Xyz};

use crate::cmyk::{cmyk_to_rgb, rgb_to_cmyk};
use crate::composite::{cmyk_to_lab, lab_to_cmyk, lab_to_rgb, rgb_to_lab};
use crate::lab::{lab_to_xyz, xyz_to_lab};
use crate::xyz::{rgb_to_xyz, xyz_to_rgb};

/// Conversion into another color representation.
pub trait Convert<T> {
    /// Converts to `T`.
    fn convert(self) -> T;
}

macro_rules! impl_convert {
    ($($from:ty => $to:ty : $f:expr),* $(,)?) => {
        $(
            impl Convert<$to> for $from {
                #[inline]
                fn convert(self) -> $to {
                    ($f)(self)
                }
            }
        )*
    };
}

impl_convert! {
    Rgb => Cmyk: rgb_to_cmyk,
    Rgb => Xyz: rgb_to_xyz,
    Rgb => Lab: rgb_to_lab,
    Cmyk => Rgb: cmyk_to_rgb,
    Cmyk => Xyz: |c| rgb_to_xyz(cmyk_to_rgb(c)),
    Cmyk => Lab: cmyk_to_lab,
    Xyz => Rgb: xyz_to_rgb,
    Xyz => Cmyk: |x| rgb_to_cmyk(xyz_to_rgb(x)),
    Xyz => Lab: xyz_to_lab,
    Lab => Rgb: lab_to_rgb,
    Lab => Cmyk: lab_to_cmyk,
    Lab => Xyz: lab_to_xyz,
}

/// One color expressed in all three user-facing representations.
///
/// Built from whichever representation was edited; the other two are derived
/// through the pipeline, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorSet {
    /// CMYK fractions
    pub cmyk: Cmyk,
    /// CIE Lab
    pub lab: Lab,
    /// RGB in [0, 255]
    pub rgb: Rgb,
    /// Representation the set was derived from
    pub source: Representation,
}

impl ColorSet {
    /// Derives Lab and RGB from CMYK.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        Self {
            cmyk,
            lab: cmyk_to_lab(cmyk),
            rgb: cmyk_to_rgb(cmyk),
            source: Representation::Cmyk,
        }
    }

    /// Derives CMYK and RGB from Lab.
    pub fn from_lab(lab: Lab) -> Self {
        Self {
            cmyk: lab_to_cmyk(lab),
            lab,
            rgb: lab_to_rgb(lab),
            source: Representation::Lab,
        }
    }

    /// Derives CMYK and Lab from RGB.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            cmyk: rgb_to_cmyk(rgb),
            lab: rgb_to_lab(rgb),
            rgb,
            source: Representation::Rgb,
        }
    }
}
