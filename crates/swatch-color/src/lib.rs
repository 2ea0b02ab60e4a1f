//! # swatch-color
//!
//! The conversion pipeline between CMYK, RGB, CIE XYZ and CIE Lab, plus the
//! `#rrggbb` hex form of RGB.
//!
//! Every conversion is a pure, total function over `f64` values. Nothing in
//! this crate rounds or clamps: out-of-gamut inputs produce out-of-range
//! outputs, and it is up to the presentation layer to decide what to show.
//!
//! # Architecture
//!
//! ```text
//!            CMYK
//!             |  cmyk
//!            RGB  ---- hex
//!             |  xyz   (sRGB companding + matrix)
//!            XYZ
//!             |  lab   (D65 white + CIE f(t))
//!            Lab
//! ```
//!
//! [`composite`] chains the single steps, so any representation reaches any
//! other through RGB and XYZ.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::prelude::*;
//!
//! let red = Rgb::new(255.0, 0.0, 0.0);
//! let lab = rgb_to_lab(red);
//! assert_eq!(lab.to_string(), "lab(53, 80, 67)");
//! assert_eq!(rgb_to_cmyk(red).to_string(), "cmyk(0%, 100%, 100%, 0%)");
//! assert_eq!(rgb_to_hex(red.to_bytes()), "#ff0000");
//!
//! // Or through the generic trait:
//! let cmyk: Cmyk = lab.convert();
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - value types, validation errors
//! - [`swatch-math`] - matrix/vector math
//! - [`swatch-transfer`] - sRGB and CIE curves
//! - [`swatch-primaries`] - sRGB matrix and reference white
//!
//! # Used By
//!
//! - `swatch-session` - UI orchestration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cmyk;
pub mod composite;
pub mod convert;
pub mod hex;
pub mod lab;
pub mod xyz;

pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use composite::{cmyk_to_lab, lab_to_cmyk, lab_to_rgb, rgb_to_lab};
pub use convert::{ColorSet, Convert};
pub use hex::{color_to_hex, hex_to_color, hex_to_rgb, rgb_to_hex};
pub use lab::{lab_to_xyz, xyz_to_lab};
pub use xyz::{rgb_to_xyz, xyz_to_rgb};

// Re-export sub-crates for convenience
pub use swatch_primaries as primaries;
pub use swatch_transfer as transfer;

/// Prelude with commonly used types and functions.
pub mod prelude {
    pub use crate::{
        cmyk_to_lab, cmyk_to_rgb, hex_to_rgb, lab_to_cmyk, lab_to_rgb, lab_to_xyz, rgb_to_cmyk,
        rgb_to_hex, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb, ColorSet, Convert,
    };
    pub use swatch_core::{Cmyk, Lab, Representation, Rgb, Xyz};
}
