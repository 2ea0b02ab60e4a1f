//! # swatch-transfer
//!
//! Scalar nonlinear curves used by the swatch pipeline.
//!
//! | Module | Curve | Used for |
//! |--------|-------|----------|
//! | [`srgb`] | IEC 61966-2-1 companding | RGB <-> linear RGB |
//! | [`cie`] | CIE 1976 L*a*b* `f(t)` | XYZ <-> Lab |
//!
//! # Usage
//!
//! ```rust
//! use swatch_transfer::{cie, srgb};
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! let t = cie::f_inv(cie::f(0.25));
//! assert!((t - 0.25).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `swatch-color` - RGB/XYZ and XYZ/Lab conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie;
pub mod srgb;

pub use cie::{f as lab_f, f_inv as lab_f_inv};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
