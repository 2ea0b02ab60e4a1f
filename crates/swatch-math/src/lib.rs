//! # swatch-math
//!
//! Linear algebra for the swatch color pipeline.
//!
//! - [`Mat3`] - 3x3 matrices for the RGB/XYZ transform
//! - [`Vec3`] - 3-component vectors for RGB/XYZ triples
//!
//! # Design
//!
//! Everything is `f64`: the pipeline has to round-trip RGB -> XYZ -> RGB to
//! within 1e-6, which single precision cannot guarantee after a matrix
//! inverse. The types wrap [`glam`]'s double-precision `DMat3`/`DVec3` for the
//! heavier operations (inversion) while keeping the row-major, column-vector
//! convention of the published color matrices:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use swatch_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Used By
//!
//! - `swatch-primaries` - RGB/XYZ matrix generation
//! - `swatch-color` - the conversion pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
