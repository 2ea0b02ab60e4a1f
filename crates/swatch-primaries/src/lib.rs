//! # swatch-primaries
//!
//! sRGB primaries, the fixed reference white, and the RGB/XYZ matrices.
//!
//! The pipeline uses exactly one RGB space (sRGB) and one white point (D65,
//! tabulated as `Xn, Yn, Zn = 95.047, 100, 108.883`). The forward matrix is the
//! published 7-digit sRGB/D65 matrix; the reverse matrix is its exact inverse,
//! computed rather than tabulated, so that RGB -> XYZ -> RGB is the identity to
//! double precision.
//!
//! # Usage
//!
//! ```rust
//! use swatch_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
//! use swatch_math::Vec3;
//!
//! let rgb = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = SRGB_TO_XYZ * rgb;
//! let back = *XYZ_TO_SRGB * xyz;
//! assert!((back.x - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `swatch-color` - RGB/XYZ and XYZ/Lab conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::sync::LazyLock;

use swatch_core::Xyz;
use swatch_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Three primaries and a white point, as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Reference white used by every XYZ <-> Lab conversion, Y scaled to 100.
pub const D65_WHITE: Xyz = Xyz::new(95.047, 100.0, 108.883);

/// sRGB to XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to sRGB matrix: the exact inverse of [`SRGB_TO_XYZ`].
pub static XYZ_TO_SRGB: LazyLock<Mat3> =
    LazyLock::new(|| SRGB_TO_XYZ.inverse().unwrap_or(Mat3::IDENTITY));

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Derives the RGB to XYZ matrix from chromaticities.
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for per-primary scale factors so RGB (1,1,1) maps to the white
/// 3. Scale each column
///
/// The pipeline itself uses the tabulated [`SRGB_TO_XYZ`]; this derivation is
/// kept to check the table against the primaries it comes from.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // S = M^-1 * W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Derives the XYZ to RGB matrix from chromaticities.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries).inverse().unwrap_or(Mat3::IDENTITY)
}
