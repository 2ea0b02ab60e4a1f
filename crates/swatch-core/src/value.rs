//! Color value types.
//!
//! All values are immutable, `Copy` tuples of `f64` in the pipeline's internal
//! units:
//!
//! - [`Rgb`]: each channel in [0, 255], gamma-encoded sRGB
//! - [`Cmyk`]: each channel in [0, 1] (the UI multiplies by 100)
//! - [`Xyz`]: CIE tristimulus scaled so Y is in [0, 100]
//! - [`Lab`]: L in [0, 100], a/b roughly in [-128, 127]
//!
//! Out-of-gamut results are represented as-is; nothing here clamps.
//!
//! The `Display` impls produce the read-only output strings shown to the
//! user, rounding each channel to the nearest integer in display units:
//!
//! ```rust
//! use swatch_core::{Cmyk, Lab, Rgb};
//!
//! assert_eq!(Rgb::new(255.0, 0.0, 0.0).to_string(), "rgb(255, 0, 0)");
//! assert_eq!(Cmyk::new(0.0, 1.0, 1.0, 0.0).to_string(), "cmyk(0%, 100%, 100%, 0%)");
//! assert_eq!(Lab::new(53.24, 80.09, 67.2).to_string(), "lab(53, 80, 67)");
//! ```

use std::fmt;

/// Rounds to the nearest integer for display, half away from zero.
#[inline]
fn display_int(v: f64) -> i64 {
    v.round() as i64
}

/// Device RGB, channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Creates a new RGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates from an array `[r, g, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates from 8-bit channels.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0] as f64, bytes[1] as f64, bytes[2] as f64)
    }

    /// Rounds and clamps each channel to a byte.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        self.to_array().map(|v| v.round().clamp(0.0, 255.0) as u8)
    }

    /// Whether every channel lies in [0, 255].
    #[inline]
    pub fn in_gamut(self) -> bool {
        self.to_array().iter().all(|v| (0.0..=255.0).contains(v))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            display_int(self.r),
            display_int(self.g),
            display_int(self.b)
        )
    }
}

/// Subtractive CMYK, channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Key (black)
    pub k: f64,
}

impl Cmyk {
    /// Pure black (0, 0, 0, 1).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new CMYK value from fractions.
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Creates from an array `[c, m, y, k]` of fractions.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[c, m, y, k]` of fractions.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Creates from percentages in [0, 100].
    #[inline]
    pub fn from_percent(p: [f64; 4]) -> Self {
        Self::from_array(p.map(|v| v / 100.0))
    }

    /// Converts to percentages.
    #[inline]
    pub fn to_percent(self) -> [f64; 4] {
        self.to_array().map(|v| v * 100.0)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, m, y, k] = self.to_percent().map(display_int);
        write!(f, "cmyk({c}%, {m}%, {y}%, {k}%)")
    }
}

/// CIE XYZ tristimulus, Y in [0, 100] under the reference white.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X
    pub x: f64,
    /// Y (luminance)
    pub y: f64,
    /// Z
    pub z: f64,
}

impl Xyz {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyz({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, [0, 100]
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Creates a new Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Creates from an array `[l, a, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array `[l, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [l, a, b] = self.to_array().map(display_int);
        write!(f, "lab({l}, {a}, {b})")
    }
}
