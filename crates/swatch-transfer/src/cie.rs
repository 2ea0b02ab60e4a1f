//! CIE 1976 L*a*b* nonlinearity.
//!
//! The forward function compresses relative tristimulus values `t = X/Xn`
//! with a cube root, switching to a linear segment near black:
//!
//! ```text
//! f(t) = t^(1/3)               if t > 0.008856
//!      = 7.787 * t + 16/116    otherwise
//! ```
//!
//! The inverse tests the *cube* of its argument against the same threshold,
//! so the two branches select consistently on both sides of the breakpoint.

/// Forward breakpoint on relative tristimulus (`(6/29)^3` to 6 digits).
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear segment (`(29/6)^2 / 3` to 4 digits).
pub const KAPPA_SLOPE: f64 = 7.787;

/// Offset of the linear segment.
pub const OFFSET: f64 = 16.0 / 116.0;

/// Forward Lab companding `f(t)`.
///
/// # Example
///
/// ```rust
/// use swatch_transfer::cie::f;
///
/// assert_eq!(f(1.0), 1.0);
/// assert_eq!(f(0.0), 16.0 / 116.0);
/// ```
#[inline]
pub fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

/// Inverse Lab companding `f⁻¹(u)`.
#[inline]
pub fn f_inv(u: f64) -> f64 {
    let cube = u * u * u;
    if cube > EPSILON {
        cube
    } else {
        (u - OFFSET) / KAPPA_SLOPE
    }
}
