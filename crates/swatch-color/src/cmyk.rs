//! RGB <-> CMYK.
//!
//! Direct algebraic conversion with no intermediate space and no ink model.
//!
//! ```text
//! calc_i = 1 - v_i / 255
//! k      = min(calc_r, calc_g, calc_b)
//! c,m,y  = (calc_i - k) / (1 - k)
//! ```
//!
//! Black would divide 0 by 0, so `(0, 0, 0)` maps straight to `(0, 0, 0, 1)`.

use swatch_core::{Cmyk, Rgb};
use swatch_math::Vec3;

/// Converts RGB in [0, 255] to CMYK fractions.
///
/// # Example
///
/// ```rust
/// use swatch_color::rgb_to_cmyk;
/// use swatch_core::{Cmyk, Rgb};
///
/// assert_eq!(rgb_to_cmyk(Rgb::BLACK), Cmyk::BLACK);
/// assert_eq!(rgb_to_cmyk(Rgb::new(255.0, 0.0, 0.0)), Cmyk::new(0.0, 1.0, 1.0, 0.0));
/// ```
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb == Rgb::BLACK {
        return Cmyk::BLACK;
    }

    let calc = Vec3::from_array(rgb.to_array()).map(|v| 1.0 - v / 255.0);
    let k = calc.min_element();
    let ink = 1.0 - k;

    // Only reachable with out-of-gamut input darker than black.
    if ink <= 0.0 {
        return Cmyk::new(0.0, 0.0, 0.0, k);
    }

    let cmy = calc.map(|v| (v - k) / ink);
    Cmyk::new(cmy.x, cmy.y, cmy.z, k)
}

/// Converts CMYK fractions to RGB in [0, 255].
///
/// Inputs are expected in [0, 1]; the `min(1, ..)` term is the only limit
/// applied.
///
/// # Example
///
/// ```rust
/// use swatch_color::cmyk_to_rgb;
/// use swatch_core::{Cmyk, Rgb};
///
/// assert_eq!(cmyk_to_rgb(Cmyk::BLACK), Rgb::BLACK);
/// assert_eq!(cmyk_to_rgb(Cmyk::default()), Rgb::WHITE);
/// ```
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = cmyk.k;
    let channel = |v: f64| 255.0 - (v * (1.0 - k) + k).min(1.0) * 255.0;
    Rgb::new(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}
