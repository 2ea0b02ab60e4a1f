//! Field text -> validated color.
//!
//! All checks happen here, before any conversion runs. A rejected edit never
//! reaches the pipeline.

use swatch_color::ColorSet;
use swatch_core::{Channel, Cmyk, Lab, Representation, Rgb, ValidationError};

fn parse_number(channel: Channel, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => channel.validate(v),
        _ => Err(ValidationError::not_a_number(channel, text)),
    }
}

/// Parses and range-checks the field texts of one representation.
///
/// Values are returned in display units (CMYK in percent), in channel order.
///
/// # Errors
///
/// - [`ValidationError::WrongFieldCount`] if `fields` does not match the
///   representation's channel count
/// - [`ValidationError::NotANumber`] for empty, non-numeric or non-finite text
/// - [`ValidationError::OutOfRange`] for values outside the channel's domain
///
/// The first failing field wins.
pub fn parse_fields<S: AsRef<str>>(
    repr: Representation,
    fields: &[S],
) -> Result<Vec<f64>, ValidationError> {
    let channels = repr.channels();
    if fields.len() != channels.len() {
        return Err(ValidationError::WrongFieldCount {
            expected: channels.len(),
            got: fields.len(),
        });
    }

    channels
        .iter()
        .zip(fields)
        .map(|(&channel, text)| parse_number(channel, text.as_ref()))
        .collect()
}

/// Parses one representation's fields and derives the other two.
///
/// # Example
///
/// ```rust
/// use swatch_core::Representation;
/// use swatch_session::parse_color;
///
/// let set = parse_color(Representation::Cmyk, &["0", "100", "100", "0"]).unwrap();
/// assert_eq!(set.rgb.to_bytes(), [255, 0, 0]);
/// ```
pub fn parse_color<S: AsRef<str>>(
    repr: Representation,
    fields: &[S],
) -> Result<ColorSet, ValidationError> {
    let v = parse_fields(repr, fields)?;
    Ok(match repr {
        Representation::Cmyk => ColorSet::from_cmyk(Cmyk::from_percent([v[0], v[1], v[2], v[3]])),
        Representation::Lab => ColorSet::from_lab(Lab::new(v[0], v[1], v[2])),
        Representation::Rgb => ColorSet::from_rgb(Rgb::new(v[0], v[1], v[2])),
    })
}
