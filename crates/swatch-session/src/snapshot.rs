//! Rounded, display-ready view of a [`ColorSet`].

use swatch_color::{rgb_to_hex, ColorSet};
use swatch_core::{Channel, Cmyk, Lab, Representation, Rgb};

/// What the user sees after an edit.
///
/// CMYK is in whole percent, Lab and RGB in whole units. Values that the
/// pipeline pushed outside a channel's domain (for example Lab colors with no
/// sRGB equivalent) are clamped here and flagged with `out_of_gamut`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// C, M, Y, K in percent
    pub cmyk: [i64; 4],
    /// L, a, b
    pub lab: [i64; 3],
    /// R, G, B
    pub rgb: [u8; 3],
    /// `#rrggbb` of `rgb`
    pub hex: String,
    /// Some channel had to be clamped to fit its domain
    pub out_of_gamut: bool,
    /// Representation the user edited
    pub source: Representation,
}

/// Rounds to the nearest integer, clamps into the channel's domain and
/// reports whether clamping changed anything.
fn fit(channel: Channel, value: f64) -> (i64, bool) {
    let rounded = value.round();
    let clamped = channel.domain().clamp(rounded);
    (clamped as i64, clamped != rounded)
}

fn fit_all<const N: usize>(
    channels: &[Channel],
    values: [f64; N],
    clamped: &mut bool,
) -> [i64; N] {
    let mut out = [0; N];
    for (i, (&channel, value)) in channels.iter().zip(values).enumerate() {
        let (v, c) = fit(channel, value);
        out[i] = v;
        *clamped |= c;
    }
    out
}

impl Snapshot {
    /// Rounds and clamps every channel of `set` for display.
    pub fn from_set(set: &ColorSet) -> Self {
        let mut out_of_gamut = false;
        let cmyk = fit_all(
            Representation::Cmyk.channels(),
            set.cmyk.to_percent(),
            &mut out_of_gamut,
        );
        let lab = fit_all(
            Representation::Lab.channels(),
            set.lab.to_array(),
            &mut out_of_gamut,
        );
        let rgb = fit_all(
            Representation::Rgb.channels(),
            set.rgb.to_array(),
            &mut out_of_gamut,
        )
        .map(|v| v as u8);

        Self {
            cmyk,
            lab,
            rgb,
            hex: rgb_to_hex(rgb),
            out_of_gamut,
            source: set.source,
        }
    }

    /// Values for a group's editable fields, in channel order.
    pub fn field_values(&self, group: Representation) -> Vec<i64> {
        match group {
            Representation::Cmyk => self.cmyk.to_vec(),
            Representation::Lab => self.lab.to_vec(),
            Representation::Rgb => self.rgb.iter().map(|&v| i64::from(v)).collect(),
        }
    }

    /// Read-only output line for a representation.
    pub fn output_text(&self, output: Representation) -> String {
        match output {
            Representation::Cmyk => {
                Cmyk::from_percent(self.cmyk.map(|v| v as f64)).to_string()
            }
            Representation::Lab => Lab::from_array(self.lab.map(|v| v as f64)).to_string(),
            Representation::Rgb => Rgb::from_bytes(self.rgb).to_string(),
        }
    }
}
