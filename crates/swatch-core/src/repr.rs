//! Representations, channels and their valid domains.
//!
//! A [`Representation`] is one of the three user-editable color models.
//! Each has a fixed, ordered list of [`Channel`]s, and every channel has a
//! [`Domain`] expressed in the units the user types (CMYK in percent).
//!
//! | Representation | Channels | Domain |
//! |----------------|----------|--------|
//! | CMYK | C, M, Y, K | [0, 100] % |
//! | Lab | L, a, b | L in [0, 100], a/b in [-128, 127] |
//! | RGB | R, G, B | [0, 255] |

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Inclusive numeric range for one channel, in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Domain {
    /// Percentage range used by the CMYK fields.
    pub const PERCENT: Self = Self::new(0.0, 100.0);
    /// Lab lightness.
    pub const LIGHTNESS: Self = Self::new(0.0, 100.0);
    /// Lab a/b opponent axes.
    pub const OPPONENT: Self = Self::new(-128.0, 127.0);
    /// 8-bit RGB channel.
    pub const BYTE: Self = Self::new(0.0, 255.0);

    /// Creates a domain.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `v` lies in the range. NaN is never contained.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamps `v` into the range.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// One of the three user-editable color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Representation {
    /// Subtractive CMYK, entered as percentages.
    #[default]
    Cmyk,
    /// CIE L*a*b*.
    Lab,
    /// 8-bit device RGB.
    Rgb,
}

impl Representation {
    /// All representations in selector order.
    pub const ALL: [Self; 3] = [Self::Cmyk, Self::Lab, Self::Rgb];

    /// Lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cmyk => "cmyk",
            Self::Lab => "lab",
            Self::Rgb => "rgb",
        }
    }

    /// Position in the selector control.
    pub const fn index(self) -> usize {
        match self {
            Self::Cmyk => 0,
            Self::Lab => 1,
            Self::Rgb => 2,
        }
    }

    /// Maps a selector index back to a representation.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Cmyk),
            1 => Some(Self::Lab),
            2 => Some(Self::Rgb),
            _ => None,
        }
    }

    /// Channels in field order.
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            Self::Cmyk => &[Channel::Cyan, Channel::Magenta, Channel::Yellow, Channel::Key],
            Self::Lab => &[Channel::Lightness, Channel::A, Channel::B],
            Self::Rgb => &[Channel::Red, Channel::Green, Channel::Blue],
        }
    }

    /// Number of editable fields.
    #[inline]
    pub const fn channel_count(self) -> usize {
        self.channels().len()
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = ValidationError;

    /// Accepts a name (case-insensitive) or a selector index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| ValidationError::UnknownRepresentation(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownRepresentation(s.to_string()))
    }
}

/// A single editable channel of a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// CMYK cyan
    Cyan,
    /// CMYK magenta
    Magenta,
    /// CMYK yellow
    Yellow,
    /// CMYK key (black)
    Key,
    /// Lab L*
    Lightness,
    /// Lab a*
    A,
    /// Lab b*
    B,
    /// RGB red
    Red,
    /// RGB green
    Green,
    /// RGB blue
    Blue,
}

impl Channel {
    /// Representation this channel belongs to.
    pub const fn representation(self) -> Representation {
        match self {
            Self::Cyan | Self::Magenta | Self::Yellow | Self::Key => Representation::Cmyk,
            Self::Lightness | Self::A | Self::B => Representation::Lab,
            Self::Red | Self::Green | Self::Blue => Representation::Rgb,
        }
    }

    /// Valid range in display units.
    pub const fn domain(self) -> Domain {
        match self {
            Self::Cyan | Self::Magenta | Self::Yellow | Self::Key => Domain::PERCENT,
            Self::Lightness => Domain::LIGHTNESS,
            Self::A | Self::B => Domain::OPPONENT,
            Self::Red | Self::Green | Self::Blue => Domain::BYTE,
        }
    }

    /// Position within the representation's field group.
    pub fn index(self) -> usize {
        self.representation()
            .channels()
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    /// Short label as shown next to the field.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cyan => "C",
            Self::Magenta => "M",
            Self::Yellow => "Y",
            Self::Key => "K",
            Self::Lightness => "L",
            Self::A => "a",
            Self::B => "b",
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }

    /// Checks `value` against the domain.
    pub fn validate(self, value: f64) -> Result<f64, ValidationError> {
        if self.domain().contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::out_of_range(self, value))
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.representation(), self.label())
    }
}
