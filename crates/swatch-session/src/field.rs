//! Typed handles for the editable fields.

use std::fmt;

use swatch_core::{Channel, Representation};

/// Identifies one editable numeric field: a channel within its group.
///
/// Surfaces map these to whatever widget they own; the session never builds
/// field names out of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    /// Field group (one per representation)
    pub group: Representation,
    /// Channel shown by the field
    pub channel: Channel,
}

impl FieldId {
    /// The field showing `channel`, in its own representation's group.
    #[inline]
    pub const fn new(channel: Channel) -> Self {
        Self {
            group: channel.representation(),
            channel,
        }
    }

    /// All fields of `group`, in channel order.
    pub fn all_for(group: Representation) -> impl Iterator<Item = FieldId> {
        group.channels().iter().copied().map(Self::new)
    }

    /// Position of the field inside its group.
    #[inline]
    pub fn index(self) -> usize {
        self.channel.index()
    }
}

impl From<Channel> for FieldId {
    fn from(channel: Channel) -> Self {
        Self::new(channel)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.channel)
    }
}
