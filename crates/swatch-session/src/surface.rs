//! The UI the session drives.

use std::collections::HashMap;

use swatch_core::Representation;

use crate::field::FieldId;

/// Everything the session needs from a user interface.
///
/// Writes are fire-and-forget; a surface that cannot show something simply
/// drops it.
pub trait Surface {
    /// Replaces the text of an editable numeric field.
    fn set_field(&mut self, field: FieldId, text: &str);

    /// Replaces a read-only output line (`cmyk(..)`, `lab(..)`, `rgb(..)`).
    fn set_output(&mut self, output: Representation, text: &str);

    /// Replaces the palette field and swatch with a `#rrggbb` color.
    fn set_palette(&mut self, hex: &str);

    /// Shows or hides a representation's field group.
    fn set_group_visible(&mut self, group: Representation, visible: bool);

    /// Tells the user an input was rejected.
    fn alert(&mut self, message: &str);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_field(&mut self, field: FieldId, text: &str) {
        (**self).set_field(field, text);
    }

    fn set_output(&mut self, output: Representation, text: &str) {
        (**self).set_output(output, text);
    }

    fn set_palette(&mut self, hex: &str) {
        (**self).set_palette(hex);
    }

    fn set_group_visible(&mut self, group: Representation, visible: bool) {
        (**self).set_group_visible(group, visible);
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}

/// Headless surface that keeps the last value written to every slot.
///
/// Used by the terminal front end and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    fields: HashMap<FieldId, String>,
    outputs: [String; 3],
    palette: String,
    visible: [bool; 3],
    alerts: Vec<String>,
    writes: usize,
}

impl MemorySurface {
    /// Empty surface, all groups hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field (empty if never written).
    pub fn field(&self, field: FieldId) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Current texts of a group's fields, in channel order.
    pub fn fields(&self, group: Representation) -> Vec<&str> {
        FieldId::all_for(group).map(|f| self.field(f)).collect()
    }

    /// Current text of an output line.
    pub fn output(&self, output: Representation) -> &str {
        &self.outputs[output.index()]
    }

    /// Current palette color.
    pub fn palette(&self) -> &str {
        &self.palette
    }

    /// Whether a group is currently shown.
    pub fn is_visible(&self, group: Representation) -> bool {
        self.visible[group.index()]
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Removes and returns pending alerts.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Number of field, output and palette writes received.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Surface for MemorySurface {
    fn set_field(&mut self, field: FieldId, text: &str) {
        self.writes += 1;
        self.fields.insert(field, text.to_owned());
    }

    fn set_output(&mut self, output: Representation, text: &str) {
        self.writes += 1;
        self.outputs[output.index()] = text.to_owned();
    }

    fn set_palette(&mut self, hex: &str) {
        self.writes += 1;
        self.palette = hex.to_owned();
    }

    fn set_group_visible(&mut self, group: Representation, visible: bool) {
        self.visible[group.index()] = visible;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
