//! The session state machine.

use swatch_color::{hex_to_color, ColorSet};
use swatch_core::{Representation, Result, ValidationError};
use tracing::{debug, trace, warn};

use crate::field::FieldId;
use crate::input::parse_color;
use crate::snapshot::Snapshot;
use crate::surface::Surface;

/// Active field group plus the last values shown to the user.
///
/// State transitions:
///
/// ```text
///             select(X)
///   [active A] ---------> [active X]     visibility only
///
///             edit(fields) ok
///   [active A] ---------> [active A]     snapshot replaced, surface updated
///
///             edit(fields) rejected
///   [active A] ---------> [active A]     alert only, nothing else touched
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    active: Representation,
    snapshot: Option<Snapshot>,
}

impl Session {
    /// New session with the CMYK group active and nothing displayed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active representation.
    #[inline]
    pub fn active(&self) -> Representation {
        self.active
    }

    /// Values last pushed to the surface, if any edit has succeeded.
    #[inline]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Shows the active group and hides the others.
    ///
    /// Call once after creating the surface.
    pub fn attach(&self, surface: &mut impl Surface) {
        for group in Representation::ALL {
            surface.set_group_visible(group, group == self.active);
        }
    }

    /// Makes `repr` the active group. No values are recomputed.
    pub fn select(&mut self, surface: &mut impl Surface, repr: Representation) {
        debug!(from = %self.active, to = %repr, "select");
        if repr != self.active {
            surface.set_group_visible(self.active, false);
        }
        surface.set_group_visible(repr, true);
        self.active = repr;
    }

    /// Selects by selector position (0 CMYK, 1 Lab, 2 RGB).
    ///
    /// An unknown index is alerted and leaves the selection unchanged.
    pub fn select_index(&mut self, surface: &mut impl Surface, index: usize) -> Result<()> {
        match Representation::from_index(index) {
            Some(repr) => {
                self.select(surface, repr);
                Ok(())
            }
            None => Err(self.reject(
                surface,
                ValidationError::UnknownRepresentation(index.to_string()),
            )),
        }
    }

    /// Handles an edit of the active group's fields.
    ///
    /// `fields` are the raw texts of every field in the group, in channel
    /// order. On success the derived representations, the hex swatch and all
    /// editable fields are rewritten from the new [`Snapshot`]. On failure the
    /// user is alerted and the surface is otherwise left untouched.
    pub fn edit<S: AsRef<str>>(
        &mut self,
        surface: &mut impl Surface,
        fields: &[S],
    ) -> Result<&Snapshot> {
        trace!(group = %self.active, count = fields.len(), "edit");
        match parse_color(self.active, fields) {
            Ok(set) => Ok(self.show(surface, &set)),
            Err(e) => Err(self.reject(surface, e)),
        }
    }

    /// Handles an edit of the palette field.
    ///
    /// The hex color is treated as an RGB edit; the active group is unchanged.
    pub fn edit_palette(&mut self, surface: &mut impl Surface, hex: &str) -> Result<&Snapshot> {
        trace!(hex, "edit_palette");
        match hex_to_color(hex) {
            Ok(rgb) => Ok(self.show(surface, &ColorSet::from_rgb(rgb))),
            Err(e) => Err(self.reject(surface, e)),
        }
    }

    /// Rewrites every output and field from the current snapshot.
    ///
    /// Does nothing before the first successful edit.
    pub fn refresh(&self, surface: &mut impl Surface) {
        if let Some(snapshot) = &self.snapshot {
            push(surface, snapshot);
        }
    }

    fn show(&mut self, surface: &mut impl Surface, set: &ColorSet) -> &Snapshot {
        let snapshot = Snapshot::from_set(set);
        if snapshot.out_of_gamut {
            warn!(
                source = %set.source,
                rgb = %set.rgb,
                "color is outside sRGB, displayed values are clamped"
            );
        }
        debug!(source = %snapshot.source, hex = %snapshot.hex, "recomputed");
        push(surface, &snapshot);
        self.snapshot.insert(snapshot)
    }

    fn reject(&self, surface: &mut impl Surface, err: ValidationError) -> swatch_core::Error {
        debug!(group = %self.active, error = %err, "input rejected");
        surface.alert(&err.to_string());
        err.into()
    }
}

fn push(surface: &mut impl Surface, snapshot: &Snapshot) {
    for repr in Representation::ALL {
        surface.set_output(repr, &snapshot.output_text(repr));
    }
    surface.set_palette(&snapshot.hex);
    for group in Representation::ALL {
        for (field, value) in FieldId::all_for(group).zip(snapshot.field_values(group)) {
            surface.set_field(field, &value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn setup() -> (Session, MemorySurface) {
        let session = Session::new();
        let mut surface = MemorySurface::new();
        session.attach(&mut surface);
        (session, surface)
    }

    #[test]
    fn test_starts_on_cmyk() {
        let (session, surface) = setup();
        assert_eq!(session.active(), Representation::Cmyk);
        assert!(session.snapshot().is_none());
        assert!(surface.is_visible(Representation::Cmyk));
        assert!(!surface.is_visible(Representation::Lab));
        assert!(!surface.is_visible(Representation::Rgb));
    }

    #[test]
    fn test_rgb_red_scenario() {
        let (mut session, mut surface) = setup();
        session.select(&mut surface, Representation::Rgb);
        session.edit(&mut surface, &["255", "0", "0"]).unwrap();

        assert_eq!(surface.output(Representation::Cmyk), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(surface.output(Representation::Lab), "lab(53, 80, 67)");
        assert_eq!(surface.output(Representation::Rgb), "rgb(255, 0, 0)");
        assert_eq!(surface.palette(), "#ff0000");
        assert_eq!(surface.fields(Representation::Cmyk), vec!["0", "100", "100", "0"]);
        assert_eq!(surface.fields(Representation::Lab), vec!["53", "80", "67"]);
        assert_eq!(surface.fields(Representation::Rgb), vec!["255", "0", "0"]);
    }

    #[test]
    fn test_edited_group_gets_rounded_values() {
        let (mut session, mut surface) = setup();
        session.select(&mut surface, Representation::Rgb);
        session.edit(&mut surface, &["10.4", "20.6", " 30 "]).unwrap();
        assert_eq!(surface.fields(Representation::Rgb), vec!["10", "21", "30"]);
    }

    #[test]
    fn test_rejection_keeps_prior_display() {
        let (mut session, mut surface) = setup();
        session.edit(&mut surface, &["0", "100", "100", "0"]).unwrap();
        let before = session.snapshot().cloned();
        let writes = surface.writes();

        let err = session.edit(&mut surface, &["150", "0", "0", "0"]).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.snapshot().cloned(), before);
        assert_eq!(surface.writes(), writes);
        assert_eq!(surface.alerts().len(), 1);
        assert!(surface.alerts()[0].contains("150"));
        assert_eq!(surface.output(Representation::Rgb), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_rejection_before_any_edit() {
        let (mut session, mut surface) = setup();
        assert!(session.edit(&mut surface, &["x", "0", "0", "0"]).is_err());
        assert!(session.snapshot().is_none());
        assert_eq!(surface.writes(), 0);
    }

    #[test]
    fn test_select_does_not_recompute() {
        let (mut session, mut surface) = setup();
        session.edit(&mut surface, &["0", "0", "0", "100"]).unwrap();
        let writes = surface.writes();

        session.select(&mut surface, Representation::Lab);
        assert_eq!(session.active(), Representation::Lab);
        assert!(surface.is_visible(Representation::Lab));
        assert!(!surface.is_visible(Representation::Cmyk));
        assert_eq!(surface.writes(), writes);

        // Same group again keeps it visible
        session.select(&mut surface, Representation::Lab);
        assert!(surface.is_visible(Representation::Lab));
    }

    #[test]
    fn test_select_index() {
        let (mut session, mut surface) = setup();
        session.select_index(&mut surface, 2).unwrap();
        assert_eq!(session.active(), Representation::Rgb);

        assert!(session.select_index(&mut surface, 7).is_err());
        assert_eq!(session.active(), Representation::Rgb);
        assert_eq!(surface.alerts().len(), 1);
    }

    #[test]
    fn test_edit_uses_active_group() {
        let (mut session, mut surface) = setup();
        session.select(&mut surface, Representation::Lab);
        // four fields are wrong for Lab
        assert!(session.edit(&mut surface, &["0", "0", "0", "0"]).is_err());
        let snap = session.edit(&mut surface, &["100", "0", "0"]).unwrap();
        assert_eq!(snap.source, Representation::Lab);
        assert_eq!(snap.rgb, [255, 255, 255]);
    }

    #[test]
    fn test_palette_edit() {
        let (mut session, mut surface) = setup();
        let snap = session.edit_palette(&mut surface, "#FF0000").unwrap();
        assert_eq!(snap.cmyk, [0, 100, 100, 0]);
        assert_eq!(snap.source, Representation::Rgb);
        assert_eq!(surface.palette(), "#ff0000");
        assert_eq!(session.active(), Representation::Cmyk);

        let writes = surface.writes();
        assert!(session.edit_palette(&mut surface, "#ff00").is_err());
        assert_eq!(surface.writes(), writes);
        assert_eq!(surface.palette(), "#ff0000");
    }

    #[test]
    fn test_out_of_gamut_flag() {
        let (mut session, mut surface) = setup();
        session.select(&mut surface, Representation::Lab);
        let snap = session.edit(&mut surface, &["50", "-128", "127"]).unwrap();
        assert!(snap.out_of_gamut);
        assert_eq!(surface.fields(Representation::Lab), vec!["50", "-128", "127"]);
    }

    #[test]
    fn test_refresh_replays_snapshot() {
        let (mut session, mut surface) = setup();
        session.edit(&mut surface, &["0", "100", "100", "0"]).unwrap();

        let mut fresh = MemorySurface::new();
        session.refresh(&mut fresh);
        assert_eq!(fresh.palette(), "#ff0000");
        assert_eq!(fresh.output(Representation::Lab), "lab(53, 80, 67)");
    }
}
