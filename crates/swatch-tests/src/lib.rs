//! Integration tests for swatch crates.
//!
//! This crate contains end-to-end tests that drive the conversion pipeline
//! and the session together, the way a front end would.

#[cfg(test)]
mod golden;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use swatch_color::prelude::*;
    use swatch_core::ValidationError;
    use swatch_session::{FieldId, MemorySurface, Session, Snapshot};

    fn session() -> (Session, MemorySurface) {
        let session = Session::new();
        let mut surface = MemorySurface::new();
        session.attach(&mut surface);
        (session, surface)
    }

    /// Every byte triple survives RGB -> CMYK -> RGB within one unit.
    #[test]
    fn test_rgb_cmyk_rgb_cube() {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let rgb = Rgb::new(r as f64, g as f64, b as f64);
                    let back = cmyk_to_rgb(rgb_to_cmyk(rgb));
                    assert_abs_diff_eq!(back.r, rgb.r, epsilon = 1.0);
                    assert_abs_diff_eq!(back.g, rgb.g, epsilon = 1.0);
                    assert_abs_diff_eq!(back.b, rgb.b, epsilon = 1.0);
                }
            }
        }
    }

    /// Bytes -> hex -> bytes -> Lab -> bytes is lossless after rounding.
    #[test]
    fn test_hex_lab_hex_cube() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let hex = rgb_to_hex([r, g, b]);
                    let rgb = Rgb::from_bytes(hex_to_rgb(&hex).unwrap());
                    let back = lab_to_rgb(rgb_to_lab(rgb));
                    assert_eq!(rgb_to_hex(back.to_bytes()), hex);
                }
            }
        }
    }

    /// Editing any group and reading the rounded fields back reproduces the
    /// same display when fed into another group.
    #[test]
    fn test_display_is_stable_across_groups() {
        let (mut session, mut surface) = session();
        session.select(&mut surface, Representation::Rgb);
        let first = session.edit(&mut surface, &["51", "102", "153"]).unwrap().clone();

        // Re-entering the displayed RGB fields gives the identical snapshot.
        let rgb: Vec<String> = surface
            .fields(Representation::Rgb)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let again = session.edit(&mut surface, rgb.as_slice()).unwrap();
        assert_eq!(again, &first);

        // Re-entering the hex gives the same RGB bytes.
        let hex = first.hex.clone();
        let from_hex = session.edit_palette(&mut surface, &hex).unwrap();
        assert_eq!(from_hex.rgb, first.rgb);
    }

    #[test]
    fn test_scenario_red_all_groups() {
        for (repr, fields) in [
            (Representation::Rgb, vec!["255", "0", "0"]),
            (Representation::Cmyk, vec!["0", "100", "100", "0"]),
        ] {
            let (mut session, mut surface) = session();
            session.select(&mut surface, repr);
            let snap = session.edit(&mut surface, fields.as_slice()).unwrap();
            assert_eq!(snap.cmyk, [0, 100, 100, 0]);
            assert_eq!(snap.lab, [53, 80, 67]);
            assert_eq!(snap.rgb, [255, 0, 0]);
            assert_eq!(snap.hex, "#ff0000");
            assert_eq!(surface.palette(), "#ff0000");
        }
    }

    #[test]
    fn test_cmyk_150_percent_rejected() {
        let (mut session, mut surface) = session();
        session.select(&mut surface, Representation::Rgb);
        session.edit(&mut surface, &["10", "171", "3"]).unwrap();
        let shown = surface.clone();

        session.select(&mut surface, Representation::Cmyk);
        let err = session.edit(&mut surface, &["150", "0", "0", "0"]).unwrap_err();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::out_of_range(
                swatch_core::Channel::Cyan,
                150.0
            ))
        );

        for group in Representation::ALL {
            assert_eq!(surface.fields(group), shown.fields(group));
            assert_eq!(surface.output(group), shown.output(group));
        }
        assert_eq!(surface.palette(), "#0aab03");
        assert_eq!(surface.alerts().len(), 1);
    }

    #[test]
    fn test_field_handles_cover_every_written_field() {
        let (mut session, mut surface) = session();
        session.edit_palette(&mut surface, "#336699").unwrap();
        for group in Representation::ALL {
            for field in FieldId::all_for(group) {
                assert!(!surface.field(field).is_empty(), "{field} was not written");
            }
        }
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let (mut session, mut surface) = session();
        session.select(&mut surface, Representation::Lab);
        let snap = session.edit(&mut surface, &["30", "60", "-90"]).unwrap().clone();

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"source\":\"lab\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
