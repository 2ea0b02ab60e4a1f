//! CLI command implementations

pub mod convert;
pub mod session;

use anyhow::{Context, Result};
use std::io::Write;
use swatch_core::Representation;
use swatch_session::Snapshot;

/// Writes a snapshot as text lines or as one JSON document.
pub fn write_snapshot(out: &mut impl Write, snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        let doc = serde_json::to_string_pretty(snapshot).context("Failed to encode JSON")?;
        writeln!(out, "{doc}")?;
        return Ok(());
    }

    for repr in Representation::ALL {
        writeln!(out, "{}", snapshot.output_text(repr))?;
    }
    writeln!(out, "{}", snapshot.hex)?;
    if snapshot.out_of_gamut {
        writeln!(out, "(outside sRGB, clamped for display)")?;
    }
    Ok(())
}
