//! One-shot conversion commands (`from-rgb`, `from-cmyk`, `from-lab`, `from-hex`).

use anyhow::{Context, Result};
use swatch_core::Representation;
use swatch_session::{MemorySurface, Session};
use tracing::debug;

/// Converts channel values given in `repr` and prints every representation.
pub fn run(repr: Representation, values: &[String], json: bool) -> Result<()> {
    debug!(%repr, ?values, "convert");
    let mut surface = MemorySurface::new();
    let mut session = Session::new();
    session.select(&mut surface, repr);
    let snapshot = session
        .edit(&mut surface, values)
        .with_context(|| format!("Invalid {repr} input"))?;
    super::write_snapshot(&mut std::io::stdout().lock(), snapshot, json)
}

/// Converts a hex color and prints every representation.
pub fn run_hex(hex: &str, json: bool) -> Result<()> {
    debug!(hex, "convert");
    let mut surface = MemorySurface::new();
    let mut session = Session::new();
    let snapshot = session
        .edit_palette(&mut surface, hex)
        .context("Invalid hex color")?;
    super::write_snapshot(&mut std::io::stdout().lock(), snapshot, json)
}
