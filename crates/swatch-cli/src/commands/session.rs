//! Interactive session command.
//!
//! Reads one command per line:
//!
//! ```text
//! select cmyk|lab|rgb|0|1|2   switch the active field group
//! set <v1> <v2> ...           edit every field of the active group
//! hex <#rrggbb>               edit the palette color
//! show                        print fields and outputs
//! help                        list commands
//! quit                        leave (also end of input)
//! ```

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use swatch_core::Representation;
use swatch_session::{MemorySurface, Session};
use tracing::trace;

const HELP: &str = "\
commands:
  select cmyk|lab|rgb|0|1|2
  set <values...>
  hex <#rrggbb>
  show
  quit";

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Select(&'a str),
    Set(Vec<&'a str>),
    Hex(&'a str),
    Show,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<Command<'_>>> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let cmd = match (word.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("select", [name]) => Command::Select(*name),
        ("set", values) if !values.is_empty() => Command::Set(values.to_vec()),
        ("hex", [value]) => Command::Hex(*value),
        ("show", []) => Command::Show,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        _ => bail!("Unrecognised command: {line}"),
    };
    Ok(Some(cmd))
}

/// Runs the session on stdin/stdout.
pub fn run(json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl(stdin.lock(), stdout.lock(), json)
}

fn repl(input: impl BufRead, mut out: impl Write, json: bool) -> Result<()> {
    let mut surface = MemorySurface::new();
    let mut session = Session::new();
    session.attach(&mut surface);
    writeln!(out, "active: {}", session.active())?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        trace!(line = %line, "session input");

        let cmd = match parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match cmd {
            Command::Select(name) => match name.parse::<Representation>() {
                Ok(repr) => {
                    session.select(&mut surface, repr);
                    writeln!(out, "active: {repr}")?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Set(values) => {
                if let Ok(snapshot) = session.edit(&mut surface, values.as_slice()) {
                    super::write_snapshot(&mut out, snapshot, json)?;
                }
            }
            Command::Hex(value) => {
                if let Ok(snapshot) = session.edit_palette(&mut surface, value) {
                    super::write_snapshot(&mut out, snapshot, json)?;
                }
            }
            Command::Show => show(&mut out, &session, &surface)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }

        for alert in surface.take_alerts() {
            writeln!(out, "rejected: {alert}")?;
        }
    }
    Ok(())
}

fn show(out: &mut impl Write, session: &Session, surface: &MemorySurface) -> Result<()> {
    for group in Representation::ALL {
        let marker = if surface.is_visible(group) { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<4} [{}]  {}",
            group.name(),
            surface.fields(group).join(", "),
            surface.output(group)
        )?;
    }
    match session.snapshot() {
        Some(snapshot) => writeln!(out, "  hex  {}", snapshot.hex)?,
        None => writeln!(out, "  (no color yet)")?,
    }
    Ok(())
}
