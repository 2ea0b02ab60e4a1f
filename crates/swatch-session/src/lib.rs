//! # swatch-session
//!
//! Keeps the CMYK, Lab and RGB views of a single color in sync.
//!
//! A [`Session`] holds the active representation and the last values it
//! displayed. Every user action goes through it:
//!
//! - [`Session::edit`] parses and validates the active group's fields, runs the
//!   pipeline and pushes the rounded results to every output and field
//! - [`Session::edit_palette`] does the same starting from a `#rrggbb` string
//! - [`Session::select`] only toggles which field group is visible
//!
//! The UI itself is abstracted behind the [`Surface`] trait, so the same
//! session drives a terminal, a test recorder or a real widget toolkit.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Representation;
//! use swatch_session::{MemorySurface, Session};
//!
//! let mut surface = MemorySurface::new();
//! let mut session = Session::new();
//!
//! session.select(&mut surface, Representation::Rgb);
//! let snapshot = session.edit(&mut surface, &["255", "0", "0"]).unwrap();
//! assert_eq!(snapshot.hex, "#ff0000");
//! assert_eq!(surface.output(Representation::Lab), "lab(53, 80, 67)");
//!
//! // Out-of-range input is rejected and nothing changes.
//! session.select(&mut surface, Representation::Cmyk);
//! assert!(session.edit(&mut surface, &["150", "0", "0", "0"]).is_err());
//! assert_eq!(surface.output(Representation::Rgb), "rgb(255, 0, 0)");
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - derive `Serialize`/`Deserialize` on [`Snapshot`]

#![warn(missing_docs)]

mod field;
mod input;
mod session;
mod snapshot;
mod surface;

pub use field::FieldId;
pub use input::{parse_color, parse_fields};
pub use session::Session;
pub use snapshot::Snapshot;
pub use surface::{MemorySurface, Surface};
