//! # swatch-core
//!
//! Core value types for the swatch color converter.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Rgb`], [`Cmyk`], [`Xyz`], [`Lab`] - immutable color triples/quads
//! - [`Representation`] - identifies one of the three editable representations
//! - [`Channel`] and [`Domain`] - per-channel valid ranges used for validation
//! - [`Error`], [`ValidationError`] - error types
//!
//! ## Crate Structure
//!
//! ```text
//! swatch-core (this crate)
//!    ^
//!    |
//!    +-- swatch-math (matrices)
//!    +-- swatch-transfer (companding curves)
//!    +-- swatch-primaries (sRGB matrix, reference white)
//!    +-- swatch-color (conversion pipeline)
//!    +-- swatch-session (UI orchestration)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for the value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod repr;
pub mod value;

pub use error::*;
pub use repr::*;
pub use value::*;

/// Prelude module for convenient imports.
///
/// ```
/// use swatch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::repr::{Channel, Domain, Representation};
    pub use crate::value::{Cmyk, Lab, Rgb, Xyz};
}
