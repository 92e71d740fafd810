//! # GCodeSim Core
//!
//! Core types, error taxonomy, and constants shared by the GCodeSim crates.
//! Provides the geometric primitives used by the motion interpreter and the
//! error types surfaced by the parser, loader, and settings layers.

pub mod constants;
pub mod data;
pub mod error;
pub mod modes;

pub use data::{Bounds, Point2D, Point3D};
pub use error::{Error, GcodeError, Result};
pub use modes::CoordinateMode;
