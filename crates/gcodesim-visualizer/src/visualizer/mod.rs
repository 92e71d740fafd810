//! Toolpath resolution and playback
//!
//! This module provides:
//! - Segment geometry (rapid moves, lines, analytic arcs)
//! - Motion interpreter (commands to segments)
//! - Toolpath model with playback cursor
//! - Caller-side arc tessellation
//! - Toolpath statistics

pub mod interpreter;
pub mod segment;
pub mod stats;
pub mod tessellation;
pub mod toolpath;

pub use interpreter::{resolve_arc, step, unwrap_end_angle, MotionInterpreter};
pub use segment::Segment;
pub use stats::ToolpathStats;
pub use tessellation::{cutting_polylines, resolution_for_tolerance, tessellate, Polyline};
pub use toolpath::Toolpath;
