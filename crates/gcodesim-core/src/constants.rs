//! Shared numeric constants.

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Tolerance used when comparing angles and lengths.
pub const EPSILON: f64 = 1e-9;

/// Default number of vertices used when a caller samples an arc.
pub const DEFAULT_ARC_SEGMENTS: u32 = 64;

/// Comment delimiter of the motion program format.
pub const COMMENT_CHAR: char = ';';
