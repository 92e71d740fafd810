//! Resolved toolpath geometry

use gcodesim_core::{Point2D, Point3D};
use serde::{Deserialize, Serialize};

/// One resolved motion
///
/// Arcs are kept analytic (center, radius, angles); sampling them into
/// vertices is up to the caller, see [`super::tessellation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Rapid repositioning; updates position, not drawn as a path
    Move { to: Point3D },
    /// Straight traversal
    Line { from: Point3D, to: Point3D },
    /// Circular interpolation in the XY plane at constant Z
    ///
    /// Angles are radians; `end_angle - start_angle` is negative for
    /// clockwise arcs and positive for counter-clockwise ones.
    Arc {
        center: Point2D,
        radius: f64,
        z: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
}

impl Segment {
    /// Signed angular sweep of an arc, `None` for other segments
    pub fn sweep(&self) -> Option<f64> {
        match self {
            Segment::Arc {
                start_angle,
                end_angle,
                ..
            } => Some(end_angle - start_angle),
            _ => None,
        }
    }

    /// Point on an arc at the given angle
    fn arc_point(center: &Point2D, radius: f64, z: f64, angle: f64) -> Point3D {
        Point3D::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
            z,
        )
    }

    /// Where the segment starts, if it is known from the segment alone
    pub fn start_point(&self) -> Option<Point3D> {
        match self {
            Segment::Move { .. } => None,
            Segment::Line { from, .. } => Some(*from),
            Segment::Arc {
                center,
                radius,
                z,
                start_angle,
                ..
            } => Some(Self::arc_point(center, *radius, *z, *start_angle)),
        }
    }

    /// Where the segment ends
    ///
    /// For arcs this is the point on the circle at `end_angle`.
    pub fn end_point(&self) -> Point3D {
        match self {
            Segment::Move { to } | Segment::Line { to, .. } => *to,
            Segment::Arc {
                center,
                radius,
                z,
                end_angle,
                ..
            } => Self::arc_point(center, *radius, *z, *end_angle),
        }
    }

    /// True for segments that represent material traversal (lines and arcs)
    pub fn is_cutting(&self) -> bool {
        !matches!(self, Segment::Move { .. })
    }

    /// True for zero-radius arcs
    pub fn is_degenerate_arc(&self) -> bool {
        matches!(self, Segment::Arc { radius, .. } if *radius == 0.0)
    }

    /// Path length of a line or arc; rapid moves report 0
    pub fn length(&self) -> f64 {
        match self {
            Segment::Move { .. } => 0.0,
            Segment::Line { from, to } => from.distance_to(to),
            Segment::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } => radius * (end_angle - start_angle).abs(),
        }
    }

    /// Short label used in logs and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Move { .. } => "move",
            Segment::Line { .. } => "line",
            Segment::Arc {
                clockwise: true, ..
            } => "arc-cw",
            Segment::Arc { .. } => "arc-ccw",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Move { to } => write!(f, "move -> {}", to),
            Segment::Line { from, to } => write!(f, "line {} -> {}", from, to),
            Segment::Arc {
                center,
                radius,
                z,
                start_angle,
                end_angle,
                clockwise,
            } => write!(
                f,
                "{} center=({:.3}, {:.3}) r={:.3} z={:.3} {:.4}..{:.4} rad",
                if *clockwise { "arc-cw" } else { "arc-ccw" },
                center.x,
                center.y,
                radius,
                z,
                start_angle,
                end_angle
            ),
        }
    }
}
