//! Motion interpreter
//!
//! A single-pass fold over the command sequence. The only state is the
//! running tool position, threaded through the fold as its accumulator;
//! each motion command yields at most one [`Segment`].
//!
//! | command      | segment | new position            |
//! |--------------|---------|-------------------------|
//! | `G0`         | Move    | target                  |
//! | `G1`         | Line    | target                  |
//! | `G2` / `G3`  | Arc     | target X/Y, previous Z  |
//! | anything else| none    | unchanged               |

use gcodesim_core::constants::TAU;
use gcodesim_core::{Point2D, Point3D};
use tracing::{debug, trace};

use super::Segment;
use crate::gcode::{CommandKind, GcodeCommand};

/// Converts commands into resolved geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInterpreter {
    start: Option<Point3D>,
}

impl Default for MotionInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionInterpreter {
    /// Interpreter that assumes the tool starts at the machine origin
    pub fn new() -> Self {
        Self {
            start: Some(Point3D::ORIGIN),
        }
    }

    /// Interpreter with an explicit starting position
    ///
    /// With `None`, feed moves are dropped until a position has been
    /// established by an earlier motion command.
    pub fn with_start(start: Option<Point3D>) -> Self {
        Self { start }
    }

    /// Resolve the whole command sequence
    ///
    /// Pure with respect to `self`: the same commands always produce the
    /// same segments.
    pub fn interpret(&self, commands: &[GcodeCommand]) -> Vec<Segment> {
        let (_, segments) = commands.iter().fold(
            (self.start, Vec::with_capacity(commands.len())),
            |(position, mut segments), cmd| {
                let (next, segment) = step(position, cmd);
                segments.extend(segment);
                (next, segments)
            },
        );

        let (mut moves, mut lines, mut arcs) = (0usize, 0usize, 0usize);
        for segment in &segments {
            match segment {
                Segment::Move { .. } => moves += 1,
                Segment::Line { .. } => lines += 1,
                Segment::Arc { .. } => arcs += 1,
            }
        }
        debug!(
            "Interpreted {} commands: moves={}, lines={}, arcs={}, total segments={}",
            commands.len(),
            moves,
            lines,
            arcs,
            segments.len()
        );

        segments
    }

    /// Position after running the whole sequence
    pub fn final_position(&self, commands: &[GcodeCommand]) -> Option<Point3D> {
        commands
            .iter()
            .fold(self.start, |position, cmd| step(position, cmd).0)
    }
}

/// Apply one command to the running position
///
/// Returns the new position and the segment produced, if any.
pub fn step(position: Option<Point3D>, cmd: &GcodeCommand) -> (Option<Point3D>, Option<Segment>) {
    if cmd.kind != CommandKind::G {
        return (position, None);
    }

    let target = cmd.target();
    match cmd.number {
        0 => (Some(target), Some(Segment::Move { to: target })),
        1 => match position {
            Some(from) => (Some(target), Some(Segment::Line { from, to: target })),
            None => {
                trace!("Line {}: G1 without a known position, dropped", cmd.line_number);
                (Some(target), None)
            }
        },
        n @ (2 | 3) => match position {
            Some(from) => {
                let arc = resolve_arc(from, cmd, n == 2);
                (Some(Point3D::new(cmd.x, cmd.y, from.z)), Some(arc))
            }
            None => {
                trace!(
                    "Line {}: G{} without a known position, dropped",
                    cmd.line_number,
                    n
                );
                (Some(target), None)
            }
        },
        _ => (position, None),
    }
}

/// Resolve arc geometry from the start position and the command's I/J offsets
pub fn resolve_arc(from: Point3D, cmd: &GcodeCommand, clockwise: bool) -> Segment {
    let center = Point2D::new(from.x + cmd.i, from.y + cmd.j);
    let radius = Point2D::from(from).distance_to(&center);
    let start_angle = (from.y - center.y).atan2(from.x - center.x);
    let raw_end = (cmd.y - center.y).atan2(cmd.x - center.x);
    let end_angle = unwrap_end_angle(start_angle, raw_end, clockwise);

    trace!(
        "Arc: from=({:.3},{:.3}), to=({:.3},{:.3}), center=({:.3},{:.3}), radius={:.4}, sweep={:.4}, cw={}",
        from.x,
        from.y,
        cmd.x,
        cmd.y,
        center.x,
        center.y,
        radius,
        end_angle - start_angle,
        clockwise
    );

    Segment::Arc {
        center,
        radius,
        z: from.z,
        start_angle,
        end_angle,
        clockwise,
    }
}

/// Shift `end` by one turn so the sweep from `start` runs in the requested direction
///
/// Both angles are expected in the `atan2` range `(-π, π]`. Coincident angles
/// are left alone and give a zero sweep.
pub fn unwrap_end_angle(start: f64, end: f64, clockwise: bool) -> f64 {
    if clockwise && end > start {
        end - TAU
    } else if !clockwise && end < start {
        end + TAU
    } else {
        end
    }
}
