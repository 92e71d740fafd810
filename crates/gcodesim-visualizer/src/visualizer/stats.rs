//! Toolpath statistics

use gcodesim_core::Point3D;
use serde::{Deserialize, Serialize};

use super::Segment;

/// Counts and path lengths over a segment sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolpathStats {
    pub moves: usize,
    pub lines: usize,
    pub arcs: usize,
    /// Arcs whose I/J offset was zero
    pub degenerate_arcs: usize,
    /// Length of lines and arcs
    pub cutting_length: f64,
    /// Length of rapid moves, measured from the previous end point
    pub rapid_length: f64,
}

impl ToolpathStats {
    /// Walk the sequence from the machine origin
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut stats = Self::default();
        let mut last = Point3D::ORIGIN;

        for segment in segments {
            match segment {
                Segment::Move { to } => {
                    stats.moves += 1;
                    stats.rapid_length += last.distance_to(to);
                }
                Segment::Line { .. } => {
                    stats.lines += 1;
                    stats.cutting_length += segment.length();
                }
                Segment::Arc { .. } => {
                    stats.arcs += 1;
                    if segment.is_degenerate_arc() {
                        stats.degenerate_arcs += 1;
                    }
                    stats.cutting_length += segment.length();
                }
            }
            last = segment.end_point();
        }

        stats
    }

    pub fn total_segments(&self) -> usize {
        self.moves + self.lines + self.arcs
    }
}

impl std::fmt::Display for ToolpathStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} segments (moves={}, lines={}, arcs={}), cutting {:.3} mm, rapid {:.3} mm",
            self.total_segments(),
            self.moves,
            self.lines,
            self.arcs,
            self.cutting_length,
            self.rapid_length
        )
    }
}
