//! Toolpath model and playback cursor
//!
//! Owns the interpreted segment sequence and a cursor marking how much of it
//! is visible. The sequence is immutable once built and shared through an
//! `Arc`, so any number of readers can hold it without locking. Only the
//! cursor changes, and only through `&mut self`.

use std::sync::Arc;

use gcodesim_core::Bounds;
use tracing::trace;

use super::{Segment, ToolpathStats};

/// Segment sequence with a playback cursor
#[derive(Debug, Clone)]
pub struct Toolpath {
    segments: Arc<[Segment]>,
    cursor: usize,
}

impl Toolpath {
    /// Wrap an interpreted segment sequence; the cursor starts at 0
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into(),
            cursor: 0,
        }
    }

    /// Total segment count
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of visible segments, in `0..=len()`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every segment is visible
    pub fn is_complete(&self) -> bool {
        self.cursor == self.segments.len()
    }

    /// Reveal one more segment; no-op at the end
    pub fn advance(&mut self) {
        if self.cursor < self.segments.len() {
            self.cursor += 1;
        }
        trace!("Cursor advanced to {}/{}", self.cursor, self.segments.len());
    }

    /// Hide the last visible segment; no-op at 0
    pub fn step_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Hide everything
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Show everything
    pub fn seek_end(&mut self) {
        self.cursor = self.segments.len();
    }

    /// Move the cursor, clamped to `[0, len()]`
    pub fn set_index(&mut self, index: usize) {
        self.cursor = index.min(self.segments.len());
    }

    /// Segments `[0, cursor)` in program order
    ///
    /// The iterator is lazy and cheap to clone; call again each frame.
    pub fn visible_prefix(&self) -> std::slice::Iter<'_, Segment> {
        self.visible_slice().iter()
    }

    /// Segments `[0, cursor)` as a slice
    pub fn visible_slice(&self) -> &[Segment] {
        &self.segments[..self.cursor]
    }

    /// The most recently revealed segment
    pub fn current_segment(&self) -> Option<&Segment> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.segments.get(idx))
    }

    /// All segments regardless of the cursor
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Shared handle to the segment sequence for concurrent readers
    pub fn shared_segments(&self) -> Arc<[Segment]> {
        Arc::clone(&self.segments)
    }

    /// Axis-aligned bounds of all segments, including full arc extents
    ///
    /// `None` for an empty toolpath.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::new();

        for segment in self.segments.iter() {
            match segment {
                Segment::Move { to } => bounds.include(to),
                Segment::Line { from, to } => {
                    bounds.include(from);
                    bounds.include(to);
                }
                Segment::Arc {
                    center, radius, z, ..
                } => {
                    // whole circle; loose for short arcs but never clips
                    bounds.update(center.x - radius, center.y - radius, *z);
                    bounds.update(center.x + radius, center.y + radius, *z);
                }
            }
        }

        bounds.is_valid().then_some(bounds)
    }

    /// Summary statistics over the whole sequence
    pub fn stats(&self) -> ToolpathStats {
        ToolpathStats::from_segments(&self.segments)
    }
}

impl Default for Toolpath {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Segment>> for Toolpath {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcodesim_core::{Point2D, Point3D};

    fn sample() -> Toolpath {
        Toolpath::new(vec![
            Segment::Move {
                to: Point3D::new(0.0, 0.0, 5.0),
            },
            Segment::Line {
                from: Point3D::new(0.0, 0.0, 5.0),
                to: Point3D::new(10.0, 0.0, 5.0),
            },
            Segment::Arc {
                center: Point2D::new(10.0, 5.0),
                radius: 5.0,
                z: 5.0,
                start_angle: -std::f64::consts::FRAC_PI_2,
                end_angle: std::f64::consts::FRAC_PI_2,
                clockwise: false,
            },
        ])
    }

    #[test]
    fn test_starts_empty_view() {
        let tp = sample();
        assert_eq!(tp.len(), 3);
        assert_eq!(tp.cursor(), 0);
        assert_eq!(tp.visible_prefix().count(), 0);
        assert!(tp.current_segment().is_none());
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut tp = sample();
        for _ in 0..tp.len() + 5 {
            tp.advance();
        }
        assert_eq!(tp.cursor(), tp.len());
        assert!(tp.is_complete());
        assert_eq!(tp.visible_prefix().count(), 3);
    }

    #[test]
    fn test_set_index_and_reset() {
        let mut tp = sample();
        tp.set_index(2);
        assert_eq!(tp.visible_slice().len(), 2);
        assert_eq!(tp.current_segment(), Some(&tp.segments()[1]));

        tp.set_index(100);
        assert_eq!(tp.cursor(), 3);

        tp.reset();
        assert_eq!(tp.cursor(), 0);

        tp.step_back();
        assert_eq!(tp.cursor(), 0);

        tp.seek_end();
        tp.step_back();
        assert_eq!(tp.cursor(), 2);
    }

    #[test]
    fn test_visible_prefix_is_restartable() {
        let mut tp = sample();
        tp.set_index(2);
        let view = tp.visible_prefix();
        let first: Vec<_> = view.clone().collect();
        let second: Vec<_> = view.collect();
        assert_eq!(first, second);
        assert_eq!(tp.len(), 3);
    }

    #[test]
    fn test_shared_segments_survive_cursor_changes() {
        let mut tp = sample();
        let shared = tp.shared_segments();
        tp.seek_end();
        tp.reset();
        assert_eq!(&shared[..], tp.segments());
    }

    #[test]
    fn test_bounds_include_arc_extent() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 15.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 10.0);
        assert_eq!(bounds.min_z, 5.0);
        assert_eq!(bounds.max_z, 5.0);
    }

    #[test]
    fn test_empty_toolpath() {
        let mut tp = Toolpath::default();
        tp.advance();
        assert_eq!(tp.cursor(), 0);
        assert!(tp.is_complete());
        assert!(tp.bounds().is_none());
    }
}
