//! Caller-side sampling of segments into vertices
//!
//! The toolpath only stores analytic arcs. Renderers pick a resolution per
//! draw (or per zoom level) and sample here, so changing the level of detail
//! never requires re-interpreting the program.

use gcodesim_core::constants::EPSILON;
use gcodesim_core::Point3D;

use super::Segment;

/// A connected run of vertices
pub type Polyline = Vec<Point3D>;

/// Vertices of one segment
///
/// - `Move` yields its target
/// - `Line` yields both endpoints
/// - `Arc` yields `resolution + 1` points from start to end angle inclusive
///   (`resolution` is raised to at least 1); a zero-radius arc yields the
///   same point each time
pub fn tessellate(segment: &Segment, resolution: u32) -> Vec<Point3D> {
    match segment {
        Segment::Move { to } => vec![*to],
        Segment::Line { from, to } => vec![*from, *to],
        Segment::Arc {
            center,
            radius,
            z,
            start_angle,
            end_angle,
            ..
        } => {
            let steps = resolution.max(1);
            let sweep = end_angle - start_angle;
            (0..=steps)
                .map(|k| {
                    let angle = start_angle + sweep * (k as f64 / steps as f64);
                    Point3D::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                        *z,
                    )
                })
                .collect()
        }
    }
}

/// Number of arc steps keeping the chord deviation under `tolerance`
///
/// Non-arc segments need a single step. The result is capped at `max_steps`.
pub fn resolution_for_tolerance(segment: &Segment, tolerance: f64, max_steps: u32) -> u32 {
    let max_steps = max_steps.max(1);
    match segment {
        Segment::Arc {
            radius,
            start_angle,
            end_angle,
            ..
        } => {
            let sweep = (end_angle - start_angle).abs();
            if *radius <= EPSILON || sweep <= EPSILON {
                return 1;
            }
            if tolerance <= 0.0 {
                return max_steps;
            }
            if tolerance >= *radius {
                return 1;
            }
            let step_angle = 2.0 * (1.0 - tolerance / radius).acos();
            let steps = (sweep / step_angle).ceil();
            (steps as u32).clamp(1, max_steps)
        }
        _ => 1,
    }
}

/// Drawable strips for a run of segments
///
/// Rapid moves are not drawn; they end the current strip. Consecutive
/// cutting segments whose endpoints meet are joined into one strip.
pub fn cutting_polylines<'a, I>(segments: I, resolution: u32) -> Vec<Polyline>
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut strips: Vec<Polyline> = Vec::new();
    let mut current: Polyline = Vec::new();

    for segment in segments {
        if !segment.is_cutting() {
            if current.len() > 1 {
                strips.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            continue;
        }

        let points = tessellate(segment, resolution);
        let joins = matches!(
            (current.last(), points.first()),
            (Some(last), Some(first)) if last.distance_to(first) <= 1e-6
        );

        if joins {
            current.extend(points.into_iter().skip(1));
        } else {
            if current.len() > 1 {
                strips.push(std::mem::take(&mut current));
            }
            current = points;
        }
    }

    if current.len() > 1 {
        strips.push(current);
    }

    strips
}
