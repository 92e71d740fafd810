//! Geometric data models
//!
//! This module provides:
//! - `Point3D`, a position in machine space
//! - `Point2D`, a position in the XY plane
//! - `Bounds`, an axis-aligned bounding box accumulator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in 3D machine space (millimeters, no unit conversion applied)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point3D {
    /// Machine origin
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate distance to another point (XYZ)
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Position in the XY plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<Point3D> for Point2D {
    fn from(p: Point3D) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Bounding box accumulator used while walking toolpaths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Create an empty (inverted) bounding box
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
            min_z: f64::MAX,
            max_z: f64::MIN,
        }
    }

    pub fn update(&mut self, x: f64, y: f64, z: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    pub fn include(&mut self, point: &Point3D) {
        self.update(point.x, point.y, point.z);
    }

    /// True once at least one finite point has been accumulated
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_z.is_finite()
            && self.max_z.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
            // a single Z plane is valid
            && self.min_z <= self.max_z
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    pub fn center(&self) -> Point3D {
        Point3D::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance_to(&b), 13.0);
    }

    #[test]
    fn test_empty_bounds_invalid() {
        assert!(!Bounds::new().is_valid());
    }

    #[test]
    fn test_bounds_accumulate() {
        let mut bounds = Bounds::new();
        bounds.include(&Point3D::new(-5.0, 2.0, 1.0));
        bounds.include(&Point3D::new(5.0, 8.0, 1.0));

        assert!(bounds.is_valid());
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.depth(), 0.0);
        assert_eq!(bounds.center(), Point3D::new(0.0, 5.0, 1.0));
    }

    #[test]
    fn test_point_serialization() {
        let p = Point3D::new(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point3D = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
