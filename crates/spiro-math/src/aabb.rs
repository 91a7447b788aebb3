use crate::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centred on the origin.
    pub fn centered(width: f64, height: f64) -> Self {
        let half = Vector2::new(width, height) * 0.5;
        Self {
            min: -half,
            max: half,
        }
    }

    pub fn from_points(points: &[Point2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min = points[0];
        let mut max = points[0];
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
