use crate::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

/// Maps centre-origin, y-up surface coordinates onto a y-down pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface region visible through this viewport.
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::centered(self.width as f64, self.height as f64)
    }

    pub fn to_pixel(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x + self.width as f64 * 0.5,
            self.height as f64 * 0.5 - p.y,
        )
    }

    pub fn from_pixel(&self, px: Point2) -> Point2 {
        Point2::new(
            px.x - self.width as f64 * 0.5,
            self.height as f64 * 0.5 - px.y,
        )
    }
}
