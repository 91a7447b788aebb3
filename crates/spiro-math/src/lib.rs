pub mod aabb;
pub mod ratio;
pub mod viewport;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use ratio::{gcd, integral_radius};
pub use viewport::Viewport;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
