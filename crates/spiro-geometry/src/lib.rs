//! Spiro geometry: hypotrochoid parameters, evaluation, and angular sampling.

pub mod color;
pub mod curve;
pub mod tessellate;

pub use color::Color;
pub use curve::CurveParameters;
