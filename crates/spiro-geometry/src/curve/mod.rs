//! Curve parameters and evaluation.

mod hypotrochoid;

pub use hypotrochoid::{period_degrees, point_at, CurveParameters};
