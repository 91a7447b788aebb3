//! Hypotrochoid curve: a point on a circle rolling inside a fixed circle.

use serde::Serialize;
use spiro_core::traits::Validate;
use spiro_core::{Result, SpiroError};
use spiro_math::{gcd, Point2};

use crate::Color;

/// Geometric and stroke parameters of one curve.
///
/// Radii are whole numbers so the closing period is exact. Values are checked
/// on construction and never change afterwards; the derived ratio and period
/// are computed once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveParameters {
    center: Point2,
    color: Color,
    outer_radius: u32,
    inner_radius: u32,
    hole_ratio: f64,
    #[serde(skip)]
    ratio: f64,
    #[serde(skip)]
    period_degrees: f64,
}

impl CurveParameters {
    pub fn new(
        center: Point2,
        color: Color,
        outer_radius: u32,
        inner_radius: u32,
        hole_ratio: f64,
    ) -> Result<Self> {
        let mut params = Self {
            center,
            color,
            outer_radius,
            inner_radius,
            hole_ratio,
            ratio: 0.0,
            period_degrees: 0.0,
        };
        params.validate()?;
        params.ratio = inner_radius as f64 / outer_radius as f64;
        let divisor = gcd(outer_radius, inner_radius) as f64;
        params.period_degrees = 360.0 * inner_radius as f64 / divisor;
        Ok(params)
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Radius `R` of the fixed circle.
    pub fn outer_radius(&self) -> u32 {
        self.outer_radius
    }

    /// Radius `r` of the rolling circle.
    pub fn inner_radius(&self) -> u32 {
        self.inner_radius
    }

    /// Distance of the pen from the rolling circle's centre, as a fraction of `r`.
    pub fn hole_ratio(&self) -> f64 {
        self.hole_ratio
    }

    /// `r / R`, always in `(0, 1)`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Smallest angle after which the curve closes on itself.
    pub fn period_degrees(&self) -> f64 {
        self.period_degrees
    }

    /// Number of turns around the fixed circle before the curve closes.
    pub fn rotations(&self) -> u32 {
        self.inner_radius / gcd(self.outer_radius, self.inner_radius)
    }
}

impl Validate for CurveParameters {
    fn validate(&self) -> Result<()> {
        if self.outer_radius == 0 || self.inner_radius == 0 {
            return Err(SpiroError::invalid(format!(
                "radii must be positive, got R={} r={}",
                self.outer_radius, self.inner_radius
            )));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(SpiroError::invalid(format!(
                "inner radius {} must be smaller than outer radius {}",
                self.inner_radius, self.outer_radius
            )));
        }
        if !(self.hole_ratio > 0.0 && self.hole_ratio <= 1.0) {
            return Err(SpiroError::invalid(format!(
                "hole ratio must lie in (0, 1], got {}",
                self.hole_ratio
            )));
        }
        if !self.center.is_finite() {
            return Err(SpiroError::invalid("center must be finite"));
        }
        self.color.validate()
    }
}

/// Point on the curve at `angle_degrees`.
pub fn point_at(params: &CurveParameters, angle_degrees: f64) -> Point2 {
    let a = angle_degrees.to_radians();
    let k = params.ratio;
    let l = params.hole_ratio;
    let big_r = params.outer_radius as f64;
    let inner = (1.0 - k) * a / k;

    let x = big_r * ((1.0 - k) * a.cos() + l * k * inner.cos());
    let y = big_r * ((1.0 - k) * a.sin() - l * k * inner.sin());
    params.center + Point2::new(x, y)
}

/// `360 * r / gcd(R, r)`.
pub fn period_degrees(params: &CurveParameters) -> f64 {
    params.period_degrees
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spiro_math::dvec2;

    fn params(outer: u32, inner: u32, hole: f64) -> CurveParameters {
        CurveParameters::new(Point2::ZERO, Color::BLACK, outer, inner, hole).unwrap()
    }

    #[test]
    fn test_period_reduces_by_gcd() {
        let p = params(300, 50, 0.5);
        assert_relative_eq!(period_degrees(&p), 360.0);
        assert_eq!(p.rotations(), 1);

        let p = params(220, 65, 0.8);
        // gcd(220, 65) = 5, so 13 turns
        assert_relative_eq!(p.period_degrees(), 360.0 * 13.0);
        assert_eq!(p.rotations(), 13);
    }

    #[test]
    fn test_ratio() {
        let p = params(300, 50, 0.5);
        assert_relative_eq!(p.ratio(), 50.0 / 300.0);
    }

    #[test]
    fn test_start_point() {
        // At angle 0 both cosines are 1 and both sines are 0.
        let p = CurveParameters::new(dvec2(10.0, -20.0), Color::BLACK, 300, 50, 0.5).unwrap();
        let k = 50.0 / 300.0;
        let pt = point_at(&p, 0.0);
        assert_relative_eq!(pt.x, 10.0 + 300.0 * ((1.0 - k) + 0.5 * k), epsilon = 1e-9);
        assert_relative_eq!(pt.y, -20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_closes_at_period() {
        let p = params(300, 50, 0.5);
        let start = point_at(&p, 0.0);
        let end = point_at(&p, 360.0);
        assert_relative_eq!(start.x, end.x, epsilon = 1e-9);
        assert_relative_eq!(start.y, end.y, epsilon = 1e-9);
    }

    #[test]
    fn test_does_not_close_before_period() {
        let p = params(220, 65, 0.8);
        let start = point_at(&p, 0.0);
        // One full outer turn is not enough for 13 required turns.
        let partial = point_at(&p, 360.0);
        assert!((start - partial).length() > 1e-3);
    }

    #[test]
    fn test_random_parameters_close() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let outer = rng.random_range(50..=300u32);
            let inner = rng.random_range(10..=(9 * outer / 10));
            let hole = rng.random_range(0.1..=0.9);
            let center = dvec2(
                rng.random_range(-400..=400) as f64,
                rng.random_range(-300..=300) as f64,
            );
            let p = CurveParameters::new(center, Color::WHITE, outer, inner, hole).unwrap();
            let start = point_at(&p, 0.0);
            let end = point_at(&p, p.period_degrees());
            assert_abs_diff_eq!(start.x, end.x, epsilon = 1e-3);
            assert_abs_diff_eq!(start.y, end.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let make = |outer, inner, hole| {
            CurveParameters::new(Point2::ZERO, Color::BLACK, outer, inner, hole)
        };
        assert!(make(50, 50, 0.5).is_err());
        assert!(make(50, 60, 0.5).is_err());
        assert!(make(50, 0, 0.5).is_err());
        assert!(make(0, 0, 0.5).is_err());
        assert!(make(50, 10, 0.0).is_err());
        assert!(make(50, 10, 1.5).is_err());
        assert!(make(50, 10, f64::NAN).is_err());
        assert!(make(50, 10, 1.0).is_ok());
        assert!(CurveParameters::new(Point2::ZERO, Color::new(2.0, 0.0, 0.0), 50, 10, 0.5).is_err());
    }
}
