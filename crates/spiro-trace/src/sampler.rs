//! Random curve parameters that fit a surface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use spiro_core::traits::Validate;
use spiro_core::{Result, SpiroError};
use spiro_geometry::{Color, CurveParameters};
use spiro_math::{Point2, Viewport};

/// Ranges the sampler draws from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default = "SamplerConfig::default_min_outer_radius")]
    pub min_outer_radius: u32,
    #[serde(default = "SamplerConfig::default_min_inner_radius")]
    pub min_inner_radius: u32,
    /// Largest inner radius as a fraction of the sampled outer radius.
    #[serde(default = "SamplerConfig::default_inner_radius_fraction")]
    pub inner_radius_fraction: f64,
    #[serde(default = "SamplerConfig::default_min_hole_ratio")]
    pub min_hole_ratio: f64,
    #[serde(default = "SamplerConfig::default_max_hole_ratio")]
    pub max_hole_ratio: f64,
}

impl SamplerConfig {
    fn default_min_outer_radius() -> u32 {
        50
    }
    fn default_min_inner_radius() -> u32 {
        10
    }
    fn default_inner_radius_fraction() -> f64 {
        0.9
    }
    fn default_min_hole_ratio() -> f64 {
        0.1
    }
    fn default_max_hole_ratio() -> f64 {
        0.9
    }

    /// Smallest side a surface needs for the outer radius range to be non-empty.
    pub fn min_surface_side(&self) -> u32 {
        self.min_outer_radius.saturating_mul(2)
    }

    fn max_inner_radius(&self, outer: u32) -> u32 {
        let limit = (outer as f64 * self.inner_radius_fraction + 1e-9).floor() as u32;
        limit.min(outer - 1)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_outer_radius: Self::default_min_outer_radius(),
            min_inner_radius: Self::default_min_inner_radius(),
            inner_radius_fraction: Self::default_inner_radius_fraction(),
            min_hole_ratio: Self::default_min_hole_ratio(),
            max_hole_ratio: Self::default_max_hole_ratio(),
        }
    }
}

impl Validate for SamplerConfig {
    fn validate(&self) -> Result<()> {
        if self.min_inner_radius == 0 {
            return Err(SpiroError::invalid("min_inner_radius must be positive"));
        }
        if !(self.inner_radius_fraction > 0.0 && self.inner_radius_fraction < 1.0) {
            return Err(SpiroError::invalid(format!(
                "inner_radius_fraction must lie in (0, 1), got {}",
                self.inner_radius_fraction
            )));
        }
        if self.min_outer_radius < 2
            || self.max_inner_radius(self.min_outer_radius) < self.min_inner_radius
        {
            return Err(SpiroError::invalid(format!(
                "min_outer_radius {} leaves no room for inner radius >= {}",
                self.min_outer_radius, self.min_inner_radius
            )));
        }
        let holes_ok = self.min_hole_ratio > 0.0
            && self.min_hole_ratio <= self.max_hole_ratio
            && self.max_hole_ratio <= 1.0;
        if !holes_ok {
            return Err(SpiroError::invalid(format!(
                "hole ratio range [{}, {}] must lie within (0, 1]",
                self.min_hole_ratio, self.max_hole_ratio
            )));
        }
        Ok(())
    }
}

/// Draws [`CurveParameters`] that fit inside a surface.
#[derive(Debug, Clone)]
pub struct ParameterSampler {
    config: SamplerConfig,
    rng: StdRng,
}

impl ParameterSampler {
    /// Sampler seeded from the OS, or from `seed` for reproducible runs.
    pub fn new(config: SamplerConfig, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: SamplerConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draw a random parameter set for a surface of the given size.
    ///
    /// The outer radius never exceeds half the shorter side, the inner radius
    /// is strictly smaller than the outer one, and the centre lies within the
    /// surface.
    pub fn sample(&mut self, bounds: Viewport) -> Result<CurveParameters> {
        let cfg = self.config;
        let min_side = bounds.width.min(bounds.height);
        if min_side < cfg.min_surface_side() {
            return Err(SpiroError::DegenerateBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let outer = self.rng.random_range(cfg.min_outer_radius..=min_side / 2);
        let inner = self
            .rng
            .random_range(cfg.min_inner_radius..=cfg.max_inner_radius(outer));
        let hole = self
            .rng
            .random_range(cfg.min_hole_ratio..=cfg.max_hole_ratio);

        let half_w = (bounds.width / 2) as i64;
        let half_h = (bounds.height / 2) as i64;
        let center = Point2::new(
            self.rng.random_range(-half_w..=half_w) as f64,
            self.rng.random_range(-half_h..=half_h) as f64,
        );
        let color = Color::new(self.rng.random(), self.rng.random(), self.rng.random());

        CurveParameters::new(center, color, outer, inner, hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let mut sampler = ParameterSampler::new(SamplerConfig::default(), Some(42)).unwrap();
        let bounds = Viewport::new(800, 600);
        for _ in 0..10_000 {
            let p = sampler.sample(bounds).unwrap();
            assert!(p.inner_radius() >= 10);
            assert!(p.inner_radius() < p.outer_radius());
            assert!(p.outer_radius() >= 50);
            assert!(p.outer_radius() <= 300);
            assert!((0.1..=0.9).contains(&p.hole_ratio()));
            assert!(p.center().x.abs() <= 400.0);
            assert!(p.center().y.abs() <= 300.0);
            let c = p.color();
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }

    #[test]
    fn test_inner_radius_respects_fraction() {
        let mut sampler = ParameterSampler::new(SamplerConfig::default(), Some(3)).unwrap();
        let bounds = Viewport::new(100, 100);
        for _ in 0..500 {
            let p = sampler.sample(bounds).unwrap();
            // Outer radius is pinned to 50 on a 100x100 surface.
            assert_eq!(p.outer_radius(), 50);
            assert!(p.inner_radius() <= 45);
        }
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut sampler = ParameterSampler::new(SamplerConfig::default(), Some(1)).unwrap();
        let err = sampler.sample(Viewport::new(800, 99)).unwrap_err();
        assert!(matches!(
            err,
            SpiroError::DegenerateBounds {
                width: 800,
                height: 99
            }
        ));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let bounds = Viewport::new(800, 600);
        let mut a = ParameterSampler::new(SamplerConfig::default(), Some(9)).unwrap();
        let mut b = ParameterSampler::new(SamplerConfig::default(), Some(9)).unwrap();
        for _ in 0..10 {
            assert_eq!(a.sample(bounds).unwrap(), b.sample(bounds).unwrap());
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(SamplerConfig::default().validate().is_ok());

        let bad_fraction = SamplerConfig {
            inner_radius_fraction: 1.0,
            ..SamplerConfig::default()
        };
        assert!(bad_fraction.validate().is_err());

        let no_room = SamplerConfig {
            min_outer_radius: 10,
            ..SamplerConfig::default()
        };
        assert!(no_room.validate().is_err());

        let inverted_holes = SamplerConfig {
            min_hole_ratio: 0.8,
            max_hole_ratio: 0.2,
            ..SamplerConfig::default()
        };
        assert!(inverted_holes.validate().is_err());
        assert!(ParameterSampler::new(inverted_holes, None).is_err());
    }

    #[test]
    fn test_min_surface_side_saturates() {
        let huge = SamplerConfig {
            min_outer_radius: u32::MAX / 2 + 10,
            ..SamplerConfig::default()
        };
        assert_eq!(huge.min_surface_side(), u32::MAX);
        let mut sampler = ParameterSampler::new(huge, Some(1)).unwrap();
        assert!(matches!(
            sampler.sample(Viewport::new(800, 600)),
            Err(SpiroError::DegenerateBounds { .. })
        ));
    }
}
