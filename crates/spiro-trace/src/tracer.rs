//! Incremental drawing state for one curve.

use spiro_core::{Result, SpiroError};
use spiro_geometry::curve::point_at;
use spiro_geometry::tessellate::{angle_samples, step_count};
use spiro_geometry::CurveParameters;
use tracing::{debug, warn};

use crate::surface::{PenId, RenderingSurface};

/// Draws one curve on its own pen, a fixed angular step at a time.
///
/// The tracer starts at angle 0 and becomes complete once the angle reaches
/// the curve's period, after exactly `ceil(period / step)` advances. It stays
/// complete until [`CurveTracer::restart`].
#[derive(Debug, Clone)]
pub struct CurveTracer {
    pen: PenId,
    params: CurveParameters,
    step: f64,
    /// Advances since the last restart; the angle is always `steps * step`.
    steps: u64,
    complete: bool,
}

impl CurveTracer {
    pub const DEFAULT_STEP: f64 = 5.0;

    pub fn new<S>(params: CurveParameters, surface: &mut S) -> Result<Self>
    where
        S: RenderingSurface + ?Sized,
    {
        Self::with_step(params, Self::DEFAULT_STEP, surface)
    }

    /// Create a tracer on a fresh pen and place the pen at the curve's start.
    pub fn with_step<S>(params: CurveParameters, step: f64, surface: &mut S) -> Result<Self>
    where
        S: RenderingSurface + ?Sized,
    {
        if !(step.is_finite() && step > 0.0) {
            return Err(SpiroError::invalid(format!(
                "step must be a positive angle, got {step}"
            )));
        }
        let pen = surface.create_pen();
        debug!(?pen, period = params.period_degrees(), "creating tracer");
        let mut tracer = Self {
            pen,
            params,
            step,
            steps: 0,
            complete: false,
        };
        if let Err(err) = tracer.begin(surface) {
            if let Err(cleanup) = surface.remove_pen(pen) {
                warn!(?pen, %cleanup, "failed to release pen");
            }
            return Err(err);
        }
        Ok(tracer)
    }

    fn begin<S>(&mut self, surface: &mut S) -> Result<()>
    where
        S: RenderingSurface + ?Sized,
    {
        self.steps = 0;
        self.complete = false;
        surface.set_color(self.pen, self.params.color())?;
        surface.show_cursor(self.pen)?;
        surface.move_to(self.pen, point_at(&self.params, 0.0))
    }

    /// Draw one more step. Returns whether the curve is complete.
    pub fn advance<S>(&mut self, surface: &mut S) -> Result<bool>
    where
        S: RenderingSurface + ?Sized,
    {
        if self.complete {
            return Ok(true);
        }
        self.steps += 1;
        let angle = self.angle_degrees();
        surface.line_to(self.pen, point_at(&self.params, angle))?;

        if self.steps >= self.steps_to_close() {
            self.complete = true;
            surface.hide_cursor(self.pen)?;
            debug!(pen = ?self.pen, angle, steps = self.steps, "curve complete");
        }
        Ok(self.complete)
    }

    /// Draw the whole curve in one pass, end angle inclusive.
    ///
    /// Returns the number of points drawn after the initial move.
    pub fn draw_full<S>(&mut self, surface: &mut S) -> Result<usize>
    where
        S: RenderingSurface + ?Sized,
    {
        let period = self.params.period_degrees();
        surface.move_to(self.pen, point_at(&self.params, 0.0))?;
        let mut drawn = 0;
        for angle in angle_samples(period, self.step) {
            surface.line_to(self.pen, point_at(&self.params, angle))?;
            drawn += 1;
        }
        surface.hide_cursor(self.pen)?;
        self.steps = self.steps_to_close();
        self.complete = true;
        Ok(drawn)
    }

    /// Erase this tracer's strokes and start over with `params`.
    pub fn restart<S>(&mut self, params: CurveParameters, surface: &mut S) -> Result<()>
    where
        S: RenderingSurface + ?Sized,
    {
        surface.clear(self.pen)?;
        self.set_params(params);
        self.begin(surface)
    }

    /// Replace the parameters without drawing anything.
    pub fn set_params(&mut self, params: CurveParameters) {
        self.params = params;
    }

    /// Flip the cursor glyph. Returns the new visibility.
    pub fn toggle_cursor<S>(&self, surface: &mut S) -> Result<bool>
    where
        S: RenderingSurface + ?Sized,
    {
        if surface.is_cursor_visible(self.pen)? {
            surface.hide_cursor(self.pen)?;
            Ok(false)
        } else {
            surface.show_cursor(self.pen)?;
            Ok(true)
        }
    }

    pub fn pen(&self) -> PenId {
        self.pen
    }

    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn angle_degrees(&self) -> f64 {
        self.steps as f64 * self.step
    }

    /// Advances needed to reach the period from angle 0.
    pub fn steps_to_close(&self) -> u64 {
        step_count(self.params.period_degrees(), self.step)
    }

    pub fn period_degrees(&self) -> f64 {
        self.params.period_degrees()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Fraction of the period drawn so far, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.angle_degrees() / self.params.period_degrees()).min(1.0)
    }
}
