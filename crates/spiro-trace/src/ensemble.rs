//! A fixed group of tracers animated in lockstep.

use serde::Serialize;
use spiro_core::{Result, SpiroError};
use spiro_geometry::CurveParameters;
use spiro_math::Viewport;
use tracing::{info, trace};

use crate::sampler::ParameterSampler;
use crate::surface::RenderingSurface;
use crate::tracer::CurveTracer;

/// Phase of the ensemble as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnsembleState {
    /// Tracers advance once per tick.
    Running,
    /// Every tracer is waiting for fresh parameters.
    Resetting,
}

/// What a single [`Ensemble::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tracers advanced; `completed` of them are done.
    Advanced { completed: usize },
    /// All tracers were done, so the ensemble restarted with new parameters.
    Reset { cycle: u64 },
}

/// Progress of one tracer at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracerSnapshot {
    pub params: CurveParameters,
    pub angle_degrees: f64,
    pub complete: bool,
}

/// Owns `N` tracers with independently sampled parameters.
///
/// The tracer count is fixed for the ensemble's lifetime; tracers are reused
/// in place across reset cycles.
#[derive(Debug)]
pub struct Ensemble {
    tracers: Vec<CurveTracer>,
    sampler: ParameterSampler,
    bounds: Viewport,
    state: EnsembleState,
    cycle: u64,
    ticks: u64,
}

impl Ensemble {
    pub const DEFAULT_SIZE: usize = 4;

    /// Build `count` tracers with freshly sampled parameters, in the Running state.
    pub fn new<S>(
        count: usize,
        bounds: Viewport,
        mut sampler: ParameterSampler,
        step: f64,
        surface: &mut S,
    ) -> Result<Self>
    where
        S: RenderingSurface + ?Sized,
    {
        if count == 0 {
            return Err(SpiroError::invalid("an ensemble needs at least one tracer"));
        }
        let mut tracers = Vec::with_capacity(count);
        for _ in 0..count {
            let params = sampler.sample(bounds)?;
            tracers.push(CurveTracer::with_step(params, step, surface)?);
        }
        info!(count, width = bounds.width, height = bounds.height, "ensemble ready");
        Ok(Self {
            tracers,
            sampler,
            bounds,
            state: EnsembleState::Running,
            cycle: 0,
            ticks: 0,
        })
    }

    /// Advance every tracer once; reset the whole group when all are complete.
    ///
    /// An ensemble left in [`EnsembleState::Resetting`] by a failed reset
    /// retries the reset instead of advancing.
    pub fn tick<S>(&mut self, surface: &mut S) -> Result<TickOutcome>
    where
        S: RenderingSurface + ?Sized,
    {
        self.ticks += 1;
        if self.state == EnsembleState::Running {
            let completed = self.advance_all(surface)?;
            trace!(tick = self.ticks, completed, "tick");
            if completed < self.tracers.len() {
                return Ok(TickOutcome::Advanced { completed });
            }
            self.state = EnsembleState::Resetting;
        }
        self.reset(surface)?;
        Ok(TickOutcome::Reset { cycle: self.cycle })
    }

    fn advance_all<S>(&mut self, surface: &mut S) -> Result<usize>
    where
        S: RenderingSurface + ?Sized,
    {
        let mut completed = 0;
        for tracer in &mut self.tracers {
            if tracer.advance(surface)? {
                completed += 1;
            }
        }
        Ok(completed)
    }

    /// Clear every tracer and start a new cycle immediately, complete or not.
    pub fn restart<S>(&mut self, surface: &mut S) -> Result<()>
    where
        S: RenderingSurface + ?Sized,
    {
        self.state = EnsembleState::Resetting;
        self.reset(surface)
    }

    fn reset<S>(&mut self, surface: &mut S) -> Result<()>
    where
        S: RenderingSurface + ?Sized,
    {
        for tracer in &mut self.tracers {
            let params = self.sampler.sample(self.bounds)?;
            tracer.restart(params, surface)?;
        }
        self.cycle += 1;
        self.state = EnsembleState::Running;
        info!(cycle = self.cycle, "ensemble restarted");
        Ok(())
    }

    /// Flip every tracer's cursor glyph. Drawing state is unaffected.
    pub fn toggle_cursors<S>(&mut self, surface: &mut S) -> Result<()>
    where
        S: RenderingSurface + ?Sized,
    {
        for tracer in &self.tracers {
            tracer.toggle_cursor(surface)?;
        }
        Ok(())
    }

    pub fn tracers(&self) -> &[CurveTracer] {
        &self.tracers
    }

    pub fn len(&self) -> usize {
        self.tracers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracers.is_empty()
    }

    pub fn state(&self) -> EnsembleState {
        self.state
    }

    /// Number of resets performed so far, automatic or requested.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn completed(&self) -> usize {
        self.tracers.iter().filter(|t| t.is_complete()).count()
    }

    pub fn snapshot(&self) -> Vec<TracerSnapshot> {
        self.tracers
            .iter()
            .map(|t| TracerSnapshot {
                params: *t.params(),
                angle_degrees: t.angle_degrees(),
                complete: t.is_complete(),
            })
            .collect()
    }
}
