//! Tick loop driving an [`Ensemble`] on a [`RenderingSurface`].

use std::time::Duration;

use crossbeam_channel::Receiver;
use spiro_core::Result;
use tracing::{debug, info};

use crate::command::Command;
use crate::ensemble::{Ensemble, TickOutcome};
use crate::schedule::Scheduler;
use crate::surface::RenderingSurface;

/// Why [`Animator::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The scheduler refused to arm another tick.
    SchedulerStopped,
    /// The configured number of automatic resets was reached.
    CycleLimit,
    /// A [`Command::Quit`] arrived.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Automatic resets triggered by every tracer completing.
    pub cycles: u64,
    pub saves: u64,
    pub stopped_by: StopReason,
}

/// Owns the ensemble and its surface and runs them under a scheduler.
///
/// Commands are drained between ticks, so every mutation of the ensemble and
/// the surface happens on the thread calling [`Animator::run`].
pub struct Animator<S: RenderingSurface> {
    ensemble: Ensemble,
    surface: S,
    interval: Duration,
    commands: Option<Receiver<Command>>,
    max_cycles: Option<u64>,
}

impl<S: RenderingSurface> Animator<S> {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

    pub fn new(ensemble: Ensemble, surface: S) -> Self {
        Self {
            ensemble,
            surface,
            interval: Self::DEFAULT_INTERVAL,
            commands: None,
            max_cycles: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_commands(mut self, commands: Receiver<Command>) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Stop after `cycles` automatic resets.
    pub fn with_max_cycles(mut self, cycles: u64) -> Self {
        self.max_cycles = Some(cycles);
        self
    }

    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (Ensemble, S) {
        (self.ensemble, self.surface)
    }

    /// Apply one command. `on_save` receives the surface for [`Command::SaveDrawing`].
    ///
    /// Returns `false` for [`Command::Quit`].
    pub fn dispatch<F>(&mut self, command: Command, on_save: &mut F) -> Result<bool>
    where
        F: FnMut(&mut S) -> Result<()>,
    {
        debug!(?command, "dispatching command");
        match command {
            Command::ToggleCursors => self.ensemble.toggle_cursors(&mut self.surface)?,
            Command::Restart => self.ensemble.restart(&mut self.surface)?,
            Command::SaveDrawing => on_save(&mut self.surface)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Run ticks until the scheduler stops, the cycle limit is hit, or a quit
    /// command arrives.
    pub fn run<F>(&mut self, scheduler: &mut dyn Scheduler, mut on_save: F) -> Result<RunSummary>
    where
        F: FnMut(&mut S) -> Result<()>,
    {
        let mut summary = RunSummary {
            ticks: 0,
            cycles: 0,
            saves: 0,
            stopped_by: StopReason::SchedulerStopped,
        };

        while scheduler.after(self.interval) {
            if let Some(rx) = self.commands.clone() {
                for command in rx.try_iter() {
                    if command == Command::SaveDrawing {
                        summary.saves += 1;
                    }
                    if !self.dispatch(command, &mut on_save)? {
                        summary.stopped_by = StopReason::Quit;
                        return Ok(self.finish(summary));
                    }
                }
            }

            summary.ticks += 1;
            if let TickOutcome::Reset { .. } = self.ensemble.tick(&mut self.surface)? {
                summary.cycles += 1;
                if self.max_cycles.is_some_and(|max| summary.cycles >= max) {
                    summary.stopped_by = StopReason::CycleLimit;
                    return Ok(self.finish(summary));
                }
            }
        }
        Ok(self.finish(summary))
    }

    fn finish(&self, summary: RunSummary) -> RunSummary {
        info!(
            ticks = summary.ticks,
            cycles = summary.cycles,
            reason = ?summary.stopped_by,
            "animation stopped"
        );
        summary
    }
}
