//! The two run modes: one static curve, or the animated ensemble.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver};
use spiro_core::SpiroError;
use spiro_geometry::{Color, CurveParameters};
use spiro_math::Point2;
use spiro_render::{save_drawing, Canvas};
use spiro_trace::{
    Animator, Command, CurveTracer, Ensemble, KeyBindings, ParameterSampler, RunSummary,
    Scheduler, ThreadScheduler,
};
use tracing::{info, warn};

use crate::cli::StaticCurve;
use crate::config::SpiroConfig;

fn canvas_for(config: &SpiroConfig) -> Canvas {
    Canvas::with_background(
        config.surface.width,
        config.surface.height,
        config.surface.background,
    )
}

fn save(canvas: &Canvas, config: &SpiroConfig) -> spiro_core::Result<Vec<PathBuf>> {
    save_drawing(
        canvas,
        &config.export.directory,
        &config.export.prefix,
        &config.export.formats,
    )
}

/// Draw one black curve centred on the origin and save it.
///
/// The outer radius may be at most half the shorter surface side, which also
/// bounds the curve's period.
pub fn run_static(config: &SpiroConfig, curve: StaticCurve) -> Result<Vec<PathBuf>> {
    let viewport = config.surface.viewport();
    let max_radius = viewport.width.min(viewport.height) / 2;
    if curve.outer_radius > max_radius {
        return Err(SpiroError::invalid(format!(
            "outer radius {} does not fit a {}x{} surface (at most {max_radius})",
            curve.outer_radius, viewport.width, viewport.height
        ))
        .into());
    }

    let params = CurveParameters::new(
        Point2::ZERO,
        Color::BLACK,
        curve.outer_radius,
        curve.inner_radius,
        curve.hole_ratio,
    )
    .context("invalid --sparams")?;

    let mut canvas = canvas_for(config);
    let mut tracer = CurveTracer::with_step(params, config.animation.step_degrees, &mut canvas)?;
    let points = tracer.draw_full(&mut canvas)?;
    info!(
        points,
        rotations = params.rotations(),
        period = params.period_degrees(),
        "drew static curve"
    );

    let paths = save(&canvas, config).context("failed to save drawing")?;
    for path in &paths {
        println!("saved drawing to {}", path.display());
    }
    Ok(paths)
}

/// Forward stdin lines as commands until EOF.
fn spawn_key_reader(bindings: KeyBindings) -> Receiver<Command> {
    let (tx, rx) = unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match bindings.lookup_line(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                None => warn!(input = %line.trim(), "unbound key"),
            }
        }
    });
    rx
}

/// Build the ensemble and animator described by `config`.
pub fn build_animator(config: &SpiroConfig) -> Result<Animator<Canvas>> {
    let mut canvas = canvas_for(config);
    let sampler = ParameterSampler::new(config.sampler, config.animation.seed)?;
    let ensemble = Ensemble::new(
        config.animation.tracer_count,
        config.surface.viewport(),
        sampler,
        config.animation.step_degrees,
        &mut canvas,
    )
    .context("failed to create curves")?;

    let mut animator = Animator::new(ensemble, canvas)
        .with_interval(Duration::from_millis(config.animation.tick_interval_ms));
    if let Some(cycles) = config.animation.max_cycles {
        animator = animator.with_max_cycles(cycles);
    }
    Ok(animator)
}

/// Animate until a limit, a quit command, or Ctrl-C.
pub fn run_animation(
    config: &SpiroConfig,
    interactive: bool,
    save_on_exit: bool,
) -> Result<RunSummary> {
    let mut scheduler = ThreadScheduler::new();
    if let Some(ticks) = config.animation.max_ticks {
        scheduler = scheduler.with_tick_limit(ticks);
    }
    let stop = scheduler.stop_handle();
    ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;

    let mut animator = build_animator(config)?;
    if interactive {
        animator = animator.with_commands(spawn_key_reader(KeyBindings::default()));
    }
    animate(&mut animator, &mut scheduler, config, save_on_exit)
}

/// Drive `animator` under `scheduler`, saving on request and optionally at the end.
pub fn animate(
    animator: &mut Animator<Canvas>,
    scheduler: &mut dyn Scheduler,
    config: &SpiroConfig,
    save_on_exit: bool,
) -> Result<RunSummary> {
    let summary = animator.run(scheduler, |canvas| save(canvas, config).map(|_| ()))?;
    if save_on_exit {
        save(animator.surface(), config).context("failed to save drawing")?;
    }
    Ok(summary)
}
