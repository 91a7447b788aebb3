// Integration tests for the ensemble reset cycle

use spiro_geometry::curve::point_at;
use spiro_geometry::{Color, CurveParameters};
use spiro_math::{Point2, Viewport};
use spiro_trace::{
    CurveTracer, DrawCommand, Ensemble, EnsembleState, ParameterSampler, RecordingSurface,
    RenderingSurface, SamplerConfig, TickOutcome,
};

fn make_ensemble(count: usize, seed: u64, surface: &mut RecordingSurface) -> Ensemble {
    let sampler = ParameterSampler::new(SamplerConfig::default(), Some(seed)).unwrap();
    Ensemble::new(count, Viewport::new(800, 600), sampler, 5.0, surface).unwrap()
}

fn ticks_to_complete(period: f64, step: f64) -> u64 {
    (period / step).ceil() as u64
}

#[test]
fn integration_resets_when_slowest_tracer_completes() {
    let mut surface = RecordingSurface::new();
    let mut ensemble = make_ensemble(4, 11, &mut surface);

    let expected = ensemble
        .tracers()
        .iter()
        .map(|t| ticks_to_complete(t.period_degrees(), t.step()))
        .max()
        .unwrap();

    for tick in 1..expected {
        let outcome = ensemble.tick(&mut surface).unwrap();
        assert!(
            matches!(outcome, TickOutcome::Advanced { completed } if completed < 4),
            "unexpected reset at tick {tick}"
        );
    }

    let outcome = ensemble.tick(&mut surface).unwrap();
    assert_eq!(outcome, TickOutcome::Reset { cycle: 1 });
    assert_eq!(ensemble.state(), EnsembleState::Running);

    // The next tick sees a fresh cycle.
    for snap in ensemble.snapshot() {
        assert_eq!(snap.angle_degrees, 0.0);
        assert!(!snap.complete);
    }
    ensemble.tick(&mut surface).unwrap();
    for t in ensemble.tracers() {
        assert_eq!(t.angle_degrees(), 5.0);
    }
}

#[test]
fn integration_completed_tracers_idle_until_reset() {
    let mut surface = RecordingSurface::new();
    let mut ensemble = make_ensemble(4, 5, &mut surface);

    // Tick until some, but not all, tracers are done.
    while ensemble.completed() == 0 {
        ensemble.tick(&mut surface).unwrap();
    }
    if ensemble.completed() == ensemble.len() {
        return;
    }

    let done: Vec<_> = ensemble
        .tracers()
        .iter()
        .filter(|t| t.is_complete())
        .map(|t| (t.pen(), t.angle_degrees(), surface.line_count(t.pen())))
        .collect();

    let outcome = ensemble.tick(&mut surface).unwrap();
    if outcome == (TickOutcome::Reset { cycle: 1 }) {
        return;
    }
    for (pen, angle, lines) in done {
        let tracer = ensemble.tracers().iter().find(|t| t.pen() == pen).unwrap();
        assert_eq!(tracer.angle_degrees(), angle);
        assert_eq!(surface.line_count(pen), lines);
        assert!(!surface.is_cursor_visible(pen).unwrap());
    }
}

#[test]
fn integration_reset_draws_fresh_strokes_per_pen() {
    let mut surface = RecordingSurface::new();
    let mut ensemble = make_ensemble(2, 21, &mut surface);
    ensemble.tick(&mut surface).unwrap();
    surface.take_log();

    ensemble.restart(&mut surface).unwrap();

    for tracer in ensemble.tracers() {
        let cmds: Vec<_> = surface.commands_for(tracer.pen()).copied().collect();
        assert_eq!(
            cmds,
            vec![
                DrawCommand::Clear,
                DrawCommand::SetColor(tracer.params().color()),
                DrawCommand::ShowCursor,
                DrawCommand::MoveTo(point_at(tracer.params(), 0.0)),
            ]
        );
    }
}

#[test]
fn integration_stroke_starts_at_curve_origin() {
    let mut surface = RecordingSurface::new();
    let params =
        CurveParameters::new(Point2::new(-40.0, 25.0), Color::new(0.3, 0.6, 0.9), 240, 84, 0.35)
            .unwrap();
    let tracer = CurveTracer::new(params, &mut surface).unwrap();
    let first_move = surface
        .commands_for(tracer.pen())
        .find_map(|c| match c {
            DrawCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_move, point_at(&params, 0.0));
    assert!(surface.is_cursor_visible(tracer.pen()).unwrap());
}
