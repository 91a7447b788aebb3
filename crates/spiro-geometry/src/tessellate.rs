//! Uniform angular sampling of curves.

use spiro_core::Tolerance;

/// Number of `step`-sized increments needed to reach `end`, i.e. `ceil(end / step)`.
///
/// When a whole number of steps lands on `end` within angular tolerance, that
/// count is used, so rounding in `end / step` never adds a step.
pub fn step_count(end: f64, step: f64) -> u64 {
    let tol = Tolerance::default();
    let turns = end / step;
    let nearest = turns.round();
    if tol.angular_eq(nearest * step, end) {
        nearest as u64
    } else {
        turns.ceil() as u64
    }
}

/// Angles `0, step, 2*step, ...` up to and including `end`.
///
/// Samples are produced lazily. The last sample is always `end` itself, even
/// when `step` does not divide it.
pub fn angle_samples(end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = step_count(end, step);
    (0..count)
        .map(move |i| i as f64 * step)
        .chain(std::iter::once(end))
}
