//! Timers that pace the animation loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One-shot timer the animation loop re-arms after every tick.
pub trait Scheduler {
    /// Wait until the next tick is due.
    ///
    /// Returns `false` once the host has torn down; no further tick may run.
    fn after(&mut self, delay: Duration) -> bool;
}

/// Sleeps on the calling thread between ticks.
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    stop: Arc<AtomicBool>,
    remaining: Option<u64>,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            remaining: None,
        }
    }

    /// Stop after `ticks` more ticks have been scheduled.
    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.remaining = Some(ticks);
        self
    }

    /// Flag that tears the loop down when set from any thread.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadScheduler {
    fn after(&mut self, delay: Duration) -> bool {
        if self.stopped() {
            return false;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }
        std::thread::sleep(delay);
        !self.stopped()
    }
}

/// Fires a fixed number of ticks without sleeping.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    remaining: u64,
    elapsed: Duration,
}

impl ManualScheduler {
    pub fn new(ticks: u64) -> Self {
        Self {
            remaining: ticks,
            elapsed: Duration::ZERO,
        }
    }

    /// Simulated time that would have passed.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay: Duration) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.elapsed += delay;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_budget() {
        let mut s = ManualScheduler::new(3);
        let delay = Duration::from_millis(10);
        assert!(s.after(delay));
        assert!(s.after(delay));
        assert!(s.after(delay));
        assert!(!s.after(delay));
        assert_eq!(s.elapsed(), Duration::from_millis(30));
    }

    #[test]
    fn test_thread_scheduler_tick_limit() {
        let mut s = ThreadScheduler::new().with_tick_limit(2);
        assert!(s.after(Duration::ZERO));
        assert!(s.after(Duration::ZERO));
        assert!(!s.after(Duration::ZERO));
    }

    #[test]
    fn test_thread_scheduler_stop_flag() {
        let mut s = ThreadScheduler::new();
        let stop = s.stop_handle();
        assert!(s.after(Duration::ZERO));
        stop.store(true, Ordering::SeqCst);
        assert!(!s.after(Duration::ZERO));
    }
}
