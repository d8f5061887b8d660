//! Wall-clock interval measurement.

use std::time::{Duration, Instant};

/// A start/stop timer for wrapping algorithm calls.
///
/// The core never measures itself; benchmark drivers wrap calls with a
/// `Timer` and read the elapsed time afterwards. Reading a running timer
/// reports the interval up to now without stopping it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Timer {
    started_at: Option<Instant>,
    stopped_after: Option<Duration>,
}

impl Timer {
    /// Creates a stopped timer with no recorded interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the timer.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.stopped_after = None;
    }

    /// Stops the timer, fixing the recorded interval.
    pub fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.stopped_after = Some(started.elapsed());
        }
    }

    /// Clears the timer back to its initial state.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.stopped_after = None;
    }

    fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_after) {
            (Some(started), _) => started.elapsed(),
            (None, Some(fixed)) => fixed,
            (None, None) => Duration::ZERO,
        }
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }

    /// Elapsed time in microseconds.
    #[must_use]
    pub fn elapsed_us(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000_000.0
    }

    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstarted_timer_reads_zero() {
        let timer = Timer::new();
        assert_eq!(timer.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_stop_fixes_interval() {
        let mut timer = Timer::new();
        timer.start();
        timer.stop();
        let first = timer.elapsed_us();
        let second = timer.elapsed_us();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_clears_interval() {
        let mut timer = Timer::new();
        timer.start();
        timer.stop();
        timer.reset();
        assert_eq!(timer.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_unit_consistency() {
        let mut timer = Timer::new();
        timer.start();
        std::thread::sleep(Duration::from_millis(2));
        timer.stop();
        let ms = timer.elapsed_ms();
        assert!((timer.elapsed_us() - ms * 1000.0).abs() < 1.0);
        assert!((timer.elapsed_sec() - ms / 1000.0).abs() < 1e-9);
    }
}
