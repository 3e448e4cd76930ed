//! Count-up animation model
//!
//! Drives the animated statistics ("+150 active users"): the displayed value
//! climbs from `start` to `end` over `duration_ms`, one update per frame.

use super::frame::{FrameClock, FrameControl};

/// Default count-up duration in milliseconds
pub const DEFAULT_COUNT_DURATION_MS: f64 = 2000.0;

/// Progress of a numeric count-up animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    start: i64,
    end: i64,
    duration_ms: f64,
    current: i64,
    started: bool,
    finished: bool,
    clock: FrameClock,
}

impl CountUp {
    pub fn new(end: i64, duration_ms: f64) -> Self {
        Self::with_start(0, end, duration_ms)
    }

    pub fn with_start(start: i64, end: i64, duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        Self {
            start,
            end,
            duration_ms,
            current: start,
            started: false,
            finished: false,
            clock: FrameClock::new(),
        }
    }

    /// Arm the animation.
    ///
    /// Returns true only for the call that actually started it; later calls
    /// (including after completion) change nothing.
    pub fn start_counting(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Advance to the given frame timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameControl {
        if !self.started || self.finished {
            return FrameControl::Stop;
        }

        let elapsed = self.clock.elapsed(timestamp_ms);
        let progress = self.progress_at(elapsed);
        let span = (self.end - self.start) as f64;
        let value = (self.start as f64 + span * progress).floor() as i64;

        self.current = if self.end >= self.start {
            value.clamp(self.start, self.end)
        } else {
            value.clamp(self.end, self.start)
        };

        if progress >= 1.0 {
            self.current = self.end;
            self.finished = true;
            FrameControl::Stop
        } else {
            FrameControl::Continue
        }
    }

    fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_until_started() {
        let mut count = CountUp::new(100, 1000.0);
        assert_eq!(count.tick(0.0), FrameControl::Stop);
        assert_eq!(count.tick(5000.0), FrameControl::Stop);
        assert_eq!(count.current(), 0);
    }

    #[test]
    fn test_counts_to_end() {
        let mut count = CountUp::new(150, 2000.0);
        assert!(count.start_counting());

        assert_eq!(count.tick(1000.0), FrameControl::Continue);
        assert_eq!(count.current(), 0);
        assert_eq!(count.tick(2000.0), FrameControl::Continue);
        assert_eq!(count.current(), 75);
        assert_eq!(count.tick(3000.0), FrameControl::Stop);
        assert_eq!(count.current(), 150);
        assert!(count.is_finished());
    }

    #[test]
    fn test_monotonic_and_bounded() {
        for &(end, duration) in &[(1i64, 1.0), (45, 2000.0), (85, 333.0), (10_000, 1500.0)] {
            let mut count = CountUp::new(end, duration);
            count.start_counting();
            let mut previous = 0;
            let mut t = 0.0;
            while count.tick(t).is_continue() {
                assert!(count.current() >= previous);
                assert!(count.current() <= end);
                previous = count.current();
                t += 16.7;
            }
            assert_eq!(count.current(), end);
            assert!(t >= duration);
        }
    }

    #[test]
    fn test_custom_start() {
        let mut count = CountUp::with_start(10, 20, 100.0);
        assert_eq!(count.current(), 10);
        count.start_counting();
        count.tick(0.0);
        count.tick(50.0);
        assert_eq!(count.current(), 15);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut count = CountUp::new(50, 100.0);
        assert!(count.start_counting());
        count.tick(0.0);
        count.tick(200.0);
        assert!(count.is_finished());

        assert!(!count.start_counting());
        assert_eq!(count.tick(300.0), FrameControl::Stop);
        assert_eq!(count.current(), 50);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut count = CountUp::new(42, 0.0);
        count.start_counting();
        assert_eq!(count.tick(10.0), FrameControl::Stop);
        assert_eq!(count.current(), 42);
    }

    #[test]
    fn test_non_finite_duration() {
        let mut count = CountUp::new(7, f64::NAN);
        count.start_counting();
        assert_eq!(count.tick(0.0), FrameControl::Stop);
        assert_eq!(count.current(), 7);
    }
}
