//! Frame timing shared by the per-frame animations
//!
//! `requestAnimationFrame` hands callbacks a high resolution timestamp in
//! milliseconds. `FrameClock` turns those into elapsed time since the first
//! frame so the animation models stay independent of the browser.

/// What a per-frame callback wants after running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Schedule another frame
    Continue,
    /// Animation finished, do not schedule again
    Stop,
}

impl FrameControl {
    pub fn is_continue(&self) -> bool {
        matches!(self, FrameControl::Continue)
    }
}

/// Converts frame timestamps into elapsed milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    origin: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time for a frame timestamp; the first timestamp seen is time zero.
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin.get_or_insert(timestamp_ms);
        (timestamp_ms - origin).max(0.0)
    }

    pub fn has_started(&self) -> bool {
        self.origin.is_some()
    }

    pub fn reset(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert!(!clock.has_started());
        assert_eq!(clock.elapsed(1234.5), 0.0);
        assert!(clock.has_started());
        assert_eq!(clock.elapsed(1250.5), 16.0);
    }

    #[test]
    fn test_elapsed_never_negative() {
        let mut clock = FrameClock::new();
        clock.elapsed(100.0);
        assert_eq!(clock.elapsed(90.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.elapsed(100.0);
        clock.reset();
        assert_eq!(clock.elapsed(500.0), 0.0);
    }
}
