//! Frame-quantized pause countdown

/// Countdown in microseconds, consumed one frame quantum per update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauseTimer {
    remaining_us: f32,
    quantum_us: f32,
}

impl PauseTimer {
    pub fn new(quantum_us: f32) -> Self {
        debug_assert!(quantum_us > 0.0, "frame quantum must be positive");
        Self {
            remaining_us: 0.0,
            quantum_us,
        }
    }

    /// Start (or restart) the countdown
    pub fn pause(&mut self, duration_us: f32) {
        self.remaining_us = duration_us;
    }

    /// Advance one frame. Returns true if the owner must skip this frame.
    ///
    /// The frame that consumes the last quantum is still skipped; the
    /// countdown is cleared to zero on the first frame it is found spent.
    pub fn tick(&mut self) -> bool {
        if self.remaining_us > 0.0 {
            self.remaining_us -= self.quantum_us;
            true
        } else {
            self.remaining_us = 0.0;
            false
        }
    }

    pub fn is_paused(&self) -> bool {
        self.remaining_us > 0.0
    }

    pub fn remaining_us(&self) -> f32 {
        self.remaining_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_blocks() {
        let mut timer = PauseTimer::new(1000.0);
        assert!(!timer.tick());
        assert_eq!(timer.remaining_us(), 0.0);
    }

    #[test]
    fn test_pause_blocks_for_whole_quanta() {
        let mut timer = PauseTimer::new(1000.0);
        timer.pause(2500.0);
        assert!(timer.tick()); // 1500
        assert!(timer.tick()); // 500
        assert!(timer.tick()); // -500
        assert!(!timer.is_paused());
        assert!(!timer.tick());
        assert_eq!(timer.remaining_us(), 0.0);
    }

    #[test]
    fn test_repause_overrides() {
        let mut timer = PauseTimer::new(1000.0);
        timer.pause(10_000.0);
        timer.tick();
        timer.pause(500.0);
        assert!(timer.tick());
        assert!(!timer.tick());
    }
}
