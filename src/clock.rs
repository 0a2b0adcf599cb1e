//! Fixed-rate pacing for simulation ticks.
//!
//! [`Cloth::tick`](crate::Cloth::tick) advances the simulation by one fixed
//! frame's worth of sub-steps, so a render loop running at a variable frame
//! rate needs something to decide how many ticks it owes each frame.
//! [`StepClock`] is that something: feed it wall-clock deltas, get back a
//! whole number of ticks to run.
//!
//! The clock never reads the system time itself; the caller supplies deltas
//! from whatever timing source the host loop already has.
//!
//! # Example
//!
//! ```
//! use drape::clock::StepClock;
//!
//! let mut clock = StepClock::new(60.0);
//!
//! // In the frame loop:
//! let frame_delta = 1.0 / 144.0;
//! for _ in 0..clock.advance(frame_delta) {
//!     // cloth.tick();
//! }
//! ```

/// Converts real elapsed time into a whole number of fixed-rate ticks.
///
/// Leftover time below one tick period carries over to the next frame, so
/// the long-run tick rate matches `tick_rate` regardless of frame timing.
#[derive(Debug, Clone)]
pub struct StepClock {
    /// Ticks per second.
    tick_rate: f32,
    /// Unspent simulation time in seconds.
    accumulator: f32,
    /// Upper bound on ticks returned per frame.
    max_ticks_per_frame: u32,
    /// Time scale multiplier (1.0 = real time).
    time_scale: f32,
    /// Whether the clock is paused.
    paused: bool,
    /// Total ticks handed out since creation.
    tick_count: u64,
}

impl StepClock {
    /// Create a clock producing `tick_rate` ticks per second.
    ///
    /// Non-positive rates are clamped to one tick per second.
    pub fn new(tick_rate: f32) -> Self {
        Self {
            tick_rate: if tick_rate > 0.0 { tick_rate } else { 1.0 },
            accumulator: 0.0,
            max_ticks_per_frame: 8,
            time_scale: 1.0,
            paused: false,
            tick_count: 0,
        }
    }

    /// Feed `delta` seconds of real time and get the number of ticks owed.
    ///
    /// Returns 0 while paused. A frame stall can owe a large backlog; the
    /// count is clamped to the per-frame maximum and the excess backlog is
    /// discarded.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if self.paused {
            return 0;
        }

        self.accumulator += delta.max(0.0) * self.time_scale;
        let period = 1.0 / self.tick_rate;

        let mut ticks = 0;
        while self.accumulator >= period && ticks < self.max_ticks_per_frame {
            self.accumulator -= period;
            ticks += 1;
        }
        if ticks == self.max_ticks_per_frame {
            self.accumulator = 0.0;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Ticks per second this clock produces.
    #[inline]
    pub fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    /// Total ticks handed out since creation.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    /// Whether the clock is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Stop producing ticks. Accumulated leftover time is kept.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume producing ticks.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle between paused and running.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the time scale multiplier.
    ///
    /// - `1.0` = real time
    /// - `0.5` = slow motion
    /// - `2.0` = double speed
    ///
    /// Negative scales clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Set the per-frame tick clamp (minimum 1).
    pub fn set_max_ticks_per_frame(&mut self, max: u32) {
        self.max_ticks_per_frame = max.max(1);
    }
}

impl Default for StepClock {
    /// A 60 Hz clock, matching a typical display refresh.
    fn default() -> Self {
        Self::new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_periods_yield_exact_ticks() {
        let mut clock = StepClock::new(60.0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
        assert_eq!(clock.advance(2.0 / 60.0), 2);
        assert_eq!(clock.ticks(), 3);
    }

    #[test]
    fn test_leftover_time_carries_over() {
        let mut clock = StepClock::new(60.0);
        // Half a period: no tick yet.
        assert_eq!(clock.advance(0.5 / 60.0), 0);
        // The other half completes the period.
        assert_eq!(clock.advance(0.5 / 60.0), 1);
    }

    #[test]
    fn test_backlog_is_clamped_and_discarded() {
        let mut clock = StepClock::new(60.0);
        clock.set_max_ticks_per_frame(4);

        // A two-second stall owes 120 ticks; only 4 are returned.
        assert_eq!(clock.advance(2.0), 4);
        // The backlog does not leak into the next frame.
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_paused_clock_produces_nothing() {
        let mut clock = StepClock::new(60.0);
        clock.pause();
        assert_eq!(clock.advance(1.0), 0);

        clock.resume();
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn test_time_scale_stretches_deltas() {
        let mut clock = StepClock::new(60.0);
        clock.set_time_scale(2.0);
        assert_eq!(clock.advance(1.0 / 60.0), 2);

        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale(), 0.0);
        assert_eq!(clock.advance(1.0), 0);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut clock = StepClock::new(60.0);
        assert_eq!(clock.advance(-5.0), 0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn test_non_positive_rate_clamps() {
        let clock = StepClock::new(0.0);
        assert_eq!(clock.tick_rate(), 1.0);
    }
}
