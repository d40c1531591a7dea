use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the frame loop so ticks happen at a steady rate, regardless of how long each tick takes
/// to simulate.
pub struct Metronome {
    /// When the current frame started. While the loop keeps up this advances by exactly
    /// frame_time each frame instead of being re-measured, so the rate does not drift.
    frame_start: Instant,
    /// Wall-clock seconds each frame should take, or 0 to never sleep
    frame_time: f64,
    /// Number of frames that overran their budget since creation
    overruns: u64,
}

impl Metronome {
    /// `tick_rate` is in frames per second. A rate of 0 disables pacing entirely, which is what
    /// headless batch runs and tests want.
    pub fn new(tick_rate: f64) -> Self {
        assert!(tick_rate >= 0.0);
        Self {
            frame_start: Instant::now(),
            frame_time: if tick_rate > 0.0 { 1.0 / tick_rate } else { 0.0 },
            overruns: 0,
        }
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Sleeps for whatever is left of the current frame. If the frame already took longer than
    /// its budget this returns immediately and the schedule restarts from now; the lost time is
    /// not made up later.
    pub fn wait_for_next_frame(&mut self) {
        if self.frame_time <= 0.0 {
            return;
        }
        let elapsed = self.frame_start.elapsed().as_secs_f64();
        let remaining = self.frame_time - elapsed;
        if remaining >= 0.0 {
            sleep(Duration::from_secs_f64(remaining));
            self.frame_start += Duration::from_secs_f64(self.frame_time);
        } else {
            self.overruns += 1;
            trace!(
                "frame took {:?}, {:?} over budget",
                Duration::from_secs_f64(elapsed),
                Duration::from_secs_f64(-remaining)
            );
            self.frame_start = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION_EPSILON: f64 = 0.01;
    const FRAME_RATE: f64 = 5.0;
    const FRAME_TIME: f64 = 1.0 / FRAME_RATE;

    fn assert_duration_eq(duration: Duration, expected: f64) {
        let error = (duration.as_secs_f64() - expected).abs();
        if error > DURATION_EPSILON {
            panic!("{:?} ≉ {:?}", duration, Duration::from_secs_f64(expected));
        }
    }

    #[test]
    fn zero_rate_never_sleeps() {
        let mut m = Metronome::new(0.0);
        let start = Instant::now();
        for _ in 0..100 {
            m.wait_for_next_frame();
        }
        assert_duration_eq(start.elapsed(), 0.0);
    }

    #[test]
    fn sleeps_for_one_frame() {
        let mut m = Metronome::new(FRAME_RATE);
        let start = Instant::now();
        m.wait_for_next_frame();
        assert_duration_eq(start.elapsed(), FRAME_TIME);
    }

    #[test]
    fn repeated_frames_do_not_drift() {
        let mut m = Metronome::new(FRAME_RATE);
        let start = Instant::now();
        m.wait_for_next_frame();
        m.wait_for_next_frame();
        m.wait_for_next_frame();
        assert_duration_eq(start.elapsed(), FRAME_TIME * 3.0);
    }

    #[test]
    fn only_sleeps_for_remainder_of_frame() {
        let mut m = Metronome::new(FRAME_RATE);
        sleep(Duration::from_secs_f64(FRAME_TIME * 0.6));
        let start = Instant::now();
        m.wait_for_next_frame();
        assert_duration_eq(start.elapsed(), FRAME_TIME * 0.4);
    }

    #[test]
    fn overrun_returns_immediately_and_is_counted() {
        let mut m = Metronome::new(FRAME_RATE);
        sleep(Duration::from_secs_f64(FRAME_TIME * 1.5));
        let start = Instant::now();
        m.wait_for_next_frame();
        assert_duration_eq(start.elapsed(), 0.0);
        assert_eq!(m.overruns(), 1);
    }

    #[test]
    fn schedule_restarts_after_overrun() {
        let mut m = Metronome::new(FRAME_RATE);
        sleep(Duration::from_secs_f64(FRAME_TIME * 1.5));
        m.wait_for_next_frame();
        let start = Instant::now();
        m.wait_for_next_frame();
        assert_duration_eq(start.elapsed(), FRAME_TIME);
    }
}
