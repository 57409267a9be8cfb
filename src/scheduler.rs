/*
 * Scheduler Module
 *
 * The StepScheduler gates the per-frame callback of the host loop to a fixed
 * minimum interval. When enough wall-clock time has passed it reports the real
 * elapsed time in milliseconds, which is then used as the simulation step, so
 * the flock advances with a variable timestep behind a fixed-rate gate.
 */

use std::time::{Duration, Instant};

pub const FIXED_FRAME_RATE: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct StepScheduler {
    interval: Duration,
    last_update: Instant,
}

impl StepScheduler {
    pub fn new(now: Instant) -> Self {
        Self::with_interval(Duration::from_secs_f32(1.0 / FIXED_FRAME_RATE), now)
    }

    // A zero interval lets every callback through
    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_update: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Returns the elapsed milliseconds since the previous step when a step is due
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.last_update);
        if elapsed < self.interval {
            return None;
        }

        self.last_update = now;
        Some(elapsed.as_secs_f32() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_callbacks_are_skipped() {
        let start = Instant::now();
        let mut scheduler = StepScheduler::new(start);

        assert_eq!(scheduler.tick(start + Duration::from_millis(5)), None);
        assert_eq!(scheduler.tick(start + Duration::from_millis(16)), None);
    }

    #[test]
    fn due_tick_reports_real_elapsed_time() {
        let start = Instant::now();
        let mut scheduler = StepScheduler::new(start);

        let delta = scheduler.tick(start + Duration::from_millis(40)).expect("tick is due");
        assert!((delta - 40.0).abs() < 1e-3);
    }

    #[test]
    fn skipped_time_accumulates_into_the_next_step() {
        let start = Instant::now();
        let mut scheduler = StepScheduler::new(start);

        assert!(scheduler.tick(start + Duration::from_millis(10)).is_none());
        let delta = scheduler.tick(start + Duration::from_millis(20)).expect("tick is due");
        assert!((delta - 20.0).abs() < 1e-3);

        // the gate restarts from the last executed step
        assert!(scheduler.tick(start + Duration::from_millis(30)).is_none());
        assert!(scheduler.tick(start + Duration::from_millis(37)).is_some());
    }

    #[test]
    fn default_interval_matches_fixed_frame_rate() {
        let scheduler = StepScheduler::new(Instant::now());
        let millis = scheduler.interval().as_secs_f64() * 1000.0;
        assert!((millis - 1000.0 / 60.0).abs() < 1e-3);
    }

    #[test]
    fn zero_interval_steps_on_every_callback() {
        let start = Instant::now();
        let mut scheduler = StepScheduler::with_interval(Duration::ZERO, start);

        assert_eq!(scheduler.tick(start), Some(0.0));
        let delta = scheduler.tick(start + Duration::from_millis(3)).expect("tick is due");
        assert!((delta - 3.0).abs() < 1e-3);
    }
}
