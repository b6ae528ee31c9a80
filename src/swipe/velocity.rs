//! Release velocity estimation.

use std::time::{Duration, Instant};

const HISTORY_SIZE: usize = 20;

/// Only samples this recent contribute to the estimate.
const HORIZON: Duration = Duration::from_millis(100);

/// A gap this long between samples means the pointer had stopped.
const ASSUME_STOPPED: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Instant,
    position: f32,
}

/// Tracks absolute positions in a ring buffer and estimates velocity in
/// units per second from the most recent continuous stretch of movement.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    pub fn add(&mut self, at: Instant, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { at, position });
    }

    /// Velocity between the oldest usable sample and the newest one.
    ///
    /// Returns 0.0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut oldest = newest;
        let mut previous = newest;
        let mut cursor = self.index;
        for _ in 1..HISTORY_SIZE {
            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
            let Some(sample) = self.samples[cursor] else {
                break;
            };
            if sample.at > previous.at {
                break;
            }
            let age = newest.at.duration_since(sample.at);
            let gap = previous.at.duration_since(sample.at);
            if age > HORIZON || gap > ASSUME_STOPPED {
                break;
            }
            oldest = sample;
            previous = sample;
        }

        let span = newest.at.duration_since(oldest.at).as_secs_f32();
        if span <= f32::EPSILON {
            return 0.0;
        }
        (newest.position - oldest.position) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_motion() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new();
        for i in 0..5u64 {
            tracker.add(t0 + Duration::from_millis(i * 10), i as f32 * 2.0);
        }
        // 2 units every 10ms
        assert!((tracker.velocity() - 200.0).abs() < 0.5);
    }

    #[test]
    fn test_single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add(Instant::now(), 5.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_pause_discards_older_movement() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.add(t0, 0.0);
        tracker.add(t0 + Duration::from_millis(10), 20.0);
        // pointer rests, then a single late sample at the same spot
        tracker.add(t0 + Duration::from_millis(200), 20.0);
        assert_eq!(tracker.velocity(), 0.0);
    }
}
