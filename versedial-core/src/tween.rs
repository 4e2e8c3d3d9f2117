//! Time-based rotation interpolation
//!
//! A tween captures the shortest-path delta between two rotations at
//! construction and interpolates it over a fixed duration with an easing
//! curve. The caller owns the clock (animation frames, a tokio interval,
//! a test loop); the tween itself is pure state.

use std::time::Duration;

use crate::dial::{shortest_delta, wrapped_distance};
use crate::easing::Easing;

/// Minimum spin duration, before per-slice scaling
pub const BASE_SPIN: Duration = Duration::from_millis(500);

/// Additional duration per slice of ring travel
pub const SPIN_PER_SLICE: Duration = Duration::from_millis(25);

/// Pause between automatic sequencer advances
pub const DWELL: Duration = Duration::from_millis(700);

/// Spin duration scaled by the ring distance traveled
pub fn spin_duration(from_id: u32, to_id: u32) -> Duration {
    BASE_SPIN + SPIN_PER_SLICE * wrapped_distance(from_id, to_id)
}

/// An in-progress rotation animation
#[derive(Debug, Clone, Copy)]
pub struct RotationTween {
    start: f64,
    delta: f64,
    duration: Duration,
    easing: Easing,
}

impl RotationTween {
    /// Tween from `start` toward `target`, always the short way around
    pub fn new(start: f64, target: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            delta: shortest_delta(start, target),
            duration,
            easing,
        }
    }

    /// Rotation at `elapsed` time into the animation
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        self.start + self.delta * self.easing.apply(progress)
    }

    /// Final rotation once the tween completes
    pub fn end(&self) -> f64 {
        self.start + self.delta
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
