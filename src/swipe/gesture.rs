//! Horizontal drag tracking.
//!
//! The tracker owns nothing but the numbers of one gesture: it decides when a
//! drag becomes "ours" (the activation gate), clamps the renderable offset,
//! and hands the final sample to the commit decision on release.

use super::velocity::VelocityTracker;
use std::time::Instant;

/// Net horizontal displacement and velocity of a gesture at release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub dx: f32,
    pub velocity_x: f32,
}

/// Result of feeding one movement to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drag {
    /// Not claimed: the movement belongs to the enclosing scroll view.
    Unclaimed,
    /// Claimed horizontal drag. `activated` is true only for the movement
    /// that passed the gate.
    Claimed { offset: f32, activated: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Idle,
    Pending,
    Active,
}

/// Converts cumulative drag deltas into a clamped offset.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    activation_distance: f32,
    max_reveal: f32,
    state: TrackerState,
    dx: f32,
    offset: f32,
    velocity: VelocityTracker,
}

impl GestureTracker {
    pub fn new(activation_distance: f32, max_reveal: f32) -> Self {
        Self {
            activation_distance,
            max_reveal,
            state: TrackerState::Idle,
            dx: 0.0,
            offset: 0.0,
            velocity: VelocityTracker::new(),
        }
    }

    pub fn max_reveal(&self) -> f32 {
        self.max_reveal
    }

    /// Arm the tracker for a new gesture.
    pub fn begin(&mut self, now: Instant) {
        self.state = TrackerState::Pending;
        self.dx = 0.0;
        self.offset = 0.0;
        self.velocity.reset();
        self.velocity.add(now, 0.0);
    }

    pub fn is_tracking(&self) -> bool {
        self.state != TrackerState::Idle
    }

    pub fn is_active(&self) -> bool {
        self.state == TrackerState::Active
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Unclamped displacement of the claimed drag.
    pub fn travel(&self) -> f32 {
        self.dx
    }

    /// Feed the cumulative displacement since touch-down.
    pub fn track(&mut self, dx: f32, dy: f32, now: Instant) -> Drag {
        match self.state {
            TrackerState::Idle => Drag::Unclaimed,
            TrackerState::Pending => {
                if dx.abs() > dy.abs() && dx.abs() > self.activation_distance {
                    self.state = TrackerState::Active;
                    self.update(dx, now);
                    Drag::Claimed {
                        offset: self.offset,
                        activated: true,
                    }
                } else {
                    Drag::Unclaimed
                }
            }
            TrackerState::Active => {
                self.update(dx, now);
                Drag::Claimed {
                    offset: self.offset,
                    activated: false,
                }
            }
        }
    }

    fn update(&mut self, dx: f32, now: Instant) {
        self.dx = dx;
        self.offset = dx.clamp(-self.max_reveal, self.max_reveal);
        self.velocity.add(now, dx);
    }

    /// End the gesture. Returns the final sample only if the gate passed.
    pub fn release(&mut self) -> Option<DragSample> {
        let sample = (self.state == TrackerState::Active).then(|| DragSample {
            dx: self.dx,
            velocity_x: self.velocity.velocity(),
        });
        self.state = TrackerState::Idle;
        sample
    }
}
