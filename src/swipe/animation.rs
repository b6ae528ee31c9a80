//! Time-driven animation of a single scalar.
//!
//! Swipe rows animate one value at a time (horizontal offset, or collapse
//! progress), so instead of a frame-callback runtime a [`Motion`] is sampled
//! with the current [`Instant`] on every UI tick.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Fixed integration step for spring physics (~60 fps).
const SPRING_TIMESTEP: f32 = 0.016;

/// Upper bound on the progress velocity a release may inject into a spring.
const MAX_SEED_VELOCITY: f32 = 20.0;

/// Easing curves applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinear,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinear => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Evaluate a CSS-style cubic bezier with control points `(x1, y1)`, `(x2, y2)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let derivative = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parametric t matching the x fraction, falling
    // back to bisection when the slope flattens out.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Fixed-duration animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(200, Easing::FastOutSlowIn)
    }
}

/// Damped spring, integrated in progress space (0 = start, 1 = target).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSpec {
    /// 1.0 = critically damped, below 1.0 bounces.
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

/// How a value travels from its start to its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionSpec {
    Tween {
        duration_ms: u64,
        easing: Easing,
    },
    Spring {
        #[serde(default = "default_damping_ratio")]
        damping_ratio: f32,
        #[serde(default = "default_stiffness")]
        stiffness: f32,
    },
}

fn default_damping_ratio() -> f32 {
    SpringSpec::default().damping_ratio
}

fn default_stiffness() -> f32 {
    SpringSpec::default().stiffness
}

impl MotionSpec {
    pub fn tween(duration_ms: u64, easing: Easing) -> Self {
        Self::Tween { duration_ms, easing }
    }

    pub fn spring(spec: SpringSpec) -> Self {
        Self::Spring {
            damping_ratio: spec.damping_ratio,
            stiffness: spec.stiffness,
        }
    }

    /// Reject parameters that would never settle.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            MotionSpec::Tween { .. } => Ok(()),
            MotionSpec::Spring {
                damping_ratio,
                stiffness,
            } => {
                if !(damping_ratio > 0.0) {
                    return Err(format!("spring damping_ratio must be positive, got {damping_ratio}"));
                }
                if !(stiffness > 0.0) {
                    return Err(format!("spring stiffness must be positive, got {stiffness}"));
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Driver {
    Tween(TweenSpec),
    Spring {
        spec: SpringSpec,
        progress: f32,
        velocity: f32,
        integrated: Duration,
    },
}

/// A scalar animating from `from` to `to`, sampled by wall-clock time.
#[derive(Debug, Clone)]
pub struct Motion {
    from: f32,
    to: f32,
    started_at: Instant,
    driver: Driver,
    finished: bool,
}

impl Motion {
    /// Start a motion at `now`. `velocity` is in value units per second and
    /// only seeds springs.
    pub fn start(from: f32, to: f32, spec: MotionSpec, now: Instant, velocity: f32) -> Self {
        let span = to - from;
        let driver = match spec {
            MotionSpec::Tween { duration_ms, easing } => Driver::Tween(TweenSpec::new(duration_ms, easing)),
            MotionSpec::Spring {
                damping_ratio,
                stiffness,
            } => {
                let seed = if span.abs() > f32::EPSILON {
                    (velocity / span).clamp(-MAX_SEED_VELOCITY, MAX_SEED_VELOCITY)
                } else {
                    0.0
                };
                Driver::Spring {
                    spec: SpringSpec {
                        damping_ratio,
                        stiffness,
                        ..SpringSpec::default()
                    },
                    progress: 0.0,
                    velocity: seed,
                    integrated: Duration::ZERO,
                }
            }
        };

        Self {
            from,
            to,
            started_at: now,
            driver,
            finished: span.abs() <= f32::EPSILON,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `now` and return the current value.
    pub fn advance(&mut self, now: Instant) -> f32 {
        if self.finished {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);

        match &mut self.driver {
            Driver::Tween(spec) => {
                let duration = Duration::from_millis(spec.duration_ms);
                if duration.is_zero() || elapsed >= duration {
                    self.finished = true;
                    return self.to;
                }
                let linear = elapsed.as_secs_f32() / duration.as_secs_f32();
                let eased = spec.easing.transform(linear);
                self.from + (self.to - self.from) * eased
            }
            Driver::Spring {
                spec,
                progress,
                velocity,
                integrated,
            } => {
                let damping = 2.0 * spec.damping_ratio * spec.stiffness.sqrt();
                let mut remaining = elapsed.saturating_sub(*integrated).as_secs_f32();

                // Semi-implicit Euler in fixed steps for stability.
                while remaining > 0.0 {
                    let step = SPRING_TIMESTEP.min(remaining);
                    let displacement = *progress - 1.0;
                    let force = -spec.stiffness * displacement - damping * *velocity;
                    *velocity += force * step;
                    *progress = (*progress + *velocity * step).clamp(0.0, 2.0);
                    remaining -= step;
                }
                *integrated = elapsed;

                let at_rest = velocity.abs() < spec.velocity_threshold;
                let near_target = (*progress - 1.0).abs() < spec.position_threshold;
                if at_rest && near_target {
                    self.finished = true;
                    return self.to;
                }
                self.from + (self.to - self.from) * *progress
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
            Easing::FastOutLinear,
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
            let mid = easing.transform(0.5);
            assert!((0.0..=1.0).contains(&mid), "{easing:?} midpoint out of range: {mid}");
        }
    }

    #[test]
    fn test_tween_reaches_target_at_duration() {
        let t0 = Instant::now();
        let mut motion = Motion::start(0.0, 10.0, MotionSpec::tween(100, Easing::Linear), t0, 0.0);

        let halfway = motion.advance(t0 + Duration::from_millis(50));
        assert!((halfway - 5.0).abs() < 0.01);
        assert!(!motion.is_finished());

        assert_eq!(motion.advance(t0 + Duration::from_millis(100)), 10.0);
        assert!(motion.is_finished());
    }

    #[test]
    fn test_zero_length_motion_is_finished() {
        let t0 = Instant::now();
        let motion = Motion::start(3.0, 3.0, MotionSpec::spring(SpringSpec::default()), t0, 50.0);
        assert!(motion.is_finished());
    }

    #[test]
    fn test_spring_settles() {
        let t0 = Instant::now();
        let mut motion = Motion::start(12.0, 0.0, MotionSpec::spring(SpringSpec::default()), t0, 0.0);

        let mut now = t0;
        for _ in 0..200 {
            now += Duration::from_millis(16);
            motion.advance(now);
            if motion.is_finished() {
                break;
            }
        }
        assert!(motion.is_finished());
        assert_eq!(motion.advance(now), 0.0);
    }

    #[test]
    fn test_spring_validation() {
        let bad = MotionSpec::Spring {
            damping_ratio: 0.0,
            stiffness: 1500.0,
        };
        assert!(bad.validate().is_err());
        assert!(MotionSpec::spring(SpringSpec::stiff()).validate().is_ok());
    }
}
