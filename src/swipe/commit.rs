//! Release-time commit decision.

use super::binding::{ActionBinding, SwipeDirection};
use super::gesture::DragSample;
use serde::{Deserialize, Serialize};

/// The single terminal decision of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    CommitLeft,
    CommitRight,
    Cancel,
}

impl GestureOutcome {
    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            GestureOutcome::CommitLeft => Some(SwipeDirection::Left),
            GestureOutcome::CommitRight => Some(SwipeDirection::Right),
            GestureOutcome::Cancel => None,
        }
    }

    pub fn is_commit(self) -> bool {
        self != GestureOutcome::Cancel
    }
}

/// Distance a release must exceed to commit, in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Threshold {
    /// Fixed distance in logical units.
    Absolute { distance: f32 },
    /// Fraction of the viewport width.
    ScreenFraction { fraction: f32 },
}

impl Threshold {
    pub fn absolute(distance: f32) -> Self {
        Self::Absolute { distance }
    }

    pub fn screen_fraction(fraction: f32) -> Self {
        Self::ScreenFraction { fraction }
    }

    pub fn resolve(&self, viewport_width: f32) -> f32 {
        match *self {
            Threshold::Absolute { distance } => distance,
            Threshold::ScreenFraction { fraction } => fraction * viewport_width,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Threshold::Absolute { distance } if !(distance > 0.0) => {
                Err(format!("absolute threshold must be positive, got {distance}"))
            }
            Threshold::ScreenFraction { fraction } if !(fraction > 0.0 && fraction <= 1.0) => {
                Err(format!("screen fraction threshold must be in (0, 1], got {fraction}"))
            }
            _ => Ok(()),
        }
    }
}

/// Both thresholds resolved to distances for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedThresholds {
    pub positive: f32,
    pub negative: f32,
}

impl ResolvedThresholds {
    pub fn new(positive: &Threshold, negative: &Threshold, viewport_width: f32) -> Self {
        Self {
            positive: positive.resolve(viewport_width),
            negative: negative.resolve(viewport_width),
        }
    }

    pub fn for_direction(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::Right => self.positive,
            SwipeDirection::Left => self.negative,
        }
    }
}

/// Decide the outcome of a released gesture.
///
/// A direction that crossed its threshold but has nothing bound cancels.
pub fn decide<A>(sample: &DragSample, thresholds: ResolvedThresholds, binding: &ActionBinding<A>) -> GestureOutcome {
    if sample.dx > thresholds.positive {
        if binding.right.is_some() {
            return GestureOutcome::CommitRight;
        }
    } else if sample.dx < -thresholds.negative && binding.left.is_some() {
        return GestureOutcome::CommitLeft;
    }
    GestureOutcome::Cancel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::binding::{ActionIcon, ActionStyle, SwipeAction};

    fn style() -> ActionStyle {
        ActionStyle {
            label: "Go",
            icon: ActionIcon::Check,
            color: "success",
        }
    }

    fn both() -> ActionBinding<u8> {
        ActionBinding::new()
            .on_right(SwipeAction::new(1, style()))
            .on_left(SwipeAction::new(2, style()).destructive())
    }

    fn sample(dx: f32) -> DragSample {
        DragSample { dx, velocity_x: 0.0 }
    }

    #[test]
    fn test_decision_by_direction() {
        let thresholds = ResolvedThresholds {
            positive: 6.0,
            negative: 6.0,
        };
        assert_eq!(decide(&sample(7.0), thresholds, &both()), GestureOutcome::CommitRight);
        assert_eq!(decide(&sample(-7.0), thresholds, &both()), GestureOutcome::CommitLeft);
        assert_eq!(decide(&sample(6.0), thresholds, &both()), GestureOutcome::Cancel);
        assert_eq!(decide(&sample(-2.0), thresholds, &both()), GestureOutcome::Cancel);
    }

    #[test]
    fn test_independent_thresholds() {
        let thresholds = ResolvedThresholds {
            positive: 3.0,
            negative: 10.0,
        };
        assert_eq!(decide(&sample(4.0), thresholds, &both()), GestureOutcome::CommitRight);
        assert_eq!(decide(&sample(-4.0), thresholds, &both()), GestureOutcome::Cancel);
    }

    #[test]
    fn test_unbound_direction_cancels() {
        let only_left: ActionBinding<u8> = ActionBinding::new().on_left(SwipeAction::new(2, style()));
        let thresholds = ResolvedThresholds {
            positive: 6.0,
            negative: 6.0,
        };
        assert_eq!(decide(&sample(50.0), thresholds, &only_left), GestureOutcome::Cancel);
        assert_eq!(decide(&sample(-50.0), thresholds, &only_left), GestureOutcome::CommitLeft);
    }

    #[test]
    fn test_decision_is_deterministic() {
        let thresholds = ResolvedThresholds::new(&Threshold::absolute(6.0), &Threshold::screen_fraction(0.25), 40.0);
        let binding = both();
        for dx in [-20.0, -10.5, -10.0, -3.0, 0.0, 5.9, 6.1, 30.0] {
            let first = decide(&sample(dx), thresholds, &binding);
            for _ in 0..10 {
                assert_eq!(decide(&sample(dx), thresholds, &binding), first);
            }
        }
    }

    #[test]
    fn test_threshold_resolution_and_validation() {
        assert_eq!(Threshold::absolute(6.0).resolve(100.0), 6.0);
        assert_eq!(Threshold::screen_fraction(0.25).resolve(80.0), 20.0);
        assert!(Threshold::absolute(0.0).validate().is_err());
        assert!(Threshold::screen_fraction(1.5).validate().is_err());
        assert!(Threshold::screen_fraction(0.25).validate().is_ok());
    }
}
