//! Swipe-to-act interaction core.
//!
//! A row owns one [`SwipeHost`], which combines a [`GestureTracker`] with the
//! commit sequence. The host knows nothing about what its commands mean: it
//! hands the bound command back exactly once, at the right moment of the
//! settle animation, and the owner of the list applies it.
//!
//! ```text
//! touch samples -> GestureTracker -> decide() -> settle sequence -> command
//! ```
//!
//! Distances are logical units; the terminal front end uses cells.

pub mod animation;
pub mod binding;
pub mod commit;
pub mod feedback;
pub mod gesture;
pub mod host;
pub mod reveal;
pub mod velocity;

pub use animation::{Easing, Motion, MotionSpec, SpringSpec, TweenSpec};
pub use binding::{ActionBinding, ActionIcon, ActionStyle, SwipeAction, SwipeDirection};
pub use commit::{decide, GestureOutcome, ResolvedThresholds, Threshold};
pub use feedback::{FeedbackKind, Haptics, LogHaptics, NoHaptics};
pub use gesture::{Drag, DragSample, GestureTracker};
pub use host::{CommitStage, SwipeHost, SwipePhase};
pub use reveal::{reveal, Affordance, RevealState};
pub use velocity::VelocityTracker;

use serde::{Deserialize, Serialize};

/// Tunables shared by every row of a list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Width of one action affordance.
    pub action_width: f32,
    /// How far past the affordance a row may be dragged, as a multiple of
    /// `action_width`.
    pub overscroll_factor: f32,
    /// Horizontal travel required before a drag is claimed.
    pub activation_distance: f32,
    /// Pause with the action fully revealed before it runs.
    pub settle_delay_ms: u64,
    /// Release distance committing a right swipe.
    pub positive_threshold: Threshold,
    /// Release distance committing a left swipe.
    pub negative_threshold: Threshold,
    /// Travel to the fully revealed position.
    pub reveal: MotionSpec,
    /// Travel back to rest after a non-destructive commit.
    pub settle_return: MotionSpec,
    /// Travel back to rest after a cancelled gesture.
    pub snap_back: MotionSpec,
    /// Fade and collapse of a removed row.
    pub collapse: MotionSpec,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        let action_width = 12.0;
        Self {
            action_width,
            overscroll_factor: 1.5,
            activation_distance: 2.0,
            settle_delay_ms: 150,
            positive_threshold: Threshold::absolute(action_width * 0.5),
            negative_threshold: Threshold::absolute(action_width * 0.5),
            reveal: MotionSpec::tween(180, Easing::FastOutSlowIn),
            settle_return: MotionSpec::tween(220, Easing::FastOutSlowIn),
            snap_back: MotionSpec::spring(SpringSpec::default()),
            collapse: MotionSpec::tween(200, Easing::FastOutLinear),
        }
    }
}

impl SwipeConfig {
    pub fn max_reveal(&self) -> f32 {
        self.action_width * self.overscroll_factor
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.action_width > 0.0) {
            return Err(format!("action_width must be positive, got {}", self.action_width));
        }
        if !(self.overscroll_factor >= 1.0) {
            return Err(format!(
                "overscroll_factor must be at least 1.0, got {}",
                self.overscroll_factor
            ));
        }
        if !(self.activation_distance >= 0.0) {
            return Err(format!(
                "activation_distance cannot be negative, got {}",
                self.activation_distance
            ));
        }
        self.positive_threshold
            .validate()
            .map_err(|e| format!("positive_threshold: {e}"))?;
        self.negative_threshold
            .validate()
            .map_err(|e| format!("negative_threshold: {e}"))?;
        for (name, spec) in [
            ("reveal", &self.reveal),
            ("settle_return", &self.settle_return),
            ("snap_back", &self.snap_back),
            ("collapse", &self.collapse),
        ] {
            spec.validate().map_err(|e| format!("{name}: {e}"))?;
        }
        Ok(())
    }
}
