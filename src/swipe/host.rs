//! Per-row swipe state machine.
//!
//! ```text
//! Idle --gate passes--> Dragging
//! Dragging --release, commit--> Committing --> Idle | Removed
//! Dragging --release, cancel--> SnappingBack --> Idle
//! ```

use super::binding::{ActionBinding, SwipeDirection};
use super::commit::{decide, GestureOutcome, ResolvedThresholds};
use super::feedback::{FeedbackKind, Haptics};
use super::gesture::{Drag, GestureTracker};
use super::reveal::{reveal, RevealState};
use super::animation::Motion;
use super::SwipeConfig;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Viewport width assumed until the front end reports one.
const DEFAULT_VIEWPORT_WIDTH: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStage {
    /// Travelling to the fully revealed position.
    Revealing,
    /// Paused with the action visible.
    Holding,
    /// Fading out before removal (destructive actions only).
    Collapsing,
    /// Travelling back to rest after the command fired.
    Returning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Committing(CommitStage),
    SnappingBack,
    /// Terminal. The row has collapsed and its command has fired.
    Removed,
}

/// Swipe interaction for one list row.
///
/// Feed it touch events and call [`SwipeHost::tick`] every frame. The bound
/// command comes back from `tick` once per committed gesture.
pub struct SwipeHost<A> {
    config: SwipeConfig,
    binding: Arc<ActionBinding<A>>,
    haptics: Arc<dyn Haptics>,
    tracker: GestureTracker,
    viewport_width: f32,
    phase: SwipePhase,
    offset: f32,
    presence: f32,
    motion: Option<Motion>,
    committed: Option<SwipeDirection>,
    hold_until: Option<Instant>,
}

impl<A> SwipeHost<A> {
    pub fn new(config: SwipeConfig, binding: Arc<ActionBinding<A>>, haptics: Arc<dyn Haptics>) -> Self {
        Self {
            tracker: GestureTracker::new(config.activation_distance, config.max_reveal()),
            config,
            binding,
            haptics,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            phase: SwipePhase::Idle,
            offset: 0.0,
            presence: 1.0,
            motion: None,
            committed: None,
            hold_until: None,
        }
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        if width > 0.0 {
            self.viewport_width = width;
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Current horizontal offset, within `±max_reveal`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Opacity and height factor, 1.0 except while collapsing.
    pub fn presence(&self) -> f32 {
        self.presence
    }

    pub fn binding(&self) -> &ActionBinding<A> {
        &self.binding
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.phase, SwipePhase::Committing(_))
    }

    /// An animation is in flight; new gestures are refused.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, SwipePhase::Committing(_) | SwipePhase::SnappingBack)
    }

    pub fn is_removed(&self) -> bool {
        self.phase == SwipePhase::Removed
    }

    pub fn thresholds(&self) -> ResolvedThresholds {
        ResolvedThresholds::new(
            &self.config.positive_threshold,
            &self.config.negative_threshold,
            self.viewport_width,
        )
    }

    pub fn reveal(&self) -> RevealState<'_, A> {
        let travel = if self.phase == SwipePhase::Dragging {
            self.tracker.travel()
        } else {
            self.offset
        };
        reveal(self.offset, travel, self.config.action_width, self.thresholds(), &self.binding)
    }

    /// Start a gesture. Refused while a previous gesture is still animating,
    /// after removal, or while another touch is already being tracked.
    pub fn touch_down(&mut self, now: Instant) -> bool {
        if self.phase != SwipePhase::Idle || self.tracker.is_tracking() {
            return false;
        }
        self.tracker.begin(now);
        true
    }

    /// Feed the cumulative displacement since touch-down.
    pub fn touch_move(&mut self, dx: f32, dy: f32, now: Instant) -> Drag {
        if !self.tracker.is_tracking() {
            return Drag::Unclaimed;
        }
        let drag = self.tracker.track(dx, dy, now);
        if let Drag::Claimed { offset, activated } = drag {
            if activated {
                self.phase = SwipePhase::Dragging;
                self.haptics.perform(FeedbackKind::Selection);
            }
            self.offset = offset;
        }
        drag
    }

    /// End the gesture and decide its outcome.
    pub fn touch_up(&mut self, now: Instant) -> GestureOutcome {
        if !self.tracker.is_tracking() {
            return GestureOutcome::Cancel;
        }
        let Some(sample) = self.tracker.release() else {
            return GestureOutcome::Cancel;
        };

        let outcome = decide(&sample, self.thresholds(), &self.binding);
        match outcome.direction() {
            Some(direction) => {
                let destructive = self.binding.get(direction).is_some_and(|action| action.destructive);
                self.haptics.perform(if destructive {
                    FeedbackKind::Warning
                } else {
                    FeedbackKind::Success
                });
                self.committed = Some(direction);
                self.phase = SwipePhase::Committing(CommitStage::Revealing);
                let target = direction.sign() * self.config.action_width;
                self.motion = Some(Motion::start(
                    self.offset,
                    target,
                    self.config.reveal,
                    now,
                    sample.velocity_x,
                ));
            }
            None => self.snap_back(now, sample.velocity_x),
        }
        outcome
    }

    /// Abandon the gesture without deciding (focus loss, scroll takeover).
    pub fn touch_cancel(&mut self, now: Instant) {
        if !self.tracker.is_tracking() {
            return;
        }
        self.tracker.release();
        if self.phase == SwipePhase::Dragging {
            self.snap_back(now, 0.0);
        }
    }

    fn snap_back(&mut self, now: Instant, velocity: f32) {
        let motion = Motion::start(self.offset, 0.0, self.config.snap_back, now, velocity);
        if motion.is_finished() {
            self.rest();
        } else {
            self.phase = SwipePhase::SnappingBack;
            self.motion = Some(motion);
        }
    }

    fn rest(&mut self) {
        self.phase = SwipePhase::Idle;
        self.offset = 0.0;
        self.motion = None;
        self.hold_until = None;
    }

    /// Advance the offset motion; true once it has arrived.
    fn step_offset(&mut self, now: Instant) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return true;
        };
        let max = self.tracker.max_reveal();
        self.offset = motion.advance(now).clamp(-max, max);
        motion.is_finished()
    }

    fn is_destructive_commit(&self) -> bool {
        self.committed
            .and_then(|direction| self.binding.get(direction))
            .is_some_and(|action| action.destructive)
    }
}

impl<A: Clone> SwipeHost<A> {
    /// Advance animations to `now`. Returns the bound command on the tick
    /// where the commit sequence runs it.
    pub fn tick(&mut self, now: Instant) -> Option<A> {
        let mut fired = None;
        loop {
            match self.phase {
                SwipePhase::Committing(CommitStage::Revealing) => {
                    if !self.step_offset(now) {
                        break;
                    }
                    self.motion = None;
                    self.hold_until = Some(now + Duration::from_millis(self.config.settle_delay_ms));
                    self.phase = SwipePhase::Committing(CommitStage::Holding);
                }
                SwipePhase::Committing(CommitStage::Holding) => {
                    if self.hold_until.is_some_and(|until| now < until) {
                        break;
                    }
                    self.hold_until = None;
                    if self.is_destructive_commit() {
                        self.phase = SwipePhase::Committing(CommitStage::Collapsing);
                        self.motion = Some(Motion::start(1.0, 0.0, self.config.collapse, now, 0.0));
                    } else {
                        fired = self.fire();
                        self.phase = SwipePhase::Committing(CommitStage::Returning);
                        self.motion = Some(Motion::start(self.offset, 0.0, self.config.settle_return, now, 0.0));
                    }
                }
                SwipePhase::Committing(CommitStage::Collapsing) => {
                    let finished = match self.motion.as_mut() {
                        Some(motion) => {
                            self.presence = motion.advance(now).clamp(0.0, 1.0);
                            motion.is_finished()
                        }
                        None => true,
                    };
                    if !finished {
                        break;
                    }
                    self.presence = 0.0;
                    self.motion = None;
                    fired = self.fire();
                    self.phase = SwipePhase::Removed;
                    break;
                }
                SwipePhase::Committing(CommitStage::Returning) | SwipePhase::SnappingBack => {
                    if self.step_offset(now) {
                        self.rest();
                    }
                    break;
                }
                SwipePhase::Idle | SwipePhase::Dragging | SwipePhase::Removed => break,
            }
        }
        fired
    }

    fn fire(&mut self) -> Option<A> {
        let direction = self.committed.take()?;
        self.binding.get(direction).map(|action| action.command.clone())
    }
}
