//! Stateless mapping from a row offset to how much of each affordance shows.

use super::binding::{ActionBinding, SwipeAction, SwipeDirection};
use super::commit::ResolvedThresholds;

/// One visible affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct Affordance<'a, A> {
    pub action: &'a SwipeAction<A>,
    pub direction: SwipeDirection,
    /// Exposed width in logical units.
    pub width: f32,
    /// 0.0 (hidden) to 1.0, reaching full opacity at one action width.
    pub opacity: f32,
    /// Releasing now would commit this action.
    pub armed: bool,
}

/// Everything a front end needs to draw a row mid-swipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState<'a, A> {
    pub offset: f32,
    /// Shown at the leading edge while dragging right.
    pub leading: Option<Affordance<'a, A>>,
    /// Shown at the trailing edge while dragging left.
    pub trailing: Option<Affordance<'a, A>>,
}

/// `offset` is the drawn (clamped) position. `travel` is the gesture's real
/// displacement, which decides `armed` the same way the release does.
pub fn reveal<'a, A>(
    offset: f32,
    travel: f32,
    action_width: f32,
    thresholds: ResolvedThresholds,
    binding: &'a ActionBinding<A>,
) -> RevealState<'a, A> {
    let affordance = |direction: SwipeDirection| {
        let exposed = offset * direction.sign();
        if exposed <= 0.0 {
            return None;
        }
        binding.get(direction).map(|action| Affordance {
            action,
            direction,
            width: exposed,
            opacity: if action_width > 0.0 {
                (exposed / action_width).clamp(0.0, 1.0)
            } else {
                1.0
            },
            armed: travel * direction.sign() > thresholds.for_direction(direction),
        })
    };

    RevealState {
        offset,
        leading: affordance(SwipeDirection::Right),
        trailing: affordance(SwipeDirection::Left),
    }
}
