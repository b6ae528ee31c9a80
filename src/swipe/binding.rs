//! Caller-supplied configuration of the two swipe directions.

use serde::{Deserialize, Serialize};

/// Which way the row was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Positive dx. The affordance is revealed at the row's leading edge.
    Right,
    /// Negative dx. The affordance is revealed at the trailing edge.
    Left,
}

impl SwipeDirection {
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Right => 1.0,
            SwipeDirection::Left => -1.0,
        }
    }
}

/// Abstract iconography; front ends map it to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionIcon {
    Check,
    Read,
    Trash,
}

/// Visual configuration of one affordance. `color` is a theme token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionStyle {
    pub label: &'static str,
    pub icon: ActionIcon,
    pub color: &'static str,
}

/// One bound direction: the command handed back on commit, whether the commit
/// removes the item, and how the affordance looks.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeAction<A> {
    pub command: A,
    pub destructive: bool,
    pub style: ActionStyle,
}

impl<A> SwipeAction<A> {
    pub fn new(command: A, style: ActionStyle) -> Self {
        Self {
            command,
            destructive: false,
            style,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Zero, one or two bound directions for a list item.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionBinding<A> {
    pub right: Option<SwipeAction<A>>,
    pub left: Option<SwipeAction<A>>,
}

impl<A> Default for ActionBinding<A> {
    fn default() -> Self {
        Self { right: None, left: None }
    }
}

impl<A> ActionBinding<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_right(mut self, action: SwipeAction<A>) -> Self {
        self.right = Some(action);
        self
    }

    pub fn on_left(mut self, action: SwipeAction<A>) -> Self {
        self.left = Some(action);
        self
    }

    pub fn get(&self, direction: SwipeDirection) -> Option<&SwipeAction<A>> {
        match direction {
            SwipeDirection::Right => self.right.as_ref(),
            SwipeDirection::Left => self.left.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_none() && self.left.is_none()
    }
}
