//! Data-driven affordance styling per item kind.

use crate::config::DirectionActions;
use crate::model::{ItemKind, MutationKind};
use crate::swipe::{ActionBinding, ActionIcon, ActionStyle, SwipeAction};

/// Label, icon and color token for an action on a kind of item.
pub fn action_style(item: ItemKind, mutation: MutationKind) -> ActionStyle {
    match (item, mutation) {
        (_, MutationKind::Delete) => ActionStyle {
            label: "Delete",
            icon: ActionIcon::Trash,
            color: "danger",
        },
        (ItemKind::Task, MutationKind::Complete) => ActionStyle {
            label: "Complete",
            icon: ActionIcon::Check,
            color: "success",
        },
        (ItemKind::Notification, MutationKind::MarkRead) => ActionStyle {
            label: "Mark read",
            icon: ActionIcon::Read,
            color: "info",
        },
        (_, MutationKind::Complete) => ActionStyle {
            label: "Done",
            icon: ActionIcon::Check,
            color: "success",
        },
        (_, MutationKind::MarkRead) => ActionStyle {
            label: "Read",
            icon: ActionIcon::Read,
            color: "info",
        },
    }
}

fn bound(item: ItemKind, mutation: Option<MutationKind>) -> Option<SwipeAction<MutationKind>> {
    let mutation = mutation.filter(|m| m.applies_to(item))?;
    let action = SwipeAction::new(mutation, action_style(item, mutation));
    Some(if mutation.is_destructive() {
        action.destructive()
    } else {
        action
    })
}

/// Build the binding for one kind of list from its configured directions.
/// Actions that do not apply to the kind are left unbound.
pub fn action_binding(item: ItemKind, actions: &DirectionActions) -> ActionBinding<MutationKind> {
    ActionBinding {
        right: bound(item, actions.right.mutation()),
        left: bound(item, actions.left.mutation()),
    }
}
