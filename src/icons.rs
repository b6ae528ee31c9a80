//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::model::{NotificationKind, Priority};
use crate::swipe::ActionIcon;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Swipe action icons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub check: &'static str,
    pub read: &'static str,
    pub trash: &'static str,
}

/// Task and notification state icons
#[derive(Debug, Clone)]
pub struct ItemIcons {
    pub task_pending: &'static str,
    pub task_completed: &'static str,
    pub unread: &'static str,
    pub read: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// Notification kind icons
#[derive(Debug, Clone)]
pub struct NotificationIcons {
    pub info: &'static str,
    pub task_assigned: &'static str,
    pub mention: &'static str,
    pub deadline: &'static str,
    pub project_update: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub actions: ActionIcons,
    pub items: ItemIcons,
    pub priority: PriorityIcons,
    pub notifications: NotificationIcons,
    pub sync_in_progress: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                check: "✅",
                read: "👁️",
                trash: "🗑️",
            },
            items: ItemIcons {
                task_pending: "🔳",
                task_completed: "✅",
                unread: "🔵",
                read: "⚪",
            },
            priority: PriorityIcons {
                high: "🔴",
                medium: "🟡",
                low: "🔵",
            },
            notifications: NotificationIcons {
                info: "💡",
                task_assigned: "📋",
                mention: "💬",
                deadline: "⏰",
                project_update: "📁",
            },
            sync_in_progress: "🔄",
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                check: "✓",
                read: "◉",
                trash: "✗",
            },
            items: ItemIcons {
                task_pending: "□",
                task_completed: "■",
                unread: "●",
                read: "○",
            },
            priority: PriorityIcons {
                high: "▲",
                medium: "◆",
                low: "▼",
            },
            notifications: NotificationIcons {
                info: "ⓘ",
                task_assigned: "▶",
                mention: "@",
                deadline: "◷",
                project_update: "◆",
            },
            sync_in_progress: "⟳",
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                check: "[v]",
                read: "[o]",
                trash: "[x]",
            },
            items: ItemIcons {
                task_pending: "[ ]",
                task_completed: "[X]",
                unread: "*",
                read: " ",
            },
            priority: PriorityIcons {
                high: "!!",
                medium: "!",
                low: "-",
            },
            notifications: NotificationIcons {
                info: "i",
                task_assigned: ">",
                mention: "@",
                deadline: "T",
                project_update: "#",
            },
            sync_in_progress: "...",
        }
    }

    /// Glyph for a swipe affordance
    #[must_use]
    pub fn action(&self, icon: ActionIcon) -> &'static str {
        let icons = self.icons().actions;
        match icon {
            ActionIcon::Check => icons.check,
            ActionIcon::Read => icons.read,
            ActionIcon::Trash => icons.trash,
        }
    }

    #[must_use]
    pub fn task_status(&self, completed: bool) -> &'static str {
        let icons = self.icons().items;
        if completed {
            icons.task_completed
        } else {
            icons.task_pending
        }
    }

    #[must_use]
    pub fn read_marker(&self, read: bool) -> &'static str {
        let icons = self.icons().items;
        if read {
            icons.read
        } else {
            icons.unread
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::High => icons.high,
            Priority::Medium => icons.medium,
            Priority::Low => icons.low,
        }
    }

    #[must_use]
    pub fn notification(&self, kind: NotificationKind) -> &'static str {
        let icons = self.icons().notifications;
        match kind {
            NotificationKind::Info => icons.info,
            NotificationKind::TaskAssigned => icons.task_assigned,
            NotificationKind::Mention => icons.mention,
            NotificationKind::Deadline => icons.deadline,
            NotificationKind::ProjectUpdate => icons.project_update,
        }
    }

    #[must_use]
    pub fn sync_in_progress(&self) -> &'static str {
        self.icons().sync_in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_action_icons_per_theme() {
        let ascii = IconService::new(IconTheme::Ascii);
        assert_eq!(ascii.action(ActionIcon::Trash), "[x]");
        assert_eq!(ascii.action(ActionIcon::Check), "[v]");

        let unicode = IconService::new(IconTheme::Unicode);
        assert_eq!(unicode.action(ActionIcon::Check), "✓");
    }

    #[test]
    fn test_item_markers() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.task_status(true), "■");
        assert_eq!(service.task_status(false), "□");
        assert_eq!(service.read_marker(false), "●");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
