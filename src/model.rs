//! Domain records shown in swipeable lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which list a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Task,
    Notification,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Task => f.write_str("task"),
            ItemKind::Notification => f.write_str("notification"),
        }
    }
}

/// Domain operation a swipe can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Complete,
    MarkRead,
    Delete,
}

impl MutationKind {
    /// Destructive mutations take the record out of its list.
    pub fn is_destructive(self) -> bool {
        self == MutationKind::Delete
    }

    pub fn applies_to(self, kind: ItemKind) -> bool {
        match self {
            MutationKind::Complete => kind == ItemKind::Task,
            MutationKind::MarkRead => kind == ItemKind::Notification,
            MutationKind::Delete => true,
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Complete => f.write_str("complete"),
            MutationKind::MarkRead => f.write_str("mark read"),
            MutationKind::Delete => f.write_str("delete"),
        }
    }
}

/// An optimistic change already applied locally, awaiting the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub request_id: Uuid,
    pub target: ItemKind,
    pub id: String,
    pub kind: MutationKind,
}

impl Mutation {
    pub fn new(target: ItemKind, id: impl Into<String>, kind: MutationKind) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            target,
            id: id.into(),
            kind,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.target, self.id)
    }
}

/// A record a [`crate::list::ListContainer`] can hold.
pub trait Record: Clone + Send + 'static {
    const KIND: ItemKind;

    fn id(&self) -> &str;

    /// Apply a non-destructive mutation in place. Returns whether anything
    /// changed. Deletion is handled by the container.
    fn apply(&mut self, mutation: MutationKind) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub project_id: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Record for Task {
    const KIND: ItemKind = ItemKind::Task;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, mutation: MutationKind) -> bool {
        match mutation {
            MutationKind::Complete if !self.is_completed() => {
                self.status = TaskStatus::Completed;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    TaskAssigned,
    Mention,
    Deadline,
    ProjectUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Notification {
    const KIND: ItemKind = ItemKind::Notification;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, mutation: MutationKind) -> bool {
        match mutation {
            MutationKind::MarkRead if !self.read => {
                self.read = true;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: ProjectStatus,
}
