//! Backend abstraction layer.
//!
//! This module defines the interface the sync layer uses to load tasks,
//! notifications and projects, and to push the mutations swipes produce.

use crate::model::{Notification, Project, Task};
use async_trait::async_trait;

pub mod demo;
pub mod factory;
pub mod offline;

pub use demo::DemoBackend;
pub use factory::create_backend;
pub use offline::OfflineBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Backend trait that all data sources must implement.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "demo", "offline").
    fn backend_type(&self) -> &str;

    // Fetch operations
    async fn fetch_projects(&self) -> Result<Vec<Project>, BackendError>;
    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError>;
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, BackendError>;

    // Task mutations
    async fn complete_task(&self, id: &str) -> Result<(), BackendError>;
    async fn delete_task(&self, id: &str) -> Result<(), BackendError>;

    // Notification mutations
    async fn mark_notification_read(&self, id: &str) -> Result<(), BackendError>;
    async fn delete_notification(&self, id: &str) -> Result<(), BackendError>;
}
