//! A backend that is never reachable.

use super::{Backend, BackendError};
use crate::model::{Notification, Project, Task};
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct OfflineBackend;

impl OfflineBackend {
    fn unreachable<T>() -> Result<T, BackendError> {
        Err(BackendError::Network("backend is offline".to_string()))
    }
}

#[async_trait]
impl Backend for OfflineBackend {
    fn backend_type(&self) -> &str {
        "offline"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, BackendError> {
        Self::unreachable()
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError> {
        Self::unreachable()
    }

    async fn fetch_notifications(&self) -> Result<Vec<Notification>, BackendError> {
        Self::unreachable()
    }

    async fn complete_task(&self, _id: &str) -> Result<(), BackendError> {
        Self::unreachable()
    }

    async fn delete_task(&self, _id: &str) -> Result<(), BackendError> {
        Self::unreachable()
    }

    async fn mark_notification_read(&self, _id: &str) -> Result<(), BackendError> {
        Self::unreachable()
    }

    async fn delete_notification(&self, _id: &str) -> Result<(), BackendError> {
        Self::unreachable()
    }
}
