//! In-memory demo backend seeded from bundled data.

use super::{Backend, BackendError};
use crate::model::{Notification, Project, Task, TaskStatus};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;

const DEMO_DATA: &str = include_str!("demo_data.json");

/// The bundled data set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoData {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
}

impl DemoData {
    /// Parse the bundled data set.
    pub fn load() -> Result<Self, BackendError> {
        serde_json::from_str(DEMO_DATA).map_err(|e| BackendError::InvalidData(format!("demo data: {}", e)))
    }
}

pub struct DemoBackend {
    state: Mutex<DemoData>,
    latency: Duration,
    fail_mutations: bool,
}

impl DemoBackend {
    pub fn new(latency: Duration, fail_mutations: bool) -> Result<Self, BackendError> {
        Ok(Self::with_data(DemoData::load()?, latency, fail_mutations))
    }

    pub fn with_data(data: DemoData, latency: Duration, fail_mutations: bool) -> Self {
        Self {
            state: Mutex::new(data),
            latency,
            fail_mutations,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn read<R>(&self, f: impl FnOnce(&DemoData) -> R) -> Result<R, BackendError> {
        self.state
            .lock()
            .map(|state| f(&state))
            .map_err(|_| BackendError::Other("demo state poisoned".to_string()))
    }

    /// Run a mutation against the state, honouring `fail_mutations`.
    async fn mutate(&self, what: &str, f: impl FnOnce(&mut DemoData) -> bool) -> Result<(), BackendError> {
        self.simulate_latency().await;
        if self.fail_mutations {
            return Err(BackendError::Network(format!("{} rejected by demo backend", what)));
        }
        let mut state = self
            .state
            .lock()
            .map_err(|_| BackendError::Other("demo state poisoned".to_string()))?;
        if f(&mut state) {
            Ok(())
        } else {
            Err(BackendError::NotFound(what.to_string()))
        }
    }
}

#[async_trait]
impl Backend for DemoBackend {
    fn backend_type(&self) -> &str {
        "demo"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, BackendError> {
        self.simulate_latency().await;
        self.read(|state| state.projects.clone())
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError> {
        self.simulate_latency().await;
        self.read(|state| state.tasks.clone())
    }

    async fn fetch_notifications(&self) -> Result<Vec<Notification>, BackendError> {
        self.simulate_latency().await;
        self.read(|state| state.notifications.clone())
    }

    async fn complete_task(&self, id: &str) -> Result<(), BackendError> {
        self.mutate(&format!("task {}", id), |state| {
            match state.tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    task.status = TaskStatus::Completed;
                    true
                }
                None => false,
            }
        })
        .await
    }

    async fn delete_task(&self, id: &str) -> Result<(), BackendError> {
        self.mutate(&format!("task {}", id), |state| {
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            state.tasks.len() != before
        })
        .await
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), BackendError> {
        self.mutate(&format!("notification {}", id), |state| {
            match state.notifications.iter_mut().find(|n| n.id == id) {
                Some(notification) => {
                    notification.read = true;
                    true
                }
                None => false,
            }
        })
        .await
    }

    async fn delete_notification(&self, id: &str) -> Result<(), BackendError> {
        self.mutate(&format!("notification {}", id), |state| {
            let before = state.notifications.len();
            state.notifications.retain(|n| n.id != id);
            state.notifications.len() != before
        })
        .await
    }
}
