//! Synchronization service.
//!
//! [`SyncService`] is the data layer between the lists and a [`Backend`]. It
//! loads snapshots (falling back to the bundled demo data when the backend
//! cannot be reached) and pushes the mutations the lists have already applied
//! locally. A failed push is reported, never undone: the next snapshot
//! reconciles.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::backend::demo::DemoData;
use crate::backend::{Backend, BackendError};
use crate::constants::LOG_DEMO_FALLBACK;
use crate::logger::Logger;
use crate::model::{ItemKind, Mutation, MutationKind, Notification, Project, Task};

/// Where the records of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Backend,
    /// At least one collection failed to load and was replaced by demo data.
    Demo,
}

/// Everything the UI shows, loaded in one go.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
    pub projects: Vec<Project>,
    pub source: DataSource,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
            .map(|project| project.name.as_str())
    }
}

#[derive(Clone)]
pub struct SyncService {
    backend: Arc<dyn Backend>,
    logger: Logger,
    sync_in_progress: Arc<Mutex<bool>>,
}

impl SyncService {
    pub fn new(backend: Arc<dyn Backend>, logger: Logger) -> Self {
        Self {
            backend,
            logger,
            sync_in_progress: Arc::new(Mutex::new(false)),
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn backend_type(&self) -> &str {
        self.backend.backend_type()
    }

    /// Check if a refresh is currently running
    pub async fn is_syncing(&self) -> bool {
        *self.sync_in_progress.lock().await
    }

    /// Load a snapshot unless another refresh is already running.
    pub async fn refresh(&self) -> Option<Snapshot> {
        {
            let mut in_progress = self.sync_in_progress.lock().await;
            if *in_progress {
                self.logger.log("Refresh already in progress, skipping".to_string());
                return None;
            }
            *in_progress = true;
        }

        let snapshot = self.load_snapshot().await;

        *self.sync_in_progress.lock().await = false;
        Some(snapshot)
    }

    /// Fetch every collection, substituting demo data for the ones that fail.
    pub async fn load_snapshot(&self) -> Snapshot {
        let (tasks, notifications, projects) = tokio::join!(
            self.backend.fetch_tasks(),
            self.backend.fetch_notifications(),
            self.backend.fetch_projects()
        );

        let mut demo: Option<DemoData> = None;
        let mut fell_back = false;
        let mut fallback = |what: &str, error: BackendError| -> DemoData {
            self.logger.log(format!("❌ Failed to fetch {}: {}", what, error));
            fell_back = true;
            demo.get_or_insert_with(|| match DemoData::load() {
                Ok(data) => data,
                Err(e) => {
                    log::error!("bundled demo data is unusable: {}", e);
                    DemoData::default()
                }
            })
            .clone()
        };

        let tasks = match tasks {
            Ok(tasks) => {
                self.logger.log(format!("✅ Fetched {} tasks from backend", tasks.len()));
                tasks
            }
            Err(e) => fallback("tasks", e).tasks,
        };
        let notifications = match notifications {
            Ok(notifications) => {
                self.logger
                    .log(format!("✅ Fetched {} notifications from backend", notifications.len()));
                notifications
            }
            Err(e) => fallback("notifications", e).notifications,
        };
        let projects = match projects {
            Ok(projects) => projects,
            Err(e) => fallback("projects", e).projects,
        };

        let source = if fell_back {
            self.logger.log(LOG_DEMO_FALLBACK.to_string());
            DataSource::Demo
        } else {
            DataSource::Backend
        };

        Snapshot {
            tasks,
            notifications,
            projects,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// Send an already-applied mutation to the backend.
    pub async fn push(&self, mutation: &Mutation) -> Result<(), BackendError> {
        let id = mutation.id.as_str();
        let result = match (mutation.target, mutation.kind) {
            (ItemKind::Task, MutationKind::Complete) => self.backend.complete_task(id).await,
            (ItemKind::Task, MutationKind::Delete) => self.backend.delete_task(id).await,
            (ItemKind::Notification, MutationKind::MarkRead) => self.backend.mark_notification_read(id).await,
            (ItemKind::Notification, MutationKind::Delete) => self.backend.delete_notification(id).await,
            (target, kind) => Err(BackendError::InvalidData(format!("cannot {} a {}", kind, target))),
        };

        match &result {
            Ok(()) => self
                .logger
                .log(format!("✅ Synced {} ({})", mutation, mutation.request_id)),
            Err(e) => self
                .logger
                .log(format!("❌ Failed to sync {} ({}): {}", mutation, mutation.request_id, e)),
        }
        result
    }
}
