use super::actions::Action;
use crate::model::Mutation;
use crate::sync::SyncService;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Refresh,
    Mutation,
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub kind: TaskKind,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs backend calls off the UI loop and reports back through [`Action`]s.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, kind: TaskKind, description: String, handle: JoinHandle<()>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                kind,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Spawn a background snapshot load
    pub fn spawn_refresh(&mut self, sync_service: SyncService) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            if let Some(snapshot) = sync_service.refresh().await {
                let _ = action_sender.send(Action::SnapshotLoaded(Box::new(snapshot)));
            }
        });

        self.track(TaskKind::Refresh, "Background refresh".to_string(), handle)
    }

    /// Push an already-applied mutation. Failures are reported, never retried.
    pub fn spawn_mutation(&mut self, sync_service: SyncService, mutation: Mutation) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Sync {}", mutation);

        let handle = tokio::spawn(async move {
            let action = match sync_service.push(&mutation).await {
                Ok(()) => Action::MutationSynced(mutation),
                Err(e) => Action::MutationFailed {
                    mutation,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.track(TaskKind::Mutation, description, handle)
    }

    /// Forget tasks whose handles have finished; returns how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.handle.is_finished());
        before - self.tasks.len()
    }

    /// Check if a refresh is currently running
    pub fn is_refreshing(&self) -> bool {
        self.tasks.values().any(|task| task.kind == TaskKind::Refresh)
    }

    /// Number of mutations still waiting for the backend
    pub fn pending_mutations(&self) -> usize {
        self.tasks.values().filter(|task| task.kind == TaskKind::Mutation).count()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, DemoBackend};
    use crate::logger::Logger;
    use crate::model::{ItemKind, MutationKind};
    use std::sync::Arc;
    use std::time::Duration;

    fn sync_service(fail_mutations: bool) -> SyncService {
        let backend: Arc<dyn Backend> = Arc::new(DemoBackend::new(Duration::ZERO, fail_mutations).unwrap());
        SyncService::new(backend, Logger::new())
    }

    #[tokio::test]
    async fn test_refresh_reports_snapshot() {
        let (mut manager, mut rx) = TaskManager::new();
        manager.spawn_refresh(sync_service(false));
        assert!(manager.is_refreshing());
        assert_eq!(manager.task_count(), 1);

        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::SnapshotLoaded(_)));
    }

    #[tokio::test]
    async fn test_failed_mutation_reports_error() {
        let (mut manager, mut rx) = TaskManager::new();
        let mutation = Mutation::new(ItemKind::Task, "task-1", MutationKind::Complete);
        manager.spawn_mutation(sync_service(true), mutation.clone());
        assert_eq!(manager.pending_mutations(), 1);

        match rx.recv().await.unwrap() {
            Action::MutationFailed { mutation: failed, .. } => assert_eq!(failed, mutation),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancel_all_tasks() {
        let (mut manager, _rx) = TaskManager::new();
        manager.spawn_refresh(sync_service(false));
        manager.cancel_all_tasks();
        assert_eq!(manager.task_count(), 0);
        assert!(!manager.is_refreshing());
    }
}
