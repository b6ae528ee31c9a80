use std::sync::Arc;
use std::time::Duration;
use swipedeck::backend::{Backend, BackendError, DemoBackend, OfflineBackend};
use swipedeck::logger::Logger;
use swipedeck::model::{ItemKind, Mutation, MutationKind, TaskStatus};
use swipedeck::sync::{DataSource, SyncService};

fn demo_service(fail_mutations: bool) -> SyncService {
    let backend: Arc<dyn Backend> = Arc::new(DemoBackend::new(Duration::ZERO, fail_mutations).unwrap());
    SyncService::new(backend, Logger::new())
}

#[tokio::test]
async fn test_snapshot_from_backend() {
    let service = demo_service(false);
    assert_eq!(service.backend_type(), "demo");

    let snapshot = service.load_snapshot().await;
    assert_eq!(snapshot.source, DataSource::Backend);
    assert_eq!(snapshot.tasks.len(), 7);
    assert_eq!(snapshot.notifications.len(), 5);
    assert!(snapshot.project_name("proj-website").is_some());
    assert!(service
        .logger()
        .get_logs()
        .iter()
        .any(|line| line.contains("Fetched 7 tasks")));
}

#[tokio::test]
async fn test_offline_backend_falls_back_to_demo_data() {
    let service = SyncService::new(Arc::new(OfflineBackend), Logger::new());

    let snapshot = service.load_snapshot().await;
    assert_eq!(snapshot.source, DataSource::Demo);
    assert!(snapshot.tasks.iter().any(|task| task.id == "task-1"));
    assert!(!snapshot.notifications.is_empty());
    assert!(!snapshot.projects.is_empty());

    let logs = service.logger().get_logs();
    assert!(logs.iter().any(|line| line.contains("Failed to fetch tasks")));
}

#[tokio::test]
async fn test_push_applies_to_backend() {
    let service = demo_service(false);

    let mutation = Mutation::new(ItemKind::Task, "task-2", MutationKind::Complete);
    service.push(&mutation).await.unwrap();

    let snapshot = service.load_snapshot().await;
    let task = snapshot.tasks.iter().find(|task| task.id == "task-2").unwrap();
    assert_eq!(task.status, TaskStatus::Completed);

    let delete = Mutation::new(ItemKind::Notification, "notif-1", MutationKind::Delete);
    service.push(&delete).await.unwrap();
    let snapshot = service.load_snapshot().await;
    assert_eq!(snapshot.notifications.len(), 4);
}

#[tokio::test]
async fn test_failed_push_is_reported() {
    let service = demo_service(true);

    let mutation = Mutation::new(ItemKind::Task, "task-1", MutationKind::Delete);
    let err = service.push(&mutation).await.unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));

    let logs = service.logger().get_logs();
    assert!(logs[0].contains("Failed to sync"));
    assert!(logs[0].contains(&mutation.request_id.to_string()));
}

#[tokio::test]
async fn test_push_of_unknown_id() {
    let service = demo_service(false);
    let mutation = Mutation::new(ItemKind::Task, "missing", MutationKind::Delete);
    let err = service.push(&mutation).await.unwrap_err();
    assert!(matches!(err, BackendError::NotFound(_)));
}

#[tokio::test]
async fn test_push_rejects_mismatched_mutation() {
    let service = demo_service(false);
    let mutation = Mutation::new(ItemKind::Task, "task-1", MutationKind::MarkRead);
    let err = service.push(&mutation).await.unwrap_err();
    assert!(matches!(err, BackendError::InvalidData(_)));
}

#[tokio::test]
async fn test_refresh_returns_snapshot_and_clears_flag() {
    let service = demo_service(false);
    assert!(!service.is_syncing().await);

    let snapshot = service.refresh().await;
    assert!(snapshot.is_some());
    assert!(!service.is_syncing().await);
}
