use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swipedeck::config::ActionsConfig;
use swipedeck::list::{action_binding, ListContainer};
use swipedeck::model::{
    ItemKind, MutationKind, Notification, NotificationKind, Priority, Record, Task, TaskStatus,
};
use swipedeck::swipe::{GestureOutcome, NoHaptics, SwipeConfig};

fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        project_id: "proj-website".to_string(),
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        assigned_to: None,
        deadline: None,
    }
}

fn notification(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        title: format!("Notification {}", id),
        message: "Something happened".to_string(),
        kind: NotificationKind::Mention,
        read,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
    }
}

fn container<T: Record>(records: Vec<T>) -> ListContainer<T> {
    let actions = ActionsConfig::default();
    let binding = action_binding(T::KIND, actions.for_kind(T::KIND));
    ListContainer::new(SwipeConfig::default(), binding, Arc::new(NoHaptics)).with_records(records)
}

fn tasks() -> ListContainer<Task> {
    container(vec![
        task("t1", "Draft landing page"),
        task("t2", "Review pull request"),
        task("t3", "Update dependencies"),
    ])
}

/// Drag row `id` to `dx` and release.
fn swipe<T: Record>(list: &mut ListContainer<T>, id: &str, dx: f32, t0: Instant) -> GestureOutcome {
    assert!(list.touch_down(id, t0));
    list.touch_move(id, dx / 2.0, 0.0, t0 + Duration::from_millis(16));
    list.touch_move(id, dx, 0.0, t0 + Duration::from_millis(32));
    list.touch_up(id, t0 + Duration::from_millis(48))
}

/// Tick every 16ms for two seconds and collect what was applied.
fn settle<T: Record>(list: &mut ListContainer<T>, from: Instant) -> Vec<swipedeck::model::Mutation> {
    let mut applied = Vec::new();
    let mut now = from;
    for _ in 0..125 {
        now += Duration::from_millis(16);
        applied.extend(list.tick(now));
    }
    applied
}

#[test]
fn test_mark_read_fires_once_and_keeps_row() {
    let mut list = container(vec![notification("n1", false), notification("n2", false)]);
    let t0 = Instant::now();

    assert_eq!(swipe(&mut list, "n1", 7.2, t0), GestureOutcome::CommitRight);
    let applied = settle(&mut list, t0);

    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].target, ItemKind::Notification);
    assert_eq!(applied[0].id, "n1");
    assert_eq!(applied[0].kind, MutationKind::MarkRead);

    assert_eq!(list.len(), 2);
    assert!(list.get("n1").unwrap().record().read);
    assert!(!list.get("n2").unwrap().record().read);
    assert!(!list.is_animating());
}

#[test]
fn test_left_swipe_deletes_task() {
    let mut list = tasks();
    let t0 = Instant::now();

    assert_eq!(swipe(&mut list, "t2", -8.0, t0), GestureOutcome::CommitLeft);

    // The row stays visible while it collapses.
    list.tick(t0 + Duration::from_millis(100));
    assert_eq!(list.len(), 3);
    assert!(list.get("t2").unwrap().committing());

    let applied = settle(&mut list, t0);
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].kind, MutationKind::Delete);
    assert_eq!(list.len(), 2);
    assert!(list.get("t2").is_none());
    let ids: Vec<&str> = list.records().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t3"]);
}

#[test]
fn test_short_drag_changes_nothing() {
    let mut list = tasks();
    let t0 = Instant::now();

    assert_eq!(swipe(&mut list, "t1", 2.4, t0), GestureOutcome::Cancel);
    let applied = settle(&mut list, t0);

    assert!(applied.is_empty());
    assert_eq!(list.len(), 3);
    assert_eq!(list.get("t1").unwrap().record().status, TaskStatus::Todo);
}

#[test]
fn test_rows_committing_in_same_frame_both_apply() {
    let mut list = tasks();
    let t0 = Instant::now();

    assert_eq!(swipe(&mut list, "t1", 8.0, t0), GestureOutcome::CommitRight);
    assert_eq!(swipe(&mut list, "t3", -8.0, t0), GestureOutcome::CommitLeft);

    let applied = settle(&mut list, t0);
    assert_eq!(applied.len(), 2);
    assert!(applied
        .iter()
        .any(|m| m.id == "t1" && m.kind == MutationKind::Complete));
    assert!(applied.iter().any(|m| m.id == "t3" && m.kind == MutationKind::Delete));

    assert_eq!(list.len(), 2);
    assert!(list.get("t1").unwrap().record().is_completed());
    assert!(list.get("t3").is_none());
}

#[test]
fn test_refresh_mid_sequence_keeps_host() {
    let mut list = tasks();
    let t0 = Instant::now();

    assert_eq!(swipe(&mut list, "t2", 8.0, t0), GestureOutcome::CommitRight);
    list.tick(t0 + Duration::from_millis(100));

    // A fresh snapshot arrives with the row renamed and reordered.
    list.replace_all(vec![task("t2", "Review pull request (updated)"), task("t1", "Draft landing page")]);
    assert!(list.get("t2").unwrap().committing());

    let applied = settle(&mut list, t0 + Duration::from_millis(100));
    assert_eq!(applied.len(), 1);
    let row = list.get("t2").unwrap().record();
    assert_eq!(row.title, "Review pull request (updated)");
    assert!(row.is_completed());
}

#[test]
fn test_replace_all_drops_duplicate_ids() {
    let mut list = tasks();
    list.replace_all(vec![task("a", "first"), task("b", "second"), task("a", "again")]);

    assert_eq!(list.len(), 2);
    assert_eq!(list.get("a").unwrap().record().title, "first");
    assert_eq!(list.position("b"), Some(1));
}

#[test]
fn test_apply_ignores_inapplicable_or_missing() {
    let mut list = tasks();

    assert!(list.apply("t1", MutationKind::MarkRead).is_none());
    assert!(list.apply("missing", MutationKind::Complete).is_none());

    let mutation = list.apply("t1", MutationKind::Complete).unwrap();
    assert_eq!(mutation.target, ItemKind::Task);
    // Completing twice changes nothing.
    assert!(list.apply("t1", MutationKind::Complete).is_none());
}

#[test]
fn test_touch_on_unknown_row_is_refused() {
    let mut list = tasks();
    let t0 = Instant::now();
    assert!(!list.touch_down("nope", t0));
    assert_eq!(list.touch_up("nope", t0), GestureOutcome::Cancel);
}
