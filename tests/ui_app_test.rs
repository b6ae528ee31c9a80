use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swipedeck::backend::{Backend, DemoBackend};
use swipedeck::config::{Config, Tab};
use swipedeck::logger::Logger;
use swipedeck::model::TaskStatus;
use swipedeck::swipe::{SwipeDirection, Threshold};
use swipedeck::sync::SyncService;
use swipedeck::ui::core::{Action, Component, EventType};
use swipedeck::ui::AppComponent;

async fn loaded_app() -> AppComponent {
    loaded_app_with(Config::default()).await
}

async fn loaded_app_with(config: Config) -> AppComponent {
    let backend: Arc<dyn Backend> = Arc::new(DemoBackend::new(Duration::ZERO, false).unwrap());
    let sync = SyncService::new(backend, Logger::new());
    let snapshot = sync.load_snapshot().await;

    let mut app = AppComponent::new(config, sync);
    app.handle_app_action(Action::SnapshotLoaded(Box::new(snapshot)));
    app
}

fn settle(app: &mut AppComponent) {
    let start = Instant::now();
    for secs in 1..=3 {
        app.on_tick(start + Duration::from_secs(secs));
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test]
async fn test_snapshot_populates_lists() {
    let app = loaded_app().await;
    assert_eq!(app.tasks().len(), 7);
    assert_eq!(app.notifications().len(), 5);
    assert_eq!(app.active_tab(), Tab::Tasks);
    assert!(!app.is_animating());
}

#[tokio::test]
async fn test_keyboard_swipe_completes_selected_task() {
    let mut app = loaded_app().await;
    let first = app.tasks().items()[0].id().to_string();

    app.handle_app_action(Action::SwipeSelected(SwipeDirection::Right));
    assert!(app.is_animating());
    settle(&mut app);

    let task = app.tasks().get(&first).unwrap().record();
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(app.tasks().len(), 7);
    assert!(!app.is_animating());
}

#[tokio::test]
async fn test_keyboard_swipe_crosses_threshold_wider_than_reveal() {
    let mut config = Config::default();
    config.swipe.negative_threshold = Threshold::screen_fraction(0.25);
    assert!(config.validate().is_ok());

    let mut app = loaded_app_with(config).await;
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    // 25% of the 98-cell list is past the 18-cell reveal limit.
    let first = app.tasks().items()[0].id().to_string();
    assert!(app.tasks().items()[0].host().thresholds().negative > 18.0);

    app.handle_app_action(Action::SwipeSelected(SwipeDirection::Left));
    settle(&mut app);

    assert_eq!(app.tasks().len(), 6);
    assert!(app.tasks().get(&first).is_none());
}

#[tokio::test]
async fn test_keyboard_swipe_left_deletes_notification() {
    let mut app = loaded_app().await;
    app.handle_event(key(KeyCode::Char('2')));
    assert_eq!(app.active_tab(), Tab::Notifications);

    app.handle_event(key(KeyCode::Char('j')));
    let second = app.notifications().items()[1].id().to_string();

    app.handle_event(key(KeyCode::Char('h')));
    settle(&mut app);

    assert_eq!(app.notifications().len(), 4);
    assert!(app.notifications().get(&second).is_none());
}

#[tokio::test]
async fn test_mouse_drag_swipes_row() {
    let mut app = loaded_app().await;
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    // Tab bar on row 0, list border on row 1, first task on row 2.
    let first = app.tasks().items()[0].id().to_string();
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 2));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 15, 2));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 2));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 2));
    settle(&mut app);

    assert!(app.tasks().get(&first).unwrap().record().is_completed());
}

#[tokio::test]
async fn test_vertical_mouse_drag_does_not_swipe() {
    let mut app = loaded_app().await;
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let before: Vec<TaskStatus> = app.tasks().records().map(|task| task.status).collect();
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 2));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 13, 4));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 16, 6));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 16, 6));
    settle(&mut app);

    let after: Vec<TaskStatus> = app.tasks().records().map(|task| task.status).collect();
    assert_eq!(before, after);
    assert_eq!(app.tasks().len(), 7);
}

#[tokio::test]
async fn test_quit_key() {
    let mut app = loaded_app().await;
    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_logs_panel_captures_keys() {
    let mut app = loaded_app().await;
    app.handle_event(key(KeyCode::Char('G')));

    // 'q' closes the panel instead of quitting
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
