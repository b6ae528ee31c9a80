use crate::config::{Config, Tab};
use crate::constants::{
    CELL_ASPECT_RATIO, ERROR_SYNC_FAILED, ERROR_SYNC_PENDING_HINT, IDLE_TICK_MS, KEYBOARD_SWIPE_OVERSHOOT,
    STATUS_MESSAGE_SECS, SUCCESS_NOTIFICATION_DELETED, SUCCESS_NOTIFICATION_READ, SUCCESS_REFRESHED,
    SUCCESS_TASK_COMPLETED, SUCCESS_TASK_DELETED,
};
use crate::icons::IconService;
use crate::list::{action_binding, ListContainer};
use crate::logger::Logger;
use crate::model::{ItemKind, Mutation, MutationKind, Notification, Project, Record, Task};
use crate::swipe::{GestureOutcome, Haptics, SwipeConfig, SwipeDirection};
use crate::sync::{DataSource, SyncService};
use crate::ui::components::{
    LogsPanel, RowContext, StatusBar, StatusInfo, StatusMessage, SwipeListComponent, TabBar,
};
use crate::ui::core::{Action, Component, EventType, TaskManager};
use crate::ui::haptics::FlashHaptics;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A pointer gesture in progress on one row.
#[derive(Debug, Clone)]
struct TouchSession {
    tab: Tab,
    id: String,
    column: u16,
    row: u16,
}

pub struct AppComponent {
    config: Config,
    tab: Tab,

    // Lists and their views
    tasks: ListContainer<Task>,
    notifications: ListContainer<Notification>,
    task_view: SwipeListComponent,
    notification_view: SwipeListComponent,
    logs_panel: LogsPanel,

    // Snapshot data not held by the lists
    projects: Vec<Project>,
    source: Option<DataSource>,

    // Services
    sync_service: SyncService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,
    haptics: FlashHaptics,

    // Simple UI state
    touch: Option<TouchSession>,
    message: Option<(StatusMessage, Instant)>,
    loading: bool,
    manual_refresh: bool,
    last_refresh: Option<Instant>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, sync_service: SyncService) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = sync_service.logger().clone();
        let haptics = FlashHaptics::new();
        let shared: Arc<dyn Haptics> = Arc::new(haptics.clone());

        let tasks = ListContainer::new(
            config.swipe,
            action_binding(ItemKind::Task, config.actions.for_kind(ItemKind::Task)),
            Arc::clone(&shared),
        );
        let notifications = ListContainer::new(
            config.swipe,
            action_binding(ItemKind::Notification, config.actions.for_kind(ItemKind::Notification)),
            shared,
        );

        Self {
            tab: config.ui.default_tab,
            icons: IconService::new(config.ui.icon_theme),
            tasks,
            notifications,
            task_view: SwipeListComponent::new("Tasks", "No tasks"),
            notification_view: SwipeListComponent::new("Notifications", "No notifications"),
            logs_panel: LogsPanel::new(logger.clone()),
            projects: Vec::new(),
            source: None,
            sync_service,
            task_manager,
            background_action_rx,
            logger,
            haptics,
            touch: None,
            message: None,
            loading: true,
            manual_refresh: false,
            last_refresh: None,
            should_quit: false,
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn tasks(&self) -> &ListContainer<Task> {
        &self.tasks
    }

    pub fn notifications(&self) -> &ListContainer<Notification> {
        &self.notifications
    }

    /// Any row is moving or a pointer gesture is live
    pub fn is_animating(&self) -> bool {
        self.touch.is_some() || self.tasks.is_animating() || self.notifications.is_animating()
    }

    /// How long the event loop may sleep before the next frame
    pub fn frame_interval(&self) -> Duration {
        if self.is_animating() || self.haptics.current(Instant::now()).is_some() {
            Duration::from_millis(self.config.ui.frame_interval_ms)
        } else {
            Duration::from_millis(IDLE_TICK_MS)
        }
    }

    /// Trigger the first snapshot load on startup
    pub fn trigger_initial_refresh(&mut self) {
        self.logger.log(format!(
            "AppComponent: Starting initial refresh ({} backend)",
            self.sync_service.backend_type()
        ));
        self.start_refresh(false);
    }

    fn start_refresh(&mut self, manual: bool) {
        if self.task_manager.is_refreshing() {
            return;
        }
        self.manual_refresh = manual;
        self.last_refresh = Some(Instant::now());
        self.task_manager.spawn_refresh(self.sync_service.clone());
    }

    fn set_message(&mut self, text: String, is_error: bool) {
        self.message = Some((StatusMessage { text, is_error }, Instant::now()));
    }

    /// Advance every row, push fired mutations and run periodic work.
    /// Returns whether the screen needs a redraw.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let was_animating = self.is_animating();

        let mut mutations = self.tasks.tick(now);
        mutations.extend(self.notifications.tick(now));
        let changed = !mutations.is_empty();
        for mutation in mutations {
            self.logger.log(format!("Applied {} locally", mutation));
            self.task_manager.spawn_mutation(self.sync_service.clone(), mutation);
        }
        if changed {
            self.task_view.clamp(self.tasks.len());
            self.notification_view.clamp(self.notifications.len());
        }

        let session_gone = self.touch.as_ref().is_some_and(|s| !self.contains(s.tab, &s.id));
        if session_gone {
            self.touch = None;
        }

        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= Duration::from_secs(STATUS_MESSAGE_SECS));
        if expired {
            self.message = None;
        }

        let interval = self.config.sync.auto_refresh_interval_secs;
        if interval > 0
            && self
                .last_refresh
                .is_some_and(|at| now.saturating_duration_since(at) >= Duration::from_secs(interval))
        {
            self.logger.log("Auto refresh".to_string());
            self.start_refresh(false);
        }

        was_animating || changed || expired || self.haptics.current(now).is_some()
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.task_manager.cleanup_finished_tasks();
        actions
    }

    fn contains(&self, tab: Tab, id: &str) -> bool {
        match tab {
            Tab::Tasks => self.tasks.get(id).is_some(),
            Tab::Notifications => self.notifications.get(id).is_some(),
        }
    }

    fn active_len(&self) -> usize {
        match self.tab {
            Tab::Tasks => self.tasks.len(),
            Tab::Notifications => self.notifications.len(),
        }
    }

    fn active_view(&self) -> &SwipeListComponent {
        match self.tab {
            Tab::Tasks => &self.task_view,
            Tab::Notifications => &self.notification_view,
        }
    }

    fn active_view_mut(&mut self) -> &mut SwipeListComponent {
        match self.tab {
            Tab::Tasks => &mut self.task_view,
            Tab::Notifications => &mut self.notification_view,
        }
    }

    fn id_at(&self, tab: Tab, index: usize) -> Option<String> {
        match tab {
            Tab::Tasks => self.tasks.items().get(index).map(|item| item.id().to_string()),
            Tab::Notifications => self.notifications.items().get(index).map(|item| item.id().to_string()),
        }
    }

    fn touch_down(&mut self, tab: Tab, id: &str, now: Instant) -> bool {
        match tab {
            Tab::Tasks => self.tasks.touch_down(id, now),
            Tab::Notifications => self.notifications.touch_down(id, now),
        }
    }

    fn touch_move(&mut self, tab: Tab, id: &str, dx: f32, dy: f32, now: Instant) {
        match tab {
            Tab::Tasks => self.tasks.touch_move(id, dx, dy, now),
            Tab::Notifications => self.notifications.touch_move(id, dx, dy, now),
        };
    }

    fn touch_up(&mut self, tab: Tab, id: &str, now: Instant) -> GestureOutcome {
        match tab {
            Tab::Tasks => self.tasks.touch_up(id, now),
            Tab::Notifications => self.notifications.touch_up(id, now),
        }
    }

    /// Abandon a live pointer gesture without deciding it
    fn cancel_touch(&mut self, now: Instant) {
        if let Some(session) = self.touch.take() {
            match session.tab {
                Tab::Tasks => self.tasks.touch_cancel(&session.id, now),
                Tab::Notifications => self.notifications.touch_cancel(&session.id, now),
            }
        }
    }

    fn swipe_selected(&mut self, direction: SwipeDirection, now: Instant) {
        if self.touch.is_some() {
            return;
        }
        let swipe = self.config.swipe;
        let outcome = match self.tab {
            Tab::Tasks => {
                let index = self.task_view.selected();
                replay_swipe(&mut self.tasks, index, direction, &swipe, now)
            }
            Tab::Notifications => {
                let index = self.notification_view.selected();
                replay_swipe(&mut self.notifications, index, direction, &swipe, now)
            }
        };
        if let Some(outcome) = outcome {
            self.logger.log(format!("Keyboard swipe {:?}: {:?}", direction, outcome));
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.cancel_touch(now);
                let tab = self.tab;
                let len = self.active_len();
                let Some(index) = self.active_view().row_at(mouse.column, mouse.row, len) else {
                    return Action::None;
                };
                self.active_view_mut().select(index, len);
                let Some(id) = self.id_at(tab, index) else {
                    return Action::None;
                };
                if self.touch_down(tab, &id, now) {
                    self.touch = Some(TouchSession {
                        tab,
                        id,
                        column: mouse.column,
                        row: mouse.row,
                    });
                }
                Action::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(session) = self.touch.clone() {
                    let dx = f32::from(mouse.column) - f32::from(session.column);
                    let dy = (f32::from(mouse.row) - f32::from(session.row)) * CELL_ASPECT_RATIO;
                    self.touch_move(session.tab, &session.id, dx, dy, now);
                }
                Action::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(session) = self.touch.take() {
                    let outcome = self.touch_up(session.tab, &session.id, now);
                    if outcome.is_commit() {
                        self.logger.log(format!("Swipe on {}: {:?}", session.id, outcome));
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.cancel_touch(now);
                Action::NextItem
            }
            MouseEventKind::ScrollUp => {
                self.cancel_touch(now);
                Action::PreviousItem
            }
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousItem,
            KeyCode::Left | KeyCode::Char('h') => Action::SwipeSelected(SwipeDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => Action::SwipeSelected(SwipeDirection::Right),
            KeyCode::Tab | KeyCode::BackTab => Action::NextTab,
            KeyCode::Char('1') => Action::SwitchTab(Tab::Tasks),
            KeyCode::Char('2') => Action::SwitchTab(Tab::Notifications),
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - starting manual refresh".to_string());
                Action::StartRefresh
            }
            KeyCode::Char('G') => Action::ToggleLogs,
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if tab != self.tab {
            self.cancel_touch(Instant::now());
            self.tab = tab;
        }
    }

    fn report_synced(&mut self, mutation: &Mutation) {
        let text = match (mutation.target, mutation.kind) {
            (ItemKind::Task, MutationKind::Delete) => SUCCESS_TASK_DELETED,
            (ItemKind::Task, _) => SUCCESS_TASK_COMPLETED,
            (ItemKind::Notification, MutationKind::Delete) => SUCCESS_NOTIFICATION_DELETED,
            (ItemKind::Notification, _) => SUCCESS_NOTIFICATION_READ,
        };
        self.set_message(text.to_string(), false);
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let action = self.logs_panel.update(action);
        match action {
            Action::NextItem => {
                let len = self.active_len();
                self.active_view_mut().select_next(len);
            }
            Action::PreviousItem => self.active_view_mut().select_previous(),
            Action::SwitchTab(tab) => self.switch_tab(tab),
            Action::NextTab => {
                let next = match self.tab {
                    Tab::Tasks => Tab::Notifications,
                    Tab::Notifications => Tab::Tasks,
                };
                self.switch_tab(next);
            }
            Action::SwipeSelected(direction) => self.swipe_selected(direction, Instant::now()),
            Action::StartRefresh => self.start_refresh(true),
            Action::SnapshotLoaded(snapshot) => {
                let snapshot = *snapshot;
                self.tasks.replace_all(snapshot.tasks);
                self.notifications.replace_all(snapshot.notifications);
                self.projects = snapshot.projects;
                self.source = Some(snapshot.source);
                self.task_view.clamp(self.tasks.len());
                self.notification_view.clamp(self.notifications.len());
                self.loading = false;
                if self.manual_refresh {
                    self.set_message(SUCCESS_REFRESHED.to_string(), false);
                    self.manual_refresh = false;
                }
            }
            Action::MutationSynced(mutation) => self.report_synced(&mutation),
            Action::MutationFailed { mutation, error } => {
                log::warn!("push of {} failed: {}", mutation, error);
                self.set_message(
                    format!("{} {}: {} ({})", ERROR_SYNC_FAILED, mutation, error, ERROR_SYNC_PENDING_HINT),
                    true,
                );
            }
            Action::CycleIconTheme => self.icons.cycle_icon_theme(),
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                return Action::Quit;
            }
            Action::ToggleLogs
            | Action::HideLogs
            | Action::LogsScrollUp
            | Action::LogsScrollDown
            | Action::None => {}
        }
        Action::None
    }

    /// Process a terminal event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let now = Instant::now();
        let action = match event_type {
            EventType::Key(key) => {
                if self.logs_panel.is_visible() {
                    self.logs_panel.handle_key_events(key)
                } else {
                    self.handle_global_key(key)
                }
            }
            EventType::Mouse(mouse) => {
                if self.logs_panel.is_visible() {
                    Action::None
                } else {
                    self.handle_mouse(mouse, now)
                }
            }
            EventType::Resize(_, _) | EventType::FocusLost => {
                self.cancel_touch(now);
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };
        self.handle_app_action(action);
    }
}

/// Drive a synthetic drag through the row's state machine, as if the pointer
/// moved just past the commit threshold over a few frames and let go.
fn replay_swipe<T: Record>(
    list: &mut ListContainer<T>,
    index: usize,
    direction: SwipeDirection,
    swipe: &SwipeConfig,
    now: Instant,
) -> Option<GestureOutcome> {
    let item = list.items().get(index)?;
    let id = item.id().to_string();
    let threshold = item.host().thresholds().for_direction(direction);
    // The tracker clamps the drawn offset; the release still sees the full distance.
    let distance = (threshold * KEYBOARD_SWIPE_OVERSHOOT).max(swipe.activation_distance + 1.0);

    let at = |ago_ms: u64| now.checked_sub(Duration::from_millis(ago_ms)).unwrap_or(now);
    if !list.touch_down(&id, at(48)) {
        return None;
    }
    list.touch_move(&id, direction.sign() * distance * 0.5, 0.0, at(32));
    list.touch_move(&id, direction.sign() * distance, 0.0, at(16));
    Some(list.touch_up(&id, now))
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).split(rect);

        let open_tasks = self.tasks.records().filter(|task| !task.is_completed()).count();
        let unread = self.notifications.records().filter(|n| !n.read).count();
        TabBar::render(f, chunks[0], self.tab, open_tasks, unread);

        let ctx = RowContext {
            projects: &self.projects,
            icons: &self.icons,
            now: Utc::now(),
        };
        match self.tab {
            Tab::Tasks => self.task_view.render(f, chunks[1], &mut self.tasks, &ctx, true),
            Tab::Notifications => self
                .notification_view
                .render(f, chunks[1], &mut self.notifications, &ctx, true),
        }

        let info = StatusInfo {
            loading: self.loading,
            refreshing: self.task_manager.is_refreshing(),
            pending_mutations: self.task_manager.pending_mutations(),
            source: self.source,
            message: self.message.as_ref().map(|(message, _)| message),
            flash: self.haptics.current(Instant::now()),
            sync_icon: self.icons.sync_in_progress(),
        };
        StatusBar::render(f, chunks[2], &info);

        if self.logs_panel.is_visible() {
            self.logs_panel.render(f, rect);
        }
    }
}
