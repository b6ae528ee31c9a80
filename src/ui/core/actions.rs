use crate::config::Tab;
use crate::model::Mutation;
use crate::swipe::SwipeDirection;
use crate::sync::Snapshot;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextItem,
    PreviousItem,
    SwitchTab(Tab),
    NextTab,

    // Swipes driven from the keyboard
    SwipeSelected(SwipeDirection),

    // Sync operations
    StartRefresh,
    SnapshotLoaded(Box<Snapshot>),
    MutationSynced(Mutation),
    MutationFailed { mutation: Mutation, error: String },

    // UI operations
    ToggleLogs,
    HideLogs,
    LogsScrollUp,
    LogsScrollDown,
    CycleIconTheme,

    // App control
    Quit,
    None,
}
