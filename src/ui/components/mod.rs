//! UI components

pub mod logs_panel;
pub mod status_bar;
pub mod swipe_list;
pub mod tab_bar;

pub use logs_panel::LogsPanel;
pub use status_bar::{StatusBar, StatusInfo, StatusMessage};
pub use swipe_list::{RowContext, RowView, SwipeListComponent};
pub use tab_bar::TabBar;
