//! Core UI functionality.
//!
//! - [`actions`] - Action definitions passed between components and the app
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling and frame ticks
//! - [`task_manager`] - Background refreshes and mutation pushes

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskKind, TaskManager};
