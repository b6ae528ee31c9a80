//! swipedeck - swipe-to-act task and notification lists for the terminal
//!
//! The heart of the crate is [`swipe`]: a per-row gesture state machine
//! that reveals an action while a row is dragged sideways, decides on
//! release whether the action commits, and runs a short settle sequence
//! before handing the bound command back exactly once. [`list`] owns the
//! records and applies those commands optimistically; [`sync`] pushes them
//! to a [`backend`] without ever rolling them back.
//!
//! # Modules
//!
//! * [`swipe`] - Gesture tracking, commit decision, reveal and animation
//! * [`list`] - Swipeable list containers and per-kind action bindings
//! * [`model`] - Tasks, notifications, projects and mutations
//! * [`backend`] - Backend trait and the demo/offline backends
//! * [`sync`] - Snapshot loading and mutation pushes
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Backend abstraction layer
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Swipeable list containers
pub mod list;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Domain records and mutations
pub mod model;

/// Swipe gesture interaction core
pub mod swipe;

/// Snapshot loading and mutation pushes
pub mod sync;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;
