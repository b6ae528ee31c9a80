//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_NOTIFICATION_READ: &str = "✅ Notification marked read";
pub const SUCCESS_NOTIFICATION_DELETED: &str = "✅ Notification deleted";
pub const SUCCESS_REFRESHED: &str = "✅ Refreshed";

// Error Messages
pub const ERROR_SYNC_FAILED: &str = "❌ Could not sync";
pub const ERROR_SYNC_PENDING_HINT: &str = "local change kept until next refresh";

// Log Messages
pub const LOG_DEMO_FALLBACK: &str = "⚠️ Backend unavailable, showing demo data";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_LOADING: &str = "Loading…";
pub const STATUS_DEMO_DATA: &str = "demo data";
pub const STATUS_KEYS: &str = "←/h ←swipe • →/l swipe→ • Tab: switch • r: refresh • G: logs • q: quit";
pub const LOGS_PANEL_TITLE: &str = "🔍 Logs - Press 'Esc' or 'G' to close";

// Timing
/// Fastest allowed animation frame interval
pub const FRAME_INTERVAL_MIN_MS: u64 = 8;
/// Slowest allowed animation frame interval
pub const FRAME_INTERVAL_MAX_MS: u64 = 100;
/// Frame interval used while nothing animates
pub const IDLE_TICK_MS: u64 = 100;
/// Upper bound for the auto refresh interval (24 hours)
pub const MAX_AUTO_REFRESH_SECS: u64 = 86_400;
/// How long a feedback flash stays in the status bar
pub const FEEDBACK_FLASH_MS: u64 = 300;
/// How long a status message replaces the key hints
pub const STATUS_MESSAGE_SECS: u64 = 4;

// Input
/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT_RATIO: f32 = 2.0;
/// Keyboard swipes travel this multiple of the commit threshold
pub const KEYBOARD_SWIPE_OVERSHOOT: f32 = 1.2;

// Logging
/// Maximum number of entries kept in the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 1000;
