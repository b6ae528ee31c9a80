//! Tactile feedback signals emitted by swipe rows.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// The row claimed a horizontal drag.
    Selection,
    /// A non-destructive action committed.
    Success,
    /// A destructive action committed.
    Warning,
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedbackKind::Selection => "selection",
            FeedbackKind::Success => "success",
            FeedbackKind::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// Sink for feedback signals. Platforms with a vibration motor play it;
/// the terminal front end flashes the status bar.
pub trait Haptics: Send + Sync {
    fn perform(&self, kind: FeedbackKind);
}

/// Discards every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn perform(&self, _kind: FeedbackKind) {}
}

/// Writes every signal to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn perform(&self, kind: FeedbackKind) {
        log::debug!("haptic feedback: {kind}");
    }
}
