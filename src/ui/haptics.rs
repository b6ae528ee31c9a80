//! Terminal stand-in for haptic feedback: a short status bar flash.

use crate::constants::FEEDBACK_FLASH_MS;
use crate::swipe::{FeedbackKind, Haptics, LogHaptics};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct FlashHaptics {
    last: Arc<Mutex<Option<(FeedbackKind, Instant)>>>,
}

impl FlashHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// The signal to show at `now`, if one is still fresh.
    pub fn current(&self, now: Instant) -> Option<FeedbackKind> {
        let last = self.last.lock().ok()?;
        let (kind, at) = (*last)?;
        (now.saturating_duration_since(at) < Duration::from_millis(FEEDBACK_FLASH_MS)).then_some(kind)
    }
}

impl Haptics for FlashHaptics {
    fn perform(&self, kind: FeedbackKind) {
        LogHaptics.perform(kind);
        if let Ok(mut last) = self.last.lock() {
            *last = Some((kind, Instant::now()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_expires() {
        let haptics = FlashHaptics::new();
        assert_eq!(haptics.current(Instant::now()), None);

        haptics.perform(FeedbackKind::Warning);
        assert_eq!(haptics.current(Instant::now()), Some(FeedbackKind::Warning));

        let later = Instant::now() + Duration::from_millis(FEEDBACK_FLASH_MS + 1);
        assert_eq!(haptics.current(later), None);
    }
}
