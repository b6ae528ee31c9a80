//! Utility modules for swipedeck.
//!
//! - [`color`] - Color tokens and priorities mapped to terminal colors
//! - [`datetime`] - Relative time and deadline formatting

pub mod color;
pub mod datetime;
