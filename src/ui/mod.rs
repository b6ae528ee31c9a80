//! UI module for swipedeck
//!
//! This module handles the terminal front end: the swipeable lists, input
//! routing from keyboard and mouse, and rendering.

pub mod app;
pub mod components;
pub mod core;
pub mod haptics;
pub mod renderer;

pub use app::AppComponent;
pub use renderer::run_app;
