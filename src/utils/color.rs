use crate::model::Priority;
use ratatui::style::Color;

/// Convert an action color token to a terminal color
#[must_use]
pub fn token_color(token: &str) -> Color {
    match token.to_lowercase().as_str() {
        "success" => Color::Rgb(54, 147, 7),
        "danger" => Color::Rgb(220, 76, 62),
        "warning" => Color::Rgb(199, 113, 0),
        "info" => Color::Rgb(49, 157, 192),
        "muted" => Color::Rgb(128, 128, 128),
        _ => Color::Rgb(65, 128, 255), // Default to blue
    }
}

#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => token_color("danger"),
        Priority::Medium => token_color("warning"),
        Priority::Low => token_color("info"),
    }
}
