//! Status bar component

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{STATUS_DEMO_DATA, STATUS_KEYS, STATUS_LOADING};
use crate::swipe::FeedbackKind;
use crate::sync::DataSource;

/// A transient message shown instead of the key hints
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Everything the status bar reflects
pub struct StatusInfo<'a> {
    pub loading: bool,
    pub refreshing: bool,
    pub pending_mutations: usize,
    pub source: Option<DataSource>,
    pub message: Option<&'a StatusMessage>,
    pub flash: Option<FeedbackKind>,
    pub sync_icon: &'static str,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(24),
        ])
        .split(area);

        if let Some(kind) = info.flash {
            let (symbol, color) = match kind {
                FeedbackKind::Selection => ("•", Color::Cyan),
                FeedbackKind::Success => ("✓", Color::Green),
                FeedbackKind::Warning => ("!", Color::Yellow),
            };
            let flash = Paragraph::new(symbol)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD));
            f.render_widget(flash, chunks[0]);
        }

        let (status_text, status_color) = if info.loading {
            (STATUS_LOADING.to_string(), Color::Yellow)
        } else if let Some(message) = info.message {
            let color = if message.is_error { Color::Red } else { Color::Green };
            (message.text.clone(), color)
        } else {
            (STATUS_KEYS.to_string(), Color::Gray)
        };
        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));
        f.render_widget(status_bar, chunks[1]);

        let mut indicators = Vec::new();
        if info.refreshing || info.pending_mutations > 0 {
            indicators.push(format!("{} {}", info.sync_icon, info.pending_mutations));
        }
        if info.source == Some(DataSource::Demo) {
            indicators.push(STATUS_DEMO_DATA.to_string());
        }
        let right = Paragraph::new(indicators.join(" "))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(right, chunks[2]);
    }
}
