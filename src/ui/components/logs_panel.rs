//! Logs panel for browsing the in-memory log buffer

use crate::constants::LOGS_PANEL_TITLE;
use crate::logger::Logger;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    visible: bool,
    scroll: usize,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            visible: false,
            scroll: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn log_line(entry: &str) -> ListItem<'static> {
        // Parse timestamp and message
        let Some(bracket_end) = entry.find("] ") else {
            return ListItem::new(Line::from(entry.to_string()));
        };
        let timestamp = &entry[..=bracket_end];
        let message = &entry[bracket_end + 2..];

        let message_style = if message.contains('❌') || message.contains("Failed") {
            Style::default().fg(Color::Red)
        } else if message.contains('✅') {
            Style::default().fg(Color::Green)
        } else if message.contains("⚠️") {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", timestamp), Style::default().fg(Color::DarkGray)),
            Span::styled(message.to_string(), message_style),
        ]))
    }
}

impl Component for LogsPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideLogs,
            KeyCode::Down | KeyCode::Char('j') => Action::LogsScrollDown,
            KeyCode::Up | KeyCode::Char('k') => Action::LogsScrollUp,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleLogs => {
                self.visible = !self.visible;
                self.scroll = 0;
                Action::None
            }
            Action::HideLogs => {
                self.visible = false;
                Action::None
            }
            Action::LogsScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            Action::LogsScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Take 80% of the screen
        let modal_width = rect.width.saturating_mul(8) / 10;
        let modal_height = rect.height.saturating_mul(8) / 10;
        let modal_area = Rect {
            x: rect.x + (rect.width.saturating_sub(modal_width)) / 2,
            y: rect.y + (rect.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        f.render_widget(Clear, modal_area);
        let block = Block::default()
            .title(LOGS_PANEL_TITLE)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, modal_area);

        let inner = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = self.logger.get_logs();
        if logs.is_empty() {
            let no_logs = Paragraph::new("No logs yet")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(no_logs, inner);
            return;
        }

        self.scroll = self.scroll.min(logs.len().saturating_sub(1));
        let items: Vec<ListItem> = logs
            .iter()
            .skip(self.scroll)
            .take(usize::from(inner.height))
            .map(|entry| Self::log_line(entry))
            .collect();
        f.render_widget(List::new(items), inner);
    }
}
