//! Tab bar component

use crate::config::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

pub struct TabBar;

impl TabBar {
    pub fn render(f: &mut Frame, area: Rect, active: Tab, tasks_open: usize, unread: usize) {
        let titles = vec![
            Line::from(format!(" Tasks ({}) ", tasks_open)),
            Line::from(format!(" Notifications ({}) ", unread)),
        ];
        let selected = match active {
            Tab::Tasks => 0,
            Tab::Notifications => 1,
        };

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider("│");

        f.render_widget(tabs, area);
    }
}
