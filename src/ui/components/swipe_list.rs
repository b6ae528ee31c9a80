//! Swipeable list rendering and row hit-testing.
//!
//! Each row is one terminal line. A row's swipe offset (in cells) shifts its
//! content sideways and uncovers the bound action's affordance underneath.

use crate::icons::IconService;
use crate::list::{ListContainer, ListItem};
use crate::model::{MutationKind, Notification, Project, Record, Task};
use crate::swipe::Affordance;
use crate::utils::color::{priority_color, token_color};
use crate::utils::datetime::{format_human_deadline, format_relative};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shared inputs for drawing a row.
pub struct RowContext<'a> {
    pub projects: &'a [Project],
    pub icons: &'a IconService,
    pub now: DateTime<Utc>,
}

/// A record that knows how to draw itself as a list row.
pub trait RowView: Record {
    fn row_line(&self, ctx: &RowContext<'_>) -> Line<'static>;
}

impl RowView for Task {
    fn row_line(&self, ctx: &RowContext<'_>) -> Line<'static> {
        let completed = self.is_completed();
        let title_style = if completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::raw(format!("{} ", ctx.icons.task_status(completed))),
            Span::styled(
                format!("{} ", ctx.icons.priority(self.priority)),
                Style::default().fg(priority_color(self.priority)),
            ),
            Span::styled(self.title.clone(), title_style),
        ];

        if let Some(project) = ctx.projects.iter().find(|p| p.id == self.project_id) {
            spans.push(Span::styled(
                format!(" · {}", project.name),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(assignee) = &self.assigned_to {
            spans.push(Span::styled(format!(" @{}", assignee), Style::default().fg(Color::Cyan)));
        }
        if let Some(deadline) = self.deadline {
            let overdue = !completed && deadline < ctx.now;
            spans.push(Span::styled(
                format!(" · {}", format_human_deadline(deadline)),
                Style::default().fg(if overdue { Color::Red } else { Color::Yellow }),
            ));
        }
        Line::from(spans)
    }
}

impl RowView for Notification {
    fn row_line(&self, ctx: &RowContext<'_>) -> Line<'static> {
        let title_style = if self.read {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        Line::from(vec![
            Span::styled(
                format!("{} ", ctx.icons.read_marker(self.read)),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("{} ", ctx.icons.notification(self.kind))),
            Span::styled(self.title.clone(), title_style),
            Span::styled(format!(": {}", self.message), Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" · {}", format_relative(self.created_at, ctx.now)),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

pub struct SwipeListComponent {
    title: &'static str,
    empty_text: &'static str,
    selected: usize,
    scroll: usize,
    area: Rect,
}

impl SwipeListComponent {
    pub fn new(title: &'static str, empty_text: &'static str) -> Self {
        Self {
            title,
            empty_text,
            selected: 0,
            scroll: 0,
            area: Rect::default(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.select(self.selected, len);
    }

    /// Index of the row under a terminal cell, if any.
    pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let area = self.area;
        if column < area.x || column >= area.x + area.width || row < area.y || row >= area.y + area.height {
            return None;
        }
        let index = self.scroll + usize::from(row - area.y);
        (index < len).then_some(index)
    }

    fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
    }

    pub fn render<T: RowView>(
        &mut self,
        f: &mut Frame,
        rect: Rect,
        list: &mut ListContainer<T>,
        ctx: &RowContext<'_>,
        focused: bool,
    ) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", self.title, list.len()))
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.area = inner;
        list.set_viewport_width(f32::from(inner.width));

        if list.is_empty() {
            let empty = Paragraph::new(self.empty_text)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        self.clamp(list.len());
        let height = usize::from(inner.height);
        self.ensure_visible(height);

        for (index, item) in list.items().iter().enumerate().skip(self.scroll).take(height) {
            let row = Rect {
                x: inner.x,
                y: inner.y + (index - self.scroll) as u16,
                width: inner.width,
                height: 1,
            };
            render_row(f, row, item, ctx, index == self.selected);
        }
    }
}

fn render_row<T: RowView>(f: &mut Frame, row: Rect, item: &ListItem<T>, ctx: &RowContext<'_>, selected: bool) {
    let host = item.host();
    let presence = host.presence();
    if presence < 0.5 {
        return;
    }

    let state = host.reveal();
    let width = i32::from(row.width);
    let shift = (state.offset.round() as i32).clamp(-width, width);

    if let Some(affordance) = &state.leading {
        let cells = shift.unsigned_abs() as u16;
        render_affordance(f, Rect { width: cells, ..row }, affordance, ctx, Alignment::Left);
    }
    if let Some(affordance) = &state.trailing {
        let cells = shift.unsigned_abs() as u16;
        let area = Rect {
            x: row.x + row.width - cells,
            width: cells,
            ..row
        };
        render_affordance(f, area, affordance, ctx, Alignment::Right);
    }

    let content_width = row.width.saturating_sub(shift.unsigned_abs() as u16);
    if content_width == 0 {
        return;
    }
    let (content, scroll_x) = if shift >= 0 {
        (
            Rect {
                x: row.x + shift as u16,
                width: content_width,
                ..row
            },
            0,
        )
    } else {
        (
            Rect {
                width: content_width,
                ..row
            },
            shift.unsigned_abs() as u16,
        )
    };

    let mut style = Style::default();
    if selected {
        style = style.bg(Color::DarkGray);
    }
    if item.committing() {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if presence < 1.0 {
        style = style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(item.record().row_line(ctx))
        .style(style)
        .scroll((0, scroll_x));
    f.render_widget(paragraph, content);
}

fn render_affordance(
    f: &mut Frame,
    area: Rect,
    affordance: &Affordance<'_, MutationKind>,
    ctx: &RowContext<'_>,
    alignment: Alignment,
) {
    if area.width == 0 {
        return;
    }
    let style_info = &affordance.action.style;
    let mut style = Style::default().bg(token_color(style_info.color)).fg(Color::Black);
    if affordance.armed {
        style = style.add_modifier(Modifier::BOLD);
    }
    if affordance.opacity < 1.0 {
        style = style.add_modifier(Modifier::DIM);
    }

    let text = format!(" {} {} ", ctx.icons.action(style_info.icon), style_info.label);
    f.render_widget(Paragraph::new(text).style(style).alignment(alignment), area);
}
