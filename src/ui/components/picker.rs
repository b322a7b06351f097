use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerKind {
    Chapter,
    Question,
}

/// Popup list for jumping straight to a chapter or question.
pub struct Picker<'a> {
    pub kind: PickerKind,
    pub items: Vec<String>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Picker<'a> {
    pub fn new(kind: PickerKind, items: Vec<String>, selected: usize, theme: &'a Theme) -> Self {
        let selected = selected.min(items.len().saturating_sub(1));
        Self {
            kind,
            items,
            selected,
            theme,
        }
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.items.len() - 1;
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PickerKind::Chapter => " Chapters ",
            PickerKind::Question => " Questions ",
        }
    }

    /// First visible row so that `selected` stays on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected + 1 - visible
        }
    }
}

impl Widget for &Picker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.title())
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let visible = layout[0].height as usize;
        let offset = self.scroll_offset(visible);

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, item)| {
                let is_selected = i == self.selected;
                let indicator = if is_selected { ">" } else { " " };
                Line::from(Span::styled(
                    format!(" {indicator} {item}"),
                    Style::default()
                        .fg(if is_selected {
                            colors.accent()
                        } else {
                            colors.fg()
                        })
                        .add_modifier(if is_selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                ))
            })
            .collect();
        Paragraph::new(lines).render(layout[0], buf);

        Paragraph::new(Line::from(Span::styled(
            " [Enter] Go  [Esc] Close",
            Style::default().fg(colors.text_muted()),
        )))
        .render(layout[1], buf);
    }
}
