use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::quiz::dataset::Question;
use crate::session::quiz::{OptionStatus, QuizSession};
use crate::ui::theme::Theme;

/// Prompt, lettered options and the feedback line for one question.
pub struct QuestionCard<'a> {
    question: &'a Question,
    session: &'a QuizSession,
    theme: &'a Theme,
}

impl<'a> QuestionCard<'a> {
    pub fn new(question: &'a Question, session: &'a QuizSession, theme: &'a Theme) -> Self {
        Self {
            question,
            session,
            theme,
        }
    }

    fn option_lines(&self) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        self.session
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let (key_style, text_style) = match self.session.option_status(i) {
                    OptionStatus::Pending => (
                        Style::default()
                            .fg(colors.option_key())
                            .add_modifier(Modifier::BOLD),
                        Style::default().fg(colors.fg()),
                    ),
                    OptionStatus::Locked => (
                        Style::default().fg(colors.text_muted()),
                        Style::default().fg(colors.text_muted()),
                    ),
                    OptionStatus::Correct => {
                        let s = Style::default()
                            .fg(colors.correct_fg())
                            .bg(colors.correct())
                            .add_modifier(Modifier::BOLD);
                        (s, s)
                    }
                    OptionStatus::Wrong => {
                        let s = Style::default()
                            .fg(colors.incorrect_fg())
                            .bg(colors.incorrect())
                            .add_modifier(Modifier::BOLD);
                        (s, s)
                    }
                };
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{})", option.label), key_style),
                    Span::styled(format!(" {} ", option.text), text_style),
                ])
            })
            .collect()
    }

    fn feedback_line(&self) -> Line<'a> {
        let colors = &self.theme.colors;
        match self.session.feedback {
            None => Line::from(Span::styled(
                "  Press a letter to answer",
                Style::default().fg(colors.text_muted()),
            )),
            Some(feedback) => {
                let outcome = feedback.outcome();
                let color = if outcome.is_correct() {
                    colors.correct()
                } else {
                    colors.incorrect()
                };
                Line::from(Span::styled(
                    format!("  {}", outcome.message()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
        }
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Question {} ", self.question.original_index + 1))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let option_count = u16::try_from(self.session.options.len()).unwrap_or(u16::MAX);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),
                Constraint::Length(option_count.saturating_add(1)),
                Constraint::Length(2),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.question.prompt),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: false })
        .render(layout[0], buf);

        Paragraph::new(self.option_lines()).render(layout[1], buf);
        Paragraph::new(vec![Line::from(""), self.feedback_line()]).render(layout[2], buf);
    }
}
