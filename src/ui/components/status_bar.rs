use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::quiz::navigation::AutoAdvanceMode;
use crate::ui::theme::Theme;

/// Header line: chapter, position, shuffle mode and auto-next indicators.
pub struct StatusBar<'a> {
    pub chapter: &'a str,
    pub chapter_number: usize,
    pub chapter_count: usize,
    pub question_number: usize,
    pub question_count: usize,
    pub mode: AutoAdvanceMode,
    pub auto_next: bool,
    pub theme: &'a Theme,
}

impl StatusBar<'_> {
    fn toggle_span(&self, text: String, on: bool) -> Span<'static> {
        let colors = &self.theme.colors;
        let bg = if on {
            colors.toggle_on()
        } else {
            colors.toggle_off()
        };
        Span::styled(
            text,
            Style::default()
                .fg(colors.bg())
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let header_style = Style::default().fg(colors.header_fg()).bg(colors.header_bg());

        let position = format!(
            " Chapter {}/{} | Question {}/{} ",
            self.chapter_number, self.chapter_count, self.question_number, self.question_count
        );
        let auto_next = if self.auto_next {
            " Auto Next: On "
        } else {
            " Auto Next: Off "
        };

        let line = Line::from(vec![
            Span::styled(
                " quizr ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", self.chapter),
                header_style.fg(colors.accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(position, header_style),
            self.toggle_span(
                format!(" {} ", self.mode.label()),
                self.mode != AutoAdvanceMode::Off,
            ),
            Span::styled(" ", header_style),
            self.toggle_span(auto_next.to_string(), self.auto_next),
        ]);

        Paragraph::new(line).style(header_style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_indicators() {
        let theme = Theme::default();
        let bar = StatusBar {
            chapter: "Geography",
            chapter_number: 1,
            chapter_count: 3,
            question_number: 2,
            question_count: 5,
            mode: AutoAdvanceMode::ShuffleQuestions,
            auto_next: false,
            theme: &theme,
        };
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        let text = row_text(&buf, 0);
        assert!(text.contains("Geography"));
        assert!(text.contains("Chapter 1/3 | Question 2/5"));
        assert!(text.contains("Shuffle questions"));
        assert!(text.contains("Auto Next: Off"));
    }
}
