use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::quiz::result::QuizSummary;
use crate::ui::theme::Theme;

pub struct SummaryPanel<'a> {
    pub summary: &'a QuizSummary,
    pub theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a QuizSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let title = if self.summary.completed {
            " Quiz complete! "
        } else {
            " Quiz stopped "
        };

        let block = Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let score_line = Line::from(vec![
            Span::styled("Your score: ", Style::default().fg(colors.fg())),
            Span::styled(
                self.summary.score.to_string(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" out of {}", self.summary.total),
                Style::default().fg(colors.fg()),
            ),
        ]);
        Paragraph::new(score_line)
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        let first_try_color = if self.summary.corrected.is_empty() {
            colors.success()
        } else {
            colors.warning()
        };
        let detail = format!(
            "{} right on the first try ({:.0}%)  ·  {:.1}s",
            self.summary.first_try,
            self.summary.accuracy(),
            self.summary.elapsed_secs
        );
        Paragraph::new(Line::from(Span::styled(detail, Style::default().fg(first_try_color))))
            .alignment(Alignment::Center)
            .render(layout[2], buf);

        if !self.summary.corrected.is_empty() {
            let mut lines = vec![
                Line::from(Span::styled(
                    "  Corrected answers",
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "  Here are the right answers for the questions you had to try again:",
                    Style::default().fg(colors.muted()),
                )),
                Line::from(""),
            ];
            for item in &self.summary.corrected {
                lines.push(Line::from(Span::styled(
                    format!("  {}", item.prompt),
                    Style::default().fg(colors.fg()),
                )));
                lines.push(Line::from(Span::styled(
                    format!("    → {}", item.correct),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )));
            }
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(layout[3], buf);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("  [r/Enter] Try again  ", Style::default().fg(colors.accent())),
            Span::styled("[q] Menu", Style::default().fg(colors.accent())),
        ]));
        help.render(layout[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::CorrectedAnswer;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(summary: &QuizSummary) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, 24);
        let mut buf = Buffer::empty(area);
        SummaryPanel::new(summary, &theme).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn perfect_run_has_no_correction_list() {
        let text = render(&QuizSummary {
            score: 12,
            total: 12,
            first_try: 12,
            corrected: Vec::new(),
            elapsed_secs: 31.0,
            completed: true,
        });
        assert!(text.contains("Quiz complete!"));
        assert!(text.contains("Your score: 12 out of 12"));
        assert!(text.contains("12 right on the first try (100%)"));
        assert!(!text.contains("Corrected answers"));
    }

    #[test]
    fn lists_corrected_answers() {
        let text = render(&QuizSummary {
            score: 2,
            total: 2,
            first_try: 1,
            corrected: vec![CorrectedAnswer {
                prompt: "What is \"십일월\" in English?".to_string(),
                correct: "November".to_string(),
            }],
            elapsed_secs: 4.2,
            completed: true,
        });
        assert!(text.contains("Corrected answers"));
        assert!(text.contains("in English?"));
        assert!(text.contains("→ November"));
        assert!(text.contains("1 right on the first try (50%)"));
    }
}
