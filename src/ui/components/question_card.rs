use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::quiz::QuestionSession;
use crate::ui::theme::Theme;

const RETRY_HINT: &str = "If your answer is wrong, that choice will disappear. Try again!";

/// Footer hint for the digit keys that map to a visible choice.
pub fn answer_hint(choice_count: usize) -> String {
    match choice_count.min(9) {
        0 | 1 => "[1] Answer".to_string(),
        n => format!("[1-{n}] Answer"),
    }
}

/// The current question with its remaining choices.
pub struct QuestionCard<'a> {
    session: &'a QuestionSession,
    number: usize,
    total: usize,
    selected: usize,
    wrong_flash: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> QuestionCard<'a> {
    pub fn new(session: &'a QuestionSession, number: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            session,
            number,
            total,
            selected: 0,
            wrong_flash: None,
            theme,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Show a short notice that `choice` was wrong.
    pub fn wrong_flash(mut self, choice: Option<&'a str>) -> Self {
        self.wrong_flash = choice;
        self
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Months of the Year Quiz ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let choice_rows = self.session.choices.len() as u16 * 2;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(choice_rows),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let counter = format!("Question {} of {}", self.number, self.total);
        Paragraph::new(Line::from(Span::styled(counter, Style::default().fg(colors.accent()))))
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        Paragraph::new(Line::from(Span::styled(
            self.session.question.prompt.as_str(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(layout[2], buf);

        let mut lines = Vec::with_capacity(self.session.choices.len() * 2);
        for (i, choice) in self.session.choices.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(colors.choice_selected_fg())
                    .bg(colors.choice_selected_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(Span::styled(format!("  {}  {choice}  ", i + 1), style)));
            lines.push(Line::from(""));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(layout[3], buf);

        let footer = match self.wrong_flash {
            Some(choice) => Line::from(vec![
                Span::styled(
                    format!("\"{choice}\" is not it. "),
                    Style::default().fg(colors.error()).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Try again!", Style::default().fg(colors.warning())),
            ]),
            None => Line::from(Span::styled(RETRY_HINT, Style::default().fg(colors.muted()))),
        };
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Direction, Question, VocabularyEntry};

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

    #[test]
    fn answer_hint_tracks_remaining_choices() {
        assert_eq!(answer_hint(4), "[1-4] Answer");
        assert_eq!(answer_hint(2), "[1-2] Answer");
        assert_eq!(answer_hint(1), "[1] Answer");
        assert_eq!(answer_hint(12), "[1-9] Answer");
    }

    fn session() -> QuestionSession {
        QuestionSession {
            question: Question::new(
                2,
                &VocabularyEntry::new("August", "팔월"),
                Direction::EnglishToKorean,
            ),
            choices: vec!["구월".to_string(), "팔월".to_string()],
            had_wrong_attempt: false,
        }
    }

    #[test]
    fn renders_counter_prompt_and_numbered_choices() {
        let theme = Theme::default();
        let session = session();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        QuestionCard::new(&session, 3, 12, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Question 3 of 12"));
        assert!(text.contains("What is \"August\" in Korean?"));
        assert!(text.contains("  1  "));
        assert!(text.contains("  2  "));
        assert!(text.contains("Try again!"));
    }

    #[test]
    fn wrong_flash_replaces_hint() {
        let theme = Theme::default();
        let session = session();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        QuestionCard::new(&session, 1, 1, &theme)
            .wrong_flash(Some("May"))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("\"May\" is not it."));
        assert!(!text.contains("that choice will disappear"));
    }
}
