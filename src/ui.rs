use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::highlight::{classify, CharClass};
use crate::metrics;
use crate::session::TypingState;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

/// Accuracy readout colour, using the thresholds of the original widget.
fn accuracy_style(percent: u8) -> Style {
    let color = if percent >= 95 {
        Color::Green
    } else if percent >= 80 {
        Color::Yellow
    } else {
        Color::Red
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn occupied_lines(text_width: usize, max_chars_per_line: u16) -> u16 {
    if text_width <= max_chars_per_line as usize {
        1
    } else {
        ((text_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let dim_italic_style = dim_style.add_modifier(Modifier::ITALIC);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let magenta_bold_style = Style::default().patch(bold_style).fg(Color::Magenta);
        let cyan_bold_style = Style::default().patch(bold_style).fg(Color::Cyan);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_lines = occupied_lines(session.reference.width(), max_chars_per_line);
        let input_lines = occupied_lines(session.input.width(), max_chars_per_line);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2), // title + subtitle
                Constraint::Length(1),
                Constraint::Length(1), // state badge
                Constraint::Length(1),
                Constraint::Length(prompt_lines), // reference text
                Constraint::Length(1),
                Constraint::Length(input_lines), // input echo
                Constraint::Length(1),
                Constraint::Length(1), // characters / progress
                Constraint::Length(1),
                Constraint::Length(2), // stat row
                Constraint::Min(0),
                Constraint::Length(1), // help footer
            ])
            .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled("Typing Speed & Accuracy Test", bold_style)),
            Line::from(Span::styled(
                "type the text below to measure your speed and accuracy",
                dim_italic_style,
            )),
        ])
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let badge = match session.state {
            TypingState::Typing => Span::styled("TYPING", green_bold_style),
            TypingState::Idle => Span::styled(
                "IDLE",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
        };
        Paragraph::new(badge)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        let input_chars: Vec<char> = session.input.chars().collect();
        let spans = classify(&session.reference, &session.input)
            .into_iter()
            .enumerate()
            .map(|(idx, (expected, class))| match class {
                CharClass::Correct => Span::styled(expected.to_string(), green_bold_style),
                CharClass::Incorrect => Span::styled(
                    match input_chars.get(idx).copied() {
                        // a mistyped space would be invisible in red
                        Some(' ') => "·".to_owned(),
                        Some(c) => c.to_string(),
                        None => expected.to_string(),
                    },
                    red_bold_style,
                ),
                CharClass::Cursor => {
                    Span::styled(expected.to_string(), underlined_dim_bold_style)
                }
                CharClass::Untyped => Span::styled(expected.to_string(), dim_bold_style),
            })
            .collect::<Vec<Span>>();

        Paragraph::new(Line::from(spans))
            .alignment(if prompt_lines == 1 {
                // when the reference fits on one line
                // centering the text gives a nice zen feeling
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[4], buf);

        let echo = if session.input.is_empty() {
            Span::styled(
                "start typing the reference text above...",
                dim_italic_style,
            )
        } else {
            Span::styled(session.input.as_str(), Style::default())
        };
        Paragraph::new(echo)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .render(chunks[6], buf);

        let typed = session.input.chars().count();
        let total = session.reference.chars().count();
        let progress = metrics::progress_percent(&session.reference, &session.input);
        Paragraph::new(Span::styled(
            format!("characters: {typed} / {total}    progress: {progress}%"),
            dim_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[8], buf);

        let stat_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(chunks[10]);

        let readings = session.metrics;
        let cards = [
            (
                Span::styled(readings.chars_per_minute.to_string(), magenta_bold_style),
                "chars/min",
            ),
            (
                Span::styled(
                    format!("{}%", readings.accuracy_percent),
                    accuracy_style(readings.accuracy_percent),
                ),
                "accuracy",
            ),
            (
                Span::styled(readings.correct_chars.to_string(), cyan_bold_style),
                "correct chars",
            ),
        ];

        for ((value, label), chunk) in cards.into_iter().zip(stat_chunks.iter()) {
            Paragraph::new(vec![
                Line::from(value),
                Line::from(Span::styled(label, dim_style)),
            ])
            .alignment(Alignment::Center)
            .render(*chunk, buf);
        }

        Paragraph::new(Span::styled("tab: reset    esc: quit", dim_italic_style))
            .alignment(Alignment::Center)
            .render(chunks[12], buf);
    }
}
