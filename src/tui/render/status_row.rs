use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::truncate_to_width;

const NAVIGATE_HINTS: &str = "a add  space toggle  n new  p prev  m mute  D/C delete  ? help  q quit";
const INPUT_HINTS: &str = "Enter add  Esc done";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let (Mode::Confirm, Some(state)) = (app.mode, &app.confirm_state) {
        let answer = "  y/n";
        Line::from(vec![
            Span::styled(
                format!(" {}", truncate_to_width(&state.prompt, width.saturating_sub(answer.len() + 1))),
                Style::default().fg(app.theme.red).bg(bg),
            ),
            Span::styled(
                answer,
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(message, width.saturating_sub(1))),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    } else if app.show_key_hints {
        let hints = match app.mode {
            Mode::Input => INPUT_HINTS,
            _ => NAVIGATE_HINTS,
        };
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(hints, width.saturating_sub(1))),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
