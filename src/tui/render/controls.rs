use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::view::PopupView;

use super::helpers::spans_width;

/// Control row. Disabled controls are drawn dim; labels shrink on narrow terminals.
pub fn render_controls(frame: &mut Frame, app: &App, view: &PopupView, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let wide = [
        ("\u{2039} Prev".to_string(), view.prev_enabled),
        ("+ New".to_string(), true),
        ("Delete all".to_string(), view.delete_all_enabled),
        (
            format!("Delete completed ({})", view.completed_count),
            view.delete_completed_enabled,
        ),
    ];
    let narrow = [
        ("\u{2039}".to_string(), view.prev_enabled),
        ("+New".to_string(), true),
        ("\u{2717}All".to_string(), view.delete_all_enabled),
        (
            format!("\u{2717}Done({})", view.completed_count),
            view.delete_completed_enabled,
        ),
    ];

    let mut spans = control_spans(app, &wide, "   ");
    if spans_width(&spans) > width {
        spans = control_spans(app, &narrow, " ");
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn control_spans<'a>(app: &App, controls: &'a [(String, bool)], gap: &'a str) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, (label, enabled)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(gap, Style::default().bg(bg)));
        }
        spans.push(Span::styled(
            label.as_str(),
            Style::default().fg(app.theme.control_color(*enabled)).bg(bg),
        ));
    }
    spans
}
