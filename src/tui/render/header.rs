use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use unicode_width::UnicodeWidthStr;

use crate::model::item::MAX_ITEMS;
use crate::tui::app::App;
use crate::view::PopupView;

use super::helpers::spans_width;

/// Top row: list position and item count on the left, mute state on the right
pub fn render_header(frame: &mut Frame, app: &App, view: &PopupView, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            view.position_label.clone(),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{}", view.rows.len(), MAX_ITEMS),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    let mut right = vec![Span::styled(
        format!("{} ", view.mute_label),
        Style::default().fg(app.theme.text_bright).bg(bg),
    )];
    let with_title = spans_width(&spans) + view.mute_title.width() + 4 < width;
    if with_title {
        right.insert(
            0,
            Span::styled(
                format!("{} ", view.mute_title),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        );
    }

    let used = spans_width(&spans) + spans_width(&right);
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
        spans.extend(right);
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
