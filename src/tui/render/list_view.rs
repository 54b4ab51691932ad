use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::item::MAX_ITEMS;
use crate::tui::app::{App, Mode};
use crate::view::PopupView;

use super::helpers::{checkbox, scroll_offset, truncate_to_width};

/// The add field: live text while typing, a placeholder otherwise
pub fn render_input(frame: &mut Frame, app: &App, view: &PopupView, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let prompt_style = Style::default().fg(app.theme.highlight).bg(bg);

    let mut spans = vec![Span::styled(" + ", prompt_style)];
    if !view.add_enabled {
        spans.push(Span::styled(
            format!("List full ({MAX_ITEMS}/{MAX_ITEMS})"),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else if app.mode == Mode::Input {
        // Show the tail of long input so the cursor stays visible
        let room = width.saturating_sub(4);
        let chars: Vec<char> = app.input.chars().collect();
        let start = chars.len().saturating_sub(room);
        let visible: String = chars[start..].iter().collect();
        spans.push(Span::styled(
            visible,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled("\u{258C}", prompt_style)); // ▌ cursor
    } else if app.input.is_empty() {
        spans.push(Span::styled(
            "Add a todo...",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            truncate_to_width(&app.input, width.saturating_sub(3)),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// The items of the current list, one per row, scrolled to keep the cursor visible
pub fn render_items(frame: &mut Frame, app: &App, view: &PopupView, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    if view.rows.is_empty() {
        let line = Line::from(Span::styled(
            "   No todos yet",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let offset = scroll_offset(app.item_cursor, view.rows.len(), height);
    let lines: Vec<Line> = view
        .rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|row| {
            let selected = row.index == app.item_cursor && app.mode != Mode::Input;
            let row_bg = if selected { app.theme.selection_bg } else { bg };
            let marker = if selected { "\u{203A}" } else { " " }; // ›

            let mut text_style = Style::default().fg(app.theme.text).bg(row_bg);
            let mut box_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
            if row.completed {
                text_style = text_style
                    .fg(app.theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT);
                box_style = box_style.fg(app.theme.green);
            }

            Line::from(vec![
                Span::styled(
                    format!(" {marker} "),
                    Style::default().fg(app.theme.highlight).bg(row_bg),
                ),
                Span::styled(checkbox(row.completed), box_style),
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(truncate_to_width(&row.text, width.saturating_sub(7)), text_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_list_placeholder() {
        let (app, _) = app_with_items(&[]);
        let view = app.view();
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_items(frame, &app, &view, area);
        });
        assert_eq!(output, "   No todos yet");
    }

    #[test]
    fn rows_with_cursor_marker() {
        let (mut app, _) = app_with_items(&[("first", false), ("second", true)]);
        app.item_cursor = 1;
        let view = app.view();
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_items(frame, &app, &view, area);
        });
        assert_eq!(output, "   [ ] first\n \u{203A} [x] second");
    }

    #[test]
    fn scrolls_to_cursor() {
        let items: Vec<(String, bool)> = (1..=10).map(|i| (format!("task {i}"), false)).collect();
        let borrowed: Vec<(&str, bool)> = items.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let (mut app, _) = app_with_items(&borrowed);
        app.item_cursor = 9;
        let view = app.view();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_items(frame, &app, &view, area);
        });
        assert!(!output.contains("task 7"));
        assert!(output.contains("task 8"));
        assert!(output.contains("task 10"));
    }

    #[test]
    fn input_placeholder_and_typing() {
        let (mut app, _) = app_with_items(&[]);
        let view = app.view();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input(frame, &app, &view, area);
        });
        assert_eq!(output, " + Add a todo...");

        app.mode = Mode::Input;
        app.input = "eggs".into();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input(frame, &app, &view, area);
        });
        assert_eq!(output, " + eggs\u{258C}");
    }

    #[test]
    fn input_disabled_when_full() {
        let items: Vec<(String, bool)> = (0..MAX_ITEMS).map(|i| (format!("t{i}"), false)).collect();
        let borrowed: Vec<(&str, bool)> = items.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let (app, _) = app_with_items(&borrowed);
        let view = app.view();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input(frame, &app, &view, area);
        });
        assert_eq!(output, " + List full (15/15)");
    }
}
