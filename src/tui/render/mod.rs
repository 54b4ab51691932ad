pub mod controls;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

mod helpers;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function. Projects the manager state once and hands the
/// resulting view to each region.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let view = app.view();

    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input | items | controls | status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // list position + mute
            Constraint::Length(1), // add field
            Constraint::Min(3),    // items
            Constraint::Length(1), // controls
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, &view, chunks[0]);
    list_view::render_input(frame, app, &view, chunks[1]);
    list_view::render_items(frame, app, &view, chunks[2]);
    controls::render_controls(frame, app, &view, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
