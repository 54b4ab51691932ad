use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::manager::Outcome;
use crate::tui::app::{App, Mode};

/// Typing into the add field. Enter adds and keeps focus; Esc leaves the text in place.
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.mode = Mode::Navigate,
        (_, KeyCode::Enter) => submit(app),
        (_, KeyCode::Backspace) => {
            app.input.pop();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.input.clear(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.input.push(c),
        _ => {}
    }
}

fn submit(app: &mut App) {
    let result = app.manager.add_item(&app.input);
    if matches!(result, Ok(Outcome::Applied)) {
        app.input.clear();
        app.item_cursor = app.manager.collection().current().len().saturating_sub(1);
        if !app.view().add_enabled {
            app.mode = Mode::Navigate;
        }
    }
    app.report(result);
}
