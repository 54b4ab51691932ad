use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                // The prompt was already shown; accept whatever the manager asks
                let mut accept = |_: &str| true;
                let result = match state.action {
                    ConfirmAction::DeleteAll => app.manager.delete_all(&mut accept),
                    ConfirmAction::DeleteCompleted => app.manager.delete_completed(&mut accept),
                };
                app.report(result);
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
