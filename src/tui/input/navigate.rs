use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::manager::Outcome;
use crate::ops::list_ops::SkipReason;
use crate::tui::app::{App, ConfirmAction, ConfirmState, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Row movement
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.item_cursor += 1;
            app.clamp_item_cursor();
        }
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.item_cursor = app.item_cursor.saturating_sub(1);
        }
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => app.item_cursor = 0,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => {
            app.item_cursor = usize::MAX;
            app.clamp_item_cursor();
        }

        // Items
        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) => focus_input(app),
        (_, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Char('x')) => {
            let result = app.manager.toggle_item(app.item_cursor);
            app.report(result);
        }

        // Lists
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            let result = app.manager.new_list();
            app.item_cursor = 0;
            app.report(result);
        }
        (_, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('p' | 'h')) => {
            let outcome = app.manager.prev_list();
            if outcome.applied() {
                app.item_cursor = 0;
            }
            app.report(Ok(outcome));
        }

        // Sound
        (KeyModifiers::NONE, KeyCode::Char('m')) => {
            let result = app.manager.toggle_mute().map(|_| Outcome::Applied);
            app.report(result);
        }

        // Destructive actions go through confirmation
        (_, KeyCode::Char('D')) => ask(app, ConfirmAction::DeleteAll),
        (_, KeyCode::Char('C')) => ask(app, ConfirmAction::DeleteCompleted),
        _ => {}
    }
}

fn focus_input(app: &mut App) {
    if app.view().add_enabled {
        app.mode = Mode::Input;
    } else {
        app.status_message = Some(SkipReason::ListFull.to_string());
    }
}

/// Enter confirm mode, unless the action has nothing to act on
fn ask(app: &mut App, action: ConfirmAction) {
    let prompt = match action {
        ConfirmAction::DeleteAll => app.manager.delete_all_prompt(),
        ConfirmAction::DeleteCompleted => app.manager.delete_completed_prompt(),
    };
    if let Some(prompt) = prompt {
        app.confirm_state = Some(ConfirmState { action, prompt });
        app.mode = Mode::Confirm;
    }
}
