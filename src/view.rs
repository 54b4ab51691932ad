//! Declarative projection of list state into what the popup shows.

use serde::Serialize;

use crate::model::collection::Collection;

/// One rendered row of the current list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// Position in the current list, passed back to `toggle_item`
    pub index: usize,
    pub text: String,
    pub completed: bool,
}

/// Everything the popup needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupView {
    pub rows: Vec<ItemRow>,
    /// Input field and add control accept new items
    pub add_enabled: bool,
    pub prev_enabled: bool,
    pub delete_all_enabled: bool,
    pub delete_completed_enabled: bool,
    pub completed_count: usize,
    /// e.g. "List 2"
    pub position_label: String,
    pub muted: bool,
    pub mute_label: &'static str,
    pub mute_title: &'static str,
}

impl PopupView {
    pub fn project(collection: &Collection, muted: bool) -> Self {
        let list = collection.current();
        let rows = list
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ItemRow {
                index,
                text: item.text.clone(),
                completed: item.completed,
            })
            .collect();
        let completed_count = list.completed_count();

        PopupView {
            rows,
            add_enabled: !list.is_full(),
            prev_enabled: collection.cursor() > 0,
            delete_all_enabled: !list.is_empty(),
            delete_completed_enabled: completed_count > 0,
            completed_count,
            position_label: format!("List {}", collection.cursor() + 1),
            muted,
            mute_label: if muted { "🔇" } else { "🔊" },
            mute_title: if muted { "Unmute Sounds" } else { "Mute Sounds" },
        }
    }
}
