use serde::Serialize;

use crate::model::collection::Collection;
use crate::model::item::MAX_ITEMS;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub number: usize,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    /// 1-based position of this list
    pub list: usize,
    /// Total number of lists
    pub lists: usize,
    pub muted: bool,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct ListSummaryJson {
    pub list: usize,
    pub items: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct MuteJson {
    pub muted: bool,
}

pub fn list_json(collection: &Collection, muted: bool) -> ListJson {
    ListJson {
        list: collection.cursor() + 1,
        lists: collection.len(),
        muted,
        items: collection
            .current()
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| ItemJson {
                number: i + 1,
                text: item.text.clone(),
                completed: item.completed,
            })
            .collect(),
    }
}

pub fn summaries_json(collection: &Collection) -> Vec<ListSummaryJson> {
    collection
        .lists()
        .iter()
        .enumerate()
        .map(|(i, list)| ListSummaryJson {
            list: i + 1,
            items: list.len(),
            completed: list.completed_count(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// The selected list, numbered for `ck toggle`
pub fn format_list(collection: &Collection) -> String {
    let list = collection.current();
    let mut out = format!(
        "List {} of {}  ({}/{})\n",
        collection.cursor() + 1,
        collection.len(),
        list.len(),
        MAX_ITEMS
    );
    if list.is_empty() {
        out.push_str("  (empty)\n");
    }
    for (i, item) in list.items().iter().enumerate() {
        out.push_str(&format!("{:>3}. {} {}\n", i + 1, item.checkbox(), item.text));
    }
    out
}

/// One line per list with item and completion counts
pub fn format_summaries(collection: &Collection) -> String {
    let mut out = String::new();
    for (i, list) in collection.lists().iter().enumerate() {
        out.push_str(&format!(
            "List {:<3} {:>2} items, {} done\n",
            i + 1,
            list.len(),
            list.completed_count()
        ));
    }
    out
}
