//! Typed view over the key-value store: the list collection and the mute flag.
//!
//! Reads are forgiving (absent or malformed values fall back to defaults),
//! writes always replace the whole value.

use crate::io::store::{KeyValueStore, StoreError};
use crate::model::item::Checklist;

/// Key holding the JSON array of lists
pub const LISTS_KEY: &str = "lists";
/// Key holding the JSON mute boolean
pub const MUTED_KEY: &str = "muted";

/// Everything read from the store at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub lists: Vec<Checklist>,
    pub muted: bool,
}

impl Default for Loaded {
    fn default() -> Self {
        Loaded {
            lists: vec![Checklist::new()],
            muted: false,
        }
    }
}

/// Read lists and mute flag, substituting defaults for missing or unreadable values.
///
/// Only store-level failures (I/O) are errors; bad JSON is logged and ignored.
pub fn load(store: &dyn KeyValueStore) -> Result<Loaded, StoreError> {
    let mut loaded = Loaded::default();

    if let Some(raw) = store.get(LISTS_KEY)? {
        match serde_json::from_str::<Vec<Checklist>>(&raw) {
            Ok(lists) if !lists.is_empty() => loaded.lists = lists,
            Ok(_) => {}
            Err(e) => tracing::warn!(key = LISTS_KEY, error = %e, "ignoring malformed stored lists"),
        }
    }

    if let Some(raw) = store.get(MUTED_KEY)? {
        match serde_json::from_str::<bool>(&raw) {
            Ok(muted) => loaded.muted = muted,
            Err(e) => tracing::warn!(key = MUTED_KEY, error = %e, "ignoring malformed mute flag"),
        }
    }

    Ok(loaded)
}

/// Serialize and write the full list collection
pub fn save_lists(store: &mut dyn KeyValueStore, lists: &[Checklist]) -> Result<(), StoreError> {
    let json = serde_json::to_string(lists).map_err(|e| StoreError::SerializeError {
        key: LISTS_KEY.to_string(),
        source: e,
    })?;
    store.set(LISTS_KEY, &json)
}

/// Write the mute flag
pub fn save_muted(store: &mut dyn KeyValueStore, muted: bool) -> Result<(), StoreError> {
    let json = serde_json::to_string(&muted).map_err(|e| StoreError::SerializeError {
        key: MUTED_KEY.to_string(),
        source: e,
    })?;
    store.set(MUTED_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::model::item::Item;

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let loaded = load(&store).unwrap();
        assert_eq!(loaded, Loaded::default());
        assert_eq!(loaded.lists.len(), 1);
        assert!(!loaded.muted);
    }

    #[test]
    fn malformed_values_fall_back() {
        let store = MemoryStore::new()
            .with_entry(LISTS_KEY, "not json {{{")
            .with_entry(MUTED_KEY, "\"loud\"");
        assert_eq!(load(&store).unwrap(), Loaded::default());
    }

    #[test]
    fn empty_array_becomes_one_list() {
        let store = MemoryStore::new().with_entry(LISTS_KEY, "[]");
        assert_eq!(load(&store).unwrap().lists, vec![Checklist::new()]);
    }

    #[test]
    fn reads_stored_format() {
        let store = MemoryStore::new()
            .with_entry(
                LISTS_KEY,
                r#"[[{"text":"eggs","completed":true}],[]]"#,
            )
            .with_entry(MUTED_KEY, "true");
        let loaded = load(&store).unwrap();
        assert_eq!(loaded.lists.len(), 2);
        assert_eq!(loaded.lists[0].items()[0].text, "eggs");
        assert!(loaded.lists[0].items()[0].completed);
        assert!(loaded.muted);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let mut done = Item::new("b");
        done.completed = true;
        let lists = vec![
            Checklist::from(vec![Item::new("a"), done]),
            Checklist::new(),
        ];
        save_lists(&mut store, &lists).unwrap();
        save_muted(&mut store, true).unwrap();

        let loaded = load(&store).unwrap();
        assert_eq!(loaded.lists, lists);
        assert!(loaded.muted);
        assert_eq!(store.writes(), 2);
    }
}
