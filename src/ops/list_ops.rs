//! Pure mutations of a [`Collection`]. No persistence, no sound.

use crate::model::collection::Collection;
use crate::model::item::Item;

/// Why an operation left the collection untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Item text was blank after trimming
    EmptyText,
    /// Current list already holds the maximum number of items
    ListFull,
    /// Item index past the end of the current list
    NoSuchItem,
    /// Nothing to clear
    ListEmpty,
    /// No completed items to remove
    NothingCompleted,
    /// Already on the first list
    AtFirstList,
    /// The user declined the confirmation prompt
    Declined,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SkipReason::EmptyText => "item text is empty",
            SkipReason::ListFull => "list is full",
            SkipReason::NoSuchItem => "no such item",
            SkipReason::ListEmpty => "list is empty",
            SkipReason::NothingCompleted => "no completed items",
            SkipReason::AtFirstList => "already on the first list",
            SkipReason::Declined => "cancelled",
        };
        f.write_str(msg)
    }
}

/// Append a new open item to the current list
pub fn add_item(collection: &mut Collection, text: &str) -> Result<(), SkipReason> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SkipReason::EmptyText);
    }
    let list = collection.current_mut();
    if list.is_full() {
        return Err(SkipReason::ListFull);
    }
    list.items_mut().push(Item::new(text));
    Ok(())
}

/// Flip an item's completion. Returns the new `completed` value.
pub fn toggle_item(collection: &mut Collection, index: usize) -> Result<bool, SkipReason> {
    let item = collection
        .current_mut()
        .items_mut()
        .get_mut(index)
        .ok_or(SkipReason::NoSuchItem)?;
    item.completed = !item.completed;
    Ok(item.completed)
}

/// Guard for [`clear_list`], checked before asking for confirmation
pub fn can_clear(collection: &Collection) -> Result<(), SkipReason> {
    if collection.current().is_empty() {
        Err(SkipReason::ListEmpty)
    } else {
        Ok(())
    }
}

/// Remove every item from the current list. Returns how many were removed.
pub fn clear_list(collection: &mut Collection) -> Result<usize, SkipReason> {
    can_clear(collection)?;
    let list = collection.current_mut();
    let removed = list.len();
    list.items_mut().clear();
    Ok(removed)
}

/// Guard for [`remove_completed`]. Returns the number that would be removed.
pub fn completed_to_remove(collection: &Collection) -> Result<usize, SkipReason> {
    match collection.current().completed_count() {
        0 => Err(SkipReason::NothingCompleted),
        n => Ok(n),
    }
}

/// Drop completed items, keeping the order of the rest. Returns how many were removed.
pub fn remove_completed(collection: &mut Collection) -> Result<usize, SkipReason> {
    let removed = completed_to_remove(collection)?;
    collection.current_mut().items_mut().retain(|item| !item.completed);
    Ok(removed)
}

/// Start a fresh list after the cursor, discarding any lists beyond it
pub fn new_list(collection: &mut Collection) {
    collection.branch();
}

/// Move the cursor back one list
pub fn prev_list(collection: &mut Collection) -> Result<(), SkipReason> {
    if collection.step_back() {
        Ok(())
    } else {
        Err(SkipReason::AtFirstList)
    }
}
