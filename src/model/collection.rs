use super::item::Checklist;

/// The ordered stack of checklists plus the cursor into it.
///
/// Invariant: `lists` is never empty and `cursor < lists.len()`. Every
/// constructor and every operation in `ops::list_ops` preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    lists: Vec<Checklist>,
    cursor: usize,
}

impl Default for Collection {
    fn default() -> Self {
        Collection {
            lists: vec![Checklist::new()],
            cursor: 0,
        }
    }
}

impl Collection {
    /// Build a collection from stored lists with the cursor on the first one.
    /// An empty vector becomes a single empty list.
    pub fn from_lists(lists: Vec<Checklist>) -> Self {
        if lists.is_empty() {
            return Collection::default();
        }
        Collection { lists, cursor: 0 }
    }

    pub fn lists(&self) -> &[Checklist] {
        &self.lists
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// The list under the cursor
    pub fn current(&self) -> &Checklist {
        &self.lists[self.cursor]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Checklist {
        &mut self.lists[self.cursor]
    }

    /// Whether the cursor sits on the last list
    pub fn at_last(&self) -> bool {
        self.cursor + 1 == self.lists.len()
    }

    /// Move the cursor, clamping into range
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.lists.len() - 1);
    }

    /// Replace all lists, keeping the cursor where it was when still in range
    pub fn replace_lists(&mut self, lists: Vec<Checklist>) {
        let cursor = self.cursor;
        *self = Collection::from_lists(lists);
        self.set_cursor(cursor);
    }

    /// Drop every list after the cursor, append an empty one and move onto it
    pub(crate) fn branch(&mut self) {
        self.lists.truncate(self.cursor + 1);
        self.lists.push(Checklist::new());
        self.cursor = self.lists.len() - 1;
    }

    /// Step back one list. Returns false when already on the first.
    pub(crate) fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }
}
