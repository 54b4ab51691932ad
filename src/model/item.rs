use serde::{Deserialize, Serialize};

/// Maximum number of items a single checklist can hold
pub const MAX_ITEMS: usize = 15;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// User-entered text (trimmed, never empty when created through the manager)
    pub text: String,
    /// Checkbox state
    pub completed: bool,
}

impl Item {
    /// Create a new, not-yet-completed item
    pub fn new(text: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            completed: false,
        }
    }

    /// The checkbox as drawn in text output
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// An ordered list of items, capped at [`MAX_ITEMS`].
///
/// Serialized transparently as a JSON array so the stored format is
/// `[{"text": ..., "completed": ...}, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<Item>,
}

impl Checklist {
    pub fn new() -> Self {
        Checklist::default()
    }

    /// Read-only view of the items. Growing a list goes through `ListManager`,
    /// which enforces [`MAX_ITEMS`]:
    ///
    /// ```compile_fail
    /// let mut list = checklists::model::Checklist::new();
    /// list.items.push(checklists::model::Item::new("sixteenth"));
    /// ```
    ///
    /// ```compile_fail
    /// let mut lists = checklists::model::Collection::default();
    /// lists.current_mut();
    /// ```
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access for `ops::list_ops`, which enforces the capacity
    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item can be appended
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ITEMS
    }

    /// Number of items marked completed
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }
}

impl From<Vec<Item>> for Checklist {
    fn from(items: Vec<Item>) -> Self {
        Checklist { items }
    }
}
