//! The list manager: single owner of the checklist state.
//!
//! Every operation follows the same pipeline: lock the store, catch up with
//! writes from other processes, mutate the in-memory [`Collection`], write it
//! through, then play a cue. Front ends re-project [`PopupView`] after each call.

use crate::feedback::{Feedback, Sound, SoundSink};
use crate::io::persistence;
use crate::io::store::{KeyValueStore, StoreError};
use crate::model::collection::Collection;
use crate::ops::list_ops::{self, SkipReason};
use crate::view::PopupView;

/// Result of a manager operation that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn applied(self) -> bool {
        self == Outcome::Applied
    }
}

impl From<Result<(), SkipReason>> for Outcome {
    fn from(result: Result<(), SkipReason>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(reason) => Outcome::Skipped(reason),
        }
    }
}

/// Asks the user to approve a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub const DELETE_ALL_PROMPT: &str = "Are you sure you want to delete ALL todos in this list?";

pub fn delete_completed_message(count: usize) -> String {
    format!("Are you sure you want to delete {count} completed todo(s)?")
}

pub struct ListManager<S: KeyValueStore = Box<dyn KeyValueStore>> {
    collection: Collection,
    store: S,
    feedback: Feedback,
}

impl<S: KeyValueStore> ListManager<S> {
    /// Load state from `store`. The cursor always starts on the first list.
    pub fn open(store: S, sink: Box<dyn SoundSink>) -> Result<Self, StoreError> {
        let loaded = persistence::load(&store)?;
        tracing::debug!(lists = loaded.lists.len(), muted = loaded.muted, "loaded checklists");
        Ok(ListManager {
            collection: Collection::from_lists(loaded.lists),
            store,
            feedback: Feedback::new(sink, loaded.muted),
        })
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_muted(&self) -> bool {
        self.feedback.is_muted()
    }

    /// Project the current state for rendering
    pub fn view(&self) -> PopupView {
        PopupView::project(&self.collection, self.is_muted())
    }

    /// Jump to a list by index (clamped). Not persisted.
    pub fn select_list(&mut self, index: usize) {
        self.collection.set_cursor(index);
    }

    /// Greeting cue when a front end opens
    pub fn startup(&mut self) {
        self.feedback.play(Sound::Chimes);
    }

    pub fn add_item(&mut self, text: &str) -> Result<Outcome, StoreError> {
        if let Err(reason) = self.update(|c| list_ops::add_item(c, text))? {
            return Ok(Outcome::Skipped(reason));
        }
        self.feedback.play(Sound::Click);
        Ok(Outcome::Applied)
    }

    pub fn toggle_item(&mut self, index: usize) -> Result<Outcome, StoreError> {
        let completed = match self.update(|c| list_ops::toggle_item(c, index))? {
            Ok(completed) => completed,
            Err(reason) => return Ok(Outcome::Skipped(reason)),
        };
        if completed {
            self.feedback.play(Sound::Tick);
        }
        Ok(Outcome::Applied)
    }

    /// The confirmation text for `delete_all`, or `None` when there is nothing to delete
    pub fn delete_all_prompt(&self) -> Option<String> {
        list_ops::can_clear(&self.collection)
            .ok()
            .map(|()| DELETE_ALL_PROMPT.to_string())
    }

    pub fn delete_all(&mut self, confirm: &mut impl Confirm) -> Result<Outcome, StoreError> {
        let Some(prompt) = self.delete_all_prompt() else {
            return Ok(Outcome::Skipped(SkipReason::ListEmpty));
        };
        if !confirm.confirm(&prompt) {
            return Ok(Outcome::Skipped(SkipReason::Declined));
        }
        // Another process may have emptied the list while we were asking
        if let Err(reason) = self.update(list_ops::clear_list)? {
            return Ok(Outcome::Skipped(reason));
        }
        self.feedback.play(Sound::Click);
        Ok(Outcome::Applied)
    }

    /// The confirmation text for `delete_completed`, or `None` when nothing is completed
    pub fn delete_completed_prompt(&self) -> Option<String> {
        list_ops::completed_to_remove(&self.collection)
            .ok()
            .map(delete_completed_message)
    }

    pub fn delete_completed(&mut self, confirm: &mut impl Confirm) -> Result<Outcome, StoreError> {
        let Some(prompt) = self.delete_completed_prompt() else {
            return Ok(Outcome::Skipped(SkipReason::NothingCompleted));
        };
        if !confirm.confirm(&prompt) {
            return Ok(Outcome::Skipped(SkipReason::Declined));
        }
        if let Err(reason) = self.update(list_ops::remove_completed)? {
            return Ok(Outcome::Skipped(reason));
        }
        self.feedback.play(Sound::Click);
        Ok(Outcome::Applied)
    }

    pub fn new_list(&mut self) -> Result<Outcome, StoreError> {
        let outcome = Outcome::from(self.update(|c| {
            list_ops::new_list(c);
            Ok(())
        })?);
        self.feedback.play(Sound::Click);
        Ok(outcome)
    }

    /// Step back one list. Cursor moves are not persisted.
    pub fn prev_list(&mut self) -> Outcome {
        let outcome = Outcome::from(list_ops::prev_list(&mut self.collection));
        if outcome.applied() {
            self.feedback.play(Sound::Click);
        }
        outcome
    }

    /// Flip and persist the mute flag. Returns the new value.
    pub fn toggle_mute(&mut self) -> Result<bool, StoreError> {
        let _lock = self.store.lock()?;
        self.reload()?;
        let muted = !self.is_muted();
        self.write_muted(muted)?;
        Ok(muted)
    }

    pub fn set_muted(&mut self, muted: bool) -> Result<(), StoreError> {
        let _lock = self.store.lock()?;
        self.write_muted(muted)
    }

    fn write_muted(&mut self, muted: bool) -> Result<(), StoreError> {
        self.feedback.set_muted(muted);
        persistence::save_muted(&mut self.store, muted)?;
        tracing::info!(muted, "mute flag changed");
        self.feedback.play(Sound::Click);
        Ok(())
    }

    /// Re-read the store after an outside write. Returns true if anything changed.
    pub fn reload(&mut self) -> Result<bool, StoreError> {
        let loaded = persistence::load(&self.store)?;
        let mut changed = false;
        if loaded.lists != self.collection.lists() {
            self.collection.replace_lists(loaded.lists);
            changed = true;
        }
        if loaded.muted != self.is_muted() {
            self.feedback.set_muted(loaded.muted);
            changed = true;
        }
        if changed {
            tracing::info!("reloaded checklists changed by another process");
        }
        Ok(changed)
    }

    /// Apply `mutate` to the latest stored lists while holding the store lock,
    /// writing them back when it succeeds.
    fn update<T>(
        &mut self,
        mutate: impl FnOnce(&mut Collection) -> Result<T, SkipReason>,
    ) -> Result<Result<T, SkipReason>, StoreError> {
        let _lock = self.store.lock()?;
        self.reload()?;
        let result = mutate(&mut self.collection);
        if result.is_ok() {
            persistence::save_lists(&mut self.store, self.collection.lists())?;
        }
        Ok(result)
    }
}
