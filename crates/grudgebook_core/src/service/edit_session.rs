//! Inline-edit UI state.
//!
//! # Responsibility
//! - Hold the draft text while one entry is being edited.
//!
//! # Invariants
//! - Beginning or cancelling an edit never touches the journal store;
//!   only a committed edit mutates anything.

use crate::model::entry::EntryId;

/// Transient state for one in-progress inline edit.
///
/// The rendering layer keeps an `Option<EditSession>`; cancelling an edit
/// is dropping the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    entry_id: EntryId,
    draft: String,
}

impl EditSession {
    /// Starts editing `entry_id`, seeding the draft with the current text.
    pub fn begin(entry_id: impl Into<EntryId>, current_text: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            draft: current_text.into(),
        }
    }

    /// Returns the id of the entry being edited.
    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// Returns the current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft text as the user types.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns whether this session targets the given entry.
    pub fn targets(&self, entry_id: &str) -> bool {
        self.entry_id == entry_id
    }
}
