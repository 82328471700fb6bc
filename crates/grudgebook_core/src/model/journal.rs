//! Pure in-memory journal store.
//!
//! # Responsibility
//! - Own the date-key → entry-bucket mapping and all of its mutations.
//! - Provide the exact JSON wire shape persisted into the slot store.
//!
//! # Invariants
//! - Buckets keep insertion order; a bucket is removed with its last entry.
//! - Entry text is trimmed and non-blank after every successful mutation.
//! - Entry ids stay unique across all buckets.

use crate::model::entry::{DateKey, Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invariant violation found in a rehydrated journal payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalValidationError {
    /// A date key exists with zero entries.
    EmptyBucket(DateKey),
    /// An entry body is blank after trimming.
    BlankEntryText { date_key: DateKey, entry_id: EntryId },
    /// An entry body carries leading/trailing whitespace the store never writes.
    UntrimmedEntryText { date_key: DateKey, entry_id: EntryId },
    /// The same entry id appears more than once.
    DuplicateEntryId(EntryId),
}

impl Display for JournalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBucket(date_key) => {
                write!(f, "date key {date_key} has an empty bucket")
            }
            Self::BlankEntryText { date_key, entry_id } => {
                write!(f, "entry {entry_id} under {date_key} has blank text")
            }
            Self::UntrimmedEntryText { date_key, entry_id } => {
                write!(f, "entry {entry_id} under {date_key} has untrimmed text")
            }
            Self::DuplicateEntryId(entry_id) => {
                write!(f, "entry id {entry_id} appears more than once")
            }
        }
    }
}

impl Error for JournalValidationError {}

/// Failure while rehydrating a journal from its serialized slot payload.
#[derive(Debug)]
pub enum JournalLoadError {
    /// Payload is not the expected JSON mapping.
    Parse(serde_json::Error),
    /// Payload parsed but violates a store invariant.
    Validation(JournalValidationError),
}

impl Display for JournalLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for JournalLoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<JournalValidationError> for JournalLoadError {
    fn from(value: JournalValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Mapping from calendar date to the ordered entries filed under it.
///
/// Serializes transparently as the JSON object
/// `{ "YYYY-MM-DD": [ { "id": ..., "text": ... }, ... ], ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    buckets: BTreeMap<DateKey, Vec<Entry>>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry under `date_key`, creating the bucket if absent.
    ///
    /// # Contract
    /// - Text is trimmed; blank text is rejected with `None` and no change.
    /// - The minted id derives from `now_ms` and is unique journal-wide.
    pub fn add_entry(&mut self, date_key: DateKey, text: &str, now_ms: i64) -> Option<EntryId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let entry_id = self.mint_entry_id(now_ms);
        self.buckets
            .entry(date_key)
            .or_default()
            .push(Entry::new(entry_id.clone(), trimmed));
        Some(entry_id)
    }

    /// Replaces the text of the matching entry in place.
    ///
    /// # Contract
    /// - Id and position inside the bucket are preserved.
    /// - Blank text, an unknown date key or an unknown id leave the journal
    ///   unchanged and return `false`.
    pub fn commit_edit(&mut self, date_key: DateKey, entry_id: &str, new_text: &str) -> bool {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return false;
        }

        let Some(bucket) = self.buckets.get_mut(&date_key) else {
            return false;
        };
        let Some(entry) = bucket.iter_mut().find(|entry| entry.id == entry_id) else {
            return false;
        };

        entry.text = trimmed.to_string();
        true
    }

    /// Removes the matching entry, dropping the date key with its last entry.
    ///
    /// Returns `false` when the date key or the id does not exist.
    pub fn delete_entry(&mut self, date_key: DateKey, entry_id: &str) -> bool {
        let Some(bucket) = self.buckets.get_mut(&date_key) else {
            return false;
        };
        let Some(position) = bucket.iter().position(|entry| entry.id == entry_id) else {
            return false;
        };

        bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&date_key);
        }
        true
    }

    /// Iterates buckets most recent calendar date first, entries in
    /// insertion order.
    pub fn iter_by_date_desc(&self) -> impl Iterator<Item = (DateKey, &[Entry])> {
        self.buckets
            .iter()
            .rev()
            .map(|(date_key, bucket)| (*date_key, bucket.as_slice()))
    }

    /// Returns the number of date buckets present.
    pub fn date_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns whether the journal holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns whether any bucket contains an entry with this id.
    pub fn contains_entry_id(&self, entry_id: &str) -> bool {
        self.buckets
            .values()
            .any(|bucket| bucket.iter().any(|entry| entry.id == entry_id))
    }

    /// Checks every store invariant over the current mapping.
    pub fn validate(&self) -> Result<(), JournalValidationError> {
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for (date_key, bucket) in &self.buckets {
            if bucket.is_empty() {
                return Err(JournalValidationError::EmptyBucket(*date_key));
            }

            for entry in bucket {
                let trimmed = entry.text.trim();
                if trimmed.is_empty() {
                    return Err(JournalValidationError::BlankEntryText {
                        date_key: *date_key,
                        entry_id: entry.id.clone(),
                    });
                }
                if trimmed != entry.text {
                    return Err(JournalValidationError::UntrimmedEntryText {
                        date_key: *date_key,
                        entry_id: entry.id.clone(),
                    });
                }
                if !seen_ids.insert(entry.id.as_str()) {
                    return Err(JournalValidationError::DuplicateEntryId(entry.id.clone()));
                }
            }
        }

        Ok(())
    }

    /// Parses and validates a serialized slot payload.
    pub fn from_json(raw: &str) -> Result<Self, JournalLoadError> {
        let journal: Self = serde_json::from_str(raw)?;
        journal.validate()?;
        Ok(journal)
    }

    /// Serializes the mapping into its slot payload.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    // Creation-time id with a bump-on-collision guarantee. The source shape
    // is the decimal epoch-millisecond string.
    fn mint_entry_id(&self, now_ms: i64) -> EntryId {
        let mut candidate = now_ms.max(0);
        loop {
            let entry_id = candidate.to_string();
            if !self.contains_entry_id(&entry_id) {
                return entry_id;
            }
            candidate += 1;
        }
    }
}
