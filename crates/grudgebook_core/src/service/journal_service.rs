//! Journal use-case service.
//!
//! # Responsibility
//! - Provide the add/edit/delete/list entry points for rendering layers.
//! - Rehydrate the journal from its slot once and write through on every
//!   successful mutation.
//!
//! # Invariants
//! - A malformed slot payload is discarded (logged, never surfaced) and
//!   the journal starts empty.
//! - Rejected mutations perform no slot write.
//! - The whole mapping is rewritten on each mutation; last write wins.

use crate::model::entry::{DateKey, Entry, EntryId};
use crate::model::journal::Journal;
use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the slot holding the serialized journal mapping.
pub const JOURNAL_SLOT: &str = "journal_entries";

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// The in-memory mapping could not be serialized for the slot write.
    Serialize(serde_json::Error),
}

impl Display for JournalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize journal: {err}"),
        }
    }
}

impl Error for JournalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<RepoError> for JournalServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for JournalServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// One rendered group: a calendar date and its entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date_key: DateKey,
    pub entries: Vec<Entry>,
}

/// Journal facade over a slot repository.
///
/// Owns the in-memory mapping; every successful mutation is immediately
/// serialized into the named slot.
pub struct JournalService<R: SlotRepository> {
    repo: R,
    journal: Journal,
}

impl<R: SlotRepository> JournalService<R> {
    /// Rehydrates a service from the journal slot.
    ///
    /// # Contract
    /// - Absent or empty slot → empty journal.
    /// - Malformed payload → logged, discarded, empty journal.
    /// - Repository transport errors propagate.
    pub fn open(repo: R) -> Result<Self, JournalServiceError> {
        let journal = match repo.read_slot(JOURNAL_SLOT)? {
            None => {
                info!("event=journal_load module=journal status=ok source=absent");
                Journal::new()
            }
            Some(raw) => match Journal::from_json(&raw) {
                Ok(journal) => {
                    info!(
                        "event=journal_load module=journal status=ok date_count={} entry_count={}",
                        journal.date_count(),
                        journal.entry_count()
                    );
                    journal
                }
                Err(err) => {
                    error!(
                        "event=journal_load module=journal status=error error_code=malformed_slot error={err}"
                    );
                    Journal::new()
                }
            },
        };

        Ok(Self { repo, journal })
    }

    /// Appends a new entry and writes the journal through.
    ///
    /// # Contract
    /// - An unparseable date key or blank text is a silent no-op
    ///   (`Ok(None)`, no slot write).
    /// - Returns the minted entry id on success.
    pub fn add_entry(
        &mut self,
        date_key: &str,
        text: &str,
    ) -> Result<Option<EntryId>, JournalServiceError> {
        let Ok(date_key) = date_key.parse::<DateKey>() else {
            debug!("event=entry_add module=journal status=rejected reason=invalid_date_key");
            return Ok(None);
        };

        let Some(entry_id) = self.journal.add_entry(date_key, text, now_epoch_ms()) else {
            debug!("event=entry_add module=journal status=rejected reason=blank_text");
            return Ok(None);
        };

        self.persist()?;
        info!("event=entry_add module=journal status=ok date_key={date_key} entry_id={entry_id}");
        Ok(Some(entry_id))
    }

    /// Replaces the text of one entry and writes the journal through.
    ///
    /// Blank text or a missing date/entry is a silent no-op (`Ok(false)`).
    pub fn commit_edit(
        &mut self,
        date_key: &str,
        entry_id: &str,
        new_text: &str,
    ) -> Result<bool, JournalServiceError> {
        let Ok(date_key) = date_key.parse::<DateKey>() else {
            debug!("event=entry_edit module=journal status=rejected reason=invalid_date_key");
            return Ok(false);
        };

        if !self.journal.commit_edit(date_key, entry_id, new_text) {
            debug!(
                "event=entry_edit module=journal status=rejected date_key={date_key} entry_id={entry_id}"
            );
            return Ok(false);
        }

        self.persist()?;
        info!("event=entry_edit module=journal status=ok date_key={date_key} entry_id={entry_id}");
        Ok(true)
    }

    /// Deletes one entry and writes the journal through.
    ///
    /// A missing date/entry is a silent no-op (`Ok(false)`). Deleting the
    /// last entry of a date removes the date key itself.
    pub fn delete_entry(
        &mut self,
        date_key: &str,
        entry_id: &str,
    ) -> Result<bool, JournalServiceError> {
        let Ok(date_key) = date_key.parse::<DateKey>() else {
            debug!("event=entry_delete module=journal status=rejected reason=invalid_date_key");
            return Ok(false);
        };

        if !self.journal.delete_entry(date_key, entry_id) {
            debug!(
                "event=entry_delete module=journal status=rejected date_key={date_key} entry_id={entry_id}"
            );
            return Ok(false);
        }

        self.persist()?;
        info!(
            "event=entry_delete module=journal status=ok date_key={date_key} entry_id={entry_id}"
        );
        Ok(true)
    }

    /// Returns all groups most recent calendar date first, entries in
    /// insertion order.
    pub fn list_by_date_descending(&self) -> Vec<DateGroup> {
        self.journal
            .iter_by_date_desc()
            .map(|(date_key, entries)| DateGroup {
                date_key,
                entries: entries.to_vec(),
            })
            .collect()
    }

    /// Read access to the in-memory mapping.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    fn persist(&self) -> Result<(), JournalServiceError> {
        let payload = self.journal.to_json()?;
        if let Err(err) = self.repo.write_slot(JOURNAL_SLOT, &payload) {
            error!(
                "event=journal_persist module=journal status=error error_code=slot_write_failed error={err}"
            );
            return Err(err.into());
        }
        debug!(
            "event=journal_persist module=journal status=ok date_count={} entry_count={}",
            self.journal.date_count(),
            self.journal.entry_count()
        );
        Ok(())
    }
}

// Clock readings before the epoch clamp to zero; id minting still
// guarantees uniqueness by bumping.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
