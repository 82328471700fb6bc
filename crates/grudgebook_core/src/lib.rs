//! Core domain logic for Grudgebook, a dated grievance journal with a
//! floating background-music player.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod player;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{DateKey, DateKeyError, Entry, EntryId};
pub use model::journal::{Journal, JournalLoadError, JournalValidationError};
pub use player::catalog::{find_track, AudioTrack, BUILTIN_TRACKS};
pub use player::handle::{PlaybackError, PlaybackHandle};
pub use player::widget::{AudioWidget, PlaybackPhase};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::edit_session::EditSession;
pub use service::journal_service::{
    DateGroup, JournalService, JournalServiceError, JOURNAL_SLOT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
