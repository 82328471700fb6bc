//! Abstract playback-handle capability.
//!
//! # Responsibility
//! - Define the minimal surface the widget needs from a media backend.
//!
//! # Invariants
//! - `load` replaces whatever source was loaded before.
//! - Implementations report failure through `PlaybackError`; they never
//!   panic on an unreachable source.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure raised by a concrete playback backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The source locator could not be opened or decoded.
    SourceUnavailable { source: String },
    /// Any other backend failure, described by the backend.
    Backend(String),
}

impl Display for PlaybackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnavailable { source } => {
                write!(f, "audio source `{source}` is unavailable")
            }
            Self::Backend(message) => write!(f, "playback backend failure: {message}"),
        }
    }
}

impl Error for PlaybackError {}

/// Capability set of the single underlying media-playback resource.
///
/// Any concrete media API satisfying this surface works as a backend;
/// tests drive the widget with a scripted fake.
pub trait PlaybackHandle {
    /// Loads `source`, replacing the currently loaded track if any.
    fn load(&mut self, source: &str) -> Result<(), PlaybackError>;
    /// Starts or resumes playback of the loaded source.
    fn play(&mut self) -> Result<(), PlaybackError>;
    /// Pauses playback, keeping the current position.
    fn pause(&mut self) -> Result<(), PlaybackError>;
    /// Moves the playback position, in seconds from the start.
    fn seek(&mut self, position_secs: f64) -> Result<(), PlaybackError>;
}
