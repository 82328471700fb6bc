//! Fixed audio track catalog.
//!
//! # Invariants
//! - The catalog is fixed at build time and never mutated at runtime.
//! - Track sources are relative locators resolved by the hosting
//!   environment; existence is not validated here.

/// One selectable background track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTrack {
    /// Stable catalog id.
    pub id: &'static str,
    /// Human-readable title for the track list.
    pub title: &'static str,
    /// Relative source locator handed to the playback handle.
    pub source: &'static str,
}

/// The built-in two-track playlist.
pub const BUILTIN_TRACKS: &[AudioTrack] = &[
    AudioTrack {
        id: "track1",
        title: "Song 1",
        source: "audio/song1.mp3",
    },
    AudioTrack {
        id: "track2",
        title: "Song 2",
        source: "audio/song2.mp3",
    },
];

/// Looks a track up by id.
pub fn find_track<'a>(tracks: &'a [AudioTrack], track_id: &str) -> Option<&'a AudioTrack> {
    tracks.iter().find(|track| track.id == track_id)
}
