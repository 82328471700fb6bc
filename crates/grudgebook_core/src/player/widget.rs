//! Audio widget state machine.
//!
//! # Responsibility
//! - Translate user selections and playback-handle events into state
//!   transitions over one loaded track.
//!
//! # Invariants
//! - Re-selecting the loaded track toggles play/pause without reloading.
//! - Every handle failure forces the paused state; nothing is surfaced
//!   beyond the log.
//! - Minimize/restore never touches playback state.

use crate::player::catalog::{AudioTrack, BUILTIN_TRACKS};
use crate::player::handle::{PlaybackError, PlaybackHandle};
use log::{debug, error, warn};

/// Observable playback phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No track selected yet.
    Idle,
    /// A track is loaded and audible.
    Playing,
    /// A track is loaded and halted.
    Paused,
}

/// Floating player state over a fixed catalog and one playback handle.
pub struct AudioWidget<H: PlaybackHandle> {
    handle: H,
    catalog: &'static [AudioTrack],
    current: Option<usize>,
    playing: bool,
    minimized: bool,
}

impl<H: PlaybackHandle> AudioWidget<H> {
    /// Creates a widget over the built-in catalog.
    pub fn new(handle: H) -> Self {
        Self::with_catalog(handle, BUILTIN_TRACKS)
    }

    /// Creates a widget over a caller-provided catalog.
    pub fn with_catalog(handle: H, catalog: &'static [AudioTrack]) -> Self {
        Self {
            handle,
            catalog,
            current: None,
            playing: false,
            minimized: false,
        }
    }

    /// Handles a track selection from the track list.
    ///
    /// # Contract
    /// - Unknown id: no-op (logged).
    /// - Loaded track, playing: pause without reloading the source.
    /// - Loaded track, paused: resume without reloading the source.
    /// - Any other track: load it and play from the start.
    pub fn select_track(&mut self, track_id: &str) {
        let Some(index) = self
            .catalog
            .iter()
            .position(|track| track.id == track_id)
        else {
            warn!(
                "event=track_select module=player status=rejected reason=unknown_track track_id={track_id}"
            );
            return;
        };

        if self.current == Some(index) {
            if self.playing {
                self.drive("pause", |handle| handle.pause());
                self.playing = false;
            } else {
                self.playing = self.drive("play", |handle| handle.play());
            }
            return;
        }

        let source = self.catalog[index].source;
        self.current = Some(index);
        self.playing = self.drive("load", |handle| handle.load(source))
            && self.drive("play", |handle| handle.play());
        debug!(
            "event=track_select module=player status=ok track_id={track_id} playing={}",
            self.playing
        );
    }

    /// Explicit pause action; meaningful only while playing.
    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.drive("pause", |handle| handle.pause());
        self.playing = false;
    }

    /// Seeks the loaded track back to the start.
    ///
    /// Keeps playing if currently playing, otherwise stays paused at zero.
    pub fn restart(&mut self) {
        if self.current.is_none() {
            return;
        }
        if !self.drive("seek", |handle| handle.seek(0.0)) {
            self.playing = false;
            return;
        }
        if self.playing && !self.drive("play", |handle| handle.play()) {
            self.playing = false;
        }
    }

    /// Natural end-of-track event from the playback handle.
    pub fn notify_ended(&mut self) {
        debug!("event=track_ended module=player status=ok");
        self.playing = false;
    }

    /// Load/playback error event from the playback handle.
    pub fn notify_error(&mut self, reason: &str) {
        error!("event=track_error module=player status=error error={reason}");
        self.playing = false;
    }

    /// Toggles the minimized rendering state; orthogonal to playback.
    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Returns the observable playback phase.
    pub fn phase(&self) -> PlaybackPhase {
        match (self.current, self.playing) {
            (None, _) => PlaybackPhase::Idle,
            (Some(_), true) => PlaybackPhase::Playing,
            (Some(_), false) => PlaybackPhase::Paused,
        }
    }

    /// Returns the currently loaded track, if any.
    pub fn current_track(&self) -> Option<&AudioTrack> {
        self.current.map(|index| &self.catalog[index])
    }

    /// Returns whether audio is currently audible.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns whether the panel is minimized.
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    fn drive(
        &mut self,
        action: &str,
        op: impl FnOnce(&mut H) -> Result<(), PlaybackError>,
    ) -> bool {
        match op(&mut self.handle) {
            Ok(()) => true,
            Err(err) => {
                error!("event=playback module=player status=error action={action} error={err}");
                false
            }
        }
    }
}
