//! Background-music player state machine.
//!
//! # Responsibility
//! - Own selected-track/playing/minimized state for the fixed catalog.
//! - Drive a single abstract playback handle; never render anything.
//!
//! # Invariants
//! - At most one track is loaded into the handle at a time; selecting a
//!   new track always replaces the current load.
//! - Handle failures force the paused state and are logged only.

pub mod catalog;
pub mod handle;
pub mod widget;
