//! gbeep sound backend.
//!
//! Turns playback requests into physical sound, best-effort:
//!
//! - [`emit`] - OS-adaptive single-tone emission with graceful degradation
//! - [`playback`] - sequencing of patterns, repeats, and delays
//! - [`tone`] - sine tone synthesis and WAV rendering
//! - [`platform`] - platform family detection
//!
//! # Error policy
//!
//! Nothing in this crate raises to its caller under normal operation. A
//! physical emission reports a boolean outcome and the sequencer plays on
//! regardless, so a missing audio utility or an unwritable temp directory
//! can never corrupt the exit code of the command the beep decorates.
//! Internal helpers use [`error::SoundError`], absorbed at the
//! [`emit::play`] boundary.

mod error;

pub mod emit;
pub mod platform;
pub mod playback;
pub mod tone;

pub use emit::{play, play_on, SoundMode, SoundOptions, DEFAULT_DURATION_MS, DEFAULT_FREQUENCY};
pub use platform::Platform;
pub use playback::{play_with_config, PlaybackConfig, REPEAT_GAP_MS};
