//! Error types for the sound backend.
//!
//! These never escape the crate: [`crate::emit::play`] absorbs every
//! variant into a boolean emission outcome.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type for internal sound operations.
pub(crate) type SoundResult<T> = Result<T, SoundError>;

/// Errors that can occur while attempting to emit a tone.
#[derive(Debug, Error)]
pub(crate) enum SoundError {
    /// Failed to write the temporary tone file.
    #[error("failed to write tone file {path}: {source}")]
    WriteToneFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to spawn the platform audio player.
    #[error("failed to spawn player '{player}': {source}")]
    SpawnFailed {
        player: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The platform audio player exited with a non-zero status.
    #[error("player '{player}' exited with {status}")]
    PlayerFailed {
        player: &'static str,
        status: ExitStatus,
    },

    /// Failed to write the bell character to the terminal.
    #[error("failed to write terminal bell: {0}")]
    BellFailed(#[from] std::io::Error),
}
