//! Tone event type.

/// One discrete sound unit in a playback sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneEvent {
    /// Tone frequency in Hz.
    pub frequency: u32,
    /// How long the tone sounds, in milliseconds.
    pub duration_ms: u64,
    /// Silence inserted after this event before the next, in milliseconds.
    /// `None` on the final event of a sequence by convention.
    pub pause_ms: Option<u64>,
}

impl ToneEvent {
    /// Creates a tone event with no trailing pause.
    pub fn new(frequency: u32, duration_ms: u64) -> Self {
        Self {
            frequency,
            duration_ms,
            pause_ms: None,
        }
    }

    /// Creates a tone event followed by `pause_ms` of silence.
    pub fn with_pause(frequency: u32, duration_ms: u64, pause_ms: u64) -> Self {
        Self {
            frequency,
            duration_ms,
            pause_ms: Some(pause_ms),
        }
    }
}
