//! Playback sequencing.
//!
//! Expands a [`PlaybackConfig`] into timed tone emissions. All waits
//! (leading delay, inter-note pauses, inter-repeat gaps) are tokio sleeps,
//! so the host process is never blocked. A failed emission does not abort
//! the remainder of the sequence; the emitter already absorbed it.

use std::time::Duration;

use gbeep_pattern::{parse_pattern, ToneEvent};
use tokio::time::sleep;

use crate::emit::{self, SoundMode, SoundOptions};

/// Gap between repeat iterations, in milliseconds.
pub const REPEAT_GAP_MS: u64 = 200;

/// Caller-supplied playback request, built once per invocation.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Tone frequency in Hz.
    pub frequency: u32,
    /// Tone duration in milliseconds.
    pub duration_ms: u64,
    /// Optional pattern string; replaces the single (frequency, duration) tone.
    pub pattern: Option<String>,
    /// Number of times to play the beep or pattern.
    pub repeat: u32,
    /// One-time wait before the first tone, in milliseconds.
    pub delay_ms: u64,
    /// Emission strategy family.
    pub mode: SoundMode,
    /// Report progress and strategies on stderr.
    pub verbose: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frequency: emit::DEFAULT_FREQUENCY,
            duration_ms: emit::DEFAULT_DURATION_MS,
            pattern: None,
            repeat: 1,
            delay_ms: 0,
            mode: SoundMode::Auto,
            verbose: false,
        }
    }
}

/// Plays a full request: leading delay, then `repeat` iterations of the
/// pattern or single tone, with a fixed [`REPEAT_GAP_MS`] between
/// iterations.
///
/// Returns only once the final iteration's final note has been played.
/// Per-tone success or failure is not surfaced; verbose mode reports the
/// strategies used on stderr.
pub async fn play_with_config(config: &PlaybackConfig) {
    if config.delay_ms > 0 {
        if config.verbose {
            eprintln!("Waiting {}ms before beep...", config.delay_ms);
        }
        sleep(Duration::from_millis(config.delay_ms)).await;
    }

    let repeat = config.repeat.max(1);
    for i in 0..repeat {
        if repeat > 1 && config.verbose {
            eprintln!("Beep {}/{}", i + 1, repeat);
        }

        if let Some(pattern) = &config.pattern {
            play_pattern(pattern, config.frequency, config.mode, config.verbose).await;
        } else {
            let options = SoundOptions {
                frequency: Some(config.frequency),
                duration_ms: Some(config.duration_ms),
                mode: config.mode,
                // The strategy report repeats verbatim; keep it to the
                // first pass.
                verbose: config.verbose && i == 0,
            };
            emit::play(&options);
        }

        if i + 1 < repeat {
            sleep(Duration::from_millis(REPEAT_GAP_MS)).await;
        }
    }
}

/// Resolves a pattern and plays every note in order.
async fn play_pattern(pattern: &str, default_frequency: u32, mode: SoundMode, verbose: bool) {
    let notes = parse_pattern(pattern, default_frequency);
    if verbose {
        eprintln!("Playing pattern: {pattern} ({} notes)", notes.len());
    }
    for note in &notes {
        play_note(note, mode, verbose).await;
    }
}

/// Emits one note and waits out its trailing pause, if any.
async fn play_note(note: &ToneEvent, mode: SoundMode, verbose: bool) {
    let options = SoundOptions {
        frequency: Some(note.frequency),
        duration_ms: Some(note.duration_ms),
        mode,
        verbose,
    };
    emit::play(&options);

    if let Some(pause_ms) = note.pause_ms {
        sleep(Duration::from_millis(pause_ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bell_config() -> PlaybackConfig {
        PlaybackConfig {
            duration_ms: 1,
            mode: SoundMode::Bell,
            ..Default::default()
        }
    }

    async fn timed(config: &PlaybackConfig) -> Duration {
        let start = tokio::time::Instant::now();
        play_with_config(config).await;
        start.elapsed()
    }

    #[tokio::test(start_paused = true)]
    async fn test_leading_delay_precedes_emission() {
        let config = PlaybackConfig {
            delay_ms: 50,
            ..bell_config()
        };
        let elapsed = timed(&config).await;
        assert!(elapsed >= Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_gaps_accumulate() {
        let single = timed(&bell_config()).await;

        let repeated = PlaybackConfig {
            repeat: 3,
            ..bell_config()
        };
        let triple = timed(&repeated).await;

        // Two inter-repeat gaps of 200ms each, and none after the last.
        assert!(triple >= single + Duration::from_millis(2 * REPEAT_GAP_MS));
        assert!(triple < single + Duration::from_millis(3 * REPEAT_GAP_MS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pattern_pauses_are_awaited() {
        let config = PlaybackConfig {
            pattern: Some("200,100,400".to_string()),
            ..bell_config()
        };
        let elapsed = timed(&config).await;
        // Two inter-note pauses of 50ms; the final note has none.
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_repeat_still_plays_once() {
        let config = PlaybackConfig {
            repeat: 0,
            ..bell_config()
        };
        // Completes without gaps; repeat is clamped to one iteration.
        let elapsed = timed(&config).await;
        assert!(elapsed < Duration::from_millis(REPEAT_GAP_MS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_native_emission_failure_does_not_abort_sequence() {
        // Native mode on a box without audio utilities degrades inside
        // the emitter; the sequence must still run to completion with
        // every pause honored.
        let config = PlaybackConfig {
            pattern: Some("s-s-l".to_string()),
            mode: SoundMode::Native,
            ..Default::default()
        };
        let elapsed = timed(&config).await;
        // Three notes, each with a 50ms trailing pause.
        assert!(elapsed >= Duration::from_millis(150));
    }
}
