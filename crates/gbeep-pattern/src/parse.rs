//! Pattern string parsing.

use crate::note::ToneEvent;
use crate::presets;

/// Pause inserted between notes of parsed patterns, in milliseconds.
pub const INTER_NOTE_PAUSE_MS: u64 = 50;

/// Duration of the fallback tone when a pattern yields no usable notes.
pub const FALLBACK_DURATION_MS: u64 = 300;

/// Parses a pattern string into a sequence of tone events.
///
/// Matching is case-insensitive and ignores surrounding whitespace. The
/// result always contains at least one event: anything unrecognized or
/// unparseable degrades to a single tone at `default_frequency` for
/// [`FALLBACK_DURATION_MS`].
///
/// # Arguments
/// * `pattern` - Preset name, short syntax, or comma-separated durations
/// * `default_frequency` - Frequency in Hz for events the pattern does not pin
pub fn parse_pattern(pattern: &str, default_frequency: u32) -> Vec<ToneEvent> {
    let trimmed = pattern.trim().to_lowercase();

    match trimmed.as_str() {
        "mario" => return presets::mario(),
        "success" => return presets::success(default_frequency),
        "error" => return presets::error(default_frequency),
        "warning" => return presets::warning(default_frequency),
        _ => {}
    }

    if trimmed.contains('-') && !trimmed.contains(',') {
        return parse_short_syntax(&trimmed, default_frequency);
    }

    parse_duration_list(&trimmed, default_frequency)
}

/// Parses short syntax like `s-s-l` (short-short-long).
///
/// Unknown tokens fall back to the short duration. Every event carries the
/// inter-note pause, including the last.
fn parse_short_syntax(pattern: &str, frequency: u32) -> Vec<ToneEvent> {
    pattern
        .split('-')
        .map(|part| {
            let duration_ms = match part.trim() {
                "s" | "short" => 200,
                "m" | "medium" => 300,
                "l" | "long" => 500,
                other => other.parse::<u64>().unwrap_or(200),
            };
            ToneEvent::with_pause(frequency, duration_ms, INTER_NOTE_PAUSE_MS)
        })
        .collect()
}

/// Parses a comma-separated duration list like `200,100,400`.
///
/// Tokens that are not strictly positive integers are dropped, preserving
/// the order of the rest. The last surviving event gets no trailing pause.
fn parse_duration_list(pattern: &str, frequency: u32) -> Vec<ToneEvent> {
    let durations: Vec<u64> = pattern
        .split(',')
        .filter_map(|part| part.trim().parse::<u64>().ok())
        .filter(|&duration_ms| duration_ms > 0)
        .collect();

    if durations.is_empty() {
        return vec![ToneEvent::new(frequency, FALLBACK_DURATION_MS)];
    }

    let last = durations.len() - 1;
    durations
        .iter()
        .enumerate()
        .map(|(i, &duration_ms)| {
            if i < last {
                ToneEvent::with_pause(frequency, duration_ms, INTER_NOTE_PAUSE_MS)
            } else {
                ToneEvent::new(frequency, duration_ms)
            }
        })
        .collect()
}
