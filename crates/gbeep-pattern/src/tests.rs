//! Tests for the pattern parser.

use pretty_assertions::assert_eq;

use crate::note::ToneEvent;
use crate::parse::parse_pattern;

// =========================================================================
// Preset patterns
// =========================================================================

#[test]
fn test_mario_preset() {
    let notes = parse_pattern("mario", 1200);
    assert_eq!(
        notes,
        vec![
            ToneEvent::with_pause(659, 100, 50),
            ToneEvent::with_pause(784, 100, 50),
            ToneEvent::new(988, 150),
        ]
    );
}

#[test]
fn test_mario_preset_ignores_default_frequency() {
    assert_eq!(parse_pattern("mario", 1200), parse_pattern("mario", 440));
}

#[test]
fn test_success_preset_scales_with_frequency() {
    let notes = parse_pattern("success", 1000);
    assert_eq!(
        notes,
        vec![
            ToneEvent::with_pause(1000, 200, 50),
            ToneEvent::new(1200, 200),
        ]
    );
}

#[test]
fn test_success_preset_floors_scaled_frequency() {
    // 1.2 * 999 = 1198.8, floored to 1198.
    let notes = parse_pattern("success", 999);
    assert_eq!(notes[1].frequency, 1198);
}

#[test]
fn test_error_preset() {
    let notes = parse_pattern("error", 800);
    assert_eq!(
        notes,
        vec![
            ToneEvent::with_pause(800, 200, 100),
            ToneEvent::with_pause(800, 200, 100),
            ToneEvent::new(800, 500),
        ]
    );
}

#[test]
fn test_warning_preset() {
    let notes = parse_pattern("warning", 1000);
    assert_eq!(
        notes,
        vec![
            ToneEvent::with_pause(1000, 300, 100),
            ToneEvent::new(800, 300),
        ]
    );
}

#[test]
fn test_presets_match_case_insensitively() {
    assert_eq!(parse_pattern("MARIO", 1200), parse_pattern("mario", 1200));
    assert_eq!(parse_pattern("Success", 900), parse_pattern("success", 900));
}

#[test]
fn test_presets_ignore_surrounding_whitespace() {
    assert_eq!(
        parse_pattern("  mario \t", 1200),
        parse_pattern("mario", 1200)
    );
}

// =========================================================================
// Short syntax
// =========================================================================

#[test]
fn test_short_syntax_basic() {
    let notes = parse_pattern("s-s-l", 750);
    assert_eq!(
        notes,
        vec![
            ToneEvent::with_pause(750, 200, 50),
            ToneEvent::with_pause(750, 200, 50),
            ToneEvent::with_pause(750, 500, 50),
        ]
    );
}

#[test]
fn test_short_syntax_word_forms() {
    let notes = parse_pattern("short-medium-long", 1200);
    let durations: Vec<u64> = notes.iter().map(|n| n.duration_ms).collect();
    assert_eq!(durations, vec![200, 300, 500]);
}

#[test]
fn test_short_syntax_numeric_tokens() {
    let notes = parse_pattern("150-m-425", 1200);
    let durations: Vec<u64> = notes.iter().map(|n| n.duration_ms).collect();
    assert_eq!(durations, vec![150, 300, 425]);
}

#[test]
fn test_short_syntax_unknown_token_defaults_to_short() {
    let notes = parse_pattern("x-l", 1200);
    let durations: Vec<u64> = notes.iter().map(|n| n.duration_ms).collect();
    assert_eq!(durations, vec![200, 500]);
}

#[test]
fn test_short_syntax_last_note_keeps_its_pause() {
    let notes = parse_pattern("s-l", 1200);
    assert_eq!(notes.last().unwrap().pause_ms, Some(50));
}

#[test]
fn test_short_syntax_tolerates_spaces_around_tokens() {
    let notes = parse_pattern("s - l", 1200);
    let durations: Vec<u64> = notes.iter().map(|n| n.duration_ms).collect();
    assert_eq!(durations, vec![200, 500]);
}

// =========================================================================
// Duration lists
// =========================================================================

#[test]
fn test_duration_list_basic() {
    let notes = parse_pattern("200,100,400", 950);
    assert_eq!(
        notes,
        vec![
            ToneEvent::with_pause(950, 200, 50),
            ToneEvent::with_pause(950, 100, 50),
            ToneEvent::new(950, 400),
        ]
    );
}

#[test]
fn test_duration_list_drops_zero_entries() {
    let notes = parse_pattern("200,0,100", 1200);
    let durations: Vec<u64> = notes.iter().map(|n| n.duration_ms).collect();
    assert_eq!(durations, vec![200, 100]);
    assert_eq!(notes.last().unwrap().pause_ms, None);
}

#[test]
fn test_duration_list_drops_non_numeric_entries() {
    let notes = parse_pattern("abc,250,xyz", 1200);
    let durations: Vec<u64> = notes.iter().map(|n| n.duration_ms).collect();
    assert_eq!(durations, vec![250]);
}

#[test]
fn test_duration_list_single_entry_has_no_pause() {
    let notes = parse_pattern("400", 1200);
    assert_eq!(notes, vec![ToneEvent::new(1200, 400)]);
}

// =========================================================================
// Degradation to the default tone
// =========================================================================

#[test]
fn test_empty_pattern_falls_back() {
    assert_eq!(parse_pattern("", 880), vec![ToneEvent::new(880, 300)]);
}

#[test]
fn test_whitespace_pattern_falls_back() {
    assert_eq!(parse_pattern("   ", 880), vec![ToneEvent::new(880, 300)]);
}

#[test]
fn test_unrecognized_word_falls_back() {
    // No comma and no dash: lands in the duration-list branch and yields
    // nothing parseable.
    assert_eq!(parse_pattern("chime", 880), vec![ToneEvent::new(880, 300)]);
}

#[test]
fn test_all_invalid_entries_fall_back() {
    assert_eq!(parse_pattern("0,0,0", 880), vec![ToneEvent::new(880, 300)]);
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn test_parse_is_idempotent() {
    for pattern in ["mario", "s-s-l", "200,100,400", "", "garbage"] {
        assert_eq!(parse_pattern(pattern, 1200), parse_pattern(pattern, 1200));
    }
}
