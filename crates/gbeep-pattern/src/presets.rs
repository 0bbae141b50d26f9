//! Built-in beep patterns.

use crate::note::ToneEvent;

/// Ascending coin jingle: E5, G5, B5.
pub(crate) fn mario() -> Vec<ToneEvent> {
    vec![
        ToneEvent::with_pause(659, 100, 50),
        ToneEvent::with_pause(784, 100, 50),
        ToneEvent::new(988, 150),
    ]
}

/// Two rising notes, the second 20% above the base frequency.
pub(crate) fn success(frequency: u32) -> Vec<ToneEvent> {
    vec![
        ToneEvent::with_pause(frequency, 200, 50),
        ToneEvent::new(scale(frequency, 1.2), 200),
    ]
}

/// Short-short-long at the base frequency.
pub(crate) fn error(frequency: u32) -> Vec<ToneEvent> {
    vec![
        ToneEvent::with_pause(frequency, 200, 100),
        ToneEvent::with_pause(frequency, 200, 100),
        ToneEvent::new(frequency, 500),
    ]
}

/// Two notes, the second dropping below the base frequency.
pub(crate) fn warning(frequency: u32) -> Vec<ToneEvent> {
    vec![
        ToneEvent::with_pause(frequency, 300, 100),
        ToneEvent::new(scale(frequency, 0.8), 300),
    ]
}

fn scale(frequency: u32, factor: f64) -> u32 {
    (frequency as f64 * factor).floor() as u32
}
