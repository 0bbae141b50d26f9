//! gbeep pattern parser.
//!
//! Turns a compact textual pattern description into an ordered sequence of
//! tone events. Three forms are supported:
//!
//! - **Preset names**: `mario`, `success`, `error`, `warning`
//! - **Short syntax**: `s-s-l` (short-short-long, dash-separated)
//! - **Duration lists**: `200,100,400` (comma-separated milliseconds)
//!
//! Parsing is a pure function of the pattern string and a default frequency.
//! It never fails: malformed or unrecognized input degrades to a single
//! default tone, so a typo in a pattern flag can never abort a notification.

mod note;
mod parse;
mod presets;

#[cfg(test)]
mod tests;

pub use note::ToneEvent;
pub use parse::{parse_pattern, FALLBACK_DURATION_MS, INTER_NOTE_PAUSE_MS};
