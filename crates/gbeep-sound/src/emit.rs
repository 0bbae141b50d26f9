//! OS-adaptive tone emission.
//!
//! One tone at a time, best-effort, never fatal: every subprocess, file
//! I/O, and terminal failure collapses into a `false` return, so callers
//! never need to guard an emission call.
//!
//! Strategy per platform family:
//!
//! - **Windows**: OS console beep with explicit frequency and duration
//!   (via PowerShell); no temp file involved.
//! - **macOS**: synthesize a sine WAV to a temp file and play it with
//!   `afplay`, deleting the file afterwards.
//! - **Linux**: the external `beep` utility when present, otherwise the
//!   terminal bell character.

use std::io::Write;
use std::process::Command;

use crate::error::{SoundError, SoundResult};
use crate::platform::Platform;
use crate::tone::ToneFile;

/// Frequency used when a request carries no explicit frequency, in Hz.
pub const DEFAULT_FREQUENCY: u32 = 1200;

/// Duration used when a request carries no explicit duration, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Emission strategy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundMode {
    /// Platform-conditional ordering between bell and native emission.
    #[default]
    Auto,
    /// Terminal bell character, where the platform tolerates it.
    Bell,
    /// Platform-specific tone generation.
    Native,
}

impl SoundMode {
    /// Flag-style name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundMode::Auto => "auto",
            SoundMode::Bell => "bell",
            SoundMode::Native => "native",
        }
    }
}

/// One tone emission request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundOptions {
    /// Tone frequency in Hz; `None` requests the default.
    pub frequency: Option<u32>,
    /// Tone duration in milliseconds; `None` requests the default.
    pub duration_ms: Option<u64>,
    /// Emission strategy family.
    pub mode: SoundMode,
    /// Report the concrete strategy used on stderr.
    pub verbose: bool,
}

/// Attempts to emit a tone on the detected platform.
///
/// Returns whether a sound was, as far as we can tell, produced. Never
/// panics and never returns an error; see the module docs.
pub fn play(options: &SoundOptions) -> bool {
    play_on(Platform::detect(), options)
}

/// Attempts to emit a tone on an explicit platform family.
///
/// Split out from [`play`] so each platform branch can be driven by tests
/// without running on it.
pub fn play_on(platform: Platform, options: &SoundOptions) -> bool {
    let frequency = options.frequency.unwrap_or(DEFAULT_FREQUENCY);
    let duration_ms = options.duration_ms.unwrap_or(DEFAULT_DURATION_MS);

    match options.mode {
        SoundMode::Bell => {
            // The bell character is only a dependable cue on Linux
            // terminals; elsewhere route to native emission.
            if platform == Platform::Linux {
                play_bell(options.verbose)
            } else {
                play_native(platform, frequency, duration_ms, options.verbose)
            }
        }
        SoundMode::Native => play_native(platform, frequency, duration_ms, options.verbose),
        SoundMode::Auto => {
            // Linux tries the cheap bell first whenever the request is
            // missing an explicit frequency or duration, falling through
            // to native if it fails. Windows and macOS go straight to
            // native.
            if platform == Platform::Linux
                && (options.frequency.is_none() || options.duration_ms.is_none())
                && play_bell(options.verbose)
            {
                return true;
            }
            play_native(platform, frequency, duration_ms, options.verbose)
        }
    }
}

/// Dispatches to the native strategy for the platform family.
fn play_native(platform: Platform, frequency: u32, duration_ms: u64, verbose: bool) -> bool {
    match platform {
        Platform::Windows => play_windows(frequency, duration_ms, verbose),
        Platform::MacOs => play_macos(frequency, duration_ms, verbose),
        Platform::Linux => play_linux(frequency, duration_ms, verbose),
    }
}

/// Writes the bell character to stdout.
fn play_bell(verbose: bool) -> bool {
    match write_bell() {
        Ok(()) => {
            if verbose {
                eprintln!("  using terminal bell");
            }
            true
        }
        Err(_) => false,
    }
}

fn write_bell() -> SoundResult<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}

fn play_windows(frequency: u32, duration_ms: u64, verbose: bool) -> bool {
    match run_console_beep(frequency, duration_ms) {
        Ok(()) => {
            if verbose {
                eprintln!("  windows: console beep ({frequency}Hz, {duration_ms}ms)");
            }
            true
        }
        Err(_) => false,
    }
}

/// Console beep via PowerShell. The OS primitive takes frequency and
/// duration directly, so no tone file is needed.
fn run_console_beep(frequency: u32, duration_ms: u64) -> SoundResult<()> {
    let script = format!("[console]::beep({frequency},{duration_ms})");
    let mut command = Command::new("powershell");
    command.args(["-NoProfile", "-Command", &script]);
    run_player("powershell", &mut command)
}

fn play_macos(frequency: u32, duration_ms: u64, verbose: bool) -> bool {
    match run_afplay(frequency, duration_ms) {
        Ok(()) => {
            if verbose {
                eprintln!("  macos: afplay ({frequency}Hz, {duration_ms}ms)");
            }
            true
        }
        Err(_) => false,
    }
}

/// Synthesized tone file played through `afplay`. The [`ToneFile`] guard
/// deletes the file even when the player errors out.
fn run_afplay(frequency: u32, duration_ms: u64) -> SoundResult<()> {
    let tone = ToneFile::create(frequency, duration_ms)?;
    let mut command = Command::new("afplay");
    command.arg(tone.path()).args(["-v", "1"]);
    run_player("afplay", &mut command)
}

/// Speaker beep via the external `beep` utility when it is on PATH,
/// otherwise the terminal bell.
fn play_linux(frequency: u32, duration_ms: u64, verbose: bool) -> bool {
    if which::which("beep").is_ok() && run_speaker_beep(frequency, duration_ms).is_ok() {
        if verbose {
            eprintln!("  linux: beep utility ({frequency}Hz, {duration_ms}ms)");
        }
        return true;
    }
    play_bell(verbose)
}

fn run_speaker_beep(frequency: u32, duration_ms: u64) -> SoundResult<()> {
    let mut command = Command::new("beep");
    command.args(["-f", &frequency.to_string(), "-l", &duration_ms.to_string()]);
    run_player("beep", &mut command)
}

/// Runs a player subprocess synchronously and maps spawn failures and
/// non-zero exits to errors. No timeout: a hung player blocks playback.
fn run_player(player: &'static str, command: &mut Command) -> SoundResult<()> {
    let status = command
        .status()
        .map_err(|source| SoundError::SpawnFailed { player, source })?;
    if !status.success() {
        return Err(SoundError::PlayerFailed { player, status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_player_missing_binary_is_an_error() {
        let mut command = Command::new("gbeep-no-such-player");
        assert!(run_player("gbeep-no-such-player", &mut command).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_player_nonzero_exit_is_an_error() {
        let mut command = Command::new("false");
        assert!(run_player("false", &mut command).is_err());
    }

    #[test]
    fn test_bell_mode_on_linux_uses_the_bell() {
        let options = SoundOptions {
            mode: SoundMode::Bell,
            ..Default::default()
        };
        assert!(play_on(Platform::Linux, &options));
    }

    #[test]
    fn test_native_mode_never_panics_without_audio_utilities() {
        // On a bare CI box `beep` is absent and the bell may or may not
        // reach a terminal; the contract is only that this call returns.
        let options = SoundOptions {
            frequency: Some(440),
            duration_ms: Some(1),
            mode: SoundMode::Native,
            ..Default::default()
        };
        let _ = play_on(Platform::Linux, &options);
    }

    #[test]
    fn test_auto_mode_partial_tone_takes_the_bell_shortcut() {
        // Missing either half of the tone counts as the simple case on
        // Linux, and the bell always succeeds against a writable stdout.
        let partial = [
            SoundOptions {
                frequency: Some(440),
                ..Default::default()
            },
            SoundOptions {
                duration_ms: Some(100),
                ..Default::default()
            },
            SoundOptions::default(),
        ];
        for options in partial {
            assert!(play_on(Platform::Linux, &options));
        }
    }

    #[test]
    fn test_auto_mode_with_explicit_tone_skips_the_bell_shortcut() {
        // Explicit frequency/duration must reach the native path, which
        // on Linux still degrades to the bell rather than erroring.
        let options = SoundOptions {
            frequency: Some(440),
            duration_ms: Some(1),
            mode: SoundMode::Auto,
            ..Default::default()
        };
        let _ = play_on(Platform::Linux, &options);
    }

    #[test]
    fn test_sound_mode_names() {
        assert_eq!(SoundMode::Auto.as_str(), "auto");
        assert_eq!(SoundMode::Bell.as_str(), "bell");
        assert_eq!(SoundMode::Native.as_str(), "native");
    }
}
