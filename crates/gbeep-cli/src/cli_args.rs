//! CLI argument definitions for gbeep.
//!
//! The `#[derive(Parser)]` type is defined here, keeping `main.rs`
//! focused on dispatch.

use clap::{Parser, ValueEnum};
use gbeep_sound::SoundMode;

const EXAMPLES_HELP: &str = "\
Examples:
  $ gbeep                          Play the default beep
  $ gbeep 800 200                  Play an 800Hz, 200ms beep
  $ gbeep -f 1000 -d 500           Play a 1000Hz, 500ms beep
  $ gbeep --pattern mario          Play the mario pattern
  $ gbeep --pattern \"s-s-l\"        Play short-short-long
  $ gbeep -r 3                     Repeat the beep 3 times
  $ gbeep --delay 1000             Wait 1 second, then beep
  $ gbeep -- npm test              Run npm test, beep when done
  $ gbeep --success -- cargo build Beep only if the build succeeds
  $ gbeep --error -- cargo test    Beep only if the tests fail";

/// Play a sound when a command finishes, or on demand.
#[derive(Parser, Debug)]
#[command(name = "gbeep")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Beep frequency in Hz
    #[arg(short, long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(1..))]
    pub frequency: u32,

    /// Beep duration in milliseconds
    #[arg(short, long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

    /// Sound mode
    #[arg(short = 's', long = "sound", value_enum, default_value_t = SoundModeArg::Auto)]
    pub sound: SoundModeArg,

    /// Beep only when the wrapped command succeeds
    #[arg(long)]
    pub success: bool,

    /// Beep only when the wrapped command fails
    #[arg(long)]
    pub error: bool,

    /// Suppress all output (sound only)
    #[arg(long)]
    pub silent: bool,

    /// Beep pattern (e.g. "s-s-l", "mario", "200,100,400")
    #[arg(long)]
    pub pattern: Option<String>,

    /// Repeat the beep N times
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Delay before the beep in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay: u64,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Frequency for the beep after a successful command
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub success_freq: Option<u32>,

    /// Duration for the beep after a successful command
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub success_duration: Option<u64>,

    /// Frequency for the beep after a failed command
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub error_freq: Option<u32>,

    /// Duration for the beep after a failed command
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub error_duration: Option<u64>,

    /// Optional `FREQ DUR` positional shortcut, then a command to wrap
    /// (usually after `--`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Sound mode flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SoundModeArg {
    Auto,
    Bell,
    Native,
}

impl From<SoundModeArg> for SoundMode {
    fn from(mode: SoundModeArg) -> Self {
        match mode {
            SoundModeArg::Auto => SoundMode::Auto,
            SoundModeArg::Bell => SoundMode::Bell,
            SoundModeArg::Native => SoundMode::Native,
        }
    }
}
