//! Top-level dispatch: positional handling, wrapped-command execution,
//! beep policy, and exit-code plumbing.

use colored::Colorize;
use gbeep_sound::{Platform, PlaybackConfig};

use crate::cli_args::Cli;
use crate::command::{execute, CommandResult};

/// Whether the raw argument list ends at its first `--`, i.e. the user
/// asked to wrap a command but named none. clap swallows the separator,
/// so this has to be answered from the unparsed args.
pub fn has_bare_separator(args: &[String]) -> bool {
    args.iter().position(|arg| arg == "--") == Some(args.len() - 1)
}

/// Runs the CLI and returns the process exit code.
///
/// Standalone mode (no wrapped command) always exits 0. Wrapped mode
/// propagates the command's exit code unchanged; a sound failure can
/// never alter it. A bare `--` is an error: no beep, exit 1.
pub async fn run(cli: Cli, bare_separator: bool) -> i32 {
    let verbose = cli.verbose && !cli.silent;

    if bare_separator {
        if !cli.silent {
            eprintln!(
                "{} no command specified after \"--\"",
                "error:".red().bold()
            );
            eprintln!("example: gbeep -- npm test");
        }
        return 1;
    }

    let (shortcut, command) = split_positionals(&cli.rest);
    let (mut frequency, mut duration_ms) = shortcut.unwrap_or((cli.frequency, cli.duration));
    let mut pattern = cli.pattern.clone();

    if verbose {
        print_context(&cli);
    }

    if command.is_empty() {
        let config = PlaybackConfig {
            frequency,
            duration_ms,
            pattern,
            repeat: cli.repeat,
            delay_ms: cli.delay,
            mode: cli.sound.into(),
            verbose,
        };
        gbeep_sound::play_with_config(&config).await;
        return 0;
    }

    let result = execute(&command[0], &command[1..], verbose);

    if should_beep(cli.success, cli.error, result.success) {
        apply_outcome_overrides(&cli, result, &mut frequency, &mut duration_ms, &mut pattern);
        let config = PlaybackConfig {
            frequency,
            duration_ms,
            pattern,
            repeat: cli.repeat,
            delay_ms: cli.delay,
            mode: cli.sound.into(),
            verbose,
        };
        gbeep_sound::play_with_config(&config).await;
    }

    result.exit_code
}

/// Splits the trailing args into an optional `FREQ DUR` positional
/// shortcut and the wrapped command.
fn split_positionals(rest: &[String]) -> (Option<(u32, u64)>, &[String]) {
    if rest.len() >= 2 {
        if let (Ok(frequency), Ok(duration_ms)) = (rest[0].parse::<u32>(), rest[1].parse::<u64>())
        {
            return (Some((frequency, duration_ms)), &rest[2..]);
        }
    }
    (None, rest)
}

/// Whether to beep given the policy flags and the command outcome.
fn should_beep(success_only: bool, error_only: bool, command_succeeded: bool) -> bool {
    if success_only && !command_succeeded {
        return false;
    }
    if error_only && command_succeeded {
        return false;
    }
    true
}

/// Applies `--success-*`/`--error-*` overrides and the mario auto-pattern
/// for an explicit success beep.
fn apply_outcome_overrides(
    cli: &Cli,
    result: CommandResult,
    frequency: &mut u32,
    duration_ms: &mut u64,
    pattern: &mut Option<String>,
) {
    if result.success {
        if cli.success && pattern.is_none() {
            *pattern = Some("mario".to_string());
        }
        if let Some(f) = cli.success_freq {
            *frequency = f;
        }
        if let Some(d) = cli.success_duration {
            *duration_ms = d;
        }
    } else {
        if let Some(f) = cli.error_freq {
            *frequency = f;
        }
        if let Some(d) = cli.error_duration {
            *duration_ms = d;
        }
    }
}

fn print_context(cli: &Cli) {
    let mode: gbeep_sound::SoundMode = cli.sound.into();
    eprintln!("{} {}", "OS:".cyan().bold(), Platform::detect().as_str());
    eprintln!("{} {}", "Sound mode:".cyan().bold(), mode.as_str());
    if let Some(pattern) = &cli.pattern {
        eprintln!("{} {}", "Pattern:".cyan().bold(), pattern);
    }
    if cli.repeat > 1 {
        eprintln!("{} {}x", "Repeat:".cyan().bold(), cli.repeat);
    }
    if cli.delay > 0 {
        eprintln!("{} {}ms", "Delay:".cyan().bold(), cli.delay);
    }
}
