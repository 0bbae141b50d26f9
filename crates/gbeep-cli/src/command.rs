//! Wrapped-command execution.

use std::process::Command;

use colored::Colorize;

/// Outcome of a wrapped command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Raw exit code; spawn failures are reported as 1.
    pub exit_code: i32,
    /// Whether the command exited with code 0.
    pub success: bool,
}

impl CommandResult {
    fn from_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            success: exit_code == 0,
        }
    }
}

/// Runs a command with inherited standard streams and reports its exit
/// code.
///
/// Spawn-level errors (command not found, permission denied) map to exit
/// code 1; nothing is raised. A command killed by a signal also reports 1.
pub fn execute(command: &str, args: &[String], verbose: bool) -> CommandResult {
    if verbose {
        eprintln!("{} {} {}", "Running:".cyan().bold(), command, args.join(" "));
    }

    let result = match Command::new(command).args(args).status() {
        Ok(status) => CommandResult::from_code(status.code().unwrap_or(1)),
        Err(err) => {
            if verbose {
                eprintln!("{} {}", "Command error:".red().bold(), err);
            }
            CommandResult::from_code(1)
        }
    };

    if verbose {
        eprintln!(
            "{} {}",
            "Command exited with code:".cyan().bold(),
            result.exit_code
        );
    }

    result
}
