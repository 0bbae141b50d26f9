//! gbeep - play a sound when a command finishes, or on demand.

use std::process::ExitCode;

use clap::Parser;

use gbeep_cli::cli_args::Cli;
use gbeep_cli::dispatch;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // clap swallows the `--` separator, so a bare one (command wrapping
    // requested, no command named) is detected from the raw args.
    let args: Vec<String> = std::env::args().collect();
    let bare_separator = dispatch::has_bare_separator(&args);

    let cli = Cli::parse();
    let code = dispatch::run(cli, bare_separator).await;
    // Exit codes outside u8 range (e.g. signal deaths) collapse to 1.
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
