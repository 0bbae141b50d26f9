//! gbeep CLI library.
//!
//! Argument definitions, wrapped-command execution, and dispatch for the
//! `gbeep` binary.

pub mod cli_args;
pub mod command;
pub mod dispatch;
