//! Command-line interface wiring for the `mrz` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

pub mod check;
pub mod decode;
pub mod encode;
pub mod layout;
pub mod utils;

/// Parsed CLI entrypoint for the `mrz` binary.
#[derive(Parser, Debug)]
#[command(name = "mrz", version, about = "TD3 passport MRZ codec and check-digit toolkit")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level command families made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a TD3 line pair into named fields.
    Decode(decode::DecodeArgs),
    /// Compose a TD3 line pair from field values.
    Encode(encode::EncodeArgs),
    /// Compute or verify Verhoeff check digits.
    #[command(subcommand)]
    Check(check::CheckCommand),
    /// Print the TD3 field layout.
    Layout(layout::LayoutArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Decode(args) => decode::handle(args),
        Command::Encode(args) => encode::handle(args),
        Command::Check(cmd) => check::handle(cmd),
        Command::Layout(args) => layout::handle(args),
    }
}
