use clap::{Parser, Subcommand};

use crate::cmd::*;

pub mod args;

pub const HYPHEN: &str = "-";

/// The CLI interface for the bitline application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: BitlineCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by bitline.
#[derive(Debug, Subcommand)]
pub enum BitlineCommand {
    Pack(pack::Pack),
    Unpack(unpack::Unpack),
    Size(size::Size),
}

impl Command for BitlineCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Pack(pack) => pack.handle(),
            Self::Unpack(unpack) => unpack.handle(),
            Self::Size(size) => size.handle(),
        }
    }
}
