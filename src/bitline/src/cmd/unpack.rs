use std::path::PathBuf;

use bitline_bit_buf::BitReader;
use clap::Args;

use super::Command;
use crate::{cli::args::Format, utils};

/// Subcommand for decoding bit-packed records into JSON.
#[derive(Debug, Args)]
pub struct Unpack {
    #[clap(flatten)]
    format: Format,

    /// The hex-encoded bytes to decode.
    ///
    /// Whitespace between digits is ignored.
    #[clap(required_unless_present = "input", conflicts_with = "input")]
    hex: Option<String>,

    /// Reads raw bytes from a file instead of hex.
    ///
    /// When the value is "-", input will be read from stdin.
    #[clap(short, long)]
    input: Option<PathBuf>,
}

impl Command for Unpack {
    fn handle(self) -> eyre::Result<()> {
        let data = match (&self.hex, &self.input) {
            (Some(hex), _) => utils::from_hex(hex)?,
            (None, Some(path)) => utils::read_input(path)?,
            (None, None) => eyre::bail!("no input given"),
        };

        let layout = &self.format.layout;
        let mut reader = BitReader::new(&data, self.format.endian);

        let records = layout.decode_all(&mut reader)?;
        if records.is_empty() {
            eyre::bail!(
                "{} bits of input are too few for a {}-bit record",
                reader.size_bits(),
                layout.bits()
            );
        }

        // Up to 7 bits of padding are expected after the last record.
        let trailing = reader.available_bits();
        if trailing >= 8 {
            log::warn!("Ignoring {trailing} trailing bits");
        }

        for record in &records {
            utils::print_json(record)?;
        }

        Ok(())
    }
}
