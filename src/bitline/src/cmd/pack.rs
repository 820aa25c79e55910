use std::{fs, path::PathBuf};

use bitline_bit_buf::{BitWriter, Endian};
use bitline_schema::{Layout, Value};
use clap::Args;
use eyre::Context;

use super::Command;
use crate::{cli::args::Format, utils};

/// Subcommand for encoding values into bit-packed records.
#[derive(Debug, Args)]
pub struct Pack {
    #[clap(flatten)]
    format: Format,

    /// Streams the output through a buffer of this many bytes.
    ///
    /// Complete bytes are handed off after every field, so the
    /// buffer only needs to hold the widest field plus one byte.
    #[clap(long)]
    chunk: Option<usize>,

    /// Optional path to a file receiving the raw bytes.
    ///
    /// Hex-encoded output is printed to stdout otherwise.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// The values to encode, one per layout field.
    ///
    /// Several records may be given back to back.
    #[clap(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
}

impl Command for Pack {
    fn handle(self) -> eyre::Result<()> {
        let layout = &self.format.layout;
        let endian = self.format.endian;

        let records = layout.parse_records(&self.values)?;
        let bytes = match self.chunk {
            Some(chunk) => pack_streaming(layout, &records, endian, chunk)?,
            None => pack(layout, &records, endian)?,
        };

        log::info!("Packed {} records into {} bytes", records.len(), bytes.len());

        match self.output {
            Some(path) => fs::write(&path, &bytes)
                .with_context(|| format!("failed to write output to '{}'", path.display())),
            None => {
                println!("{}", utils::to_hex(&bytes));
                Ok(())
            }
        }
    }
}

/// Encodes records into a single buffer sized for all of them.
pub fn pack(layout: &Layout, records: &[Vec<Value>], endian: Endian) -> eyre::Result<Vec<u8>> {
    let bits = layout.bits() * records.len();
    let mut buf = vec![0; bits.div_ceil(8)];

    let mut writer = BitWriter::new(&mut buf, endian);
    for record in records {
        layout.encode(&mut writer, record)?;
    }

    let size = writer.size_bytes();
    buf.truncate(size);

    Ok(buf)
}

/// Encodes records through a streaming writer over a buffer of
/// `chunk` bytes.
pub fn pack_streaming(
    layout: &Layout,
    records: &[Vec<Value>],
    endian: Endian,
    chunk: usize,
) -> eyre::Result<Vec<u8>> {
    // A partial byte of up to 7 bits may precede any field.
    let widest = layout.fields().iter().map(|f| f.bits()).max().unwrap_or(0);
    let needed = (widest as usize + 7).div_ceil(8);
    if chunk < needed {
        eyre::bail!("chunk size must be at least {needed} bytes for layout '{layout}'");
    }

    let mut out = Vec::new();
    let mut buf = vec![0; chunk];

    let mut writer = BitWriter::with_sink(&mut buf, endian, |bytes: &[u8]| {
        out.extend_from_slice(bytes)
    });
    for record in records {
        layout.encode(&mut writer, record)?;
    }
    writer.flush();
    drop(writer);

    Ok(out)
}
