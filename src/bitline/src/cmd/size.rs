use bitline_schema::Layout;
use clap::Args;

use super::Command;

/// Subcommand for computing the encoded size of a record layout.
#[derive(Debug, Args)]
pub struct Size {
    /// The record layout, as comma-separated `kind[:bits]` fields.
    #[clap(short, long)]
    layout: Layout,

    /// The number of consecutive records to account for.
    #[clap(short = 'n', long, default_value_t = 1)]
    records: usize,
}

impl Command for Size {
    fn handle(self) -> eyre::Result<()> {
        for field in self.layout.fields() {
            log::debug!("{field}: {} bits", field.bits());
        }

        let bits = self.layout.bits() * self.records;
        println!("{bits} bits, {} bytes", bits.div_ceil(8));

        Ok(())
    }
}
