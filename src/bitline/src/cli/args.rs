use bitline_bit_buf::Endian;
use bitline_schema::Layout;
use clap::{ArgAction, Args};

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity of bitline.
    ///
    /// `-v` is Debug, `-vv` is Trace.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) -> eyre::Result<()> {
        let level = self.log_level();
        simple_logger::init_with_level(level)?;

        Ok(())
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Describes how records are laid out in binary data.
#[derive(Clone, Debug, Args)]
pub struct Format {
    /// The record layout, as comma-separated `kind[:bits]` fields.
    ///
    /// Supported kinds are bool, u8, i8, u16, i16, u32, i32, u64, i64,
    /// f32 and f64. Integer kinds may be narrowed, e.g. `i32:23`.
    #[clap(short, long)]
    pub layout: Layout,

    /// The byte order of multi-byte fields at their natural width.
    ///
    /// Narrowed fields are always stored most significant bit first.
    /// Accepts `big` (or `be`, `network`) and `little` (or `le`).
    #[clap(short, long, default_value_t = Endian::Big)]
    pub endian: Endian,
}
