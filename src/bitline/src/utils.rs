use std::{
    fs,
    io::{self, IsTerminal, Read, Write},
    path::Path,
};

use eyre::Context;
use serde::Serialize;

use crate::cli::HYPHEN;

/// Formats bytes as space-separated, uppercase hex pairs.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses hex-encoded bytes, ignoring whitespace and an optional
/// `0x` prefix.
pub fn from_hex(input: &str) -> eyre::Result<Vec<u8>> {
    let input = input.trim();
    let input = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    let digits: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if let Some(&bad) = digits.iter().find(|b| !b.is_ascii_hexdigit()) {
        eyre::bail!("invalid hex digit '{}'", bad.escape_ascii());
    }
    if digits.len() % 2 != 0 {
        eyre::bail!("hex input must have an even number of digits");
    }

    digits
        .chunks(2)
        .map(|pair| -> eyre::Result<u8> {
            Ok(u8::from_str_radix(std::str::from_utf8(pair)?, 16)?)
        })
        .collect()
}

/// Reads all bytes from a file, or from stdin when the path is "-".
///
/// Refuses to read from stdin when it is connected to a terminal.
pub fn read_input(path: &Path) -> eyre::Result<Vec<u8>> {
    if path.as_os_str() == HYPHEN {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eyre::bail!("refusing to read binary input from a terminal");
        }

        let mut data = Vec::new();
        stdin.lock().read_to_end(&mut data)?;
        return Ok(data);
    }

    fs::read(path).with_context(|| format!("failed to read input from '{}'", path.display()))
}

/// Writes `value` to stdout as a line of JSON.
///
/// Output to a terminal gets pretty-printed.
pub fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let mut stdout = io::stdout().lock();

    if stdout.is_terminal() {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;

    Ok(())
}
