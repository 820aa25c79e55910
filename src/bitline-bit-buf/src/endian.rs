use std::{fmt, str::FromStr};

use bitline_utils::bits::mask;
use byteorder::{ByteOrder, NativeEndian};
use thiserror::Error;

/// Error returned when parsing an [`Endian`] from a string fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown stream endianness '{0}'; expected 'big' or 'little'")]
pub struct ParseEndianError(String);

/// The byte order of multi-byte scalars in a stream.
///
/// This only affects values transferred at their full natural
/// width. Bits within a byte are always ordered MSB first, and
/// fields narrower than their type are always written MSB first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first, also known as network order.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// The byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// The byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Network byte order.
    pub const NETWORK: Self = Self::Big;

    /// Indicates whether this byte order matches the host.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }

    /// Gets the opposite byte order.
    #[inline]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }

    /// Reorders the host-order bytes of a scalar into this stream order.
    #[inline]
    pub fn to_stream_order(self, bytes: &mut [u8]) {
        if !self.is_native() {
            bytes.reverse();
        }
    }

    /// Reorders the stream-order bytes of a scalar into host order.
    #[inline]
    pub fn from_stream_order(self, bytes: &mut [u8]) {
        // Reversal is its own inverse.
        self.to_stream_order(bytes);
    }

    /// Serializes the low `out.len()` bytes of `value` into `out`,
    /// in this stream order.
    ///
    /// Bits of `value` that do not fit into `out` are discarded.
    ///
    /// # Panics
    ///
    /// Panics when `out` is empty or longer than 8 bytes.
    pub fn encode_uint(self, value: u64, out: &mut [u8]) {
        let nbytes = out.len();
        let value = value & mask(nbytes as u32 * u8::BITS);

        NativeEndian::write_uint(out, value, nbytes);
        self.to_stream_order(out);
    }

    /// Deserializes a scalar from `bytes` given in this stream order.
    ///
    /// # Panics
    ///
    /// Panics when `bytes` is empty or longer than 8 bytes.
    pub fn decode_uint(self, bytes: &[u8]) -> u64 {
        let nbytes = bytes.len();

        let mut scratch = [0; 8];
        let scratch = &mut scratch[..nbytes];
        scratch.copy_from_slice(bytes);

        self.from_stream_order(scratch);
        NativeEndian::read_uint(scratch, nbytes)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Big => "big",
            Self::Little => "little",
        })
    }
}

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" | "network" => Ok(Self::Big),
            "little" | "le" => Ok(Self::Little),
            _ => Err(ParseEndianError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_order_reverses() {
        let mut bytes = [1, 2, 3, 4];

        Endian::NATIVE.to_stream_order(&mut bytes);
        assert_eq!(bytes, [1, 2, 3, 4]);

        Endian::NATIVE.swapped().to_stream_order(&mut bytes);
        assert_eq!(bytes, [4, 3, 2, 1]);
        Endian::NATIVE.swapped().from_stream_order(&mut bytes);
        assert_eq!(bytes, [1, 2, 3, 4]);

        assert!(Endian::NATIVE.is_native());
        assert!(!Endian::NATIVE.swapped().is_native());
    }

    #[test]
    fn uint_codec_every_width() {
        let value = 0x1122_3344_5566_7788u64;

        for nbytes in 1..=8 {
            let expected = value & mask(nbytes as u32 * 8);

            let mut big = [0; 8];
            Endian::Big.encode_uint(value, &mut big[..nbytes]);
            assert_eq!(big[..nbytes], value.to_be_bytes()[8 - nbytes..]);
            assert_eq!(Endian::Big.decode_uint(&big[..nbytes]), expected);

            let mut little = [0; 8];
            Endian::Little.encode_uint(value, &mut little[..nbytes]);
            assert_eq!(little[..nbytes], value.to_le_bytes()[..nbytes]);
            assert_eq!(Endian::Little.decode_uint(&little[..nbytes]), expected);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("big".parse(), Ok(Endian::Big));
        assert_eq!("BE".parse(), Ok(Endian::Big));
        assert_eq!("network".parse(), Ok(Endian::NETWORK));
        assert_eq!("Little".parse(), Ok(Endian::Little));
        assert_eq!("le".parse(), Ok(Endian::Little));

        let err = "middle".parse::<Endian>().unwrap_err();
        assert_eq!(err, ParseEndianError("middle".to_owned()));
        assert!(err.to_string().contains("'middle'"));
    }

    #[test]
    fn display_round_trips() {
        for endian in [Endian::Big, Endian::Little] {
            assert_eq!(endian.to_string().parse(), Ok(endian));
        }
        assert_eq!(Endian::default(), Endian::NETWORK);
    }
}
