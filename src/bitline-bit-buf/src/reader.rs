use crate::{cursor::BitCursor, Endian};

/// A cursor which enables bit-based deserialization of data.
///
/// Individual bits are read starting at the MSB of each byte,
/// working towards the LSB. Fields narrower than their target
/// type are read MSB first as well; only full-width multi-byte
/// scalars observe the configured [`Endian`] byte order.
///
/// All checked reads return [`None`] when the buffer does not
/// hold enough bits, leaving the position untouched.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    // The borrowed buffer to read from.
    data: &'a [u8],

    // Position of the next bit in `data`.
    cursor: BitCursor,

    // Byte order of full-width multi-byte scalars.
    endian: Endian,
}

impl<'a> BitReader<'a> {
    /// Creates a new [`BitReader`] over a given byte slice.
    pub const fn new(data: &'a [u8], endian: Endian) -> Self {
        Self {
            data,
            cursor: BitCursor::new(data.len()),
            endian,
        }
    }

    /// Rebinds the reader to a new byte slice and rewinds to its start.
    pub fn set_data(&mut self, data: &'a [u8]) {
        log::trace!("Rebinding reader to a buffer of {} bytes", data.len());

        self.data = data;
        self.cursor.rebind(data.len());
    }

    /// Gets the whole underlying buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Gets the size of the underlying buffer in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Gets the size of the underlying buffer in bits.
    #[inline]
    pub fn size_bits(&self) -> usize {
        self.cursor.capacity_bits()
    }

    /// Gets the number of bits consumed so far.
    #[inline]
    pub fn consumed_bits(&self) -> usize {
        self.cursor.used_bits()
    }

    /// Skips `nbits` bits without decoding them.
    ///
    /// Returns `false` and stays in place when fewer than `nbits`
    /// bits are left.
    #[inline]
    pub fn skip(&mut self, nbits: usize) -> bool {
        self.cursor.skip(nbits)
    }

    impl_queries!();

    impl_read_ops!();
}
