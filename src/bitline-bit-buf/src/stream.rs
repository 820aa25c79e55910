use std::mem;

use crate::{cursor::BitCursor, Endian};

/// A combined reader and writer over a single mutable buffer.
///
/// Reads and writes share one position, using the same bit and
/// byte ordering rules as [`BitReader`] and [`BitWriter`]. The
/// typical use is building a record in place and then inspecting
/// it after a [`Self::restart`].
///
/// Unlike [`BitWriter`], a [`BitStream`] never streams data out;
/// everything stays in the buffer.
///
/// [`BitReader`]: crate::BitReader
/// [`BitWriter`]: crate::BitWriter
#[derive(Debug)]
pub struct BitStream<'a> {
    data: &'a mut [u8],
    cursor: BitCursor,
    endian: Endian,
}

impl<'a> BitStream<'a> {
    /// Creates a new [`BitStream`] over a given byte slice.
    pub fn new(data: &'a mut [u8], endian: Endian) -> Self {
        let cursor = BitCursor::new(data.len());
        Self {
            data,
            cursor,
            endian,
        }
    }

    /// Rebinds the stream to a new byte slice and rewinds to its start.
    ///
    /// Returns the previous buffer.
    pub fn set_data(&mut self, data: &'a mut [u8]) -> &'a mut [u8] {
        log::trace!("Rebinding stream to a buffer of {} bytes", data.len());

        self.cursor.rebind(data.len());
        mem::replace(&mut self.data, data)
    }

    /// Gets the size of the underlying buffer in bytes.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.data.len()
    }

    /// Gets the size of the underlying buffer in bits.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.cursor.capacity_bits()
    }

    /// Gets the number of bytes touched so far, including a
    /// partially used last one.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.cursor.used_bytes()
    }

    /// Gets the number of bits read or written so far.
    #[inline]
    pub fn size_bits(&self) -> usize {
        self.cursor.used_bits()
    }

    /// Gets a view of the buffer up to the current position.
    #[inline]
    pub fn used_data(&self) -> &[u8] {
        &self.data[..self.cursor.used_bytes()]
    }

    /// Gets a view of the whole underlying buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &*self.data
    }

    /// Consumes the stream and returns the underlying buffer.
    #[inline]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }

    /// Skips `nbits` bits without reading or writing them.
    ///
    /// Returns `false` and stays in place when fewer than `nbits`
    /// bits are left.
    #[inline]
    pub fn skip(&mut self, nbits: usize) -> bool {
        self.cursor.skip(nbits)
    }

    // Everything stays in place; there is nothing to flush.
    #[inline(always)]
    fn after_write(&mut self) {}

    impl_queries!();

    impl_read_ops!();

    impl_write_ops!();
}
