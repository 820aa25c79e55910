use std::{fmt, mem};

use crate::{cursor::BitCursor, Endian};

/// The sink type of a [`BitWriter`] which never flushes.
pub type NoSink = fn(&[u8]);

/// A cursor which enables bit-based serialization of data.
///
/// Individual bits are written starting at the MSB of each byte,
/// working towards the LSB. Fields narrower than their source
/// type are written MSB first as well; only full-width multi-byte
/// scalars observe the configured [`Endian`] byte order.
///
/// # Streaming
///
/// A writer may own a flush sink, a closure receiving completed
/// bytes. After every scalar write, all bytes which became
/// complete are handed to the sink and a partially filled last
/// byte is moved to the front of the buffer. This way, unbounded
/// output can be produced through a buffer that only needs to be
/// a byte larger than the widest field written.
///
/// The sink runs synchronously from within the writing call.
pub struct BitWriter<'a, F = NoSink> {
    // The borrowed buffer where data is being written to.
    data: &'a mut [u8],

    // Position of the next bit in `data`.
    cursor: BitCursor,

    // Byte order of full-width multi-byte scalars.
    endian: Endian,

    // Receives complete bytes after every write, if present.
    sink: Option<F>,
}

impl<'a> BitWriter<'a> {
    /// Creates a new [`BitWriter`] over a given byte slice.
    ///
    /// Written data stays in the buffer until the writer is
    /// restarted or rebound.
    pub fn new(data: &'a mut [u8], endian: Endian) -> Self {
        Self::from_parts(data, endian, None)
    }
}

impl<'a, F: FnMut(&[u8])> BitWriter<'a, F> {
    /// Creates a new streaming [`BitWriter`] which hands completed
    /// bytes from `data` to `sink` after every write.
    pub fn with_sink(data: &'a mut [u8], endian: Endian, sink: F) -> Self {
        Self::from_parts(data, endian, Some(sink))
    }

    fn from_parts(data: &'a mut [u8], endian: Endian, sink: Option<F>) -> Self {
        let cursor = BitCursor::new(data.len());
        Self {
            data,
            cursor,
            endian,
            sink,
        }
    }

    /// Rebinds the writer to a new byte slice and rewinds to its start.
    ///
    /// Returns the previous buffer.
    pub fn set_data(&mut self, data: &'a mut [u8]) -> &'a mut [u8] {
        log::trace!("Rebinding writer to a buffer of {} bytes", data.len());

        self.cursor.rebind(data.len());
        mem::replace(&mut self.data, data)
    }

    /// Replaces the flush sink and returns the previous one.
    pub fn set_sink(&mut self, sink: Option<F>) -> Option<F> {
        mem::replace(&mut self.sink, sink)
    }

    /// Removes the flush sink from the writer.
    pub fn take_sink(&mut self) -> Option<F> {
        self.sink.take()
    }

    /// Indicates whether a flush sink is installed.
    #[inline]
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
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

    /// Gets the number of bytes in the buffer holding written bits,
    /// including a partially filled last one.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.cursor.used_bytes()
    }

    /// Gets the number of written bits currently held in the buffer.
    #[inline]
    pub fn size_bits(&self) -> usize {
        self.cursor.used_bits()
    }

    /// Indicates whether the buffer holds no written bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.used_bits() == 0
    }

    /// Indicates whether the buffer has no room left.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.at_end()
    }

    /// Gets a view of the written portion of the buffer.
    ///
    /// The padding bits of a partially filled last byte are
    /// unspecified.
    #[inline]
    pub fn used_data(&self) -> &[u8] {
        &self.data[..self.cursor.used_bytes()]
    }

    /// Gets a view of the whole underlying buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &*self.data
    }

    /// Consumes the writer and returns the underlying buffer.
    #[inline]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }

    /// Skips `nbits` bits without writing them.
    ///
    /// The skipped bits keep whatever the buffer held before, so
    /// they can serve as placeholders or alignment padding.
    ///
    /// Returns `false` and stays in place when fewer than `nbits`
    /// bits are left.
    pub fn skip(&mut self, nbits: usize) -> bool {
        let success = self.cursor.skip(nbits);
        if success {
            self.after_write();
        }

        success
    }

    /// Hands all written bytes to the flush sink, including a
    /// partially filled last one, and rewinds the writer.
    ///
    /// The padding bits of a partial byte are unspecified. Does
    /// nothing when no sink is installed.
    pub fn flush(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let used = self.cursor.used_bytes();
        if used != 0 {
            log::trace!("Flushing {used} bytes with {} bits", self.cursor.used_bits());
            sink(&self.data[..used]);
        }

        self.cursor.reset();
    }

    // Hands all complete bytes to the sink, if any, and moves a
    // partially filled last byte to the start of the buffer.
    #[inline]
    fn after_write(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let complete = self.cursor.byte_index();
        if complete == 0 {
            return;
        }

        log::trace!("Flushing {complete} complete bytes");
        sink(&self.data[..complete]);

        if !self.cursor.is_fresh_byte() {
            self.data[0] = self.data[complete];
        }
        self.cursor.rebase();
    }

    impl_queries!();

    impl_write_ops!();
}

impl<F> fmt::Debug for BitWriter<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitWriter")
            .field("data", &self.data)
            .field("cursor", &self.cursor)
            .field("endian", &self.endian)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
