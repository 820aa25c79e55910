// Position tracking shared by every stream type in this crate.
//
// The cursor does no I/O; it only knows how many bits the buffer
// holds and where the next bit goes. Streams index into their own
// byte buffers with `byte_index` and consult `bits_free_in_byte`
// to split fields into chunks that never cross a byte boundary.

use bitline_utils::bits::whole_bytes;

/// The lifecycle state of a stream relative to its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// No bits have been consumed or produced yet.
    Fresh,
    /// Some, but not all bits of the buffer are used.
    InProgress,
    /// Every bit of the buffer is used.
    ///
    /// Zero-length buffers start out in this state.
    Exhausted,
}

#[derive(Clone, Debug)]
pub(crate) struct BitCursor {
    // Total addressable bits in the buffer.
    capacity_bits: usize,

    // Bits not yet consumed, `<= capacity_bits`.
    bits_remaining: usize,

    // Index of the byte currently being filled or drained.
    byte_index: usize,

    // Bits left in the byte at `byte_index`, in `1..=8`.
    // A value of 8 means the byte was not touched yet.
    bits_free_in_byte: u32,
}

impl BitCursor {
    pub const fn new(len: usize) -> Self {
        let capacity_bits = len * u8::BITS as usize;
        Self {
            capacity_bits,
            bits_remaining: capacity_bits,
            byte_index: 0,
            bits_free_in_byte: u8::BITS,
        }
    }

    /// Moves back to the start of the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.bits_remaining = self.capacity_bits;
        self.byte_index = 0;
        self.bits_free_in_byte = u8::BITS;
    }

    /// Moves back to the start of a new buffer of `len` bytes.
    #[inline]
    pub fn rebind(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Steps `nbits` bits forward.
    ///
    /// Callers must chunk their requests so that they never cross
    /// the boundary of the current byte.
    #[inline]
    pub fn advance(&mut self, nbits: u32) {
        debug_assert!(nbits <= self.bits_free_in_byte);
        debug_assert!(nbits as usize <= self.bits_remaining);

        self.bits_free_in_byte -= nbits;
        if self.bits_free_in_byte == 0 {
            self.byte_index += 1;
            self.bits_free_in_byte = u8::BITS;
        }

        self.bits_remaining -= nbits as usize;
    }

    /// Steps `nbits` bits forward across any number of bytes.
    ///
    /// Returns `false` without moving when not enough bits are left.
    pub fn skip(&mut self, nbits: usize) -> bool {
        if nbits > self.bits_remaining {
            return false;
        }

        // Finish the current byte, jump over whole bytes, then
        // start into the last one.
        let head = nbits.min(self.bits_free_in_byte as usize);
        self.advance(head as u32);

        let rest = nbits - head;
        let whole = whole_bytes(rest);
        self.byte_index += whole;
        self.bits_remaining -= whole << 3;

        let tail = (rest & 7) as u32;
        if tail != 0 {
            self.advance(tail);
        }

        true
    }

    /// Moves the position back to byte 0 while keeping the bit offset
    /// into the current byte.
    ///
    /// Used by streaming writers after they handed all complete bytes
    /// off and moved a partial trailing byte to the front.
    #[inline]
    pub fn rebase(&mut self) {
        let partial = (u8::BITS - self.bits_free_in_byte) as usize;

        self.byte_index = 0;
        self.bits_remaining = self.capacity_bits - partial;
    }

    #[inline]
    pub fn available_bits(&self) -> usize {
        self.bits_remaining
    }

    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.capacity_bits
    }

    #[inline]
    pub fn byte_index(&self) -> usize {
        self.byte_index
    }

    #[inline]
    pub fn bits_free_in_byte(&self) -> u32 {
        self.bits_free_in_byte
    }

    /// Whether the byte at [`Self::byte_index`] has not been touched.
    #[inline]
    pub fn is_fresh_byte(&self) -> bool {
        self.bits_free_in_byte == u8::BITS
    }

    #[inline]
    pub fn used_bits(&self) -> usize {
        self.capacity_bits - self.bits_remaining
    }

    /// Gets the number of used bytes, including a partially used one.
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.byte_index + !self.is_fresh_byte() as usize
    }

    pub fn state(&self) -> StreamState {
        if self.bits_remaining == 0 {
            StreamState::Exhausted
        } else if self.bits_remaining == self.capacity_bits {
            StreamState::Fresh
        } else {
            StreamState::InProgress
        }
    }
}
