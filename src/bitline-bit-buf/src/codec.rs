// Chunked bit transfer between byte buffers and raw values.
//
// None of these functions check capacity. Streams verify it before
// calling in, so a transfer either happens completely or not at all.

use bitline_utils::bits::{mask, sign_extend};

use crate::{
    cursor::BitCursor,
    endian::Endian,
    primitive::{Integral, Primitive},
};

/// Extracts `nbits` bits at the cursor, most significant bit first.
#[inline]
pub(crate) fn get_bits(data: &[u8], cursor: &mut BitCursor, mut nbits: u32) -> u64 {
    debug_assert!(nbits <= u64::BITS);

    let mut value = 0;
    while nbits != 0 {
        let free = cursor.bits_free_in_byte();
        let width = nbits.min(free);

        // Move the chunk down to the low bits of the byte.
        let chunk = (data[cursor.byte_index()] >> (free - width)) as u64 & mask(width);
        cursor.advance(width);

        nbits -= width;
        value |= chunk << nbits;
    }

    value
}

/// Merges the low `nbits` bits of `value` into the buffer at the
/// cursor, most significant bit first.
#[inline]
pub(crate) fn put_bits(data: &mut [u8], cursor: &mut BitCursor, value: u64, mut nbits: u32) {
    debug_assert!(nbits <= u64::BITS);

    while nbits != 0 {
        let free = cursor.bits_free_in_byte();
        let width = nbits.min(free);
        nbits -= width;

        // Chunks are never wider than the free region of a byte.
        let shift = free - width;
        let chunk = (((value >> nbits) & mask(width)) as u8) << shift;

        let byte = &mut data[cursor.byte_index()];
        if cursor.is_fresh_byte() {
            *byte = chunk;
        } else {
            let region = (mask(width) as u8) << shift;
            *byte = (*byte & !region) | chunk;
        }

        cursor.advance(width);
    }
}

// Whole-byte transfers go through a scratch array in stream order.
const SCRATCH_SIZE: usize = 8;

#[inline]
fn get_ordered(data: &[u8], cursor: &mut BitCursor, endian: Endian, nbytes: usize) -> u64 {
    let mut scratch = [0; SCRATCH_SIZE];
    let scratch = &mut scratch[..nbytes];

    for byte in scratch.iter_mut() {
        *byte = get_bits(data, cursor, u8::BITS) as u8;
    }

    endian.decode_uint(scratch)
}

#[inline]
fn put_ordered(data: &mut [u8], cursor: &mut BitCursor, endian: Endian, raw: u64, nbytes: usize) {
    let mut scratch = [0; SCRATCH_SIZE];
    let scratch = &mut scratch[..nbytes];
    endian.encode_uint(raw, scratch);

    for &byte in scratch.iter() {
        put_bits(data, cursor, byte as u64, u8::BITS);
    }
}

/// Reads a `T` at its natural width.
#[inline]
pub(crate) fn read_primitive<T: Primitive>(
    data: &[u8],
    cursor: &mut BitCursor,
    endian: Endian,
) -> T {
    let raw = if T::BITS > u8::BITS {
        get_ordered(data, cursor, endian, (T::BITS / u8::BITS) as usize)
    } else {
        get_bits(data, cursor, T::BITS)
    };

    T::from_raw(raw)
}

/// Reads an `nbits` wide field into `T`, sign-extending it for
/// signed types.
#[inline]
pub(crate) fn read_integral<T: Integral>(
    data: &[u8],
    cursor: &mut BitCursor,
    endian: Endian,
    nbits: u32,
) -> T {
    if nbits == T::BITS {
        return read_primitive(data, cursor, endian);
    }

    let raw = get_bits(data, cursor, nbits);
    if T::SIGNED {
        T::from_raw(sign_extend(raw, nbits) as u64)
    } else {
        T::from_raw(raw)
    }
}

/// Writes a `T` at its natural width.
#[inline]
pub(crate) fn write_primitive<T: Primitive>(
    data: &mut [u8],
    cursor: &mut BitCursor,
    endian: Endian,
    value: T,
) {
    let raw = value.to_raw();
    if T::BITS > u8::BITS {
        put_ordered(data, cursor, endian, raw, (T::BITS / u8::BITS) as usize);
    } else {
        put_bits(data, cursor, raw, T::BITS);
    }
}

/// Writes the low `nbits` bits of `value`, truncating the rest.
#[inline]
pub(crate) fn write_integral<T: Integral>(
    data: &mut [u8],
    cursor: &mut BitCursor,
    endian: Endian,
    value: T,
    nbits: u32,
) {
    if nbits == T::BITS {
        write_primitive(data, cursor, endian, value);
    } else {
        put_bits(data, cursor, value.to_raw() & mask(nbits), nbits);
    }
}
