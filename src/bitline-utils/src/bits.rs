//! Miscellaneous utilities for working with bits.

/// Builds a mask with the low `nbits` bits set.
///
/// Any `nbits` of 64 or more produces a fully set mask.
#[inline]
pub const fn mask(nbits: u32) -> u64 {
    if nbits >= u64::BITS {
        u64::MAX
    } else {
        (1 << nbits) - 1
    }
}

/// Sign-extends an `nbits` wide value to [`i64`].
///
/// Bit `nbits - 1` of `value` is treated as the sign bit and
/// replicated into all the bits above it. Bits above the field
/// in `value` are ignored.
///
/// # Panics
///
/// Panics in debug mode when `nbits` is not in `1..=64`.
#[inline]
pub const fn sign_extend(value: u64, nbits: u32) -> i64 {
    debug_assert!(0 < nbits && nbits <= u64::BITS);

    let shift = u64::BITS - nbits;
    (value << shift) as i64 >> shift
}

/// Gets the number of bytes needed to store `bits` bits.
#[inline]
pub const fn bits_to_bytes(bits: usize) -> usize {
    bits.div_ceil(u8::BITS as usize)
}

/// Gets the number of whole bytes spanned by `bits` bits.
#[inline]
pub const fn whole_bytes(bits: usize) -> usize {
    bits >> 3
}
