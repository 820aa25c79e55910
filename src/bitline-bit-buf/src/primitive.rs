//! Scalar types that can be transferred through bit streams.

use std::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

/// How a [`Primitive`] value is laid out in a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repr {
    /// A single bit.
    Bool,
    /// An unsigned integer.
    Unsigned,
    /// A two's complement integer, sign-extended when narrowed.
    Signed,
    /// An IEEE 754 value, never narrowed.
    Float,
}

/// A scalar value that can be read from and written to a stream at
/// its natural width.
///
/// This is implemented for [`bool`], the fixed-size integer types
/// and the floating-point types. It cannot be implemented outside
/// of this crate.
pub trait Primitive: Copy + private::Sealed {
    /// The natural width of the type in a stream.
    const BITS: u32;

    /// The representation of the type in a stream.
    const REPR: Repr;

    /// Converts the value into its raw bit pattern, zero-extended
    /// to 64 bits.
    fn to_raw(self) -> u64;

    /// Converts a raw bit pattern back into a value, discarding
    /// all bits above [`Self::BITS`].
    fn from_raw(raw: u64) -> Self;
}

/// A [`Primitive`] integer which may also be transferred at widths
/// narrower than its natural one.
pub trait Integral: Primitive {
    /// Whether narrowed fields are sign-extended on read.
    const SIGNED: bool = matches!(Self::REPR, Repr::Signed);
}

macro_rules! impl_integral {
    ($($ty:ty => $uty:ty, $repr:ident;)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Primitive for $ty {
                const BITS: u32 = <$ty>::BITS;
                const REPR: Repr = Repr::$repr;

                #[inline(always)]
                fn to_raw(self) -> u64 {
                    self as $uty as u64
                }

                #[inline(always)]
                fn from_raw(raw: u64) -> Self {
                    raw as $uty as $ty
                }
            }

            impl Integral for $ty {}
        )*
    };
}

impl_integral! {
    u8 => u8, Unsigned;
    i8 => u8, Signed;
    u16 => u16, Unsigned;
    i16 => u16, Signed;
    u32 => u32, Unsigned;
    i32 => u32, Signed;
    u64 => u64, Unsigned;
    i64 => u64, Signed;
}

impl private::Sealed for bool {}

impl Primitive for bool {
    const BITS: u32 = 1;
    const REPR: Repr = Repr::Bool;

    #[inline(always)]
    fn to_raw(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_raw(raw: u64) -> Self {
        raw & 1 != 0
    }
}

macro_rules! impl_float {
    ($($ty:ty => $uty:ty;)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Primitive for $ty {
                const BITS: u32 = <$uty>::BITS;
                const REPR: Repr = Repr::Float;

                #[inline(always)]
                fn to_raw(self) -> u64 {
                    self.to_bits() as u64
                }

                #[inline(always)]
                fn from_raw(raw: u64) -> Self {
                    <$ty>::from_bits(raw as $uty)
                }
            }
        )*
    };
}

impl_float! {
    f32 => u32;
    f64 => u64;
}

// Rejects out-of-range bit widths for `T` during monomorphization.
pub(crate) struct Width<T, const N: u32>(PhantomData<T>);

impl<T: Integral, const N: u32> Width<T, N> {
    pub const CHECKED: u32 = {
        assert!(N != 0 && N <= T::BITS, "bit width out of range for target type");
        N
    };
}

/// Validates a run-time bit width for `T`.
#[inline]
#[track_caller]
pub(crate) fn check_width<T: Integral>(nbits: u32) {
    assert!(
        nbits != 0 && nbits <= T::BITS,
        "bit width {nbits} out of range for a {}-bit integer",
        T::BITS
    );
}
