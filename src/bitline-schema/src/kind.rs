use std::{fmt, str::FromStr};

use crate::Error;

/// The scalar type of a [`Field`](crate::Field).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl Kind {
    /// Every kind, ordered as declared.
    pub const ALL: [Self; 11] = [
        Self::Bool,
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
    ];

    /// Gets the natural width of the kind in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bool => 1,
            Self::U8 | Self::I8 => u8::BITS,
            Self::U16 | Self::I16 => u16::BITS,
            Self::U32 | Self::I32 | Self::F32 => u32::BITS,
            Self::U64 | Self::I64 | Self::F64 => u64::BITS,
        }
    }

    /// Whether the kind is a two's complement integer.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Whether the kind is a floating-point type.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Whether fields of this kind may be narrower than [`Self::bits`].
    pub const fn is_resizable(self) -> bool {
        !matches!(self, Self::Bool | Self::F32 | Self::F64)
    }

    /// Gets the name the kind is parsed from.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>(), Ok(kind));
        }
        assert_eq!("I32".parse::<Kind>(), Ok(Kind::I32));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            "u128".parse::<Kind>(),
            Err(Error::UnknownKind("u128".to_owned()))
        );
        assert!("".parse::<Kind>().is_err());
    }

    #[test]
    fn properties() {
        assert_eq!(Kind::Bool.bits(), 1);
        assert_eq!(Kind::F32.bits(), 32);
        assert!(Kind::I16.is_signed() && !Kind::U16.is_signed());
        assert!(Kind::F64.is_float() && !Kind::F64.is_resizable());
        assert!(Kind::U64.is_resizable());
    }
}
