use std::{fmt, str::FromStr};

use bitline_bit_buf::{BitReader, BitWriter};
use bitline_utils::bits::{mask, sign_extend};

use crate::{Error, Kind, Value};

/// A single scalar of a record: its [`Kind`] and the number of
/// bits it occupies in a stream.
///
/// Parses from `kind` for a field of natural width, or from
/// `kind:bits` for an explicit one, e.g. `i32:23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    kind: Kind,
    bits: u32,
}

impl Field {
    /// Creates a field of the natural width of `kind`.
    pub const fn natural(kind: Kind) -> Self {
        Self {
            kind,
            bits: kind.bits(),
        }
    }

    /// Creates a field of `kind` which is `bits` bits wide.
    ///
    /// Integer fields may be anywhere from 1 bit to the natural width
    /// of their kind. Booleans and floating-point values are only
    /// supported at their natural width.
    pub fn new(kind: Kind, bits: u32) -> Result<Self, Error> {
        let valid = if kind.is_resizable() {
            (1..=kind.bits()).contains(&bits)
        } else {
            bits == kind.bits()
        };

        if valid {
            Ok(Self { kind, bits })
        } else {
            Err(Error::InvalidWidth {
                kind,
                bits: bits.to_string(),
            })
        }
    }

    /// Gets the kind of the field.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Gets the width of the field in bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Parses a literal into a [`Value`] suitable for this field.
    ///
    /// Integers accept decimal, `0x` hexadecimal, `0o` octal and `0b`
    /// binary notation, with `_` as a digit separator. For signed
    /// fields, prefixed literals without a sign are taken as raw
    /// two's complement bit patterns of the kind's natural width,
    /// so `0xFF` is `-1` for an `i8`.
    ///
    /// Values must fit the natural width of the kind. Values that do
    /// not fit a narrower field are accepted and truncated when
    /// encoded.
    pub fn parse_value(&self, input: &str) -> Result<Value, Error> {
        let literal = input.trim();

        let value = match self.kind {
            Kind::Bool => parse_bool(literal).map(Value::Bool),
            Kind::F32 | Kind::F64 => literal.parse().ok().map(Value::Float),
            kind if kind.is_signed() => parse_signed(literal, kind.bits()).map(Value::Signed),
            kind => parse_unsigned(literal, kind.bits()).map(Value::Unsigned),
        };

        value.ok_or_else(|| Error::InvalidValue {
            field: *self,
            value: input.to_owned(),
        })
    }

    /// Encodes `value` into `writer` according to this field.
    ///
    /// The value must be of the variant matching the field kind.
    /// Integers wider than the field are truncated.
    pub fn encode<F: FnMut(&[u8])>(
        &self,
        writer: &mut BitWriter<'_, F>,
        value: &Value,
    ) -> Result<(), Error> {
        log::trace!("Encoding {value} as {self}");

        let bits = self.bits;
        let written = match (self.kind, *value) {
            (Kind::Bool, Value::Bool(v)) => writer.write(v),

            (Kind::U8, Value::Unsigned(v)) => writer.write_bits(v as u8, bits),
            (Kind::U16, Value::Unsigned(v)) => writer.write_bits(v as u16, bits),
            (Kind::U32, Value::Unsigned(v)) => writer.write_bits(v as u32, bits),
            (Kind::U64, Value::Unsigned(v)) => writer.write_bits(v, bits),

            (Kind::I8, Value::Signed(v)) => writer.write_bits(v as i8, bits),
            (Kind::I16, Value::Signed(v)) => writer.write_bits(v as i16, bits),
            (Kind::I32, Value::Signed(v)) => writer.write_bits(v as i32, bits),
            (Kind::I64, Value::Signed(v)) => writer.write_bits(v, bits),

            (Kind::F32, Value::Float(v)) => writer.write(v as f32),
            (Kind::F64, Value::Float(v)) => writer.write(v),

            _ => {
                return Err(Error::TypeMismatch {
                    field: *self,
                    value: *value,
                })
            }
        };

        if written {
            Ok(())
        } else {
            Err(Error::Exhausted(*self))
        }
    }

    /// Decodes a [`Value`] of this field from `reader`.
    ///
    /// Narrow signed fields are sign-extended.
    pub fn decode(&self, reader: &mut BitReader<'_>) -> Result<Value, Error> {
        let bits = self.bits;
        let value = match self.kind {
            Kind::Bool => reader.read().map(Value::Bool),

            Kind::U8 => reader.read_bits::<u8>(bits).map(|v| Value::Unsigned(v.into())),
            Kind::U16 => reader.read_bits::<u16>(bits).map(|v| Value::Unsigned(v.into())),
            Kind::U32 => reader.read_bits::<u32>(bits).map(|v| Value::Unsigned(v.into())),
            Kind::U64 => reader.read_bits::<u64>(bits).map(Value::Unsigned),

            Kind::I8 => reader.read_bits::<i8>(bits).map(|v| Value::Signed(v.into())),
            Kind::I16 => reader.read_bits::<i16>(bits).map(|v| Value::Signed(v.into())),
            Kind::I32 => reader.read_bits::<i32>(bits).map(|v| Value::Signed(v.into())),
            Kind::I64 => reader.read_bits::<i64>(bits).map(Value::Signed),

            Kind::F32 => reader.read::<f32>().map(|v| Value::Float(v.into())),
            Kind::F64 => reader.read().map(Value::Float),
        };

        let value = value.ok_or(Error::Exhausted(*self))?;
        log::trace!("Decoded {value} from {self}");

        Ok(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits == self.kind.bits() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}:{}", self.kind, self.bits)
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((kind, bits)) = s.split_once(':') else {
            return s.parse().map(Self::natural);
        };

        let kind: Kind = kind.trim().parse()?;
        let bits = bits.trim();
        match bits.parse() {
            Ok(bits) => Self::new(kind, bits),
            Err(_) => Err(Error::InvalidWidth {
                kind,
                bits: bits.to_owned(),
            }),
        }
    }
}

fn parse_bool(literal: &str) -> Option<bool> {
    match literal.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

// An integer literal split into its parts.
struct IntLiteral {
    negative: bool,
    prefixed: bool,
    magnitude: u64,
}

fn parse_int(literal: &str) -> Option<IntLiteral> {
    let (negative, rest) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        Some("0o" | "0O") => (8, &rest[2..]),
        Some("0b" | "0B") => (2, &rest[2..]),
        _ => (10, rest),
    };

    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(&digits, radix).ok()?;
    Some(IntLiteral {
        negative,
        prefixed: radix != 10,
        magnitude,
    })
}

fn parse_unsigned(literal: &str, bits: u32) -> Option<u64> {
    let int = parse_int(literal)?;
    if int.negative && int.magnitude != 0 {
        return None;
    }

    (int.magnitude <= mask(bits)).then_some(int.magnitude)
}

fn parse_signed(literal: &str, bits: u32) -> Option<i64> {
    let int = parse_int(literal)?;

    if int.prefixed && !int.negative {
        return (int.magnitude <= mask(bits)).then(|| sign_extend(int.magnitude, bits));
    }

    let min = -(1i128 << (bits - 1));
    let max = (1i128 << (bits - 1)) - 1;

    let value = if int.negative {
        -i128::from(int.magnitude)
    } else {
        i128::from(int.magnitude)
    };

    // In range of the kind, so it fits an i64 too.
    (min..=max)
        .contains(&value)
        .then_some(value as i64)
}
