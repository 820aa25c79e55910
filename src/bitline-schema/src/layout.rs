use std::{fmt, str::FromStr};

use bitline_bit_buf::{BitReader, BitWriter};
use bitline_utils::bits::bits_to_bytes;

use crate::{Error, Field, Value};

/// An ordered list of [`Field`]s making up one record.
///
/// Parses from a comma-separated list of fields, such as
/// `bool,u16:13,i32:23,f32`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    fields: Vec<Field>,
}

impl Layout {
    /// Creates a layout from a non-empty list of fields.
    pub fn new(fields: Vec<Field>) -> Result<Self, Error> {
        if fields.is_empty() {
            return Err(Error::EmptyLayout);
        }

        Ok(Self { fields })
    }

    /// Gets the fields of the layout.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Gets the number of fields in a record.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Indicates whether the layout has no fields.
    ///
    /// Layouts are never empty, so this is always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets the size of one record in bits.
    pub fn bits(&self) -> usize {
        self.fields.iter().map(|f| f.bits() as usize).sum()
    }

    /// Gets the number of bytes needed to store one record.
    pub fn bytes(&self) -> usize {
        bits_to_bytes(self.bits())
    }

    /// Parses one literal per field into a record of [`Value`]s.
    pub fn parse_values<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<Value>, Error> {
        self.check_arity(inputs.len())?;

        self.fields
            .iter()
            .zip(inputs)
            .map(|(field, input)| field.parse_value(input.as_ref()))
            .collect()
    }

    /// Parses literals for any number of consecutive records.
    ///
    /// The number of literals must be a non-zero multiple of the
    /// number of fields.
    pub fn parse_records<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<Vec<Value>>, Error> {
        if inputs.is_empty() || inputs.len() % self.len() != 0 {
            return Err(Error::Arity {
                expected: self.len(),
                actual: inputs.len(),
            });
        }

        inputs
            .chunks(self.len())
            .map(|record| self.parse_values(record))
            .collect()
    }

    /// Encodes a record into `writer`.
    ///
    /// Fields are written in order; on error, the fields before the
    /// failing one remain written.
    pub fn encode<F: FnMut(&[u8])>(
        &self,
        writer: &mut BitWriter<'_, F>,
        values: &[Value],
    ) -> Result<(), Error> {
        self.check_arity(values.len())?;

        self.fields
            .iter()
            .zip(values)
            .try_for_each(|(field, value)| field.encode(writer, value))
    }

    /// Decodes a record from `reader`.
    pub fn decode(&self, reader: &mut BitReader<'_>) -> Result<Vec<Value>, Error> {
        self.fields.iter().map(|field| field.decode(reader)).collect()
    }

    /// Decodes as many whole records as `reader` holds.
    ///
    /// Trailing bits too few for another record are left unread.
    pub fn decode_all(&self, reader: &mut BitReader<'_>) -> Result<Vec<Vec<Value>>, Error> {
        let record_bits = self.bits();

        let mut records = Vec::with_capacity(reader.available_for(record_bits));
        while reader.available_bits() >= record_bits {
            records.push(self.decode(reader)?);
        }

        log::debug!(
            "Decoded {} records, {} trailing bits left",
            records.len(),
            reader.available_bits()
        );

        Ok(records)
    }

    fn check_arity(&self, actual: usize) -> Result<(), Error> {
        if actual == self.len() {
            Ok(())
        } else {
            Err(Error::Arity {
                expected: self.len(),
                actual,
            })
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}")?;
        }

        Ok(())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Error::EmptyLayout);
        }

        let fields = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Field>, _>>()?;

        let layout = Self::new(fields)?;
        log::debug!("Parsed layout '{layout}' of {} bits", layout.bits());

        Ok(layout)
    }
}
