//! Runtime descriptions of bit-packed records.
//!
//! Where [`bitline_bit_buf`] transfers statically typed values, this
//! crate describes records whose shape is only known at run time,
//! such as layouts given on the command line.
//!
//! A [`Layout`] is an ordered list of [`Field`]s, each pairing a
//! scalar [`Kind`] with the number of bits it occupies. Layouts
//! parse from a compact string form:
//!
//! ```text
//! i16:14,i32:23,u8
//! ```
//!
//! A field without an explicit width uses the natural width of its
//! kind. Values travel as dynamically typed [`Value`]s.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use thiserror::Error;

mod field;
pub use field::Field;

mod kind;
pub use kind::Kind;

mod layout;
pub use layout::Layout;

mod value;
pub use value::Value;

/// Errors that may occur when describing, encoding or decoding records.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A field names a scalar kind that does not exist.
    #[error("unknown field kind '{0}'")]
    UnknownKind(String),

    /// A field width is malformed or out of range for its kind.
    #[error("invalid width '{bits}' for a {kind} field")]
    InvalidWidth { kind: Kind, bits: String },

    /// A literal could not be parsed into a value for a field.
    #[error("invalid value '{value}' for a {field} field")]
    InvalidValue { field: Field, value: String },

    /// A value of the wrong variant was given for a field.
    #[error("cannot encode {value:?} into a {field} field")]
    TypeMismatch { field: Field, value: Value },

    /// The number of values does not match the layout.
    #[error("layout expects {expected} values per record, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// The stream ran out of bits while transferring a field.
    #[error("not enough space left for a {0} field")]
    Exhausted(Field),

    /// A layout was described without any fields.
    #[error("layout must have at least one field")]
    EmptyLayout,
}
