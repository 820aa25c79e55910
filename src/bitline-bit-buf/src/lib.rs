//! Provides cursors for bit-level serialization and deserialization
//! of data in fixed, caller-provided buffers.
//!
//! Fields of any width between one bit and the natural width of their
//! type can be packed back to back, crossing byte boundaries freely.
//! Bits are always ordered MSB first, also called network bit order.
//! Multi-byte scalars transferred at their full width follow a
//! configurable [`Endian`] byte order instead.
//!
//! Three cursor types are provided:
//!
//! - [`BitReader`] decodes from a shared byte slice.
//! - [`BitWriter`] encodes into a mutable byte slice and can stream
//!   completed bytes out to a sink closure.
//! - [`BitStream`] does both over a single buffer and position.
//!
//! Every operation comes in a checked flavor, which reports running
//! out of space through [`Option`] or [`bool`], and an `_unchecked`
//! flavor for callers which verified capacity up front.
//!
//! Values wider than their declared field width are truncated when
//! written, not rejected. Protocols that need overflow detection
//! must validate values before writing them.
//!
//! # Example
//!
//! ```
//! use bitline_bit_buf::{BitReader, BitWriter, Endian};
//!
//! let mut buf = [0; 4];
//!
//! let mut writer = BitWriter::new(&mut buf, Endian::Big);
//! assert!(writer.write_bits(-3i8, 4));
//! assert!(writer.write(true));
//! assert!(writer.write_bits(0x1FFu16, 9));
//! assert_eq!(writer.size_bits(), 14);
//!
//! let mut reader = BitReader::new(&buf, Endian::Big);
//! assert_eq!(reader.read_bits::<i8>(4), Some(-3));
//! assert_eq!(reader.read::<bool>(), Some(true));
//! assert_eq!(reader.read_bits::<u16>(9), Some(0x1FF));
//! ```
//!
//! # Fixed widths
//!
//! The `_fixed` operations take their width as a const parameter,
//! so a width outside `1..=T::BITS` fails to build instead of
//! panicking at run time.
//!
//! ```
//! use bitline_bit_buf::{BitReader, BitWriter, Endian};
//!
//! let mut buf = [0; 2];
//! let mut writer = BitWriter::new(&mut buf, Endian::Big);
//! assert!(writer.write_fixed::<u8, 8>(0xA5));
//! assert!(writer.write_fixed::<i16, 5>(-2));
//!
//! let mut reader = BitReader::new(&buf, Endian::Big);
//! assert_eq!(reader.read_fixed::<u8, 8>(), Some(0xA5));
//! assert_eq!(reader.read_fixed::<i16, 5>(), Some(-2));
//! ```
//!
//! A field wider than its type is rejected:
//!
//! ```compile_fail
//! use bitline_bit_buf::{BitWriter, Endian};
//!
//! let mut buf = [0; 2];
//! let mut writer = BitWriter::new(&mut buf, Endian::Big);
//! writer.write_fixed::<u8, 9>(1);
//! ```
//!
//! So is an empty field:
//!
//! ```compile_fail
//! use bitline_bit_buf::{BitReader, Endian};
//!
//! let buf = [0; 2];
//! let mut reader = BitReader::new(&buf, Endian::Big);
//! let _ = reader.read_fixed::<i16, 0>();
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod codec;

mod cursor;
pub use cursor::StreamState;

mod endian;
pub use endian::{Endian, ParseEndianError};

pub mod primitive;
pub use primitive::{Integral, Primitive};

mod reader;
pub use reader::BitReader;

mod stream;
pub use stream::BitStream;

mod writer;
pub use writer::{BitWriter, NoSink};
