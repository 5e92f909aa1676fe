//! Genome codec.
//!
//! Interprets an opaque genome byte buffer as a sequential stream of typed
//! fields. Reading and writing use independent cursors:
//!
//! - [`GenomeReader`]: borrows a genome and decodes `u8`, little-endian `u16`
//!   and little-endian `f64` fields.
//! - [`GenomeWriter`]: borrows a preallocated buffer and encodes the same
//!   field types in place.
//! - [`GeneLayout`]: an ordered list of [`FieldKind`]s describing one feature
//!   group, used by feature-granular crossover.
//!
//! The codec knows nothing about what the fields mean. Consumers decide how
//! many fields a genome holds and what they represent, e.g. a triangle as
//! three colour bytes followed by six coordinate half-words.
//!
//! Every out-of-range access returns [`CodecError::OutOfBounds`](crate::error::CodecError)
//! without moving the cursor.

mod layout;
mod reader;
mod writer;

pub use layout::{FieldKind, GeneLayout};
pub use reader::GenomeReader;
pub use writer::GenomeWriter;
