//! Feature-group layouts.

use super::{GenomeReader, GenomeWriter};
use crate::error::CodecError;

/// Primitive field stored in a genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    U8,
    /// Little-endian `u16`.
    U16,
    /// Little-endian IEEE-754 `f64`.
    F64,
}

impl FieldKind {
    /// Encoded width in bytes.
    pub fn width(self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::F64 => 8,
        }
    }

    /// Copies one field from `reader` to `writer`, advancing both cursors.
    pub fn copy_field(
        self,
        reader: &mut GenomeReader<'_>,
        writer: &mut GenomeWriter<'_>,
    ) -> Result<(), CodecError> {
        match self {
            FieldKind::U8 => writer.write_u8(reader.read_u8()?),
            FieldKind::U16 => writer.write_u16(reader.read_u16()?),
            FieldKind::F64 => writer.write_f64(reader.read_f64()?),
        }
    }
}

/// Field layout of one feature group, repeated back to back through a genome.
///
/// A genome of `n` groups has length `n * layout.width()`. The engine never
/// assumes a particular layout; consumers describe theirs here so that
/// feature-granular operators can respect group boundaries.
///
/// # Examples
///
/// ```
/// use genepool::codec::{FieldKind, GeneLayout};
///
/// // RGB colour followed by three (x, y) vertices.
/// let triangle = GeneLayout::new()
///     .with_fields(FieldKind::U8, 3)
///     .with_fields(FieldKind::U16, 6);
///
/// assert_eq!(triangle.width(), 15);
/// assert_eq!(triangle.genome_length(10), 150);
/// assert_eq!(triangle.group_count(150), Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneLayout {
    fields: Vec<FieldKind>,
}

impl GeneLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single field.
    pub fn with_field(mut self, kind: FieldKind) -> Self {
        self.fields.push(kind);
        self
    }

    /// Appends `count` consecutive fields of the same kind.
    pub fn with_fields(mut self, kind: FieldKind, count: usize) -> Self {
        self.fields.extend(std::iter::repeat(kind).take(count));
        self
    }

    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Width of one group in bytes.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.width()).sum()
    }

    /// Genome length holding `groups` whole groups.
    pub fn genome_length(&self, groups: usize) -> usize {
        self.width() * groups
    }

    /// Number of groups in a genome of `genome_len` bytes.
    ///
    /// `None` if the layout is empty or the length is not a whole multiple of
    /// the group width.
    pub fn group_count(&self, genome_len: usize) -> Option<usize> {
        let width = self.width();
        if width == 0 || genome_len % width != 0 {
            return None;
        }
        Some(genome_len / width)
    }

    /// Copies one whole group, field by field, from `reader` to `writer`.
    ///
    /// Both cursors must already point at the group's offset.
    pub fn copy_group(
        &self,
        reader: &mut GenomeReader<'_>,
        writer: &mut GenomeWriter<'_>,
    ) -> Result<(), CodecError> {
        for field in &self.fields {
            field.copy_field(reader, writer)?;
        }
        Ok(())
    }
}
