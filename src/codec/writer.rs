//! Write cursor over a preallocated genome buffer.

use crate::error::CodecError;

/// Sequential encoder into a borrowed, fixed-length buffer.
///
/// The buffer is never grown: callers allocate it at the final genome length
/// before writing. A write that does not fit fails with
/// [`CodecError::OutOfBounds`] and leaves both buffer and cursor untouched.
#[derive(Debug)]
pub struct GenomeWriter<'a> {
    genes: &'a mut [u8],
    pos: usize,
}

impl<'a> GenomeWriter<'a> {
    pub fn new(genes: &'a mut [u8]) -> Self {
        Self { genes, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), CodecError> {
        self.put(&[value])
    }

    /// Writes `value` as two little-endian bytes.
    pub fn write_u16(&mut self, value: u16) -> Result<(), CodecError> {
        self.put(&value.to_le_bytes())
    }

    /// Writes the IEEE-754 bit pattern of `value` as eight little-endian bytes.
    pub fn write_f64(&mut self, value: f64) -> Result<(), CodecError> {
        self.put(&value.to_le_bytes())
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let out_of_bounds = CodecError::OutOfBounds {
            offset: self.pos,
            width: bytes.len(),
            len: self.genes.len(),
        };
        let end = self.pos.checked_add(bytes.len()).ok_or(out_of_bounds)?;
        let dst = self.genes.get_mut(self.pos..end).ok_or(out_of_bounds)?;
        dst.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}
