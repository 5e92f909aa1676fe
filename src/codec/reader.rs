//! Read cursor over a genome.

use crate::error::CodecError;

/// Sequential decoder over a borrowed genome.
///
/// Each read advances the cursor by the field width. A read that would run
/// past the end fails with [`CodecError::OutOfBounds`] and leaves the cursor
/// where it was.
///
/// # Examples
///
/// ```
/// use genepool::codec::GenomeReader;
///
/// let genome = [0x2a, 0x34, 0x12];
/// let mut reader = GenomeReader::new(&genome);
/// assert_eq!(reader.read_u8().unwrap(), 0x2a);
/// assert_eq!(reader.read_u16().unwrap(), 0x1234);
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GenomeReader<'a> {
    genes: &'a [u8],
    pos: usize,
}

impl<'a> GenomeReader<'a> {
    /// Creates a reader positioned at the start of `genes`.
    pub fn new(genes: &'a [u8]) -> Self {
        Self { genes, pos: 0 }
    }

    /// The underlying genome.
    pub fn genome(&self) -> &'a [u8] {
        self.genes
    }

    /// Total genome length in bytes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the genome.
    pub fn remaining(&self) -> usize {
        self.genes.len().saturating_sub(self.pos)
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Seeking past the end is allowed; the next read reports the overrun.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    /// Reads two bytes as a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        self.take::<2>().map(u16::from_le_bytes)
    }

    /// Reads eight bytes as a little-endian IEEE-754 `f64`.
    ///
    /// Any bit pattern is accepted, so NaN and infinities can come back.
    pub fn read_f64(&mut self) -> Result<f64, CodecError> {
        self.take::<8>().map(f64::from_le_bytes)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let out_of_bounds = CodecError::OutOfBounds {
            offset: self.pos,
            width: N,
            len: self.genes.len(),
        };
        let end = self.pos.checked_add(N).ok_or(out_of_bounds)?;
        let bytes = self.genes.get(self.pos..end).ok_or(out_of_bounds)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos = end;
        Ok(out)
    }
}
