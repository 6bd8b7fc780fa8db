//! Sequential byte reader over a binary image.

use retrodis_core::Endianness;

use crate::DecodeError;

/// Reads an image one byte at a time while tracking the address of the next
/// unread byte.
#[derive(Debug, Clone)]
pub struct ByteStream<'a> {
    data: &'a [u8],
    /// Address of `data[0]`.
    base: u64,
    pos: usize,
}

impl<'a> ByteStream<'a> {
    /// Creates a stream over `data`, which is loaded at `base`.
    pub fn new(data: &'a [u8], base: u64) -> Self {
        Self { data, base, pos: 0 }
    }

    /// Creates a stream positioned at `address`.
    ///
    /// An address outside the image yields an already exhausted stream.
    pub fn at(data: &'a [u8], base: u64, address: u64) -> Self {
        let pos = address
            .checked_sub(base)
            .and_then(|off| usize::try_from(off).ok())
            .map_or(data.len(), |off| off.min(data.len()));
        Self { data, base, pos }
    }

    /// Address of the next unread byte.
    pub fn address(&self) -> u64 {
        self.base.wrapping_add(self.pos as u64)
    }

    /// Consumes one byte.
    pub fn next(&mut self) -> Result<u8, DecodeError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or_else(|| DecodeError::exhausted(self.address()))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Consumes two bytes and combines them in the given byte order.
    pub fn next_word(&mut self, endianness: Endianness) -> Result<u16, DecodeError> {
        let first = self.next()?;
        let second = self.next()?;
        Ok(endianness.word(first, second))
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Raw bytes between two addresses already passed by the stream.
    pub fn bytes_between(&self, from: u64, to: u64) -> &'a [u8] {
        let start = from.saturating_sub(self.base) as usize;
        let end = to.saturating_sub(self.base) as usize;
        let end = end.min(self.data.len());
        &self.data[start.min(end)..end]
    }
}
