//! Disassembly error types.

use thiserror::Error;

/// Error type for instruction decoding.
///
/// An opcode no rule matches is not an error; it decodes to the unknown
/// marker. Everything here aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte was needed past the end of the image.
    #[error("stream exhausted at {address:#06x}")]
    StreamExhausted { address: u64 },

    /// The image does not fit below the top of the address space.
    #[error("image of {len} bytes at {base:#06x} exceeds the {bits}-bit address space")]
    OutsideAddressSpace { base: u64, len: usize, bits: u32 },
}

impl DecodeError {
    /// Creates a new StreamExhausted error.
    pub fn exhausted(address: u64) -> Self {
        Self::StreamExhausted { address }
    }

    /// Creates a new OutsideAddressSpace error.
    pub fn outside_address_space(base: u64, len: usize, bits: u32) -> Self {
        Self::OutsideAddressSpace { base, len, bits }
    }
}
