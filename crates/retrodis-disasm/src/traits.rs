//! Disassembler traits.

use retrodis_core::{Architecture, SymbolDatabase};

use crate::engine::{decode_one, DecodedInstruction};
use crate::rule::InstructionSet;
use crate::{ByteStream, DecodeError};

/// An instruction set plug-in driven by the rule engine.
pub trait Disassembler {
    /// The rule table and layout parameters for this architecture.
    fn instruction_set(&self) -> &InstructionSet;

    /// Returns the target architecture.
    fn architecture(&self) -> Architecture {
        self.instruction_set().architecture
    }

    /// Decode a single instruction at the stream's current address.
    fn decode_instruction(
        &self,
        stream: &mut ByteStream<'_>,
        symbols: &mut SymbolDatabase,
    ) -> Result<DecodedInstruction, DecodeError> {
        decode_one(self.instruction_set(), stream, symbols)
    }

    /// Disassemble `[start, end)` of an image loaded at `base`.
    ///
    /// An instruction that starts before `end` is decoded completely even if
    /// it runs past `end`. Unknown opcodes are included in the output; a
    /// truncated instruction aborts the whole range, as does an image that
    /// runs past the top of the address space.
    fn disassemble_range(
        &self,
        image: &[u8],
        base: u64,
        start: u64,
        end: u64,
        symbols: &mut SymbolDatabase,
    ) -> Result<Vec<DecodedInstruction>, DecodeError> {
        let isa = self.instruction_set();
        if !isa.fits(base, image.len()) {
            return Err(DecodeError::outside_address_space(base, image.len(), isa.address_bits));
        }

        let mut instructions = Vec::new();
        if start >= end {
            return Ok(instructions);
        }
        if start < base || start - base >= image.len() as u64 {
            return Err(DecodeError::exhausted(start));
        }

        let mut stream = ByteStream::at(image, base, start);
        while stream.address() < end {
            instructions.push(self.decode_instruction(&mut stream, symbols)?);
        }

        Ok(instructions)
    }
}
