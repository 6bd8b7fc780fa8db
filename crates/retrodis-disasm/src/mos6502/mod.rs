//! MOS 6502 instruction set.

mod operands;
mod table;

use retrodis_core::Architecture;

use crate::rule::InstructionSet;
use crate::traits::Disassembler;

pub use table::OPCODES;

/// Mnemonics are three letters; operands start in column 4.
pub static INSTRUCTION_SET: InstructionSet =
    InstructionSet::new(Architecture::Mos6502, OPCODES, 4);

/// 6502 disassembler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mos6502Disassembler;

impl Mos6502Disassembler {
    pub fn new() -> Self {
        Self
    }
}

impl Disassembler for Mos6502Disassembler {
    fn instruction_set(&self) -> &InstructionSet {
        &INSTRUCTION_SET
    }
}
