//! Motorola 6809 instruction set.
//!
//! Page 0 holds the one-byte opcodes; `$10` and `$11` prefix the two extra
//! pages, which the rule table expresses as sub-tables. Most memory
//! operations take an indexed postbyte, decoded in [`operands::indexed`].

mod operands;
mod table;

use retrodis_core::Architecture;

use crate::rule::InstructionSet;
use crate::traits::Disassembler;

pub use table::{OPCODES, PAGE2, PAGE3};

/// Mnemonics run up to five letters.
pub static INSTRUCTION_SET: InstructionSet =
    InstructionSet::new(Architecture::Mc6809, OPCODES, 6);

/// 6809 disassembler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mc6809Disassembler;

impl Mc6809Disassembler {
    pub fn new() -> Self {
        Self
    }
}

impl Disassembler for Mc6809Disassembler {
    fn instruction_set(&self) -> &InstructionSet {
        &INSTRUCTION_SET
    }
}
