//! # retrodis-disasm
//!
//! Table-driven instruction decoding for retrodis.
//!
//! The engine in [`engine`] walks an ordered rule table ([`rule`]) against a
//! [`ByteStream`], emits the matched mnemonic, and hands the rest of the
//! instruction to an operand renderer ([`render`]) which records
//! cross-references as it resolves addresses.
//!
//! Instruction sets shipped with the crate:
//! - MOS 6502
//! - Motorola 6809

pub mod engine;
pub mod error;
pub mod render;
pub mod rule;
pub mod stream;
pub mod traits;

#[cfg(feature = "mos6502")]
pub mod mos6502;

#[cfg(feature = "mc6809")]
pub mod mc6809;

pub use engine::{decode_one, DecodedInstruction, Lookahead, UNKNOWN_MNEMONIC};
pub use error::DecodeError;
pub use render::{OperandContext, Renderer};
pub use rule::{InstructionSet, OpcodeEntry, Rule, MEM_MOD_MASK};
pub use stream::ByteStream;
pub use traits::Disassembler;

#[cfg(feature = "mos6502")]
pub use mos6502::Mos6502Disassembler;

#[cfg(feature = "mc6809")]
pub use mc6809::Mc6809Disassembler;

use retrodis_core::Architecture;

/// Returns the disassembler for `arch`, if its feature is enabled.
pub fn disassembler_for(arch: Architecture) -> Option<Box<dyn Disassembler>> {
    match arch {
        #[cfg(feature = "mos6502")]
        Architecture::Mos6502 => Some(Box::new(Mos6502Disassembler::new())),
        #[cfg(feature = "mc6809")]
        Architecture::Mc6809 => Some(Box::new(Mc6809Disassembler::new())),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
