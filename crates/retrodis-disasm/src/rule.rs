//! Rule tables.
//!
//! An instruction set is an ordered slice of [`Rule`]s. The decoder takes the
//! first rule whose predicate holds; later rules are never consulted, even
//! when they would also match. Tables are plain `'static` data built with the
//! `const fn` constructors below.

use retrodis_core::{Architecture, Endianness, XrefKind};

use crate::render::Renderer;

/// Mask applied to the lookahead byte by [`Rule::MemMod`].
pub const MEM_MOD_MASK: u8 = 0x8F;

/// What a matched rule produces.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    /// Mnemonic
    pub mnemonic: &'static str,
    /// Operand renderer
    pub render: Renderer,
    /// How addresses produced by `render` are classified
    pub kind: XrefKind,
}

impl OpcodeEntry {
    pub const fn new(mnemonic: &'static str, render: Renderer) -> Self {
        Self {
            mnemonic,
            render,
            kind: XrefKind::None,
        }
    }

    pub const fn with_kind(mut self, kind: XrefKind) -> Self {
        self.kind = kind;
        self
    }
}

/// One matching rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Opcode equals `opcode`.
    Exact { opcode: u8, entry: OpcodeEntry },
    /// Opcode lies in `min..=max`.
    Range { min: u8, max: u8, entry: OpcodeEntry },
    /// `opcode & mask == value`.
    Mask1 { mask: u8, value: u8, entry: OpcodeEntry },
    /// Opcode equals `anchor` and `lookahead & mask == value`.
    Mask2 {
        anchor: u8,
        mask: u8,
        value: u8,
        entry: OpcodeEntry,
    },
    /// Opcode is one of `anchors` and `lookahead & MEM_MOD_MASK == value`.
    MemMod {
        anchors: &'static [u8],
        value: u8,
        entry: OpcodeEntry,
    },
    /// Opcode equals `anchor`; the following byte is decoded against `table`.
    SubTable { anchor: u8, table: &'static [Rule] },
}

impl Rule {
    pub const fn exact(
        opcode: u8,
        mnemonic: &'static str,
        render: Renderer,
        kind: XrefKind,
    ) -> Self {
        Self::Exact {
            opcode,
            entry: OpcodeEntry::new(mnemonic, render).with_kind(kind),
        }
    }

    pub const fn range(
        min: u8,
        max: u8,
        mnemonic: &'static str,
        render: Renderer,
        kind: XrefKind,
    ) -> Self {
        Self::Range {
            min,
            max,
            entry: OpcodeEntry::new(mnemonic, render).with_kind(kind),
        }
    }

    pub const fn mask1(
        mask: u8,
        value: u8,
        mnemonic: &'static str,
        render: Renderer,
        kind: XrefKind,
    ) -> Self {
        Self::Mask1 {
            mask,
            value,
            entry: OpcodeEntry::new(mnemonic, render).with_kind(kind),
        }
    }

    pub const fn mask2(
        anchor: u8,
        mask: u8,
        value: u8,
        mnemonic: &'static str,
        render: Renderer,
        kind: XrefKind,
    ) -> Self {
        Self::Mask2 {
            anchor,
            mask,
            value,
            entry: OpcodeEntry::new(mnemonic, render).with_kind(kind),
        }
    }

    pub const fn mem_mod(
        anchors: &'static [u8],
        value: u8,
        mnemonic: &'static str,
        render: Renderer,
        kind: XrefKind,
    ) -> Self {
        Self::MemMod {
            anchors,
            value,
            entry: OpcodeEntry::new(mnemonic, render).with_kind(kind),
        }
    }

    pub const fn sub_table(anchor: u8, table: &'static [Rule]) -> Self {
        Self::SubTable { anchor, table }
    }
}

/// Everything the decoder needs from an instruction set plug-in.
#[derive(Debug, Clone, Copy)]
pub struct InstructionSet {
    /// Architecture this table decodes.
    pub architecture: Architecture,
    /// Top-level rule table
    pub table: &'static [Rule],
    /// Width the mnemonic is left-justified to before operands.
    pub opcode_width: usize,
    /// Byte order of 16-bit operands.
    pub endianness: Endianness,
    /// Computed targets wrap at this many bits.
    pub address_bits: u32,
}

impl InstructionSet {
    /// Builds a descriptor using the architecture's byte order and address width.
    pub const fn new(
        architecture: Architecture,
        table: &'static [Rule],
        opcode_width: usize,
    ) -> Self {
        Self {
            architecture,
            table,
            opcode_width,
            endianness: architecture.endianness(),
            address_bits: architecture.address_bits(),
        }
    }

    /// Wraps a computed address to the address width.
    pub fn wrap(&self, address: u64) -> u64 {
        if self.address_bits >= 64 {
            address
        } else {
            address & ((1u64 << self.address_bits) - 1)
        }
    }

    /// Returns true if `len` bytes loaded at `base` end at or below the top
    /// of the address space.
    pub fn fits(&self, base: u64, len: usize) -> bool {
        match base.checked_add(len as u64) {
            Some(end) => self.address_bits >= 64 || end <= 1u64 << self.address_bits,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_constructors_carry_kind() {
        match Rule::mem_mod(&[0x40, 0x41], 0x8F, "E", render::none, XrefKind::Pointer) {
            Rule::MemMod { anchors, value, entry } => {
                assert_eq!(anchors, &[0x40, 0x41]);
                assert_eq!(value, 0x8F);
                assert_eq!((entry.mnemonic, entry.kind), ("E", XrefKind::Pointer));
            }
            other => panic!("unexpected rule {:?}", other),
        }
        assert_eq!(OpcodeEntry::new("NOP", render::none).kind, XrefKind::None);
    }

    #[test]
    fn test_wrap_to_address_width() {
        let isa = InstructionSet::new(Architecture::Mos6502, &[], 4);
        assert_eq!(isa.wrap(0x1_0005), 0x0005);
        assert_eq!(isa.wrap(0xFFFF), 0xFFFF);
        assert_eq!(isa.endianness, Endianness::Little);
    }

    #[test]
    fn test_image_fits_address_space() {
        let isa = InstructionSet::new(Architecture::Mos6502, &[], 4);
        assert!(isa.fits(0xC000, 0x4000));
        assert!(isa.fits(0xFFFE, 2));
        assert!(!isa.fits(0xFFFE, 5));
        assert!(!isa.fits(0x1_0000, 0));
        assert!(!isa.fits(u64::MAX, 16));
    }
}
