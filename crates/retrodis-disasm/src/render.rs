//! Operand rendering.
//!
//! A [`Renderer`] runs after a rule has matched and the mnemonic has been
//! written. It reads whatever operand bytes the encoding needs, appends the
//! operand text, and reports every address it computes. The reference kind
//! belongs to the matched rule, so renderers never choose one.
//!
//! Architecture modules build their addressing modes by delegating to the
//! shared renderers here and appending register suffixes.

use retrodis_core::{SymbolDatabase, XrefKind};

use crate::rule::InstructionSet;
use crate::{ByteStream, DecodeError};

/// Operand renderer attached to a rule.
pub type Renderer = fn(&mut OperandContext<'_, '_>) -> Result<(), DecodeError>;

/// State handed to a renderer for one instruction.
pub struct OperandContext<'s, 'a> {
    isa: &'s InstructionSet,
    stream: &'s mut ByteStream<'a>,
    symbols: &'s mut SymbolDatabase,
    out: &'s mut String,
    origin: u64,
    opcode: u8,
    kind: XrefKind,
}

impl<'s, 'a> OperandContext<'s, 'a> {
    pub fn new(
        isa: &'s InstructionSet,
        stream: &'s mut ByteStream<'a>,
        symbols: &'s mut SymbolDatabase,
        out: &'s mut String,
        origin: u64,
        opcode: u8,
        kind: XrefKind,
    ) -> Self {
        Self {
            isa,
            stream,
            symbols,
            out,
            origin,
            opcode,
            kind,
        }
    }

    /// The opcode byte the rule matched (the last one, for prefixed opcodes).
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Reference kind of the matched rule.
    pub fn kind(&self) -> XrefKind {
        self.kind
    }

    /// Address of the next unread byte.
    pub fn stream_address(&self) -> u64 {
        self.stream.address()
    }

    pub fn next_byte(&mut self) -> Result<u8, DecodeError> {
        self.stream.next()
    }

    /// Reads a 16-bit operand in the instruction set's byte order.
    pub fn next_word(&mut self) -> Result<u16, DecodeError> {
        self.stream.next_word(self.isa.endianness)
    }

    pub fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn push(&mut self, c: char) {
        self.out.push(c);
    }

    /// Wraps an address to the instruction set's address width.
    pub fn wrap(&self, address: u64) -> u64 {
        self.isa.wrap(address)
    }

    /// Records a reference from this instruction to `target`.
    ///
    /// Rules classified as [`XrefKind::None`] record nothing.
    pub fn reference(&mut self, target: u64) -> bool {
        if self.kind == XrefKind::None {
            return false;
        }
        self.symbols.record_reference(self.kind, self.origin, target)
    }

    /// Label or hex text for `target`, without recording anything.
    pub fn label(&self, target: u64, digits: usize) -> String {
        self.symbols.format_address(target, digits)
    }

    /// Records `target` and returns its display text.
    pub fn address(&mut self, target: u64, digits: usize) -> String {
        self.reference(target);
        self.label(target, digits)
    }

    /// Reads a signed 8-bit displacement and resolves it against the address
    /// following it.
    pub fn relative8(&mut self) -> Result<u64, DecodeError> {
        let offset = self.next_byte()? as i8;
        Ok(self.wrap(self.stream_address().wrapping_add(offset as i64 as u64)))
    }

    /// Reads a signed 16-bit displacement and resolves it against the address
    /// following it.
    pub fn relative16(&mut self) -> Result<u64, DecodeError> {
        let offset = self.next_word()? as i16;
        Ok(self.wrap(self.stream_address().wrapping_add(offset as i64 as u64)))
    }
}

/// No operand.
pub fn none(_ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    Ok(())
}

/// `#$12`
pub fn immediate8(ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    let value = ctx.next_byte()?;
    ctx.push_str(&format!("#${:02X}", value));
    Ok(())
}

/// `#$1234`, or `#LABEL` when the value names a labelled address.
///
/// The value is only treated as an address when the rule is classified.
pub fn immediate16(ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    let value = ctx.next_word()? as u64;
    let text = if ctx.kind() == XrefKind::None {
        format!("${:04X}", value)
    } else {
        ctx.address(value, 4)
    };
    ctx.push('#');
    ctx.push_str(&text);
    Ok(())
}

/// One-byte address, widened: `$12`.
pub fn direct8(ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    let target = ctx.next_byte()? as u64;
    let text = ctx.address(target, 2);
    ctx.push_str(&text);
    Ok(())
}

/// Two-byte absolute address: `$1234`.
pub fn extended16(ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    let target = ctx.next_word()? as u64;
    let text = ctx.address(target, 4);
    ctx.push_str(&text);
    Ok(())
}

/// Branch with an 8-bit displacement.
pub fn relative8(ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    let target = ctx.relative8()?;
    let text = ctx.address(target, 4);
    ctx.push_str(&text);
    Ok(())
}

/// Branch with a 16-bit displacement.
pub fn relative16(ctx: &mut OperandContext<'_, '_>) -> Result<(), DecodeError> {
    let target = ctx.relative16()?;
    let text = ctx.address(target, 4);
    ctx.push_str(&text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use retrodis_core::Architecture;

    const EMPTY: &[Rule] = &[];

    fn run(
        arch: Architecture,
        bytes: &[u8],
        base: u64,
        kind: XrefKind,
        symbols: &mut SymbolDatabase,
        render: Renderer,
    ) -> (String, u64) {
        let isa = InstructionSet::new(arch, EMPTY, 4);
        // The opcode byte is already consumed when a renderer runs.
        let mut stream = ByteStream::new(bytes, base);
        stream.next().unwrap();
        let mut out = String::new();
        let opcode = bytes[0];
        let mut ctx = OperandContext::new(&isa, &mut stream, symbols, &mut out, base, opcode, kind);
        render(&mut ctx).unwrap();
        (out, stream.address())
    }

    fn run6502(
        bytes: &[u8],
        base: u64,
        kind: XrefKind,
        symbols: &mut SymbolDatabase,
        render: Renderer,
    ) -> (String, u64) {
        run(Architecture::Mos6502, bytes, base, kind, symbols, render)
    }

    fn run6809(
        bytes: &[u8],
        base: u64,
        kind: XrefKind,
        symbols: &mut SymbolDatabase,
        render: Renderer,
    ) -> (String, u64) {
        run(Architecture::Mc6809, bytes, base, kind, symbols, render)
    }

    #[test]
    fn test_immediate8() {
        let mut db = SymbolDatabase::new();
        let (text, next) = run6502(&[0xA9, 0x0F], 0, XrefKind::None, &mut db, immediate8);
        assert_eq!(text, "#$0F");
        assert_eq!(next, 2);
        assert!(db.xrefs().is_empty());
    }

    #[test]
    fn test_immediate16_unclassified_is_plain_number() {
        let mut db = SymbolDatabase::new();
        db.add_label(0x1234, "TABLE").unwrap();
        let (text, _) = run6809(&[0x8E, 0x12, 0x34], 0, XrefKind::None, &mut db, immediate16);
        assert_eq!(text, "#$1234");
        assert!(db.xrefs().is_empty());
    }

    #[test]
    fn test_immediate16_classified_uses_label() {
        let mut db = SymbolDatabase::new();
        db.add_label(0x1234, "TABLE").unwrap();
        let kind = XrefKind::Immediate;
        let (text, _) = run6809(&[0x8E, 0x12, 0x34], 0x100, kind, &mut db, immediate16);
        assert_eq!(text, "#TABLE");
        let xref = db.xrefs().iter().next().unwrap();
        assert_eq!((xref.kind, xref.from, xref.to), (XrefKind::Immediate, 0x100, 0x1234));
    }

    #[test]
    fn test_extended16_respects_byte_order() {
        let mut db = SymbolDatabase::new();
        let (le, _) = run6502(&[0xAD, 0x34, 0x12], 0, XrefKind::Data, &mut db, extended16);
        let (be, _) = run6809(&[0xB6, 0x12, 0x34], 0, XrefKind::Data, &mut db, extended16);
        assert_eq!(le, "$1234");
        assert_eq!(be, "$1234");
        assert_eq!(db.xrefs().len(), 2);
    }

    #[test]
    fn test_direct8_widens_and_labels() {
        let mut db = SymbolDatabase::new();
        db.add_label(0x0080, "PTR").unwrap();
        let (text, _) = run6502(&[0xA5, 0x80], 0x0400, XrefKind::Direct, &mut db, direct8);
        assert_eq!(text, "PTR");

        let (text, _) = run6502(&[0xA5, 0x81], 0x0400, XrefKind::Direct, &mut db, direct8);
        assert_eq!(text, "$81");
        assert_eq!(db.xrefs().refs_to(0x81).len(), 1);
    }

    #[test]
    fn test_relative8_is_measured_from_next_instruction() {
        let mut db = SymbolDatabase::new();
        // BNE -2 at $1000 branches to itself.
        let (text, next) = run6502(&[0xD0, 0xFE], 0x1000, XrefKind::Jump, &mut db, relative8);
        assert_eq!(text, "$1000");
        assert_eq!(next, 0x1002);

        let (text, _) = run6502(&[0xD0, 0x10], 0x1000, XrefKind::Jump, &mut db, relative8);
        assert_eq!(text, "$1012");
    }

    #[test]
    fn test_relative_wraps_at_address_width() {
        let mut db = SymbolDatabase::new();
        let (text, _) = run6502(&[0xD0, 0x10], 0xFFF8, XrefKind::Jump, &mut db, relative8);
        assert_eq!(text, "$000A");

        let (text, _) = run6809(&[0x16, 0x80, 0x00], 0x0000, XrefKind::Jump, &mut db, relative16);
        assert_eq!(text, "$8003");
    }

    #[test]
    fn test_truncated_operand_is_error() {
        let isa = InstructionSet::new(Architecture::Mos6502, EMPTY, 4);
        let mut db = SymbolDatabase::new();
        let mut stream = ByteStream::new(&[0xAD, 0x34], 0x0200);
        stream.next().unwrap();
        let mut out = String::new();
        let kind = XrefKind::Data;
        let mut ctx = OperandContext::new(&isa, &mut stream, &mut db, &mut out, 0x0200, 0xAD, kind);
        assert_eq!(extended16(&mut ctx), Err(DecodeError::exhausted(0x0202)));
        assert!(db.xrefs().is_empty());
    }
}
