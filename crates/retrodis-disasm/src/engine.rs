//! Rule-table decoder.

use retrodis_core::SymbolDatabase;

use crate::render::OperandContext;
use crate::rule::{InstructionSet, Rule, MEM_MOD_MASK};
use crate::{ByteStream, DecodeError};

/// Text emitted for an opcode no rule matches.
pub const UNKNOWN_MNEMONIC: &str = "???";

/// Result of decoding one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Address of the first byte.
    pub address: u64,
    /// Stream address after the instruction.
    pub next_address: u64,
    /// Raw bytes consumed.
    pub bytes: Vec<u8>,
    /// Mnemonic column plus operand text.
    pub text: String,
    /// False when no rule matched and `text` is the unknown marker.
    pub known: bool,
}

impl DecodedInstruction {
    /// Number of bytes consumed.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Lookahead byte, fetched at most once per matching pass.
#[derive(Debug, Default)]
pub struct Lookahead {
    byte: Option<Option<u8>>,
}

impl Lookahead {
    pub fn new() -> Self {
        Self::default()
    }

    /// The byte after the opcode, or `None` at the end of the image.
    pub fn get(&mut self, stream: &ByteStream<'_>) -> Option<u8> {
        *self.byte.get_or_insert_with(|| stream.peek())
    }

    /// `lookahead & mask == value`; false at the end of the image.
    pub fn test(&mut self, stream: &ByteStream<'_>, mask: u8, value: u8) -> bool {
        self.get(stream).is_some_and(|byte| byte & mask == value)
    }
}

/// Decodes one instruction at the stream's current address.
///
/// Unmatched opcodes are not errors: they produce [`UNKNOWN_MNEMONIC`] with
/// `known == false` after consuming the opcode byte(s) tested. Running out
/// of bytes anywhere, including inside a renderer, fails the whole
/// instruction.
pub fn decode_one(
    isa: &InstructionSet,
    stream: &mut ByteStream<'_>,
    symbols: &mut SymbolDatabase,
) -> Result<DecodedInstruction, DecodeError> {
    let origin = stream.address();
    let opcode = stream.next()?;

    let mut text = String::new();
    let known = match_table(isa, isa.table, opcode, origin, stream, symbols, &mut text)?;
    if !known {
        log::debug!("unknown encoding at {:#06x} (opcode {:02x})", origin, opcode);
        text.clear();
        text.push_str(UNKNOWN_MNEMONIC);
    }
    let len = text.trim_end().len();
    text.truncate(len);

    let next_address = stream.address();
    log::trace!("{:#06x}: {}", origin, text);

    Ok(DecodedInstruction {
        address: origin,
        next_address,
        bytes: stream.bytes_between(origin, next_address).to_vec(),
        text,
        known,
    })
}

/// Scans one table level. Returns whether a rule matched.
fn match_table(
    isa: &InstructionSet,
    table: &[Rule],
    opcode: u8,
    origin: u64,
    stream: &mut ByteStream<'_>,
    symbols: &mut SymbolDatabase,
    out: &mut String,
) -> Result<bool, DecodeError> {
    let mut lookahead = Lookahead::new();

    for rule in table {
        let entry = match rule {
            Rule::Exact { opcode: op, entry } if *op == opcode => entry,
            Rule::Range { min, max, entry } if (*min..=*max).contains(&opcode) => entry,
            Rule::Mask1 { mask, value, entry } if opcode & *mask == *value => entry,
            Rule::Mask2 {
                anchor,
                mask,
                value,
                entry,
            } if *anchor == opcode && lookahead.test(stream, *mask, *value) => entry,
            Rule::MemMod { anchors, value, entry }
                if anchors.contains(&opcode) && lookahead.test(stream, MEM_MOD_MASK, *value) =>
            {
                entry
            }
            Rule::SubTable { anchor, table: nested } if *anchor == opcode => {
                let opcode = stream.next()?;
                return match_table(isa, nested, opcode, origin, stream, symbols, out);
            }
            _ => continue,
        };

        let column = isa.opcode_width.max(entry.mnemonic.len() + 1);
        out.push_str(&format!("{:<column$}", entry.mnemonic));

        let mut ctx = OperandContext::new(isa, stream, symbols, out, origin, opcode, entry.kind);
        (entry.render)(&mut ctx)?;
        return Ok(true);
    }

    Ok(false)
}
