//! Listing output.

use std::collections::HashSet;
use std::io::{self, Write};

use retrodis_core::{hex_address, Symbol, SymbolDatabase};
use retrodis_disasm::DecodedInstruction;

/// Widest raw-byte column: a prefixed 6809 instruction with a 16-bit
/// indexed offset is five bytes.
const BYTES_COLUMN: usize = 14;

/// Writes `ADDR  BYTES  TEXT` lines, preceded by `LABEL:` where an
/// instruction starts at a labelled address.
pub fn write_listing<W: Write>(
    out: &mut W,
    instructions: &[DecodedInstruction],
    symbols: &SymbolDatabase,
) -> io::Result<()> {
    for insn in instructions {
        if let Some(label) = symbols.find_label(insn.address) {
            writeln!(out, "{}:", label)?;
        }
        writeln!(
            out,
            "{:04X}  {:<width$}  {}",
            insn.address,
            format_bytes(&insn.bytes),
            insn.text,
            width = BYTES_COLUMN
        )?;
    }
    Ok(())
}

/// Writes `NAME = $ADDR` for every label that no listed instruction starts
/// at, such as ROM entry points and hardware registers. Returns how many
/// were written.
pub fn write_equates<W: Write>(
    out: &mut W,
    listings: &[Vec<DecodedInstruction>],
    symbols: &SymbolDatabase,
) -> io::Result<usize> {
    let listed: HashSet<u64> = listings.iter().flatten().map(|insn| insn.address).collect();
    let mut count = 0;
    for Symbol { address, name } in symbols.symbols().iter() {
        if listed.contains(&address) {
            continue;
        }
        writeln!(out, "{} = {}", name, hex_address(address, 4))?;
        count += 1;
    }
    Ok(count)
}

fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insn(address: u64, bytes: &[u8], text: &str) -> DecodedInstruction {
        DecodedInstruction {
            address,
            next_address: address + bytes.len() as u64,
            bytes: bytes.to_vec(),
            text: text.to_string(),
            known: true,
        }
    }

    #[test]
    fn test_listing_layout() {
        let mut symbols = SymbolDatabase::new();
        symbols.add_label(0x8002, "LOOP").unwrap();
        let listing = [
            insn(0x8000, &[0xA2, 0x00], "LDX #$00"),
            insn(0x8002, &[0xE8], "INX"),
        ];

        let mut out = Vec::new();
        write_listing(&mut out, &listing, &symbols).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "8000  A2 00           LDX #$00\nLOOP:\n8002  E8              INX\n");
    }

    #[test]
    fn test_equates_for_unlisted_labels() {
        let mut symbols = SymbolDatabase::new();
        symbols.add_label(0xFFD2, "CHROUT").unwrap();
        symbols.add_label(0x8002, "LOOP").unwrap();
        symbols.add_label(0x00FB, "PTR").unwrap();
        let listings = vec![
            vec![insn(0x8000, &[0xA2, 0x00], "LDX #$00")],
            vec![insn(0x8002, &[0xE8], "INX")],
        ];

        let mut out = Vec::new();
        assert_eq!(write_equates(&mut out, &listings, &symbols).unwrap(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "PTR = $00FB\nCHROUT = $FFD2\n");

        let mut out = Vec::new();
        assert_eq!(write_equates(&mut out, &[], &SymbolDatabase::new()).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0x10, 0x8E, 0x12, 0x34]), "10 8E 12 34");
        assert_eq!(format_bytes(&[]), "");
    }
}
