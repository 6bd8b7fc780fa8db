//! Architecture identification and properties.

/// Supported CPU architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Architecture {
    /// MOS Technology 6502 (NMOS, documented opcodes)
    Mos6502,
    /// Motorola 6809
    Mc6809,
}

impl Architecture {
    /// Returns every supported architecture.
    pub fn all() -> &'static [Architecture] {
        &[Self::Mos6502, Self::Mc6809]
    }

    /// Parses an architecture from a user-supplied name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "6502" | "mos6502" | "m6502" => Some(Self::Mos6502),
            "6809" | "mc6809" | "m6809" => Some(Self::Mc6809),
            _ => None,
        }
    }

    /// Returns the name of this architecture.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mos6502 => "6502",
            Self::Mc6809 => "6809",
        }
    }

    /// Returns the width of a code/data address in bits.
    pub const fn address_bits(&self) -> u32 {
        match self {
            Self::Mos6502 | Self::Mc6809 => 16,
        }
    }

    /// Returns the byte order used for multi-byte operands.
    pub const fn endianness(&self) -> Endianness {
        match self {
            Self::Mos6502 => Endianness::Little,
            Self::Mc6809 => Endianness::Big,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Combines two bytes, in stream order, into a 16-bit word.
    pub fn word(&self, first: u8, second: u8) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes([first, second]),
            Self::Big => u16::from_be_bytes([first, second]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Architecture::parse("6502"), Some(Architecture::Mos6502));
        assert_eq!(Architecture::parse("MC6809"), Some(Architecture::Mc6809));
        assert_eq!(Architecture::parse("z80"), None);
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for arch in Architecture::all() {
            assert_eq!(Architecture::parse(arch.name()), Some(*arch));
        }
    }

    #[test]
    fn test_endianness_word() {
        assert_eq!(Endianness::Little.word(0x34, 0x12), 0x1234);
        assert_eq!(Endianness::Big.word(0x12, 0x34), 0x1234);
        assert_eq!(Architecture::Mc6809.endianness(), Endianness::Big);
    }
}
