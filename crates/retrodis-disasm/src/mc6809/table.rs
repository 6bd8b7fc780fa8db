//! 6809 opcode tables.
//!
//! Immediate and direct forms are listed individually. Indexed and extended
//! forms of one operation differ only in opcode bit 4 and share a single
//! `Mask1` rule with mask `$EF`. Order matters where rules overlap: the
//! `MemMod` special cases sit in front of the general forms, and extended
//! stores are caught before their shared indexed/extended rule.

use retrodis_core::XrefKind as K;

use super::operands::{direct, indexed, indexed_or_extended, register_list, register_pair};
use crate::render::{immediate16, immediate8, none, relative16, relative8};
use crate::rule::Rule;

/// Page 0.
pub const OPCODES: &[Rule] = &[
    // Prefix pages
    Rule::sub_table(0x10, PAGE2),
    Rule::sub_table(0x11, PAGE3),

    // Jumps through an extended indirect postbyte
    Rule::mem_mod(&[0x6E], 0x8F, "JMP", indexed, K::Pointer),
    Rule::mem_mod(&[0xAD], 0x8F, "JSR", indexed, K::Pointer),

    // Read-modify-write, memory
    Rule::exact(0x00, "NEG", direct, K::Direct),
    Rule::exact(0x03, "COM", direct, K::Direct),
    Rule::exact(0x04, "LSR", direct, K::Direct),
    Rule::exact(0x06, "ROR", direct, K::Direct),
    Rule::exact(0x07, "ASR", direct, K::Direct),
    Rule::exact(0x08, "ASL", direct, K::Direct),
    Rule::exact(0x09, "ROL", direct, K::Direct),
    Rule::exact(0x0A, "DEC", direct, K::Direct),
    Rule::exact(0x0C, "INC", direct, K::Direct),
    Rule::exact(0x0D, "TST", direct, K::Direct),
    Rule::exact(0x0E, "JMP", direct, K::Jump),
    Rule::exact(0x0F, "CLR", direct, K::Direct),
    Rule::mask1(0xEF, 0x60, "NEG", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x63, "COM", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x64, "LSR", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x66, "ROR", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x67, "ASR", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x68, "ASL", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x69, "ROL", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x6A, "DEC", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x6C, "INC", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x6D, "TST", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0x6E, "JMP", indexed_or_extended, K::Jump),
    Rule::mask1(0xEF, 0x6F, "CLR", indexed_or_extended, K::Data),

    // Read-modify-write, accumulators
    Rule::exact(0x40, "NEGA", none, K::None),
    Rule::exact(0x43, "COMA", none, K::None),
    Rule::exact(0x44, "LSRA", none, K::None),
    Rule::exact(0x46, "RORA", none, K::None),
    Rule::exact(0x47, "ASRA", none, K::None),
    Rule::exact(0x48, "ASLA", none, K::None),
    Rule::exact(0x49, "ROLA", none, K::None),
    Rule::exact(0x4A, "DECA", none, K::None),
    Rule::exact(0x4C, "INCA", none, K::None),
    Rule::exact(0x4D, "TSTA", none, K::None),
    Rule::exact(0x4F, "CLRA", none, K::None),
    Rule::exact(0x50, "NEGB", none, K::None),
    Rule::exact(0x53, "COMB", none, K::None),
    Rule::exact(0x54, "LSRB", none, K::None),
    Rule::exact(0x56, "RORB", none, K::None),
    Rule::exact(0x57, "ASRB", none, K::None),
    Rule::exact(0x58, "ASLB", none, K::None),
    Rule::exact(0x59, "ROLB", none, K::None),
    Rule::exact(0x5A, "DECB", none, K::None),
    Rule::exact(0x5C, "INCB", none, K::None),
    Rule::exact(0x5D, "TSTB", none, K::None),
    Rule::exact(0x5F, "CLRB", none, K::None),

    // Miscellaneous
    Rule::exact(0x12, "NOP", none, K::None),
    Rule::exact(0x13, "SYNC", none, K::None),
    Rule::exact(0x16, "LBRA", relative16, K::Jump),
    Rule::exact(0x17, "LBSR", relative16, K::Call),
    Rule::exact(0x19, "DAA", none, K::None),
    Rule::exact(0x1A, "ORCC", immediate8, K::None),
    Rule::exact(0x1C, "ANDCC", immediate8, K::None),
    Rule::exact(0x1D, "SEX", none, K::None),
    Rule::exact(0x1E, "EXG", register_pair, K::None),
    Rule::exact(0x1F, "TFR", register_pair, K::None),

    // Short branches
    Rule::exact(0x20, "BRA", relative8, K::Jump),
    Rule::exact(0x21, "BRN", relative8, K::Jump),
    Rule::exact(0x22, "BHI", relative8, K::Jump),
    Rule::exact(0x23, "BLS", relative8, K::Jump),
    Rule::exact(0x24, "BCC", relative8, K::Jump),
    Rule::exact(0x25, "BCS", relative8, K::Jump),
    Rule::exact(0x26, "BNE", relative8, K::Jump),
    Rule::exact(0x27, "BEQ", relative8, K::Jump),
    Rule::exact(0x28, "BVC", relative8, K::Jump),
    Rule::exact(0x29, "BVS", relative8, K::Jump),
    Rule::exact(0x2A, "BPL", relative8, K::Jump),
    Rule::exact(0x2B, "BMI", relative8, K::Jump),
    Rule::exact(0x2C, "BGE", relative8, K::Jump),
    Rule::exact(0x2D, "BLT", relative8, K::Jump),
    Rule::exact(0x2E, "BGT", relative8, K::Jump),
    Rule::exact(0x2F, "BLE", relative8, K::Jump),

    // Effective addresses and stacks
    Rule::exact(0x30, "LEAX", indexed, K::Immediate),
    Rule::exact(0x31, "LEAY", indexed, K::Immediate),
    Rule::exact(0x32, "LEAS", indexed, K::Immediate),
    Rule::exact(0x33, "LEAU", indexed, K::Immediate),
    Rule::exact(0x34, "PSHS", register_list, K::None),
    Rule::exact(0x35, "PULS", register_list, K::None),
    Rule::exact(0x36, "PSHU", register_list, K::None),
    Rule::exact(0x37, "PULU", register_list, K::None),
    Rule::exact(0x39, "RTS", none, K::None),
    Rule::exact(0x3A, "ABX", none, K::None),
    Rule::exact(0x3B, "RTI", none, K::None),
    Rule::exact(0x3C, "CWAI", immediate8, K::None),
    Rule::exact(0x3D, "MUL", none, K::None),
    Rule::exact(0x3F, "SWI", none, K::None),

    // A side
    Rule::exact(0x80, "SUBA", immediate8, K::None),
    Rule::exact(0x81, "CMPA", immediate8, K::None),
    Rule::exact(0x82, "SBCA", immediate8, K::None),
    Rule::exact(0x83, "SUBD", immediate16, K::None),
    Rule::exact(0x84, "ANDA", immediate8, K::None),
    Rule::exact(0x85, "BITA", immediate8, K::None),
    Rule::exact(0x86, "LDA", immediate8, K::None),
    Rule::exact(0x88, "EORA", immediate8, K::None),
    Rule::exact(0x89, "ADCA", immediate8, K::None),
    Rule::exact(0x8A, "ORA", immediate8, K::None),
    Rule::exact(0x8B, "ADDA", immediate8, K::None),
    Rule::exact(0x8C, "CMPX", immediate16, K::Immediate),
    Rule::exact(0x8D, "BSR", relative8, K::Call),
    Rule::exact(0x8E, "LDX", immediate16, K::Immediate),
    Rule::exact(0x90, "SUBA", direct, K::Direct),
    Rule::exact(0x91, "CMPA", direct, K::Direct),
    Rule::exact(0x92, "SBCA", direct, K::Direct),
    Rule::exact(0x93, "SUBD", direct, K::Direct),
    Rule::exact(0x94, "ANDA", direct, K::Direct),
    Rule::exact(0x95, "BITA", direct, K::Direct),
    Rule::exact(0x96, "LDA", direct, K::Direct),
    Rule::exact(0x97, "STA", direct, K::Direct),
    Rule::exact(0x98, "EORA", direct, K::Direct),
    Rule::exact(0x99, "ADCA", direct, K::Direct),
    Rule::exact(0x9A, "ORA", direct, K::Direct),
    Rule::exact(0x9B, "ADDA", direct, K::Direct),
    Rule::exact(0x9C, "CMPX", direct, K::Direct),
    Rule::exact(0x9D, "JSR", direct, K::Call),
    Rule::exact(0x9E, "LDX", direct, K::Direct),
    Rule::exact(0x9F, "STX", direct, K::Direct),
    Rule::exact(0xB7, "STA", indexed_or_extended, K::Register),
    Rule::exact(0xBF, "STX", indexed_or_extended, K::Register),
    Rule::mask1(0xEF, 0xA0, "SUBA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA1, "CMPA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA2, "SBCA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA3, "SUBD", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA4, "ANDA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA5, "BITA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA6, "LDA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA7, "STA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA8, "EORA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xA9, "ADCA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAA, "ORA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAB, "ADDA", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAC, "CMPX", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAD, "JSR", indexed_or_extended, K::Call),
    Rule::mask1(0xEF, 0xAE, "LDX", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAF, "STX", indexed_or_extended, K::Data),

    // B side
    Rule::exact(0xC0, "SUBB", immediate8, K::None),
    Rule::exact(0xC1, "CMPB", immediate8, K::None),
    Rule::exact(0xC2, "SBCB", immediate8, K::None),
    Rule::exact(0xC3, "ADDD", immediate16, K::None),
    Rule::exact(0xC4, "ANDB", immediate8, K::None),
    Rule::exact(0xC5, "BITB", immediate8, K::None),
    Rule::exact(0xC6, "LDB", immediate8, K::None),
    Rule::exact(0xC8, "EORB", immediate8, K::None),
    Rule::exact(0xC9, "ADCB", immediate8, K::None),
    Rule::exact(0xCA, "ORB", immediate8, K::None),
    Rule::exact(0xCB, "ADDB", immediate8, K::None),
    Rule::exact(0xCC, "LDD", immediate16, K::None),
    Rule::exact(0xCE, "LDU", immediate16, K::Immediate),
    Rule::exact(0xD0, "SUBB", direct, K::Direct),
    Rule::exact(0xD1, "CMPB", direct, K::Direct),
    Rule::exact(0xD2, "SBCB", direct, K::Direct),
    Rule::exact(0xD3, "ADDD", direct, K::Direct),
    Rule::exact(0xD4, "ANDB", direct, K::Direct),
    Rule::exact(0xD5, "BITB", direct, K::Direct),
    Rule::exact(0xD6, "LDB", direct, K::Direct),
    Rule::exact(0xD7, "STB", direct, K::Direct),
    Rule::exact(0xD8, "EORB", direct, K::Direct),
    Rule::exact(0xD9, "ADCB", direct, K::Direct),
    Rule::exact(0xDA, "ORB", direct, K::Direct),
    Rule::exact(0xDB, "ADDB", direct, K::Direct),
    Rule::exact(0xDC, "LDD", direct, K::Direct),
    Rule::exact(0xDD, "STD", direct, K::Direct),
    Rule::exact(0xDE, "LDU", direct, K::Direct),
    Rule::exact(0xDF, "STU", direct, K::Direct),
    Rule::exact(0xF7, "STB", indexed_or_extended, K::Register),
    Rule::exact(0xFD, "STD", indexed_or_extended, K::Register),
    Rule::exact(0xFF, "STU", indexed_or_extended, K::Register),
    Rule::mask1(0xEF, 0xE0, "SUBB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE1, "CMPB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE2, "SBCB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE3, "ADDD", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE4, "ANDB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE5, "BITB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE6, "LDB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE7, "STB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE8, "EORB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xE9, "ADCB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xEA, "ORB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xEB, "ADDB", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xEC, "LDD", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xED, "STD", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xEE, "LDU", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xEF, "STU", indexed_or_extended, K::Data),
];

/// `$10` prefix page.
pub const PAGE2: &[Rule] = &[
    Rule::exact(0x21, "LBRN", relative16, K::Jump),
    Rule::exact(0x22, "LBHI", relative16, K::Jump),
    Rule::exact(0x23, "LBLS", relative16, K::Jump),
    Rule::exact(0x24, "LBCC", relative16, K::Jump),
    Rule::exact(0x25, "LBCS", relative16, K::Jump),
    Rule::exact(0x26, "LBNE", relative16, K::Jump),
    Rule::exact(0x27, "LBEQ", relative16, K::Jump),
    Rule::exact(0x28, "LBVC", relative16, K::Jump),
    Rule::exact(0x29, "LBVS", relative16, K::Jump),
    Rule::exact(0x2A, "LBPL", relative16, K::Jump),
    Rule::exact(0x2B, "LBMI", relative16, K::Jump),
    Rule::exact(0x2C, "LBGE", relative16, K::Jump),
    Rule::exact(0x2D, "LBLT", relative16, K::Jump),
    Rule::exact(0x2E, "LBGT", relative16, K::Jump),
    Rule::exact(0x2F, "LBLE", relative16, K::Jump),
    Rule::exact(0x3F, "SWI2", none, K::None),
    Rule::exact(0x83, "CMPD", immediate16, K::None),
    Rule::exact(0x8C, "CMPY", immediate16, K::Immediate),
    Rule::exact(0x8E, "LDY", immediate16, K::Immediate),
    Rule::exact(0x93, "CMPD", direct, K::Direct),
    Rule::exact(0x9C, "CMPY", direct, K::Direct),
    Rule::exact(0x9E, "LDY", direct, K::Direct),
    Rule::exact(0x9F, "STY", direct, K::Direct),
    Rule::exact(0xBF, "STY", indexed_or_extended, K::Register),
    Rule::mask1(0xEF, 0xA3, "CMPD", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAC, "CMPY", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAE, "LDY", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAF, "STY", indexed_or_extended, K::Data),
    Rule::exact(0xCE, "LDS", immediate16, K::Immediate),
    Rule::exact(0xDE, "LDS", direct, K::Direct),
    Rule::exact(0xDF, "STS", direct, K::Direct),
    Rule::exact(0xFF, "STS", indexed_or_extended, K::Register),
    Rule::mask1(0xEF, 0xEE, "LDS", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xEF, "STS", indexed_or_extended, K::Data),
];

/// `$11` prefix page.
pub const PAGE3: &[Rule] = &[
    Rule::exact(0x3F, "SWI3", none, K::None),
    Rule::exact(0x83, "CMPU", immediate16, K::Immediate),
    Rule::exact(0x8C, "CMPS", immediate16, K::Immediate),
    Rule::exact(0x93, "CMPU", direct, K::Direct),
    Rule::exact(0x9C, "CMPS", direct, K::Direct),
    Rule::mask1(0xEF, 0xA3, "CMPU", indexed_or_extended, K::Data),
    Rule::mask1(0xEF, 0xAC, "CMPS", indexed_or_extended, K::Data),
];
