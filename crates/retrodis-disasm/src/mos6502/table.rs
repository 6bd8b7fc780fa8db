//! 6502 opcode table.
//!
//! Documented NMOS opcodes only. Every opcode is an `Exact` rule so each
//! addressing mode carries its own reference kind.

use retrodis_core::XrefKind as K;

use super::operands::*;
use crate::render;
use crate::Rule;

/// One-byte opcode table.
pub const OPCODES: &[Rule] = &[
    // Loads
    Rule::exact(0xA9, "LDA", render::immediate8, K::None),
    Rule::exact(0xA5, "LDA", render::direct8, K::Direct),
    Rule::exact(0xB5, "LDA", zero_page_x, K::Direct),
    Rule::exact(0xAD, "LDA", render::extended16, K::Data),
    Rule::exact(0xBD, "LDA", absolute_x, K::Table),
    Rule::exact(0xB9, "LDA", absolute_y, K::Table),
    Rule::exact(0xA1, "LDA", indexed_indirect, K::Pointer),
    Rule::exact(0xB1, "LDA", indirect_indexed, K::Pointer),
    Rule::exact(0xA2, "LDX", render::immediate8, K::None),
    Rule::exact(0xA6, "LDX", render::direct8, K::Direct),
    Rule::exact(0xB6, "LDX", zero_page_y, K::Direct),
    Rule::exact(0xAE, "LDX", render::extended16, K::Data),
    Rule::exact(0xBE, "LDX", absolute_y, K::Table),
    Rule::exact(0xA0, "LDY", render::immediate8, K::None),
    Rule::exact(0xA4, "LDY", render::direct8, K::Direct),
    Rule::exact(0xB4, "LDY", zero_page_x, K::Direct),
    Rule::exact(0xAC, "LDY", render::extended16, K::Data),
    Rule::exact(0xBC, "LDY", absolute_x, K::Table),

    // Stores; absolute stores usually hit memory-mapped registers
    Rule::exact(0x85, "STA", render::direct8, K::Direct),
    Rule::exact(0x95, "STA", zero_page_x, K::Direct),
    Rule::exact(0x8D, "STA", render::extended16, K::Register),
    Rule::exact(0x9D, "STA", absolute_x, K::Table),
    Rule::exact(0x99, "STA", absolute_y, K::Table),
    Rule::exact(0x81, "STA", indexed_indirect, K::Pointer),
    Rule::exact(0x91, "STA", indirect_indexed, K::Pointer),
    Rule::exact(0x86, "STX", render::direct8, K::Direct),
    Rule::exact(0x96, "STX", zero_page_y, K::Direct),
    Rule::exact(0x8E, "STX", render::extended16, K::Register),
    Rule::exact(0x84, "STY", render::direct8, K::Direct),
    Rule::exact(0x94, "STY", zero_page_x, K::Direct),
    Rule::exact(0x8C, "STY", render::extended16, K::Register),

    // Arithmetic and logic
    Rule::exact(0x69, "ADC", render::immediate8, K::None),
    Rule::exact(0x65, "ADC", render::direct8, K::Direct),
    Rule::exact(0x75, "ADC", zero_page_x, K::Direct),
    Rule::exact(0x6D, "ADC", render::extended16, K::Data),
    Rule::exact(0x7D, "ADC", absolute_x, K::Table),
    Rule::exact(0x79, "ADC", absolute_y, K::Table),
    Rule::exact(0x61, "ADC", indexed_indirect, K::Pointer),
    Rule::exact(0x71, "ADC", indirect_indexed, K::Pointer),
    Rule::exact(0xE9, "SBC", render::immediate8, K::None),
    Rule::exact(0xE5, "SBC", render::direct8, K::Direct),
    Rule::exact(0xF5, "SBC", zero_page_x, K::Direct),
    Rule::exact(0xED, "SBC", render::extended16, K::Data),
    Rule::exact(0xFD, "SBC", absolute_x, K::Table),
    Rule::exact(0xF9, "SBC", absolute_y, K::Table),
    Rule::exact(0xE1, "SBC", indexed_indirect, K::Pointer),
    Rule::exact(0xF1, "SBC", indirect_indexed, K::Pointer),
    Rule::exact(0x29, "AND", render::immediate8, K::None),
    Rule::exact(0x25, "AND", render::direct8, K::Direct),
    Rule::exact(0x35, "AND", zero_page_x, K::Direct),
    Rule::exact(0x2D, "AND", render::extended16, K::Data),
    Rule::exact(0x3D, "AND", absolute_x, K::Table),
    Rule::exact(0x39, "AND", absolute_y, K::Table),
    Rule::exact(0x21, "AND", indexed_indirect, K::Pointer),
    Rule::exact(0x31, "AND", indirect_indexed, K::Pointer),
    Rule::exact(0x09, "ORA", render::immediate8, K::None),
    Rule::exact(0x05, "ORA", render::direct8, K::Direct),
    Rule::exact(0x15, "ORA", zero_page_x, K::Direct),
    Rule::exact(0x0D, "ORA", render::extended16, K::Data),
    Rule::exact(0x1D, "ORA", absolute_x, K::Table),
    Rule::exact(0x19, "ORA", absolute_y, K::Table),
    Rule::exact(0x01, "ORA", indexed_indirect, K::Pointer),
    Rule::exact(0x11, "ORA", indirect_indexed, K::Pointer),
    Rule::exact(0x49, "EOR", render::immediate8, K::None),
    Rule::exact(0x45, "EOR", render::direct8, K::Direct),
    Rule::exact(0x55, "EOR", zero_page_x, K::Direct),
    Rule::exact(0x4D, "EOR", render::extended16, K::Data),
    Rule::exact(0x5D, "EOR", absolute_x, K::Table),
    Rule::exact(0x59, "EOR", absolute_y, K::Table),
    Rule::exact(0x41, "EOR", indexed_indirect, K::Pointer),
    Rule::exact(0x51, "EOR", indirect_indexed, K::Pointer),
    Rule::exact(0xC9, "CMP", render::immediate8, K::None),
    Rule::exact(0xC5, "CMP", render::direct8, K::Direct),
    Rule::exact(0xD5, "CMP", zero_page_x, K::Direct),
    Rule::exact(0xCD, "CMP", render::extended16, K::Data),
    Rule::exact(0xDD, "CMP", absolute_x, K::Table),
    Rule::exact(0xD9, "CMP", absolute_y, K::Table),
    Rule::exact(0xC1, "CMP", indexed_indirect, K::Pointer),
    Rule::exact(0xD1, "CMP", indirect_indexed, K::Pointer),
    Rule::exact(0xE0, "CPX", render::immediate8, K::None),
    Rule::exact(0xE4, "CPX", render::direct8, K::Direct),
    Rule::exact(0xEC, "CPX", render::extended16, K::Data),
    Rule::exact(0xC0, "CPY", render::immediate8, K::None),
    Rule::exact(0xC4, "CPY", render::direct8, K::Direct),
    Rule::exact(0xCC, "CPY", render::extended16, K::Data),
    Rule::exact(0x24, "BIT", render::direct8, K::Direct),
    Rule::exact(0x2C, "BIT", render::extended16, K::Data),

    // Read-modify-write
    Rule::exact(0x0A, "ASL", accumulator, K::None),
    Rule::exact(0x06, "ASL", render::direct8, K::Direct),
    Rule::exact(0x16, "ASL", zero_page_x, K::Direct),
    Rule::exact(0x0E, "ASL", render::extended16, K::Data),
    Rule::exact(0x1E, "ASL", absolute_x, K::Table),
    Rule::exact(0x4A, "LSR", accumulator, K::None),
    Rule::exact(0x46, "LSR", render::direct8, K::Direct),
    Rule::exact(0x56, "LSR", zero_page_x, K::Direct),
    Rule::exact(0x4E, "LSR", render::extended16, K::Data),
    Rule::exact(0x5E, "LSR", absolute_x, K::Table),
    Rule::exact(0x2A, "ROL", accumulator, K::None),
    Rule::exact(0x26, "ROL", render::direct8, K::Direct),
    Rule::exact(0x36, "ROL", zero_page_x, K::Direct),
    Rule::exact(0x2E, "ROL", render::extended16, K::Data),
    Rule::exact(0x3E, "ROL", absolute_x, K::Table),
    Rule::exact(0x6A, "ROR", accumulator, K::None),
    Rule::exact(0x66, "ROR", render::direct8, K::Direct),
    Rule::exact(0x76, "ROR", zero_page_x, K::Direct),
    Rule::exact(0x6E, "ROR", render::extended16, K::Data),
    Rule::exact(0x7E, "ROR", absolute_x, K::Table),
    Rule::exact(0xE6, "INC", render::direct8, K::Direct),
    Rule::exact(0xF6, "INC", zero_page_x, K::Direct),
    Rule::exact(0xEE, "INC", render::extended16, K::Data),
    Rule::exact(0xFE, "INC", absolute_x, K::Table),
    Rule::exact(0xC6, "DEC", render::direct8, K::Direct),
    Rule::exact(0xD6, "DEC", zero_page_x, K::Direct),
    Rule::exact(0xCE, "DEC", render::extended16, K::Data),
    Rule::exact(0xDE, "DEC", absolute_x, K::Table),

    // Control flow
    Rule::exact(0x4C, "JMP", render::extended16, K::Jump),
    Rule::exact(0x6C, "JMP", indirect, K::Pointer),
    Rule::exact(0x20, "JSR", render::extended16, K::Call),
    Rule::exact(0x60, "RTS", render::none, K::None),
    Rule::exact(0x40, "RTI", render::none, K::None),
    Rule::exact(0x00, "BRK", render::none, K::None),
    Rule::exact(0x10, "BPL", render::relative8, K::Jump),
    Rule::exact(0x30, "BMI", render::relative8, K::Jump),
    Rule::exact(0x50, "BVC", render::relative8, K::Jump),
    Rule::exact(0x70, "BVS", render::relative8, K::Jump),
    Rule::exact(0x90, "BCC", render::relative8, K::Jump),
    Rule::exact(0xB0, "BCS", render::relative8, K::Jump),
    Rule::exact(0xD0, "BNE", render::relative8, K::Jump),
    Rule::exact(0xF0, "BEQ", render::relative8, K::Jump),

    // Implied
    Rule::exact(0xE8, "INX", render::none, K::None),
    Rule::exact(0xC8, "INY", render::none, K::None),
    Rule::exact(0xCA, "DEX", render::none, K::None),
    Rule::exact(0x88, "DEY", render::none, K::None),
    Rule::exact(0xAA, "TAX", render::none, K::None),
    Rule::exact(0xA8, "TAY", render::none, K::None),
    Rule::exact(0x8A, "TXA", render::none, K::None),
    Rule::exact(0x98, "TYA", render::none, K::None),
    Rule::exact(0xBA, "TSX", render::none, K::None),
    Rule::exact(0x9A, "TXS", render::none, K::None),
    Rule::exact(0x48, "PHA", render::none, K::None),
    Rule::exact(0x68, "PLA", render::none, K::None),
    Rule::exact(0x08, "PHP", render::none, K::None),
    Rule::exact(0x28, "PLP", render::none, K::None),
    Rule::exact(0x18, "CLC", render::none, K::None),
    Rule::exact(0x38, "SEC", render::none, K::None),
    Rule::exact(0x58, "CLI", render::none, K::None),
    Rule::exact(0x78, "SEI", render::none, K::None),
    Rule::exact(0xB8, "CLV", render::none, K::None),
    Rule::exact(0xD8, "CLD", render::none, K::None),
    Rule::exact(0xF8, "SED", render::none, K::None),
    Rule::exact(0xEA, "NOP", render::none, K::None),
];
