//! Benchmarks for rule-table decoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use retrodis_core::SymbolDatabase;
use retrodis_disasm::{ByteStream, Disassembler, Mc6809Disassembler, Mos6502Disassembler};

/// Screen clear loop with a subroutine call: immediates, indexed stores,
/// branches and a JSR.
const MOS6502_CODE: &[u8] = &[
    0xA9, 0x20, // LDA #$20
    0xA2, 0x00, // LDX #$00
    0x9D, 0x00, 0x04, // STA $0400,X
    0x9D, 0x00, 0x05, // STA $0500,X
    0xE8, // INX
    0xD0, 0xF7, // BNE
    0x20, 0xD2, 0xFF, // JSR $FFD2
    0xB1, 0xFB, // LDA ($FB),Y
    0x60, // RTS
];

/// Same shape on the 6809, exercising indexed postbytes, the prefix page and
/// the MemMod jump.
const MC6809_CODE: &[u8] = &[
    0x8E, 0x04, 0x00, // LDX #$0400
    0x86, 0x20, // LDA #$20
    0xA7, 0x80, // STA ,X+
    0x8C, 0x06, 0x00, // CMPX #$0600
    0x26, 0xF9, // BNE
    0x10, 0x8E, 0x12, 0x34, // LDY #$1234
    0xA6, 0x8C, 0x10, // LDA $10,PCR
    0xAD, 0x9F, 0xA0, 0x00, // JSR [$A000]
    0x39, // RTS
];

fn repeat(pattern: &[u8], size: usize) -> Vec<u8> {
    pattern.iter().copied().cycle().take(size).collect()
}

fn bench_isa(c: &mut Criterion, name: &str, disasm: &dyn Disassembler, code: &[u8]) {
    let mut group = c.benchmark_group(name);

    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let mut symbols = SymbolDatabase::new();
            let mut stream = ByteStream::new(black_box(code), 0x1000);
            let _ = disasm.decode_instruction(&mut stream, &mut symbols);
        })
    });

    for size in [1024, 4096, 16384] {
        // Trim to a whole number of patterns so no instruction is cut short.
        let image = repeat(code, size - size % code.len());
        group.throughput(Throughput::Bytes(image.len() as u64));
        group.bench_with_input(BenchmarkId::new("range", size), &image, |b, image| {
            b.iter(|| {
                let mut symbols = SymbolDatabase::new();
                let end = image.len() as u64;
                let _ = disasm.disassemble_range(black_box(image), 0, 0, end, &mut symbols);
            })
        });
    }

    group.finish();
}

fn bench_mos6502(c: &mut Criterion) {
    bench_isa(c, "mos6502", &Mos6502Disassembler::new(), MOS6502_CODE);
}

fn bench_mc6809(c: &mut Criterion) {
    bench_isa(c, "mc6809", &Mc6809Disassembler::new(), MC6809_CODE);
}

fn bench_labelled_range(c: &mut Criterion) {
    let image = repeat(MOS6502_CODE, 4096 - 4096 % MOS6502_CODE.len());
    let disasm = Mos6502Disassembler::new();

    c.bench_function("mos6502_with_labels", |b| {
        b.iter(|| {
            let mut symbols = SymbolDatabase::new();
            for address in (0..0x1000u64).step_by(0x40) {
                let _ = symbols.add_label(address, format!("L{:04X}", address));
            }
            let _ = symbols.add_label(0xFFD2, "CHROUT");
            let end = image.len() as u64;
            let _ = disasm.disassemble_range(black_box(&image), 0, 0, end, &mut symbols);
            symbols.dump()
        })
    });
}

criterion_group!(benches, bench_mos6502, bench_mc6809, bench_labelled_range);
criterion_main!(benches);
