//! retrodis - A rule-table disassembler for 8-bit processors
//!
//! Usage:
//!   retrodis <image> --arch 6502 --origin C000     Disassemble the whole image
//!   retrodis <image> --config job.toml             Ranges and labels from a job file
//!   retrodis <image> --arch 6809 --xrefs           Append the cross-reference report
//!   retrodis <image> --arch 6809 --xrefs --json    Report as JSON

mod config;
mod listing;

use anyhow::{bail, Context, Result};
use clap::Parser;
use retrodis_core::{Architecture, SymbolDatabase};
use retrodis_disasm::disassembler_for;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use config::{CodeRange, JobConfig};

#[derive(Parser)]
#[command(name = "retrodis")]
#[command(about = "A rule-table disassembler for 8-bit processors", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the raw binary image
    binary: PathBuf,

    /// Job file with architecture, code ranges, labels and the xref window
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target architecture (6502, 6809)
    #[arg(short, long)]
    arch: Option<String>,

    /// Load address of the image (hex)
    #[arg(short, long, value_parser = parse_hex)]
    origin: Option<u64>,

    /// First address to disassemble (hex)
    #[arg(short, long, value_parser = parse_hex)]
    start: Option<u64>,

    /// Address to stop at, exclusive (hex)
    #[arg(short, long, value_parser = parse_hex)]
    end: Option<u64>,

    /// Print the cross-reference report after the listing
    #[arg(short = 'x', long)]
    xrefs: bool,

    /// Print the cross-reference report as JSON
    #[arg(long, requires = "xrefs")]
    json: bool,

    /// Lowest reference target to record (hex)
    #[arg(long, value_parser = parse_hex)]
    xref_min: Option<u64>,

    /// Highest reference target to record (hex)
    #[arg(long, value_parser = parse_hex)]
    xref_max: Option<u64>,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s);
    u64::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data = fs::read(&cli.binary)
        .with_context(|| format!("Failed to read image: {}", cli.binary.display()))?;

    let job = match &cli.config {
        Some(path) => JobConfig::load_from_file(path)?,
        None => JobConfig::default(),
    };

    let arch = resolve_architecture(&cli, &job)?;
    let disasm =
        disassembler_for(arch).with_context(|| format!("{} support is not compiled in", arch))?;

    let origin = cli.origin.or(job.origin).unwrap_or(0);
    let bits = disasm.instruction_set().address_bits;
    if !disasm.instruction_set().fits(origin, data.len()) {
        bail!(
            "Image of {} bytes at {:#06x} does not fit the {}-bit address space of the {}",
            data.len(),
            origin,
            bits,
            arch
        );
    }
    let ranges = code_ranges(&cli, &job, origin, data.len())?;

    let mut symbols = SymbolDatabase::new();
    job.apply_labels(&mut symbols)?;
    if let Some(min) = cli.xref_min.or(job.xrefs.min) {
        symbols.set_min_bound(min);
    }
    if let Some(max) = cli.xref_max.or(job.xrefs.max) {
        symbols.set_max_bound(max);
    }

    log::info!(
        "{} image, {} bytes at {:#06x}, {} range(s)",
        arch,
        data.len(),
        origin,
        ranges.len()
    );

    let mut listings = Vec::with_capacity(ranges.len());
    for range in &ranges {
        let instructions = disasm
            .disassemble_range(&data, origin, range.start, range.end, &mut symbols)
            .with_context(|| {
                format!("Failed to disassemble {:#06x}..{:#06x}", range.start, range.end)
            })?;
        listings.push(instructions);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if listing::write_equates(&mut out, &listings, &symbols)? > 0 {
        writeln!(out)?;
    }
    for (i, instructions) in listings.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        listing::write_listing(&mut out, instructions, &symbols)?;
    }

    if cli.xrefs {
        let report = symbols.dump();
        log::info!("{} references to {} targets", report.total(), report.groups.len());
        writeln!(out)?;
        if cli.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            write!(out, "{}", report)?;
        }
    }

    Ok(())
}

fn resolve_architecture(cli: &Cli, job: &JobConfig) -> Result<Architecture> {
    if let Some(name) = &cli.arch {
        return config::parse_architecture(name);
    }
    match job.architecture()? {
        Some(arch) => Ok(arch),
        None => bail!("No architecture given. Use --arch or set `arch` in the job file"),
    }
}

/// Command-line bounds win over the job file; without either the whole
/// image is disassembled.
fn code_ranges(cli: &Cli, job: &JobConfig, origin: u64, len: usize) -> Result<Vec<CodeRange>> {
    let image_end = origin
        .checked_add(len as u64)
        .with_context(|| format!("Image of {} bytes at {:#x} overflows", len, origin))?;
    if cli.start.is_some() || cli.end.is_some() {
        return Ok(vec![CodeRange {
            start: cli.start.unwrap_or(origin),
            end: cli.end.unwrap_or(image_end),
        }]);
    }
    if !job.code.is_empty() {
        return Ok(job.code.clone());
    }
    Ok(vec![CodeRange {
        start: origin,
        end: image_end,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("retrodis").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_hex_prefixes() {
        assert_eq!(parse_hex("C000"), Ok(0xC000));
        assert_eq!(parse_hex("0xc000"), Ok(0xC000));
        assert_eq!(parse_hex("$FFD2"), Ok(0xFFD2));
        assert!(parse_hex("G0").is_err());
    }

    #[test]
    fn test_command_line_range_overrides_job() {
        let job = JobConfig::parse("[[code]]\nstart = 0x10\nend = 0x20").unwrap();
        let ranges = code_ranges(&cli(&["a.bin", "--start", "8004"]), &job, 0x8000, 16).unwrap();
        assert_eq!(ranges, [CodeRange { start: 0x8004, end: 0x8010 }]);

        let ranges = code_ranges(&cli(&["a.bin"]), &job, 0x8000, 16).unwrap();
        assert_eq!(ranges, [CodeRange { start: 0x10, end: 0x20 }]);

        let ranges = code_ranges(&cli(&["a.bin"]), &JobConfig::default(), 0x8000, 16).unwrap();
        assert_eq!(ranges, [CodeRange { start: 0x8000, end: 0x8010 }]);
    }

    #[test]
    fn test_overflowing_origin_is_an_error() {
        let cli = cli(&["a.bin", "--origin", "FFFFFFFFFFFFFFFF"]);
        assert_eq!(cli.origin, Some(u64::MAX));
        assert!(code_ranges(&cli, &JobConfig::default(), u64::MAX, 16).is_err());
    }

    #[test]
    fn test_architecture_resolution() {
        let job = JobConfig::parse("arch = \"6809\"").unwrap();
        assert_eq!(resolve_architecture(&cli(&["a.bin"]), &job).unwrap(), Architecture::Mc6809);
        assert_eq!(
            resolve_architecture(&cli(&["a.bin", "--arch", "6502"]), &job).unwrap(),
            Architecture::Mos6502
        );
        assert!(resolve_architecture(&cli(&["a.bin"]), &JobConfig::default()).is_err());
        assert!(resolve_architecture(&cli(&["a.bin", "-a", "z80"]), &job).is_err());
    }
}
