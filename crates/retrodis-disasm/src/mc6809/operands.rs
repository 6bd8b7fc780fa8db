//! 6809 addressing modes and postbytes.

use crate::render::{self, OperandContext};
use crate::DecodeError;

type Result = std::result::Result<(), DecodeError>;

/// Index registers selected by postbyte bits 5-6.
const INDEX_REGISTERS: [&str; 4] = ["X", "Y", "U", "S"];

/// Register codes used by TFR/EXG postbytes.
fn pair_register(code: u8) -> &'static str {
    match code {
        0x0 => "D",
        0x1 => "X",
        0x2 => "Y",
        0x3 => "U",
        0x4 => "S",
        0x5 => "PC",
        0x8 => "A",
        0x9 => "B",
        0xA => "CC",
        0xB => "DP",
        _ => "?",
    }
}

/// `<$12`. The direct page register is assumed to be zero.
pub fn direct(ctx: &mut OperandContext<'_, '_>) -> Result {
    ctx.push('<');
    render::direct8(ctx)
}

/// Indexed (`$6x`, `$Ax`, ...) or extended (`$7x`, `$Bx`, ...), chosen by
/// opcode bit 4.
pub fn indexed_or_extended(ctx: &mut OperandContext<'_, '_>) -> Result {
    if ctx.opcode() & 0x10 != 0 {
        render::extended16(ctx)
    } else {
        indexed(ctx)
    }
}

/// Indexed postbyte.
///
/// Only program-counter relative and extended indirect forms produce an
/// address; register-relative forms record nothing, except a 16-bit
/// constant offset which is recorded as the base of the indexed access.
pub fn indexed(ctx: &mut OperandContext<'_, '_>) -> Result {
    let postbyte = ctx.next_byte()?;
    let reg = INDEX_REGISTERS[((postbyte >> 5) & 0x03) as usize];

    if postbyte & 0x80 == 0 {
        // 5-bit signed offset
        let offset = ((postbyte << 3) as i8) >> 3;
        ctx.push_str(&format!("{},{}", offset, reg));
        return Ok(());
    }

    let indirect = postbyte & 0x10 != 0;
    let body = match postbyte & 0x0F {
        0x0 => format!(",{}+", reg),
        0x1 => format!(",{}++", reg),
        0x2 => format!(",-{}", reg),
        0x3 => format!(",--{}", reg),
        0x4 => format!(",{}", reg),
        0x5 => format!("B,{}", reg),
        0x6 => format!("A,{}", reg),
        0x8 => {
            let offset = ctx.next_byte()? as i8;
            format!("{},{}", signed_hex(offset as i16), reg)
        }
        0x9 => {
            let base = ctx.next_word()? as u64;
            format!("{},{}", ctx.address(base, 4), reg)
        }
        0xB => format!("D,{}", reg),
        0xC => {
            let target = ctx.relative8()?;
            format!("{},PCR", ctx.address(target, 4))
        }
        0xD => {
            let target = ctx.relative16()?;
            format!("{},PCR", ctx.address(target, 4))
        }
        0xF => {
            let pointer = ctx.next_word()? as u64;
            // Extended indirect is always bracketed.
            ctx.push('[');
            let text = ctx.address(pointer, 4);
            ctx.push_str(&text);
            ctx.push(']');
            return Ok(());
        }
        _ => "??".to_string(),
    };

    if indirect {
        ctx.push('[');
        ctx.push_str(&body);
        ctx.push(']');
    } else {
        ctx.push_str(&body);
    }
    Ok(())
}

fn signed_hex(value: i16) -> String {
    if value < 0 {
        format!("-${:02X}", value.unsigned_abs())
    } else {
        format!("${:02X}", value)
    }
}

/// `TFR`/`EXG` register pair: `A,B`.
pub fn register_pair(ctx: &mut OperandContext<'_, '_>) -> Result {
    let postbyte = ctx.next_byte()?;
    let text = format!("{},{}", pair_register(postbyte >> 4), pair_register(postbyte & 0x0F));
    ctx.push_str(&text);
    Ok(())
}

/// `PSHS`/`PULS`/`PSHU`/`PULU` register list: `CC,A,B,DP,X,Y,U,PC`.
///
/// Bit 6 names the other stack pointer: `U` for the S stack opcodes
/// (`$34`/`$35`), `S` for the U stack opcodes.
pub fn register_list(ctx: &mut OperandContext<'_, '_>) -> Result {
    let postbyte = ctx.next_byte()?;
    let other_stack = if ctx.opcode() & 0x02 == 0 { "U" } else { "S" };
    let names = ["CC", "A", "B", "DP", "X", "Y", other_stack, "PC"];

    let list: Vec<_> = names
        .iter()
        .enumerate()
        .filter(|(bit, _)| postbyte & (1 << bit) != 0)
        .map(|(_, name)| *name)
        .collect();
    ctx.push_str(&list.join(","));
    Ok(())
}
