//! 6502 addressing modes.

use crate::render::{self, OperandContext};
use crate::DecodeError;

type Result = std::result::Result<(), DecodeError>;

/// `A`
pub fn accumulator(ctx: &mut OperandContext<'_, '_>) -> Result {
    ctx.push('A');
    Ok(())
}

/// `$12,X`
pub fn zero_page_x(ctx: &mut OperandContext<'_, '_>) -> Result {
    render::direct8(ctx)?;
    ctx.push_str(",X");
    Ok(())
}

/// `$12,Y`
pub fn zero_page_y(ctx: &mut OperandContext<'_, '_>) -> Result {
    render::direct8(ctx)?;
    ctx.push_str(",Y");
    Ok(())
}

/// `$1234,X`
pub fn absolute_x(ctx: &mut OperandContext<'_, '_>) -> Result {
    render::extended16(ctx)?;
    ctx.push_str(",X");
    Ok(())
}

/// `$1234,Y`
pub fn absolute_y(ctx: &mut OperandContext<'_, '_>) -> Result {
    render::extended16(ctx)?;
    ctx.push_str(",Y");
    Ok(())
}

/// `($1234)`, JMP only.
pub fn indirect(ctx: &mut OperandContext<'_, '_>) -> Result {
    ctx.push('(');
    render::extended16(ctx)?;
    ctx.push(')');
    Ok(())
}

/// `($12,X)`
pub fn indexed_indirect(ctx: &mut OperandContext<'_, '_>) -> Result {
    ctx.push('(');
    render::direct8(ctx)?;
    ctx.push_str(",X)");
    Ok(())
}

/// `($12),Y`
pub fn indirect_indexed(ctx: &mut OperandContext<'_, '_>) -> Result {
    ctx.push('(');
    render::direct8(ctx)?;
    ctx.push_str("),Y");
    Ok(())
}
