//! Serialization of a verified `PowerTable`.
//!
//! The Rust output stores the table as `([u64; LEN], [i16; LEN])` rather than
//! `[(u64, i16); LEN]`, since the tuple would be padded to 16 bytes per entry.

use std::io::Write;

use crate::{error::TableResult, table::PowerTable};

#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// License or other header text, emitted verbatim (after trimming) above the table
    pub header: Option<String>,
}

/// Writes `table` as Rust source defining `MIN_E`, `MAX_E` and `POWERS`
pub fn write_rust<W: Write>(
    table: &PowerTable,
    options: &EmitOptions,
    out: &mut W,
) -> TableResult<()> {
    if let Some(header) = &options.header {
        writeln!(out, "{}", header.trim())?;
    }
    writeln!(out, "// Table of approximations of powers of ten.")?;
    writeln!(out, "// DO NOT MODIFY: Generated by pow10-table")?;
    if table.mantissa() != 1 {
        writeln!(out, "// Entries approximate {} * 10^e.", table.mantissa())?;
    }
    if table.precision().bits() != 64 {
        writeln!(out, "// Significands are {} bits wide.", table.precision().bits())?;
    }

    let range = table.range();
    writeln!(out, "pub const MIN_E: i16 = {};", range.min())?;
    writeln!(out, "pub const MAX_E: i16 = {};", range.max())?;
    writeln!(out)?;

    writeln!(out, "pub const POWERS: ([u64; {0}], [i16; {0}]) = ([", table.len())?;
    for sig in table.significands() {
        writeln!(out, "    {:#x},", sig)?;
    }
    writeln!(out, "], [")?;
    for exp in table.exponents() {
        writeln!(out, "    {},", exp)?;
    }
    writeln!(out, "]);")?;

    Ok(())
}

/// Writes `table` as pretty printed JSON
pub fn write_json<W: Write>(table: &PowerTable, out: &mut W) -> TableResult<()> {
    serde_json::to_writer_pretty(&mut *out, table)?;
    writeln!(out)?;

    Ok(())
}
