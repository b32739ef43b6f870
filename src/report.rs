use crate::Value;
use std::io::Write;

/// Writes a single `Average: <value>` line.
///
/// The value is always printed with a fractional part, e.g. `Average: 3.0`.
///
/// # Errors
///
/// Will return `Err` if an IO error occurs.
pub fn write_report<W: Write>(writer: &mut W, avg: Value) -> crate::Result<()> {
    writeln!(writer, "Average: {avg:?}")?;
    Ok(())
}
