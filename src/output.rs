use crate::trace::TraceLine;
use crate::Result;
use std::io::{self, Write};

/// Writes one trace line to standard output and flushes it.
pub fn emit(line: &TraceLine) -> Result<()> {
    emit_to(&mut io::stdout().lock(), line)
}

/// Writes one trace line to `out` and flushes it.
///
/// The line goes out in a single `write_all` so the SIGUSR1 handler, which
/// writes straight to the file descriptor, can only land between lines.
pub fn emit_to<W: Write>(out: &mut W, line: &TraceLine) -> Result<()> {
    let mut text = line.to_string();
    text.push('\n');
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
