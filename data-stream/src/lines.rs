use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};

use data_error::Result;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Reads the next line as raw bytes, accepting `\n`, `\r\n` or a lone `\r`
/// as the terminator. The terminator is not included.
///
/// Returns `None` once the reader is exhausted.
fn next_line<R: BufRead + ?Sized>(
    reader: &mut R,
) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let mut seen_any = false;
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(if seen_any { Some(line) } else { None });
        }
        seen_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = available[i];
                line.extend_from_slice(&available[..i]);
                reader.consume(i + 1);
                if terminator == b'\r' {
                    let after = reader.fill_buf()?;
                    if after.first() == Some(&b'\n') {
                        reader.consume(1);
                    }
                }
                return Ok(Some(line));
            }
            None => {
                let n = available.len();
                line.extend_from_slice(available);
                reader.consume(n);
            }
        }
    }
}

fn into_string(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}

/// Collects every line of `reader`, without terminators.
pub fn read_lines<R: BufRead + ?Sized>(
    reader: &mut R,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    while let Some(line) = next_line(reader)? {
        lines.push(into_string(line)?);
    }
    Ok(lines)
}

/// Writes each line followed by `line_ending`, or [`LINE_SEPARATOR`] when
/// none is given. The writer is not flushed.
pub fn write_lines<I, W>(
    lines: I,
    line_ending: Option<&str>,
    writer: &mut W,
) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
    W: Write + ?Sized,
{
    let ending = line_ending.unwrap_or(LINE_SEPARATOR);
    for line in lines {
        write!(writer, "{line}{ending}")?;
    }
    Ok(())
}

/// Compares two readers line by line, treating every terminator style as
/// equal.
pub fn content_equals_ignore_eol<A, B>(
    first: &mut A,
    second: &mut B,
) -> Result<bool>
where
    A: BufRead + ?Sized,
    B: BufRead + ?Sized,
{
    loop {
        let left = next_line(first)?;
        let right = next_line(second)?;
        match (left, right) {
            (None, None) => return Ok(true),
            (Some(l), Some(r)) if l == r => continue,
            _ => return Ok(false),
        }
    }
}
