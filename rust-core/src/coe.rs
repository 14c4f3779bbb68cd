//! Twiddle lookup file codec
//!
//! Text layout used to initialise a hardware ROM with the twiddle table:
//!
//! ```text
//! memory_initialization_radix=16;
//! memory_initialization_vector=
//! 3f80000000000000,
//! 3f3504f33f3504f3,
//! ...
//! bf3504f3bf3504f3;
//! ```
//!
//! Each entry is the IEEE-754 single-precision bit pattern of the real part
//! followed by that of the imaginary part, 8 hex digits each. Entries end in
//! `,` except the last, which ends in `;`.

use log::trace;
use num_complex::Complex64;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Result, SdftError};
use crate::spectrum::TwiddleTable;

const RADIX_KEY: &str = "memory_initialization_radix=";
const VECTOR_HEADER: &str = "memory_initialization_vector=";
const ENTRY_DIGITS: usize = 16;

fn malformed(line: usize, reason: impl Into<String>) -> SdftError {
    SdftError::MalformedTwiddleFile {
        line,
        reason: reason.into(),
    }
}

/// Render a twiddle table in COE layout, rounding each component to f32
pub fn encode_coe(table: &TwiddleTable) -> String {
    let mut out = String::new();
    out.push_str(RADIX_KEY);
    out.push_str("16;\n");
    out.push_str(VECTOR_HEADER);
    out.push('\n');

    let last = table.len() - 1;
    for (i, w) in table.factors().iter().enumerate() {
        let terminator = if i == last { ';' } else { ',' };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:08x}{:08x}{}",
            (w.re as f32).to_bits(),
            (w.im as f32).to_bits(),
            terminator
        );
    }
    out
}

fn parse_word(hex: &str, line: usize) -> Result<f64> {
    let bits = u32::from_str_radix(hex, 16)
        .map_err(|e| malformed(line, format!("bad hex word {:?}: {}", hex, e)))?;
    Ok(f32::from_bits(bits) as f64)
}

fn parse_entry(body: &str, line: usize) -> Result<Complex64> {
    if body.len() != ENTRY_DIGITS || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(
            line,
            format!("expected {} hex digits, found {:?}", ENTRY_DIGITS, body),
        ));
    }
    let re = parse_word(&body[..8], line)?;
    let im = parse_word(&body[8..], line)?;
    if !re.is_finite() || !im.is_finite() {
        return Err(malformed(line, "non-finite twiddle component"));
    }
    Ok(Complex64::new(re, im))
}

/// Parse COE text into a twiddle table
///
/// # Errors
/// `MalformedTwiddleFile` on any deviation from the layout: wrong or missing
/// header, a radix other than 16, a bad entry, a missing `;` terminator, or
/// content after it
pub fn parse_coe(text: &str) -> Result<TwiddleTable> {
    let mut lines = text.lines().map(str::trim_end).enumerate().map(|(i, l)| (i + 1, l));

    let (line, radix_line) = lines.next().ok_or_else(|| malformed(1, "empty file"))?;
    let radix = radix_line
        .strip_prefix(RADIX_KEY)
        .and_then(|rest| rest.strip_suffix(';'))
        .ok_or_else(|| malformed(line, format!("expected {}<radix>;", RADIX_KEY)))?;
    match radix.parse::<u32>() {
        Ok(16) => {}
        Ok(other) => return Err(malformed(line, format!("unsupported radix {}", other))),
        Err(_) => return Err(malformed(line, format!("radix {:?} is not a number", radix))),
    }

    match lines.next() {
        Some((_, VECTOR_HEADER)) => {}
        Some((line, _)) => return Err(malformed(line, format!("expected {}", VECTOR_HEADER))),
        None => return Err(malformed(line + 1, "missing initialization vector")),
    }

    let mut factors = Vec::new();
    let mut terminated = false;
    let mut last_line = line + 1;

    for (line, content) in lines {
        last_line = line;
        if terminated {
            if content.trim().is_empty() {
                continue;
            }
            return Err(malformed(line, "content after terminating ';'"));
        }

        let (body, terminator) = match content.char_indices().last() {
            Some((idx, c @ (',' | ';'))) => (&content[..idx], c),
            _ => return Err(malformed(line, "entry must end with ',' or ';'")),
        };
        factors.push(parse_entry(body, line)?);
        terminated = terminator == ';';
    }

    if !terminated {
        return Err(malformed(last_line, "missing terminating ';'"));
    }

    trace!("parsed {} twiddle entries", factors.len());
    TwiddleTable::from_factors(factors)
}

/// Read a twiddle table from a COE file
pub fn load_coe(path: impl AsRef<Path>) -> Result<TwiddleTable> {
    let text = fs::read_to_string(path)?;
    parse_coe(&text)
}

/// Write a twiddle table as a COE file
pub fn write_coe(path: impl AsRef<Path>, table: &TwiddleTable) -> Result<()> {
    fs::write(path, encode_coe(table))?;
    Ok(())
}
