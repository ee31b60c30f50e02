//! Interactive selection of platforms and records.
//!
//! Both selectors are generic over their reader and writer so tests can
//! drive them with in-memory buffers. Platform selection is a single
//! attempt (any invalid input aborts the operation); record selection
//! re-prompts until a valid choice or an explicit cancel.

use crate::catalog::Catalog;
use crate::error::StockResult;
use crate::formatters::{format_candidate, format_platform_menu};
use crate::models::GameRecord;
use std::io::{BufRead, Write};

/// Reads one line, returning `None` on end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> StockResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompts with `label` and parses one line as a non-negative integer.
/// A parse failure prints the invalid-number message and yields `None`.
pub fn prompt_u32<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    output: &mut W,
) -> StockResult<Option<u32>> {
    write!(output, "{label}")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse::<u32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(output, "Please enter a valid number.")?;
            Ok(None)
        }
    }
}

/// Presents the catalog's distinct platforms as a 1-based numbered list and
/// reads one choice.
///
/// Non-numeric or out-of-range input cancels the whole operation; there is
/// no retry here. An empty catalog also yields `None`.
pub fn choose_platform<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> StockResult<Option<String>> {
    writeln!(output, "\nPlatforms:")?;
    let platforms = catalog.platforms();
    if platforms.is_empty() {
        writeln!(output, "No such platform.")?;
        return Ok(None);
    }
    writeln!(output, "{}", format_platform_menu(&platforms))?;

    write!(output, "\nEnter the platform number: ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };

    match line.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= platforms.len() => {
            let platform = platforms[n - 1].clone();
            writeln!(output, "Selected platform: {platform}")?;
            Ok(Some(platform))
        }
        _ => {
            writeln!(output, "\nNo such platform.")?;
            Ok(None)
        }
    }
}

/// Presents `candidates` numbered from 1 and reads choices until one is
/// valid: `0` cancels, `1..=N` picks the zero-based position returned.
///
/// Out-of-range numbers and non-numeric input each print their own message
/// and re-prompt; there is no bound on retries. End of input cancels.
pub fn choose_record<R: BufRead, W: Write>(
    candidates: &[GameRecord],
    input: &mut R,
    output: &mut W,
) -> StockResult<Option<usize>> {
    writeln!(output, "\nAvailable games:")?;
    for (i, record) in candidates.iter().enumerate() {
        writeln!(output, "{}", format_candidate(i + 1, record))?;
    }

    loop {
        write!(output, "\nSelect a game number (0 to cancel): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(0) => return Ok(None),
            Ok(n) if n >= 1 && (n as usize) <= candidates.len() => {
                return Ok(Some(n as usize - 1));
            }
            Ok(_) => writeln!(output, "Invalid option. Try again.")?,
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}
