//! Second column average.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::num::ParseFloatError;
use std::path::Path;

use crate::helpers::average::Average;
use crate::helpers::tracing::format_elapsed;
use crate::prelude::*;

pub const SKIP_MESSAGE: &str = "Skipping non-numeric value in the second column.";

/// Averages the second column of the file.
///
/// Returns [`None`] if no line has a numeric second column.
#[instrument(skip_all, fields(path = ?path))]
pub fn calculate_average(
    path: impl AsRef<Path> + Debug,
    diagnostics: &mut impl Write,
) -> Result<Option<f64>> {
    let file = File::open(&path).with_context(|| format!("failed to open {:?}", path))?;
    average_second_column(BufReader::new(file), diagnostics)
}

/// Averages the second whitespace-separated token of each line.
///
/// Lines with fewer than two tokens are skipped silently.
/// Lines with a non-numeric second token are reported to `diagnostics` and skipped.
pub fn average_second_column(
    reader: impl BufRead,
    diagnostics: &mut impl Write,
) -> Result<Option<f64>> {
    let start_instant = Instant::now();
    let mut average = Average::default();
    let mut n_skipped = 0_usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line #{}", index + 1))?;
        let Some(token) = line.split_whitespace().nth(1) else {
            continue;
        };
        match parse_value(token) {
            Ok(value) => average.push(value),
            Err(error) => {
                debug!(line_number = index + 1, token, %error, "skipped");
                n_skipped += 1;
                writeln!(diagnostics, "{}", SKIP_MESSAGE)?;
            }
        }
    }

    let elapsed = format_elapsed(start_instant);
    debug!(n_values = average.count(), n_skipped, %elapsed, "done");
    Ok(average.average())
}

/// Parses a float, allowing single `_` separators between digits.
fn parse_value(token: &str) -> StdResult<f64, ParseFloatError> {
    let bytes = token.as_bytes();
    let is_separator = |index: usize| {
        index != 0
            && bytes[index - 1].is_ascii_digit()
            && bytes.get(index + 1).map_or(false, u8::is_ascii_digit)
    };
    let are_separators_valid = bytes
        .iter()
        .enumerate()
        .all(|(index, byte)| *byte != b'_' || is_separator(index));
    if token.contains('_') && are_separators_valid {
        token.replace('_', "").parse()
    } else {
        token.parse()
    }
}
