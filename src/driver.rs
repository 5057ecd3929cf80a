use std::io::{stdin, stdout, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::calculator::calculate_average;
use crate::opts::Opts;
use crate::prelude::*;

const PROMPT: &str = "Enter the file name: ";

pub fn run(opts: Opts) -> Result {
    let path = match opts.path {
        Some(path) => path,
        None => prompt_path(&mut stdin().lock(), &mut stdout().lock())?,
    };
    sentry::configure_scope(|scope| scope.set_extra("path", format!("{:?}", path).into()));
    report(&path, &mut stdout().lock())
}

/// Writes the skip diagnostics followed by the result line.
fn report(path: &Path, output: &mut impl Write) -> Result {
    let average = calculate_average(path, output)?;
    info!(?average);
    writeln!(output, "{}", format_result(average))?;
    Ok(())
}

/// Prompts for the file name and reads it from a single input line.
fn prompt_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read the file name")? == 0 {
        return Err(anyhow!("no file name given"));
    }
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(PathBuf::from(line))
}

/// Formats the result line.
pub fn format_result(average: Option<f64>) -> String {
    match average {
        Some(average) => {
            format!("The average of values in the second column is: {}", format_value(average))
        }
        None => String::from("No valid numerical values found in the second column."),
    }
}

/// Shortest round-trip representation: whole numbers keep `.0`,
/// exponents are signed and at least two digits wide, NaN is `nan`.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    let formatted = format!("{:?}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
