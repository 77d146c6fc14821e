//! Batch conversion command
//!
//! Converts one value per input line. Lines are converted in parallel and
//! reported in input order; blank lines are skipped.

use crate::BatchArgs;
use anyhow::{bail, Result};
use devdex_color::{Converter, Notation, Side};
use rayon::prelude::*;
use serde::Serialize;
#[allow(unused_imports)]
use tracing::{debug, info, trace, warn};

#[derive(Debug, PartialEq, Serialize)]
struct Record<'a> {
    line: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, "batch::run");

    // Fail on bad tags before reading any input
    let from = Converter::resolve(&args.from, Side::Input)?;
    let to = Converter::resolve(&args.to, Side::Output)?;
    let converter = super::converter(args.legacy_hwb);

    let lines = super::read_lines(args.input.as_deref())?;
    info!(
        lines = lines.len(),
        %from,
        %to,
        hwb = ?converter.options().hwb_formula,
        "Starting batch conversion"
    );

    let records = convert_lines(&converter, &lines, from, to);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for r in &records {
            match (&r.output, &r.error) {
                (Some(out), _) if verbose > 0 => println!("{} -> {}", r.input, out),
                (Some(out), _) => println!("{}", out),
                (None, Some(err)) => eprintln!("line {}: {}", r.line, err),
                (None, None) => {}
            }
        }
    }

    ensure_all_converted(&records)?;
    info!(total = records.len(), "Batch finished");
    Ok(())
}

/// Converts every non-blank line, in parallel, keeping input order.
///
/// Line numbers are 1-based positions in `lines`, so skipped blanks still
/// count.
fn convert_lines<'a>(
    converter: &Converter,
    lines: &'a [String],
    from: Notation,
    to: Notation,
) -> Vec<Record<'a>> {
    let values: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    values
        .par_iter()
        .map(|&(line, input)| match converter.convert_notation(input, from, to) {
            Ok(output) => Record { line, input, output: Some(output), error: None },
            Err(e) => Record { line, input, output: None, error: Some(e.to_string()) },
        })
        .collect()
}

/// Fails when any record carries an error.
fn ensure_all_converted(records: &[Record]) -> Result<()> {
    let failed = records.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        warn!(failed, total = records.len(), "Batch finished with errors");
        bail!("{} of {} values failed to convert", failed, records.len());
    }
    Ok(())
}
