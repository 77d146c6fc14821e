//! CLI command implementations

pub mod batch;
pub mod color;
pub mod inspect;
pub mod units;

use anyhow::{Context, Result};
use devdex_color::{ConvertOptions, Converter, HwbFormula};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Builds a converter honoring `--legacy-hwb`.
pub fn converter(legacy_hwb: bool) -> Converter {
    let hwb_formula = if legacy_hwb { HwbFormula::Legacy } else { HwbFormula::Standard };
    Converter::new(ConvertOptions { hwb_formula })
}

/// Reads all lines from a file, or stdin for `None` / `-`.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("Failed to open: {}", p.display()))?;
            BufReader::new(file)
                .lines()
                .collect::<io::Result<_>>()
                .with_context(|| format!("Failed to read: {}", p.display()))
        }
        _ => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("Failed to read stdin"),
    }
}
