//! Data sizes with decimal and binary prefixes.
//!
//! `B` is shared by both systems, and units of different systems convert
//! through bytes (`1 MB` is `0.95367431640625 MiB`).

use std::fmt;

use crate::{Unit, UnitError, UnitResult};

/// The single family of data units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataSize;

impl fmt::Display for DataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("data size")
    }
}

/// Prefix system of a data unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    /// Powers of 1000: kB, MB, ...
    Decimal,
    /// Powers of 1024: KiB, MiB, ...
    Binary,
}

const DECIMAL: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Prefix system of `symbol`, `None` for plain bytes or unknown symbols.
pub fn system(symbol: &str) -> Option<System> {
    if DECIMAL.contains(&symbol) {
        Some(System::Decimal)
    } else if BINARY.contains(&symbol) {
        Some(System::Binary)
    } else {
        None
    }
}

/// Looks up a data unit by its exact symbol (`B`, `kB`, `KiB`, ...).
pub fn lookup(symbol: &str) -> UnitResult<Unit<DataSize>> {
    let unit = |symbol: &'static str, factor: f64| Unit { symbol, family: DataSize, factor };

    if symbol == "B" {
        return Ok(unit("B", 1.0));
    }
    if let Some(i) = DECIMAL.iter().position(|s| *s == symbol) {
        return Ok(unit(DECIMAL[i], 1000f64.powi(i as i32 + 1)));
    }
    if let Some(i) = BINARY.iter().position(|s| *s == symbol) {
        return Ok(unit(BINARY[i], 2f64.powi(10 * (i as i32 + 1))));
    }
    Err(UnitError::UnknownUnit(symbol.to_string()))
}

/// Converts `value` between two data units.
///
/// # Errors
///
/// [`UnitError::UnknownUnit`] if either symbol is unknown.
pub fn convert(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    lookup(from)?.convert_to(value, &lookup(to)?)
}
