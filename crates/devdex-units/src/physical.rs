//! Physical units grouped by family.
//!
//! Base units: metre, kilogram, litre, pascal, joule, watt, square metre,
//! second, metre per second.

use std::fmt;

use crate::{Unit, UnitError, UnitResult};

/// What a physical unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Base: metre
    Length,
    /// Base: kilogram
    Mass,
    /// Base: litre
    Volume,
    /// Base: pascal
    Pressure,
    /// Base: joule
    Energy,
    /// Base: watt
    Power,
    /// Base: square metre
    Area,
    /// Base: second
    Time,
    /// Base: metre per second
    Speed,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Length => "length",
            Family::Mass => "mass",
            Family::Volume => "volume",
            Family::Pressure => "pressure",
            Family::Energy => "energy",
            Family::Power => "power",
            Family::Area => "area",
            Family::Time => "time",
            Family::Speed => "speed",
        })
    }
}

use Family::*;

/// Every known unit as `(symbol, family, factor)`.
pub const UNITS: &[(&str, Family, f64)] = &[
    // Length, metric
    ("m", Length, 1.0),
    ("km", Length, 1000.0),
    ("dm", Length, 0.1),
    ("cm", Length, 0.01),
    ("mm", Length, 0.001),
    ("μm", Length, 1e-6),
    ("nm", Length, 1e-9),
    ("pm", Length, 1e-12),
    // Length, imperial
    ("in", Length, 0.0254),
    ("ft", Length, 0.3048),
    ("yd", Length, 0.9144),
    ("mi", Length, 1609.34),
    ("nmi", Length, 1852.0),
    // Mass
    ("kg", Mass, 1.0),
    ("g", Mass, 0.001),
    ("mg", Mass, 1e-6),
    ("μg", Mass, 1e-9),
    ("t", Mass, 1000.0),
    ("lb", Mass, 0.453592),
    ("oz", Mass, 0.0283495),
    ("gr", Mass, 0.06479891),
    // Volume
    ("l", Volume, 1.0),
    ("ml", Volume, 0.001),
    ("cl", Volume, 0.01),
    ("dl", Volume, 0.1),
    ("m^3", Volume, 1000.0),
    ("tsp", Volume, 0.00492892),
    ("tbsp", Volume, 0.0147868),
    ("ozv", Volume, 0.0295735),
    ("c", Volume, 0.236588),
    ("pt", Volume, 0.473176),
    ("qt", Volume, 0.946353),
    ("gal", Volume, 3.78541),
    ("ft^3", Volume, 28.3168),
    ("yd^3", Volume, 764.5549),
    // Pressure
    ("pa", Pressure, 1.0),
    ("bar", Pressure, 1e5),
    ("atm", Pressure, 101325.0),
    ("mmhg", Pressure, 133.322),
    ("psi", Pressure, 6894.76),
    // Energy
    ("j", Energy, 1.0),
    ("kj", Energy, 1000.0),
    ("cal", Energy, 4.184),
    ("kcal", Energy, 4184.0),
    ("btu", Energy, 1055.06),
    // Power
    ("w", Power, 1.0),
    ("kw", Power, 1000.0),
    ("hp", Power, 746.0),
    // Area
    ("m²", Area, 1.0),
    ("km²", Area, 1e6),
    ("ha", Area, 1e4),
    ("ft²", Area, 0.092903),
    ("yd²", Area, 0.836127),
    ("mi²", Area, 2.58999e6),
    ("ac", Area, 4046.86),
    ("in²", Area, 0.00064516),
    ("cm²", Area, 0.0001),
    ("a", Area, 100.0),
    // Time
    ("s", Time, 1.0),
    ("ms", Time, 0.001),
    ("μs", Time, 1e-6),
    ("ns", Time, 1e-9),
    ("min", Time, 60.0),
    ("h", Time, 3600.0),
    ("d", Time, 86400.0),
    ("wk", Time, 604800.0),
    ("mo", Time, 2628000.0),
    ("yr", Time, 31536000.0),
    // Speed
    ("m/s", Speed, 1.0),
    ("km/h", Speed, 1.0 / 3.6),
    ("mph", Speed, 0.44704),
    ("ft/s", Speed, 0.3048),
    ("kt", Speed, 1852.0 / 3600.0),
];

/// Looks up a unit by its exact symbol.
pub fn lookup(symbol: &str) -> UnitResult<Unit<Family>> {
    UNITS
        .iter()
        .find(|(s, _, _)| *s == symbol)
        .map(|&(symbol, family, factor)| Unit { symbol, family, factor })
        .ok_or_else(|| UnitError::UnknownUnit(symbol.to_string()))
}

/// Converts `value` between two units of the same family.
///
/// # Errors
///
/// - [`UnitError::UnknownUnit`] if either symbol is unknown
/// - [`UnitError::FamilyMismatch`] if the families differ
pub fn convert(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    lookup(from)?.convert_to(value, &lookup(to)?)
}
