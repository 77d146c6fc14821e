//! Notation parsers.
//!
//! Each grammar lives in its own module and is exposed as a standalone
//! function so the grammars can be tested (and their differences seen) in
//! isolation:
//!
//! | Function | Grammar |
//! |----------|---------|
//! | [`hex`] | optional `#`, 3 or 6 hex digits |
//! | [`rgb`] | `rgb(r, g, b)` or `r, g, b`, integers, not clamped |
//! | [`hsl`], [`hsv`], [`hwb`] | integer hue, two integers with optional `%` |
//! | [`cmy`] | three decimals with optional `%`, scaled by 1/100 |
//! | [`cmyk`] | strict `cmyk(c, m, y, k)`, fractions in [0, 1], no `%` |
//!
//! The CMY and CMYK grammars intentionally disagree on `%`: CMY reads
//! percentages, CMYK reads fractions.

mod cmy;
mod cmyk;
mod cylindrical;
mod hex;
mod rgb;

pub use cmy::cmy;
pub use cmyk::cmyk;
pub use cylindrical::{hsl, hsv, hwb, hwb_with};
pub use hex::hex;
pub use rgb::rgb;

use crate::{Color, HwbFormula, Notation, Result};

/// Parses `text` as `notation` using the default options.
///
/// # Example
///
/// ```rust
/// use devdex_color::{parse, Notation};
///
/// let a = parse::parse("#FFF", Notation::Hex).unwrap();
/// let b = parse::parse("ffffff", Notation::Hex).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse(text: &str, notation: Notation) -> Result<Color> {
    parse_with(text, notation, HwbFormula::default())
}

/// Parses `text` as `notation`, choosing the HWB formula explicitly.
pub fn parse_with(text: &str, notation: Notation, hwb_formula: HwbFormula) -> Result<Color> {
    match notation {
        Notation::Hex => hex(text),
        Notation::Rgb => rgb(text),
        Notation::Hsl => hsl(text),
        Notation::Hsv => hsv(text),
        Notation::Hwb => hwb_with(text, hwb_formula),
        Notation::Cmy => cmy(text),
        Notation::Cmyk => cmyk(text),
    }
}

/// Drops whitespace and parentheses, then an optional leading function
/// name (case-insensitive).
fn strip_function(text: &str, name: &str) -> String {
    let mut body: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect();

    let has_name = body
        .get(..name.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(name));
    if has_name {
        body.drain(..name.len());
    }
    body
}

/// Splits a stripped body into exactly `N` comma-separated parts.
fn components<const N: usize>(body: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = body.split(',').collect();
    parts.try_into().ok()
}

/// Integer with one optional trailing `%`.
fn percent_int(part: &str) -> Option<i32> {
    part.strip_suffix('%').unwrap_or(part).parse().ok()
}

/// Finite decimal with one optional trailing `%`.
fn percent_float(part: &str) -> Option<f64> {
    part.strip_suffix('%')
        .unwrap_or(part)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
