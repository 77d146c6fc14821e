//! Conversion facade.
//!
//! ```text
//! (text, input tag, output tag)
//!     -> resolve both tags      UnsupportedNotation on failure
//!     -> parse::parse_with      Parse on failure
//!     -> format::format         never fails
//! ```
//!
//! Both tags are resolved before the text is looked at, so an unknown tag
//! is reported even when the text would parse.

use tracing::{debug, trace};

use crate::{format, parse, Color, Error, Notation, Result, Side};

/// Which HWB to RGB formula the HWB parser uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HwbFormula {
    /// Standard HWB (equivalent to HSV with `v = 1 - b`, `s = 1 - w / v`).
    #[default]
    Standard,
    /// The piecewise formula of the first release, whose blue channel is
    /// the blackness. Channels are scaled consistently here, so results
    /// follow the old formula's shape rather than its exact numbers.
    Legacy,
}

/// Options for a [`Converter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConvertOptions {
    /// HWB input formula.
    pub hwb_formula: HwbFormula,
}

/// Converts color text between notations.
///
/// Stateless apart from its options; share it freely across threads.
///
/// # Example
///
/// ```rust
/// use devdex_color::{Converter, ConvertOptions, HwbFormula};
///
/// let legacy = Converter::new(ConvertOptions { hwb_formula: HwbFormula::Legacy });
/// assert_eq!(legacy.convert("hwb(0, 0%, 0%)", "hwb", "hex").unwrap(), "#ffff00");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Returns the options.
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Resolves a notation tag given for `side`.
    pub fn resolve(tag: &str, side: Side) -> Result<Notation> {
        Notation::from_tag(tag).ok_or_else(|| Error::unsupported(side, tag))
    }

    /// Parses `value` as `notation`.
    pub fn parse(&self, value: &str, notation: Notation) -> Result<Color> {
        parse::parse_with(value, notation, self.options.hwb_formula)
    }

    /// Converts `value` from the `input` notation tag to the `output` one.
    pub fn convert(&self, value: &str, input: &str, output: &str) -> Result<String> {
        let resolved = Self::resolve(input, Side::Input)
            .and_then(|i| Ok((i, Self::resolve(output, Side::Output)?)));
        match resolved {
            Ok((input, output)) => self.convert_notation(value, input, output),
            Err(e) => {
                debug!(input, output, error = %e, "notation lookup failed");
                Err(e)
            }
        }
    }

    /// Converts `value` between two known notations.
    pub fn convert_notation(
        &self,
        value: &str,
        input: Notation,
        output: Notation,
    ) -> Result<String> {
        trace!(value, %input, %output, "convert");
        match self.parse(value, input) {
            Ok(color) => Ok(format::format(&color, output)),
            Err(e) => {
                debug!(value, %input, error = %e, "parse failed");
                Err(e)
            }
        }
    }
}

/// Converts `value` from the `input` notation tag to the `output` one with
/// default options.
///
/// # Errors
///
/// - [`Error::UnsupportedNotation`] if either tag is unknown
/// - [`Error::Parse`] if `value` is malformed for `input`
///
/// # Example
///
/// ```rust
/// use devdex_color::convert;
///
/// assert_eq!(convert("cmyk(0, 0, 0, 1)", "cmyk", "rgb").unwrap(), "rgb(0, 0, 0)");
/// assert!(convert("#fff", "hex", "bogus").unwrap_err().is_unsupported());
/// ```
pub fn convert(value: &str, input: &str, output: &str) -> Result<String> {
    Converter::default().convert(value, input, output)
}

/// Typed variant of [`convert`]; only parse errors are possible.
pub fn convert_notation(value: &str, input: Notation, output: Notation) -> Result<String> {
    Converter::default().convert_notation(value, input, output)
}
