//! Notation tags.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A textual color syntax.
///
/// The set is closed: parser and formatter selection match on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Notation {
    /// `#rrggbb` or `#rgb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsv(h, s%, v%)`
    Hsv,
    /// `hwb(h, w%, b%)`
    Hwb,
    /// `cmy(c%, m%, y%)`
    Cmy,
    /// `cmyk(c, m, y, k)`
    Cmyk,
}

impl Notation {
    /// All notations in display order.
    pub const ALL: [Notation; 7] = [
        Notation::Hex,
        Notation::Rgb,
        Notation::Hsl,
        Notation::Hsv,
        Notation::Hwb,
        Notation::Cmy,
        Notation::Cmyk,
    ];

    /// Lowercase tag, as accepted by [`FromStr`].
    pub const fn tag(self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::Hsl => "hsl",
            Notation::Hsv => "hsv",
            Notation::Hwb => "hwb",
            Notation::Cmy => "cmy",
            Notation::Cmyk => "cmyk",
        }
    }

    /// Name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "RGB",
            Notation::Hsl => "HSL",
            Notation::Hsv => "HSV",
            Notation::Hwb => "HWB",
            Notation::Cmy => "CMY",
            Notation::Cmyk => "CMYK",
        }
    }

    pub(crate) const fn error_noun(self) -> &'static str {
        match self {
            Notation::Cmyk => "format",
            _ => "value",
        }
    }

    /// Looks up a tag, ignoring case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|n| n.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Tag that names none of the supported notations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color notation: {0}")]
pub struct UnknownNotation(pub String);

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownNotation(s.to_string()))
    }
}
