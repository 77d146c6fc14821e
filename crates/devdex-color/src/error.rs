//! Error types for color conversion.
//!
//! Two failure modes exist and both are ordinary return values:
//! - the text does not match the grammar of its declared notation
//! - a notation tag is not one of the seven supported ones

use std::fmt;

use thiserror::Error;

use crate::Notation;

/// Which side of a conversion a notation tag was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The notation of the value being parsed.
    Input,
    /// The notation the value is rendered in.
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Input => "input",
            Side::Output => "output",
        })
    }
}

/// Color conversion error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text is malformed for the declared notation: wrong component count,
    /// non-numeric component, bad prefix or brackets, bad hex length/digits.
    #[error("invalid {} color {}: {value}", .notation.label(), .notation.error_noun())]
    Parse {
        /// Notation the text was parsed as.
        notation: Notation,
        /// The offending input text.
        value: String,
    },

    /// Notation tag is not recognized.
    #[error("unsupported {side} color type: {tag}")]
    UnsupportedNotation {
        /// Whether the tag was given for the input or the output.
        side: Side,
        /// The unrecognized tag.
        tag: String,
    },
}

impl Error {
    /// Creates a [`Error::Parse`] for `value` in `notation`.
    pub fn parse(notation: Notation, value: impl Into<String>) -> Self {
        Error::Parse {
            notation,
            value: value.into(),
        }
    }

    /// Creates a [`Error::UnsupportedNotation`].
    pub fn unsupported(side: Side, tag: impl Into<String>) -> Self {
        Error::UnsupportedNotation {
            side,
            tag: tag.into(),
        }
    }

    /// Returns `true` for malformed input text.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns `true` for an unrecognized notation tag.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedNotation { .. })
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, Error>;
