//! Hex grammar: optional `#`, then `rgb` or `rrggbb`.

use crate::{Color, Error, Notation, Result};

/// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (any case).
///
/// Shorthand digits are duplicated, so `#f80` is `#ff8800`.
pub fn hex(text: &str) -> Result<Color> {
    let err = || Error::parse(Notation::Hex, text);

    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let nibble = |c: u8| -> Result<i32> {
        char::from(c)
            .to_digit(16)
            .map(|d| d as i32)
            .ok_or_else(err)
    };

    let bytes = digits.as_bytes();
    let [r, g, b] = match bytes.len() {
        3 => [
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        ],
        6 => {
            let pair = |i: usize| -> Result<i32> {
                Ok((nibble(bytes[i])? << 4) | nibble(bytes[i + 1])?)
            };
            [pair(0)?, pair(2)?, pair(4)?]
        }
        _ => return Err(err()),
    };

    Ok(Color::from_rgb(r, g, b))
}
