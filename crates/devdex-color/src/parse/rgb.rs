//! RGB grammar: `rgb(r, g, b)` or bare `r, g, b`.

use super::{components, strip_function};
use crate::{Color, Error, Notation, Result};

/// Parses three comma-separated integers.
///
/// Values are used as given: nothing clamps them to [0, 255], so
/// `rgb(300, 0, 0)` yields a color whose hex has more than two digits for
/// red.
pub fn rgb(text: &str) -> Result<Color> {
    let err = || Error::parse(Notation::Rgb, text);

    let body = strip_function(text, "rgb");
    let [r, g, b] = components::<3>(&body).ok_or_else(err)?;

    let channel = |part: &str| part.parse::<i32>().map_err(|_| err());
    Ok(Color::from_rgb(channel(r)?, channel(g)?, channel(b)?))
}
