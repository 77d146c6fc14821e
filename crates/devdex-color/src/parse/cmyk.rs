//! CMYK grammar: strict `cmyk(c, m, y, k)` with fractional components.

use devdex_models::cmyk as cmyk_model;

use crate::{Color, Error, Notation, Result};

/// Parses `cmyk(c, m, y, k)` where each component is a fraction in [0, 1].
///
/// Unlike [`cmy`](super::cmy) this grammar requires the `cmyk(` prefix and
/// `)` suffix and does not accept `%`. Whitespace anywhere and letter case
/// are ignored. Components are clamped to [0, 1].
pub fn cmyk(text: &str) -> Result<Color> {
    let err = || Error::parse(Notation::Cmyk, text);

    let body: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let inner = body
        .strip_prefix("cmyk(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(err)?;

    let parts: Vec<&str> = inner.split(',').collect();
    let parts: [&str; 4] = parts.try_into().map_err(|_| err())?;

    let mut cmyk = [0.0; 4];
    for (slot, part) in cmyk.iter_mut().zip(parts) {
        let v = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(err)?;
        *slot = v.clamp(0.0, 1.0);
    }

    Ok(Color::from_unit_rgb(cmyk_model::to_rgb(cmyk)))
}
