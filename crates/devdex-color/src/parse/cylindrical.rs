//! Hue-based grammars: `hsl(h, s%, l%)`, `hsv(h, s%, v%)`, `hwb(h, w%, b%)`.
//!
//! All three share one shape: an integer hue without `%`, then two integer
//! percentages whose `%` is optional. The hue wraps modulo 360 and the
//! percentages are clamped to [0, 100] before conversion.

use devdex_models::{hsl as hsl_model, hsv as hsv_model, hwb as hwb_model};

use super::{components, percent_int, strip_function};
use crate::{Color, Error, HwbFormula, Notation, Result};

/// Parses `hsl(h, s%, l%)`.
pub fn hsl(text: &str) -> Result<Color> {
    let hsl = hue_triple(text, Notation::Hsl)?;
    Ok(Color::from_unit_rgb(hsl_model::to_rgb(hsl)))
}

/// Parses `hsv(h, s%, v%)`.
pub fn hsv(text: &str) -> Result<Color> {
    let hsv = hue_triple(text, Notation::Hsv)?;
    Ok(Color::from_unit_rgb(hsv_model::to_rgb(hsv)))
}

/// Parses `hwb(h, w%, b%)` with the standard HWB formula.
pub fn hwb(text: &str) -> Result<Color> {
    hwb_with(text, HwbFormula::Standard)
}

/// Parses `hwb(h, w%, b%)` with the given formula.
pub fn hwb_with(text: &str, formula: HwbFormula) -> Result<Color> {
    let hwb = hue_triple(text, Notation::Hwb)?;
    let rgb = match formula {
        HwbFormula::Standard => hwb_model::to_rgb(hwb),
        HwbFormula::Legacy => hwb_model::to_rgb_legacy(hwb),
    };
    Ok(Color::from_unit_rgb(rgb))
}

/// Reads `[hue, a, b]` as `[degrees, fraction, fraction]`.
fn hue_triple(text: &str, notation: Notation) -> Result<[f64; 3]> {
    let err = || Error::parse(notation, text);

    let body = strip_function(text, notation.tag());
    let [h, a, b] = components::<3>(&body).ok_or_else(err)?;

    let h: i32 = h.parse().map_err(|_| err())?;
    let a = percent_int(a).ok_or_else(err)?;
    let b = percent_int(b).ok_or_else(err)?;

    Ok([
        h.rem_euclid(360) as f64,
        a.clamp(0, 100) as f64 / 100.0,
        b.clamp(0, 100) as f64 / 100.0,
    ])
}
