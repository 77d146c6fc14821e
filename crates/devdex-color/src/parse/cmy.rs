//! CMY grammar: `cmy(c%, m%, y%)`.

use devdex_models::cmy as cmy_model;

use super::{components, percent_float, strip_function};
use crate::{Color, Error, Notation, Result};

/// Parses three percentages (the `%` is optional) into a color.
///
/// Components may be decimals; each is divided by 100 and clamped to
/// [0, 1].
pub fn cmy(text: &str) -> Result<Color> {
    let err = || Error::parse(Notation::Cmy, text);

    let body = strip_function(text, "cmy");
    let parts = components::<3>(&body).ok_or_else(err)?;

    let mut cmy = [0.0; 3];
    for (slot, part) in cmy.iter_mut().zip(parts) {
        *slot = (percent_float(part).ok_or_else(err)? / 100.0).clamp(0.0, 1.0);
    }

    Ok(Color::from_unit_rgb(cmy_model::to_rgb(cmy)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn test_percentages() {
        assert_eq!(cmy("cmy(0%, 100%, 100%)").unwrap().hex(), "#ff0000");
        assert_eq!(cmy("cmy(0, 0, 0)").unwrap().hex(), "#ffffff");
        assert_eq!(cmy("50%, 50%, 50%").unwrap().rgb(), Rgb { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_decimals_and_clamping() {
        assert_eq!(cmy("cmy(12.5%, 0%, 0%)").unwrap().rgb().r, 223);
        assert_eq!(cmy("cmy(150%, -20%, 0%)").unwrap().rgb(), Rgb { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_errors() {
        let bad = [
            "cmy(1, 2)",
            "cmy(a, b, c)",
            "cmy(1%%, 2, 3)",
            "cmyk(0, 0, 0)",
            "cmy(inf, 0, 0)",
        ];
        for text in bad {
            assert_eq!(cmy(text).unwrap_err(), Error::parse(Notation::Cmy, text));
        }
    }
}
