//! Notation formatters.
//!
//! Rendering is total: any [`Color`] can be written in any [`Notation`].
//! Each component struct implements [`Display`](fmt::Display) with its
//! template, so they can be used on their own as well.

use std::fmt;

use crate::{Cmy, Cmyk, Color, Hsl, Hsv, Hwb, Notation, Rgb};

/// Renders `color` in `notation`.
///
/// # Example
///
/// ```rust
/// use devdex_color::{format, Color, Notation};
///
/// let c = Color::from_rgb(255, 0, 0);
/// assert_eq!(format::format(&c, Notation::Hsl), "hsl(0, 100%, 50%)");
/// assert_eq!(format::format(&c, Notation::Cmyk), "cmyk(0%, 100%, 100%, 0%)");
/// ```
pub fn format(color: &Color, notation: Notation) -> String {
    match notation {
        Notation::Hex => color.hex().to_owned(),
        Notation::Rgb => color.rgb().to_string(),
        Notation::Hsl => color.hsl().to_string(),
        Notation::Hsv => color.hsv().to_string(),
        Notation::Hwb => color.hwb().to_string(),
        Notation::Cmy => color.cmy().to_string(),
        Notation::Cmyk => color.cmyk().to_string(),
    }
}

/// Renders `color` in every notation, in [`Notation::ALL`] order.
pub fn format_all(color: &Color) -> Vec<(Notation, String)> {
    Notation::ALL
        .into_iter()
        .map(|n| (n, format(color, n)))
        .collect()
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hwb({}, {}%, {}%)", self.h, self.w, self.b)
    }
}

impl fmt::Display for Cmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmy({}%, {}%, {}%)", self.c, self.m, self.y)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        // #336699
        let c = Color::from_rgb(51, 102, 153);
        assert_eq!(format(&c, Notation::Hex), "#336699");
        assert_eq!(format(&c, Notation::Rgb), "rgb(51, 102, 153)");
        assert_eq!(format(&c, Notation::Hsl), "hsl(210, 50%, 40%)");
        assert_eq!(format(&c, Notation::Hsv), "hsv(210, 67%, 60%)");
        assert_eq!(format(&c, Notation::Hwb), "hwb(210, 20%, 40%)");
        assert_eq!(format(&c, Notation::Cmy), "cmy(80%, 60%, 40%)");
        assert_eq!(format(&c, Notation::Cmyk), "cmyk(67%, 33%, 0%, 40%)");
    }

    #[test]
    fn test_format_all_order() {
        let all = format_all(&Color::from_rgb(0, 0, 0));
        let order: Vec<Notation> = all.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, Notation::ALL);
        assert_eq!(all[6].1, "cmyk(0%, 0%, 0%, 100%)");
    }

    #[test]
    fn test_out_of_range_rgb_renders_verbatim() {
        let c = Color::from_rgb(-5, 256, 0);
        assert_eq!(format(&c, Notation::Rgb), "rgb(-5, 256, 0)");
        assert_eq!(format(&c, Notation::Hex), "#-510000");
    }
}
