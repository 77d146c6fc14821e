//! The canonical color record.
//!
//! Every conversion pivots through [`Color`]. Its RGB triple is the ground
//! truth; the hex string and every other space are derived from it at
//! construction and cannot be set independently.
//!
//! # Rounding
//!
//! Derived components are computed in `f64` by [`devdex_models`] and then:
//! - hue is rounded and wrapped into [0, 360)
//! - percentages are rounded half away from zero and clamped to [0, 100]
//!
//! Out-of-range RGB (only the `rgb` parser can produce it) is kept verbatim
//! in [`Color::rgb`] and [`Color::hex`], but clamped to [0, 255] before the
//! other spaces are derived.

use std::fmt;

use devdex_models::{cmy, cmyk, hsl, hsv, hue, hwb};

/// Red, green, blue channels. Nominally [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb {
    /// Red
    pub r: i32,
    /// Green
    pub g: i32,
    /// Blue
    pub b: i32,
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: u16,
    /// Saturation, [0, 100]
    pub s: u8,
    /// Lightness, [0, 100]
    pub l: u8,
}

/// Hue, saturation, value.
///
/// `s` here is HSV saturation, numerically unrelated to [`Hsl::s`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsv {
    /// Hue in degrees, [0, 360)
    pub h: u16,
    /// Saturation, [0, 100]
    pub s: u8,
    /// Value, [0, 100]
    pub v: u8,
}

/// Hue, whiteness, blackness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hwb {
    /// Hue in degrees, [0, 360)
    pub h: u16,
    /// Whiteness, [0, 100]
    pub w: u8,
    /// Blackness, [0, 100]
    pub b: u8,
}

/// Cyan, magenta, yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cmy {
    /// Cyan, [0, 100]
    pub c: u8,
    /// Magenta, [0, 100]
    pub m: u8,
    /// Yellow, [0, 100]
    pub y: u8,
}

/// Cyan, magenta, yellow, black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cmyk {
    /// Cyan, [0, 100]
    pub c: u8,
    /// Magenta, [0, 100]
    pub m: u8,
    /// Yellow, [0, 100]
    pub y: u8,
    /// Black, [0, 100]
    pub k: u8,
}

/// A color in every supported space, anchored on RGB.
///
/// # Example
///
/// ```rust
/// use devdex_color::Color;
///
/// let teal = Color::from_rgb(0, 128, 128);
/// assert_eq!(teal.hex(), "#008080");
/// assert_eq!(teal.hsl().h, 180);
/// assert_eq!(teal.cmyk().k, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
    hwb: Hwb,
    cmy: Cmy,
    cmyk: Cmyk,
}

impl Color {
    /// Builds a color from 8-bit channels and derives every other space.
    ///
    /// Channels are not clamped for `rgb()` and `hex()`; see the module docs.
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        let unit = [r, g, b].map(|c| c.clamp(0, 255) as f64 / 255.0);

        let h = hue_degrees(hue::from_rgb(unit));
        let [_, hsl_s, hsl_l] = hsl::from_rgb(unit);
        let [_, hsv_s, hsv_v] = hsv::from_rgb(unit);
        let [_, hwb_w, hwb_b] = hwb::from_rgb(unit);
        let [cmy_c, cmy_m, cmy_y] = cmy::from_rgb(unit);
        let [cmyk_c, cmyk_m, cmyk_y, cmyk_k] = cmyk::from_rgb(unit);

        Self {
            hex: format!("#{}{}{}", hex_channel(r), hex_channel(g), hex_channel(b)),
            rgb: Rgb { r, g, b },
            hsl: Hsl {
                h,
                s: percent(hsl_s),
                l: percent(hsl_l),
            },
            hsv: Hsv {
                h,
                s: percent(hsv_s),
                v: percent(hsv_v),
            },
            hwb: Hwb {
                h,
                w: percent(hwb_w),
                b: percent(hwb_b),
            },
            cmy: Cmy {
                c: percent(cmy_c),
                m: percent(cmy_m),
                y: percent(cmy_y),
            },
            cmyk: Cmyk {
                c: percent(cmyk_c),
                m: percent(cmyk_m),
                y: percent(cmyk_y),
                k: percent(cmyk_k),
            },
        }
    }

    /// Builds a color from normalized RGB in [0, 1].
    ///
    /// Channels are scaled to 8 bits, rounded and clamped to [0, 255].
    pub fn from_unit_rgb(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| {
            let v = (c * 255.0).round();
            if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as i32 }
        });
        Self::from_rgb(r, g, b)
    }

    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// RGB channels as given.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// HSL derived from RGB.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// HSV derived from RGB.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// HWB derived from RGB.
    pub fn hwb(&self) -> Hwb {
        self.hwb
    }

    /// CMY derived from RGB.
    pub fn cmy(&self) -> Cmy {
        self.cmy
    }

    /// CMYK derived from RGB.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

fn hue_degrees(h: f64) -> u16 {
    (h.round() as i64).rem_euclid(360) as u16
}

fn percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

// Two lowercase digits for in-range channels. Out-of-range values keep
// every digit (and a sign) rather than being truncated to two.
fn hex_channel(v: i32) -> String {
    if v < 0 {
        format!("-{:x}", v.unsigned_abs())
    } else {
        format!("{:02x}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_red() {
        let c = Color::from_rgb(255, 0, 0);
        assert_eq!(c.hex(), "#ff0000");
        assert_eq!(c.hsl(), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(c.hsv(), Hsv { h: 0, s: 100, v: 100 });
        assert_eq!(c.hwb(), Hwb { h: 0, w: 0, b: 0 });
        assert_eq!(c.cmy(), Cmy { c: 0, m: 100, y: 100 });
        assert_eq!(c.cmyk(), Cmyk { c: 0, m: 100, y: 100, k: 0 });
    }

    #[test]
    fn test_hex_is_zero_padded_lowercase() {
        assert_eq!(Color::from_rgb(1, 10, 171).hex(), "#010aab");
        assert_eq!(Color::from_rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_hsl_and_hsv_saturation_differ() {
        // #336699
        let c = Color::from_rgb(51, 102, 153);
        assert_eq!(c.hsl(), Hsl { h: 210, s: 50, l: 40 });
        assert_eq!(c.hsv(), Hsv { h: 210, s: 67, v: 60 });
        assert_eq!(c.hwb(), Hwb { h: 210, w: 20, b: 40 });
        assert_eq!(c.cmy(), Cmy { c: 80, m: 60, y: 40 });
        assert_eq!(c.cmyk(), Cmyk { c: 67, m: 33, y: 0, k: 40 });
    }

    #[test]
    fn test_hue_rounding_wraps() {
        // hue 359.76 rounds to 360 and wraps to 0
        let c = Color::from_rgb(255, 0, 1);
        assert_eq!(c.hsl().h, 0);
    }

    #[test]
    fn test_black_cmyk() {
        let c = Color::from_rgb(0, 0, 0);
        assert_eq!(c.cmyk(), Cmyk { c: 0, m: 0, y: 0, k: 100 });
        assert_eq!(c.cmy(), Cmy { c: 100, m: 100, y: 100 });
    }

    #[test]
    fn test_out_of_range_rgb_kept_raw() {
        let c = Color::from_rgb(300, -1, 0);
        assert_eq!(c.rgb(), Rgb { r: 300, g: -1, b: 0 });
        assert_eq!(c.hex(), "#12c-100");
        // derived spaces see the clamped (255, 0, 0)
        assert_eq!(c.hsl(), Hsl { h: 0, s: 100, l: 50 });
    }

    #[test]
    fn test_from_unit_rgb_rounds_and_clamps() {
        assert_eq!(Color::from_unit_rgb([0.5, 1.2, -0.1]).rgb(), Rgb { r: 128, g: 255, b: 0 });
        assert_eq!(Color::from_unit_rgb([f64::NAN, 0.0, 1.0]).rgb(), Rgb { r: 0, g: 0, b: 255 });
    }
}
