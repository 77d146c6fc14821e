//! HSL (hue, saturation, lightness).
//!
//! # Formula
//!
//! ```text
//! to RGB:
//!     C = (1 - |2L - 1|) * S
//!     X = C * (1 - |(H / 60) mod 2 - 1|)
//!     m = L - C / 2
//!     (R, G, B) = sector(H, C, X) + m
//!
//! from RGB:
//!     L = (max + min) / 2
//!     S = (max - min) / (1 - |2L - 1|)     (0 when max == min)
//! ```

use crate::hue;

/// Converts `[h, s, l]` to RGB in [0, 1].
///
/// Hue is in degrees and wraps; saturation and lightness are in [0, 1].
///
/// # Example
///
/// ```rust
/// use devdex_models::hsl;
///
/// assert_eq!(hsl::to_rgb([120.0, 1.0, 0.5]), [0.0, 1.0, 0.0]);
/// ```
#[inline]
pub fn to_rgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    hue::chroma_to_rgb(h, c, l - c / 2.0)
}

/// Converts RGB in [0, 1] to `[h, s, l]`.
///
/// # Example
///
/// ```rust
/// use devdex_models::hsl;
///
/// assert_eq!(hsl::from_rgb([0.0, 1.0, 0.0]), [120.0, 1.0, 0.5]);
/// ```
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let (max, min) = hue::extrema(rgb);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if delta <= 0.0 || denom <= 0.0 {
        0.0
    } else {
        (delta / denom).min(1.0)
    };

    [hue::from_rgb(rgb), s, l]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn to_u8(rgb: [f64; 3]) -> [i32; 3] {
        rgb.map(|v| (v * 255.0).round() as i32)
    }

    #[test]
    fn test_primaries() {
        assert_eq!(to_rgb([0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
        assert_eq!(to_rgb([120.0, 1.0, 0.5]), [0.0, 1.0, 0.0]);
        assert_eq!(to_rgb([240.0, 1.0, 0.5]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_gray_ignores_hue() {
        for h in [0.0, 90.0, 200.0, 359.0] {
            assert_eq!(to_u8(to_rgb([h, 0.0, 0.5])), [128, 128, 128]);
        }
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(to_rgb([77.0, 1.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(to_rgb([77.0, 1.0, 1.0]), [1.0, 1.0, 1.0]);
        assert_eq!(from_rgb([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(from_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_rgb_known_values() {
        // #336699
        let [h, s, l] = from_rgb([0.2, 0.4, 0.6]);
        assert_abs_diff_eq!(h, 210.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(l, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_sector_boundaries_continuous() {
        // At each sector edge both adjoining formulas must agree.
        for edge in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0] {
            let below = to_rgb([edge - 1e-9, 1.0, 0.5]);
            let at = to_rgb([edge, 1.0, 0.5]);
            for ch in 0..3 {
                assert_abs_diff_eq!(below[ch], at[ch], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_roundtrip_channel_sweep() {
        for v in 0..=255 {
            for rgb in [[v, 0, 0], [0, v, 0], [0, 0, v], [v, v, v], [255, v, 255 - v]] {
                let f = rgb.map(|c| c as f64 / 255.0);
                assert_eq!(to_u8(to_rgb(from_rgb(f))), rgb);
            }
        }
    }
}
