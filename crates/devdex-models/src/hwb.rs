//! HWB (hue, whiteness, blackness).
//!
//! HWB is HSV reparameterized: whiteness is the smallest channel and
//! blackness is one minus the largest.
//!
//! ```text
//! from RGB:  W = min,  B = 1 - max
//! to RGB:    if W + B >= 1: gray W / (W + B)
//!            else:          HSV(H, 1 - W / (1 - B), 1 - B)
//! ```
//!
//! # Legacy formula
//!
//! [`to_rgb_legacy`] follows the piecewise formula older callers relied
//! on, with every channel scaled consistently. Its blue channel is the blackness itself and ignores hue and
//! whiteness, so it does not round-trip with [`from_rgb`].

use crate::{hsv, hue};

/// Converts `[h, w, b]` to RGB in [0, 1].
///
/// # Example
///
/// ```rust
/// use devdex_models::hwb;
///
/// assert_eq!(hwb::to_rgb([0.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
/// assert_eq!(hwb::to_rgb([0.0, 0.5, 0.5]), [0.5, 0.5, 0.5]);
/// ```
pub fn to_rgb([h, w, b]: [f64; 3]) -> [f64; 3] {
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray, gray, gray];
    }

    let v = 1.0 - b;
    hsv::to_rgb([h, 1.0 - w / v, v])
}

/// Converts RGB in [0, 1] to `[h, w, b]`.
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let (max, min) = hue::extrema(rgb);
    [hue::from_rgb(rgb), min, 1.0 - max]
}

/// Piecewise HWB to RGB after the formula of the first release.
///
/// Red and green are `(c * w + m) * (1 - b)` and `(y * w + m) * (1 - b)`
/// for a per-sector `(c, m, y)`; blue is `b` unchanged. Results are not
/// clamped and red/green can exceed 1.
///
/// All three channels are treated as [0, 1] and scaled to 8 bits by the
/// caller. The first release scaled only blue and stored red and green
/// unscaled, so this keeps the shape of its output (blue tracks blackness,
/// hue only moves red and green) but not its exact numbers.
pub fn to_rgb_legacy([h, w, b]: [f64; 3]) -> [f64; 3] {
    let mut h = h / 360.0;

    let (c, m, y);
    if h < 1.0 / 6.0 {
        c = 1.0;
        m = 1.0 - h * 6.0;
        y = 1.0 - m;
    } else if h < 2.0 / 6.0 {
        h = 2.0 / 6.0 - h;
        c = h * 6.0 + 1.0;
        m = 1.0;
        y = 1.0 - c;
    } else if h < 3.0 / 6.0 {
        h -= 2.0 / 6.0;
        c = 1.0 - h * 6.0;
        m = 1.0;
        y = 1.0 - c;
    } else if h < 4.0 / 6.0 {
        h = 4.0 / 6.0 - h;
        c = 0.0;
        m = h * 6.0 + 1.0;
        y = 1.0 - m;
    } else if h < 5.0 / 6.0 {
        h -= 4.0 / 6.0;
        c = 0.0;
        m = 1.0 - h * 6.0;
        y = m;
    } else {
        h = 1.0 - h;
        c = h * 6.0 + 1.0;
        m = 0.0;
        y = 1.0 - c;
    }

    [(c * w + m) * (1.0 - b), (y * w + m) * (1.0 - b), b]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn to_u8(rgb: [f64; 3]) -> [i32; 3] {
        rgb.map(|v| (v * 255.0).round() as i32)
    }

    #[test]
    fn test_pure_hues() {
        assert_eq!(to_rgb([0.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
        assert_eq!(to_rgb([120.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_eq!(to_rgb([240.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_whiteness_blackness_saturate_to_gray() {
        assert_eq!(to_rgb([200.0, 1.0, 0.0]), [1.0, 1.0, 1.0]);
        assert_eq!(to_rgb([200.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
        // Over-specified: normalized by w + b
        assert_eq!(to_u8(to_rgb([10.0, 0.6, 0.6])), [128, 128, 128]);
    }

    #[test]
    fn test_from_rgb() {
        let [h, w, b] = from_rgb([0.2, 0.4, 0.6]);
        assert_abs_diff_eq!(h, 210.0, epsilon = 1e-9);
        assert_abs_diff_eq!(w, 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(b, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_legacy_blue_is_blackness() {
        for h in [0.0, 90.0, 180.0, 270.0] {
            let [_, _, blue] = to_rgb_legacy([h, 0.3, 0.25]);
            assert_eq!(blue, 0.25);
        }
    }

    #[test]
    fn test_legacy_first_sector() {
        // h = 0: c = 1, m = 1, y = 0
        assert_eq!(to_rgb_legacy([0.0, 0.5, 0.0]), [1.5, 1.0, 0.0]);
        assert_eq!(to_rgb_legacy([0.0, 0.0, 0.5]), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_roundtrip_channel_sweep() {
        for v in 0..=255 {
            for rgb in [[v, 0, 0], [0, v, 0], [0, 0, v], [v, v, v], [200, v, 30]] {
                let f = rgb.map(|c| c as f64 / 255.0);
                assert_eq!(to_u8(to_rgb(from_rgb(f))), rgb);
            }
        }
    }
}
