//! CMYK (cyan, magenta, yellow, key/black).
//!
//! # Formula
//!
//! ```text
//! from RGB:
//!     K = 1 - max(R, G, B)
//!     C = (1 - R - K) / (1 - K)    (0 when K == 1)
//!     M = (1 - G - K) / (1 - K)
//!     Y = (1 - B - K) / (1 - K)
//!
//! to RGB:
//!     R = (1 - C) * (1 - K), ...
//! ```

/// Converts `[c, m, y, k]` to RGB in [0, 1].
///
/// # Example
///
/// ```rust
/// use devdex_models::cmyk;
///
/// assert_eq!(cmyk::to_rgb([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
/// assert_eq!(cmyk::to_rgb([0.0, 1.0, 1.0, 0.0]), [1.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn to_rgb([c, m, y, k]: [f64; 4]) -> [f64; 3] {
    [(1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k)]
}

/// Converts RGB in [0, 1] to `[c, m, y, k]`.
pub fn from_rgb([r, g, b]: [f64; 3]) -> [f64; 4] {
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let w = 1.0 - k;
    [(1.0 - r - k) / w, (1.0 - g - k) / w, (1.0 - b - k) / w, k]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_avoids_division_by_zero() {
        assert_eq!(from_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_white() {
        assert_eq!(from_rgb([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(to_rgb([0.0, 0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_known_values() {
        // #336699
        let [c, m, y, k] = from_rgb([0.2, 0.4, 0.6]);
        assert_abs_diff_eq!(c, 2.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m, 1.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(k, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_roundtrip_channel_sweep() {
        for v in 0..=255 {
            for rgb in [[v, 0, 0], [v, v, v], [255, v, 255 - v], [3, v, 9]] {
                let f = rgb.map(|c| c as f64 / 255.0);
                let back = to_rgb(from_rgb(f)).map(|c| (c * 255.0).round() as i32);
                assert_eq!(back, rgb);
            }
        }
    }
}
