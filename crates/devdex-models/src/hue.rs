//! Hue helpers shared by the cylindrical models (HSL, HSV, HWB).
//!
//! The hue circle is split into six 60 degree sectors. Inside each sector
//! two channels are linear in hue and the third is pinned, which gives the
//! table used by [`sector`]:
//!
//! ```text
//! [  0,  60)  (c, x, 0)
//! [ 60, 120)  (x, c, 0)
//! [120, 180)  (0, c, x)
//! [180, 240)  (0, x, c)
//! [240, 300)  (x, 0, c)
//! [300, 360)  (c, 0, x)
//! ```

/// Wraps any hue in degrees into [0, 360).
#[inline]
pub fn normalize(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Secondary component `x = c * (1 - |(h / 60) mod 2 - 1|)`.
#[inline]
pub fn secondary(h: f64, chroma: f64) -> f64 {
    chroma * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs())
}

/// Selects the pre-offset RGB triple for hue `h` (degrees, [0, 360)).
///
/// `c` is the chroma and `x` the secondary component from [`secondary`].
#[inline]
pub fn sector(h: f64, c: f64, x: f64) -> [f64; 3] {
    match h {
        h if h < 60.0 => [c, x, 0.0],
        h if h < 120.0 => [x, c, 0.0],
        h if h < 180.0 => [0.0, c, x],
        h if h < 240.0 => [0.0, x, c],
        h if h < 300.0 => [x, 0.0, c],
        _ => [c, 0.0, x],
    }
}

/// Rebuilds RGB from hue, chroma and the match offset `m`.
#[inline]
pub fn chroma_to_rgb(h: f64, chroma: f64, m: f64) -> [f64; 3] {
    let h = normalize(h);
    let [r, g, b] = sector(h, chroma, secondary(h, chroma));
    [r + m, g + m, b + m]
}

/// Largest and smallest channel of an RGB triple.
#[inline]
pub fn extrema([r, g, b]: [f64; 3]) -> (f64, f64) {
    (r.max(g).max(b), r.min(g).min(b))
}

/// Hue in degrees [0, 360) of an RGB triple.
///
/// Achromatic input (all channels equal) has hue 0.
pub fn from_rgb(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb;
    let (max, min) = extrema(rgb);
    let delta = max - min;
    if delta <= 0.0 {
        return 0.0;
    }

    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    normalize(h * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(-90.0), 270.0);
        assert_eq!(normalize(725.0), 5.0);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(from_rgb([1.0, 0.0, 0.0]), 0.0);
        assert_eq!(from_rgb([1.0, 1.0, 0.0]), 60.0);
        assert_eq!(from_rgb([0.0, 1.0, 0.0]), 120.0);
        assert_eq!(from_rgb([0.0, 1.0, 1.0]), 180.0);
        assert_eq!(from_rgb([0.0, 0.0, 1.0]), 240.0);
        assert_eq!(from_rgb([1.0, 0.0, 1.0]), 300.0);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        assert_eq!(from_rgb([0.0, 0.0, 0.0]), 0.0);
        assert_eq!(from_rgb([0.5, 0.5, 0.5]), 0.0);
        assert_eq!(from_rgb([1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_red_dominant_wraps() {
        // magenta-ish red: hue just below 360
        let h = from_rgb([1.0, 0.0, 0.1]);
        assert!(h > 350.0 && h < 360.0, "h={}", h);
    }

    #[test]
    fn test_secondary_peaks_at_sector_edges() {
        assert_abs_diff_eq!(secondary(0.0, 1.0), 0.0);
        assert_abs_diff_eq!(secondary(30.0, 1.0), 0.5);
        assert_abs_diff_eq!(secondary(60.0, 1.0), 1.0);
        assert_abs_diff_eq!(secondary(120.0, 1.0), 0.0);
    }
}
