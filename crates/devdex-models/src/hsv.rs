//! HSV (hue, saturation, value).
//!
//! Shares the sector table with HSL but derives chroma from value:
//!
//! ```text
//! to RGB:    C = V * S,  m = V - C
//! from RGB:  V = max,    S = (max - min) / max   (0 when max == 0)
//! ```
//!
//! HSV saturation is a different quantity from HSL saturation even though
//! both are called "saturation"; `hsv(0, 100%, 50%)` and `hsl(0, 100%, 50%)`
//! are different colors.

use crate::hue;

/// Converts `[h, s, v]` to RGB in [0, 1].
#[inline]
pub fn to_rgb([h, s, v]: [f64; 3]) -> [f64; 3] {
    let c = v * s;
    hue::chroma_to_rgb(h, c, v - c)
}

/// Converts RGB in [0, 1] to `[h, s, v]`.
pub fn from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let (max, min) = hue::extrema(rgb);
    let s = if max <= 0.0 { 0.0 } else { (max - min) / max };
    [hue::from_rgb(rgb), s, max]
}
