//! CMY (cyan, magenta, yellow), the subtractive complement of RGB.
//!
//! ```text
//! C = 1 - R,  M = 1 - G,  Y = 1 - B
//! ```

/// Converts `[c, m, y]` to RGB in [0, 1].
#[inline]
pub fn to_rgb([c, m, y]: [f64; 3]) -> [f64; 3] {
    [1.0 - c, 1.0 - m, 1.0 - y]
}

/// Converts RGB in [0, 1] to `[c, m, y]`.
#[inline]
pub fn from_rgb([r, g, b]: [f64; 3]) -> [f64; 3] {
    [1.0 - r, 1.0 - g, 1.0 - b]
}
