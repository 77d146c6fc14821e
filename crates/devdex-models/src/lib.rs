//! # devdex-models
//!
//! Numeric conversions between RGB and the derived color models.
//!
//! RGB is the hub: every model converts to and from RGB, never directly to
//! another model. All functions are pure and operate on `f64` triples.
//!
//! # Conventions
//!
//! | Model | Components | Range |
//! |-------|------------|-------|
//! | RGB | red, green, blue | [0, 1] |
//! | [`hsl`] | hue, saturation, lightness | [0, 360), [0, 1], [0, 1] |
//! | [`hsv`] | hue, saturation, value | [0, 360), [0, 1], [0, 1] |
//! | [`hwb`] | hue, whiteness, blackness | [0, 360), [0, 1], [0, 1] |
//! | [`cmy`] | cyan, magenta, yellow | [0, 1] |
//! | [`cmyk`] | cyan, magenta, yellow, black | [0, 1] |
//!
//! Scaling to 8-bit channels or integer percentages happens at the notation
//! boundary (`devdex-color`), not here.
//!
//! # Usage
//!
//! ```rust
//! use devdex_models::{hsl, cmyk};
//!
//! let rgb = hsl::to_rgb([240.0, 1.0, 0.5]);
//! assert_eq!(rgb, [0.0, 0.0, 1.0]);
//!
//! let [c, m, y, k] = cmyk::from_rgb([0.0, 0.0, 0.0]);
//! assert_eq!((c, m, y, k), (0.0, 0.0, 0.0, 1.0));
//! ```
//!
//! # Used By
//!
//! - `devdex-color` - canonical color model and notation formatters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hue;
pub mod hsl;
pub mod hsv;
pub mod hwb;
pub mod cmy;
pub mod cmyk;

// Re-export the RGB-side entry points under unambiguous names
pub use hsl::{from_rgb as rgb_to_hsl, to_rgb as hsl_to_rgb};
pub use hsv::{from_rgb as rgb_to_hsv, to_rgb as hsv_to_rgb};
pub use hwb::{from_rgb as rgb_to_hwb, to_rgb as hwb_to_rgb, to_rgb_legacy as hwb_to_rgb_legacy};
pub use cmy::{from_rgb as rgb_to_cmy, to_rgb as cmy_to_rgb};
pub use cmyk::{from_rgb as rgb_to_cmyk, to_rgb as cmyk_to_rgb};
