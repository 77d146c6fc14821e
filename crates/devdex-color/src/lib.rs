//! # devdex-color
//!
//! Round-trip conversion between textual color notations.
//!
//! A value written in one notation is parsed into a canonical [`Color`]
//! anchored on its RGB triple, and re-rendered in any other notation:
//!
//! | Notation | Example input | Output template |
//! |----------|---------------|-----------------|
//! | `hex` | `#f80`, `ff8800` | `#rrggbb` |
//! | `rgb` | `rgb(255, 136, 0)`, `255,136,0` | `rgb(r, g, b)` |
//! | `hsl` | `hsl(32, 100%, 50%)` | `hsl(h, s%, l%)` |
//! | `hsv` | `hsv(32, 100%, 100%)` | `hsv(h, s%, v%)` |
//! | `hwb` | `hwb(32, 0%, 0%)` | `hwb(h, w%, b%)` |
//! | `cmy` | `cmy(0%, 47%, 100%)` | `cmy(c%, m%, y%)` |
//! | `cmyk` | `cmyk(0, 0.47, 1, 0)` | `cmyk(c%, m%, y%, k%)` |
//!
//! # Architecture
//!
//! ```text
//!   text --parse--> Color (RGB + derived spaces) --format--> text
//!                        |
//!                  devdex-models
//!          (RGB <-> HSL/HSV/HWB/CMY/CMYK math)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use devdex_color::{convert, Notation};
//!
//! assert_eq!(convert("#ff0000", "hex", "rgb").unwrap(), "rgb(255, 0, 0)");
//! assert_eq!(
//!     devdex_color::convert_notation("rgb(0, 255, 0)", Notation::Rgb, Notation::Hsl).unwrap(),
//!     "hsl(120, 100%, 50%)",
//! );
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Notation`] and `Serialize`
//!   for [`Color`] and its component structs
//!
//! # Dependencies
//!
//! - [`devdex-models`] - numeric color model conversions
//!
//! # Used By
//!
//! - `devdex-cli` - the `devdex` command-line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod notation;
pub mod color;
pub mod convert;
pub mod format;
pub mod parse;

pub use color::{Cmy, Cmyk, Color, Hsl, Hsv, Hwb, Rgb};
pub use convert::{convert, convert_notation, ConvertOptions, Converter, HwbFormula};
pub use error::{Error, Result, Side};
pub use notation::{Notation, UnknownNotation};

// Re-export the model math for callers working with normalized values
pub use devdex_models as models;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        convert, convert_notation, Color, ConvertOptions, Converter, Error, HwbFormula, Notation,
        Result,
    };
}
