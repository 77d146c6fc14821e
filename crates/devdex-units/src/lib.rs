//! # devdex-units
//!
//! Scale-factor unit conversion.
//!
//! Every unit belongs to one family and carries its size relative to the
//! family's base unit. A conversion is `value * from.factor / to.factor`
//! and is only defined inside a family.
//!
//! - [`physical`] - length, mass, volume, pressure, energy, power, area,
//!   time, speed
//! - [`data`] - byte sizes with decimal (`kB`) and binary (`KiB`) prefixes
//!
//! Temperature is not a scale-factor family (it has offsets) and is not
//! provided.
//!
//! # Usage
//!
//! ```rust
//! use devdex_units::{physical, data};
//!
//! let inches = physical::convert(10.0, "cm", "in").unwrap();
//! assert!((inches - 3.937007874015748).abs() < 1e-12);
//!
//! assert_eq!(data::convert(1.0, "KiB", "B").unwrap(), 1024.0);
//! assert!(physical::convert(1.0, "kg", "m").is_err());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod data;
pub mod physical;

pub use error::{UnitError, UnitResult};

/// A unit and its size relative to its family's base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit<F> {
    /// Symbol as accepted by the lookup functions.
    pub symbol: &'static str,
    /// Family the unit belongs to.
    pub family: F,
    /// Size in base units.
    pub factor: f64,
}

impl<F: Copy + PartialEq + std::fmt::Display> Unit<F> {
    /// Converts `value` from `self` to `to`.
    ///
    /// # Errors
    ///
    /// [`UnitError::FamilyMismatch`] if the units measure different things.
    pub fn convert_to(&self, value: f64, to: &Unit<F>) -> UnitResult<f64> {
        if self.family != to.family {
            return Err(UnitError::FamilyMismatch {
                from: self.symbol.to_string(),
                from_family: self.family.to_string(),
                to: to.symbol.to_string(),
                to_family: to.family.to_string(),
            });
        }
        Ok(value * self.factor / to.factor)
    }
}
