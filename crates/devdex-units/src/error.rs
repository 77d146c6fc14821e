//! Error types for unit conversion.

use thiserror::Error;

/// Unit conversion error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Symbol is not in any table.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Units belong to different families.
    #[error("cannot convert {from} ({from_family}) to {to} ({to_family})")]
    FamilyMismatch {
        /// Source unit.
        from: String,
        /// Family of the source unit.
        from_family: String,
        /// Target unit.
        to: String,
        /// Family of the target unit.
        to_family: String,
    },
}

/// Result type for unit conversion.
pub type UnitResult<T> = Result<T, UnitError>;
