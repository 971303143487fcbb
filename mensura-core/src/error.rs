//! Error type shared by every fallible operation in the crate.

use crate::System;

/// Errors returned by unit lookup, system mapping and checked physical formulas.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No unit of the family is spelled this way.
    #[error("unrecognized {family} unit: \"{spelling}\"")]
    UnrecognizedUnit {
        /// Family that was searched.
        family: &'static str,
        /// The rejected input.
        spelling: String,
    },

    /// The string does not name a system of units.
    #[error("unrecognized system of units: \"{0}\"")]
    UnrecognizedSystem(String),

    /// The family has no consistent unit in the requested system.
    #[error("the {family} family has no consistent unit in the {system} system")]
    UnmappedSystem {
        /// Family that was queried.
        family: &'static str,
        /// Requested system.
        system: System,
    },

    /// A direction cannot be built from the zero vector.
    #[error("attempting to create a direction from (0, 0, 0)")]
    ZeroDirection,

    /// The cross product of parallel directions has no direction.
    #[error("cross product of parallel directions has no direction")]
    ParallelDirections,

    /// A formula divided by a quantity whose value is zero.
    #[error("division of {dividend} by {divisor}")]
    DivisionByZero {
        /// Rendered dividend.
        dividend: String,
        /// Rendered divisor.
        divisor: String,
    },

    /// The numeric part of a quantity string could not be parsed.
    #[error("invalid number: \"{0}\"")]
    InvalidNumber(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
