//! The unit-family trait.

use crate::conversion::Conversion;
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::system::System;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Trait implemented by every **unit family** enum (one variant per unit of measure).
///
/// Implementations are generated with `#[derive(Unit)]`. A family has:
///
/// * a fixed [`DIMENSION`](Unit::DIMENSION) shared by all its units,
/// * exactly one [`STANDARD`](Unit::STANDARD) unit that quantities are normalized to,
/// * an abbreviation plus any number of aliases per unit, all resolvable through [`parse`](Unit::parse),
/// * an optional consistent unit per [`System`],
/// * a complete N×N conversion table, held by its [`Registry`].
///
/// # Invariants
///
/// - `STANDARD.to_standard()` is the exact identity.
/// - Conversions are affine with a non-zero factor; ratio families have no offset.
/// - `ALL[u.index()] == u` for every unit `u`.
pub trait Unit:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = Error> + Send + Sync + 'static
{
    /// Human-readable family name, used in messages and logs.
    const FAMILY: &'static str;

    /// Dimension shared by every unit of the family.
    const DIMENSION: Dimension;

    /// Unit every quantity of the family is stored in.
    const STANDARD: Self;

    /// Every unit, in declaration order.
    const ALL: &'static [Self];

    /// Position of `self` in [`ALL`](Unit::ALL).
    fn index(self) -> usize;

    /// Display abbreviation, e.g. `"m/s^2"`.
    fn abbreviation(self) -> &'static str;

    /// Extra accepted spellings beyond the abbreviation.
    fn aliases(self) -> &'static [&'static str];

    /// Defining map from this unit into the standard unit.
    fn to_standard(self) -> Conversion;

    /// Consistent unit of the family in `system`, if the family maps that system.
    fn consistent_unit(system: System) -> Option<Self>;

    /// Lazily built lookup tables of the family.
    fn registry() -> &'static Registry<Self>;

    /// First system (in [`System::ALL`] order) whose consistent unit is `self`.
    fn related_system(self) -> Option<System> {
        System::ALL
            .into_iter()
            .find(|&system| Self::consistent_unit(system) == Some(self))
    }

    /// Like [`consistent_unit`](Unit::consistent_unit), but reports an unmapped system as an error.
    fn in_system(system: System) -> Result<Self> {
        Self::consistent_unit(system).ok_or(Error::UnmappedSystem {
            family: Self::FAMILY,
            system,
        })
    }

    /// Resolves any accepted spelling of a unit of this family.
    fn parse(spelling: &str) -> Result<Self> {
        Self::registry().lookup(spelling)
    }

    /// Conversion from `from` to `to`.
    fn conversion(from: Self, to: Self) -> Conversion {
        Self::registry().conversion(from, to)
    }

    /// Converts a batch of values from `from` to `to` in place.
    fn convert(values: &mut [f64], from: Self, to: Self) {
        if from != to {
            Self::conversion(from, to).apply_in_place(values);
        }
    }

    /// Converts a single value from `from` to `to`.
    fn convert_value(value: f64, from: Self, to: Self) -> f64 {
        if from == to {
            value
        } else {
            Self::conversion(from, to).apply(value)
        }
    }
}
