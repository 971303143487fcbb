//! Dynamic viscosity.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of dynamic viscosity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "dynamic viscosity",
    dimension = Dimension::new(-1, 1, -1, 0, 0, 0, 0),
    standard = PascalSecond
)]
pub enum DynamicViscosityUnit {
    /// Pascal second (Pa·s).
    #[unit(
        symbol = "Pa·s",
        ratio = 1.0,
        aliases = ["Pa*s", "Pa.s", "N·s/m^2", "kg/m/s"],
        systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin]
    )]
    PascalSecond,
    /// Millipascal second (mPa·s), equal to the centipoise.
    #[unit(symbol = "mPa·s", ratio = 1e-3, aliases = ["mPa*s", "mPa.s"])]
    MillipascalSecond,
    /// Poise (P).
    #[unit(symbol = "P", ratio = 0.1, aliases = ["poise"])]
    Poise,
    /// Centipoise (cP).
    #[unit(symbol = "cP", ratio = 1e-3, aliases = ["cp", "centipoise"])]
    Centipoise,
    /// Pound-force second per square foot (lbf·s/ft^2).
    #[unit(
        symbol = "lbf·s/ft^2",
        ratio = constants::POUND_FORCE / constants::squared(constants::FOOT),
        aliases = ["lbf*s/ft^2", "lbf.s/ft^2", "slug/ft/s"],
        systems = [FootPoundSecondRankine]
    )]
    PoundForceSecondPerSquareFoot,
    /// Pound-force second per square inch (lbf·s/in^2), the reyn.
    #[unit(
        symbol = "lbf·s/in^2",
        ratio = constants::POUND_FORCE / constants::squared(constants::INCH),
        aliases = ["lbf*s/in^2", "lbf.s/in^2", "reyn"],
        systems = [InchPoundSecondRankine]
    )]
    PoundForceSecondPerSquareInch,
}

/// Kind marker for dynamic viscosity.
pub enum DynamicViscosityKind {}
impl Kind for DynamicViscosityKind {
    type Unit = DynamicViscosityUnit;
    const NAME: &'static str = "DynamicViscosity";
}

/// Resistance of a fluid to shear flow.
pub type DynamicViscosity = Scalar<DynamicViscosityKind>;
