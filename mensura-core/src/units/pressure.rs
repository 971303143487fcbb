//! Stress: pressure and elastic moduli.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of pressure and stress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "pressure",
    dimension = Dimension::new(-1, 1, -2, 0, 0, 0, 0),
    standard = Pascal
)]
pub enum PressureUnit {
    /// Pascal (Pa).
    #[unit(
        symbol = "Pa",
        ratio = 1.0,
        aliases = ["N/m^2", "N/m2", "pascal"],
        systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin]
    )]
    Pascal,
    /// Kilopascal (kPa).
    #[unit(symbol = "kPa", ratio = 1e3, aliases = ["kilopascal"])]
    Kilopascal,
    /// Megapascal (MPa).
    #[unit(symbol = "MPa", ratio = 1e6, aliases = ["N/mm^2", "N/mm2", "megapascal"])]
    Megapascal,
    /// Gigapascal (GPa).
    #[unit(symbol = "GPa", ratio = 1e9, aliases = ["gigapascal"])]
    Gigapascal,
    /// Bar.
    #[unit(symbol = "bar", ratio = constants::BAR)]
    Bar,
    /// Standard atmosphere (atm).
    #[unit(symbol = "atm", ratio = constants::STANDARD_ATMOSPHERE, aliases = ["atmosphere"])]
    Atmosphere,
    /// Pound-force per square foot (lbf/ft^2).
    #[unit(
        symbol = "lbf/ft^2",
        ratio = constants::POUND_FORCE / constants::squared(constants::FOOT),
        aliases = ["lbf/ft2", "psf"],
        systems = [FootPoundSecondRankine]
    )]
    PoundForcePerSquareFoot,
    /// Pound-force per square inch (lbf/in^2).
    #[unit(
        symbol = "lbf/in^2",
        ratio = constants::POUND_FORCE / constants::squared(constants::INCH),
        aliases = ["lbf/in2", "psi"],
        systems = [InchPoundSecondRankine]
    )]
    PoundForcePerSquareInch,
}

/// Kind marker for pressure.
pub enum PressureKind {}
impl Kind for PressureKind {
    type Unit = PressureUnit;
    const NAME: &'static str = "Pressure";
}

/// Kind marker for the shear modulus.
pub enum ShearModulusKind {}
impl Kind for ShearModulusKind {
    type Unit = PressureUnit;
    const NAME: &'static str = "ShearModulus";
}

/// Kind marker for the isothermal bulk modulus.
pub enum IsothermalBulkModulusKind {}
impl Kind for IsothermalBulkModulusKind {
    type Unit = PressureUnit;
    const NAME: &'static str = "IsothermalBulkModulus";
}

/// Force per unit area.
pub type Pressure = Scalar<PressureKind>;

/// Ratio of shear stress to shear strain.
pub type ShearModulus = Scalar<ShearModulusKind>;

/// Resistance to uniform compression at constant temperature.
pub type IsothermalBulkModulus = Scalar<IsothermalBulkModulusKind>;
