//! Frequency.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "frequency",
    dimension = Dimension::new(0, 0, -1, 0, 0, 0, 0),
    standard = Hertz
)]
pub enum FrequencyUnit {
    /// Hertz (Hz).
    #[unit(
        symbol = "Hz",
        ratio = 1.0,
        aliases = ["hz", "1/s", "/s", "s^-1", "hertz"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    Hertz,
    /// Kilohertz (kHz).
    #[unit(symbol = "kHz", ratio = 1e3, aliases = ["khz", "kilohertz"])]
    Kilohertz,
    /// Megahertz (MHz).
    #[unit(symbol = "MHz", ratio = 1e6, aliases = ["megahertz"])]
    Megahertz,
    /// Gigahertz (GHz).
    #[unit(symbol = "GHz", ratio = 1e9, aliases = ["ghz", "gigahertz"])]
    Gigahertz,
    /// Once per minute (1/min).
    #[unit(symbol = "1/min", ratio = 1.0 / constants::MINUTE, aliases = ["/min", "per minute"])]
    PerMinute,
    /// Once per hour (1/hr).
    #[unit(symbol = "1/hr", ratio = 1.0 / constants::HOUR, aliases = ["/hr", "1/h", "per hour"])]
    PerHour,
}

/// Kind marker for frequency.
pub enum FrequencyKind {}
impl Kind for FrequencyKind {
    type Unit = FrequencyUnit;
    const NAME: &'static str = "Frequency";
}

/// Number of events per unit time.
pub type Frequency = Scalar<FrequencyKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::family_checks::assert_family_invariants;
    use approx::assert_relative_eq;

    #[test]
    fn family_invariants() {
        assert_family_invariants::<FrequencyUnit>();
    }

    #[test]
    fn prefixes() {
        let f = Frequency::new(2.4, FrequencyUnit::Gigahertz);
        assert_relative_eq!(f.to(FrequencyUnit::Megahertz), 2400.0, max_relative = 1e-12);
        assert_relative_eq!(
            Frequency::new(60.0, FrequencyUnit::PerMinute).to(FrequencyUnit::Hertz),
            1.0,
            max_relative = 1e-15
        );
    }
}
