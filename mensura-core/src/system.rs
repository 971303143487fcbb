//! Coherent systems of units.

use crate::error::{Error, Result};
use core::fmt::{Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coherent system of units.
///
/// Each unit family maps a system to at most one *consistent* unit; see
/// [`Unit::consistent_unit`](crate::Unit::consistent_unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum System {
    /// Metre, kilogram, second, kelvin.
    MetreKilogramSecondKelvin,
    /// Millimetre, gram, second, kelvin.
    MillimetreGramSecondKelvin,
    /// Foot, pound, second, rankine.
    FootPoundSecondRankine,
    /// Inch, pound, second, rankine.
    InchPoundSecondRankine,
}

impl System {
    /// Every system, in declaration order.
    pub const ALL: [System; 4] = [
        System::MetreKilogramSecondKelvin,
        System::MillimetreGramSecondKelvin,
        System::FootPoundSecondRankine,
        System::InchPoundSecondRankine,
    ];

    /// Short display form, e.g. `"m·kg·s·K"`.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            System::MetreKilogramSecondKelvin => "m·kg·s·K",
            System::MillimetreGramSecondKelvin => "mm·g·s·K",
            System::FootPoundSecondRankine => "ft·lbf·s·°R",
            System::InchPoundSecondRankine => "in·lbf·s·°R",
        }
    }

    const fn spellings(self) -> &'static [&'static str] {
        match self {
            System::MetreKilogramSecondKelvin => &["m·kg·s·K", "m-kg-s-K", "mks", "MKS"],
            System::MillimetreGramSecondKelvin => &["mm·g·s·K", "mm-g-s-K", "mmgs", "MMGS"],
            System::FootPoundSecondRankine => &["ft·lbf·s·°R", "ft-lbf-s-R", "fps", "FPS"],
            System::InchPoundSecondRankine => &["in·lbf·s·°R", "in-lbf-s-R", "ips", "IPS"],
        }
    }
}

impl Display for System {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad(self.abbreviation())
    }
}

impl FromStr for System {
    type Err = Error;

    /// ```rust
    /// use mensura_core::System;
    /// assert_eq!("mm·g·s·K".parse::<System>(), Ok(System::MillimetreGramSecondKelvin));
    /// assert_eq!("ips".parse::<System>(), Ok(System::InchPoundSecondRankine));
    /// assert!("cgs".parse::<System>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        System::ALL
            .into_iter()
            .find(|system| system.spellings().contains(&s))
            .ok_or_else(|| Error::UnrecognizedSystem(s.to_string()))
    }
}
