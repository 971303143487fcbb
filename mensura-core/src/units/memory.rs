//! Amounts of digital information.
//!
//! Decimal prefixes are powers of 1000 and binary prefixes powers of 1024. No system of units has a consistent
//! memory unit, so [`Unit::in_system`](crate::Unit::in_system) always fails for this family.
//!
//! ```rust
//! use mensura_core::memory::{Memory, MemoryUnit};
//!
//! let image = Memory::new(2.0, MemoryUnit::Mebibyte);
//! assert_eq!(image.to(MemoryUnit::Kibibyte), 2048.0);
//! ```

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of digital information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "memory", dimension = Dimension::DIMENSIONLESS, standard = Bit)]
pub enum MemoryUnit {
    /// Bit (b).
    #[unit(symbol = "b", ratio = 1.0, aliases = ["bit", "bits"])]
    Bit,
    /// Byte (B).
    #[unit(symbol = "B", ratio = constants::BYTE, aliases = ["byte", "bytes"])]
    Byte,
    /// Kilobit (kb).
    #[unit(symbol = "kb", ratio = 1e3, aliases = ["kilobit", "kilobits", "kbit"])]
    Kilobit,
    /// Kilobyte (kB).
    #[unit(symbol = "kB", ratio = constants::BYTE * 1e3, aliases = ["kilobyte", "kilobytes"])]
    Kilobyte,
    /// Megabit (Mb).
    #[unit(symbol = "Mb", ratio = 1e6, aliases = ["megabit", "megabits", "Mbit"])]
    Megabit,
    /// Megabyte (MB).
    #[unit(symbol = "MB", ratio = constants::BYTE * 1e6, aliases = ["megabyte", "megabytes"])]
    Megabyte,
    /// Gigabit (Gb).
    #[unit(symbol = "Gb", ratio = 1e9, aliases = ["gigabit", "gigabits", "Gbit"])]
    Gigabit,
    /// Gigabyte (GB).
    #[unit(symbol = "GB", ratio = constants::BYTE * 1e9, aliases = ["gigabyte", "gigabytes"])]
    Gigabyte,
    /// Terabit (Tb).
    #[unit(symbol = "Tb", ratio = 1e12, aliases = ["terabit", "terabits", "Tbit"])]
    Terabit,
    /// Terabyte (TB).
    #[unit(symbol = "TB", ratio = constants::BYTE * 1e12, aliases = ["terabyte", "terabytes"])]
    Terabyte,
    /// Kibibit (Kib).
    #[unit(symbol = "Kib", ratio = constants::KIBI, aliases = ["kibibit", "kibibits", "Kibit"])]
    Kibibit,
    /// Kibibyte (KiB).
    #[unit(symbol = "KiB", ratio = constants::BYTE * constants::KIBI, aliases = ["kibibyte", "kibibytes"])]
    Kibibyte,
    /// Mebibit (Mib).
    #[unit(
        symbol = "Mib",
        ratio = constants::squared(constants::KIBI),
        aliases = ["mebibit", "mebibits", "Mibit"]
    )]
    Mebibit,
    /// Mebibyte (MiB).
    #[unit(
        symbol = "MiB",
        ratio = constants::BYTE * constants::squared(constants::KIBI),
        aliases = ["mebibyte", "mebibytes"]
    )]
    Mebibyte,
    /// Gibibit (Gib).
    #[unit(
        symbol = "Gib",
        ratio = constants::cubed(constants::KIBI),
        aliases = ["gibibit", "gibibits", "Gibit"]
    )]
    Gibibit,
    /// Gibibyte (GiB).
    #[unit(
        symbol = "GiB",
        ratio = constants::BYTE * constants::cubed(constants::KIBI),
        aliases = ["gibibyte", "gibibytes"]
    )]
    Gibibyte,
    /// Tebibit (Tib).
    #[unit(
        symbol = "Tib",
        ratio = constants::squared(constants::squared(constants::KIBI)),
        aliases = ["tebibit", "tebibits", "Tibit"]
    )]
    Tebibit,
    /// Tebibyte (TiB).
    #[unit(
        symbol = "TiB",
        ratio = constants::BYTE * constants::squared(constants::squared(constants::KIBI)),
        aliases = ["tebibyte", "tebibytes"]
    )]
    Tebibyte,
}

/// Kind marker for digital information.
pub enum MemoryKind {}
impl Kind for MemoryKind {
    type Unit = MemoryUnit;
    const NAME: &'static str = "Memory";
}

/// An amount of digital information.
pub type Memory = Scalar<MemoryKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::family_checks::assert_family_invariants;
    use crate::{Error, System, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn family_invariants() {
        assert_family_invariants::<MemoryUnit>();
    }

    #[test]
    fn decimal_and_binary_prefixes() {
        let m = Memory::new(1.0, MemoryUnit::Kilobyte);
        assert_eq!(m.value(), 8000.0);
        assert_relative_eq!(m.to(MemoryUnit::Kibibyte), 1000.0 / 1024.0, max_relative = 1e-15);
        assert_eq!(Memory::new(1.0, MemoryUnit::Tebibyte).to(MemoryUnit::Gibibyte), 1024.0);
        assert_eq!(Memory::new(1.0, MemoryUnit::Byte).to(MemoryUnit::Bit), 8.0);
    }

    #[test]
    fn case_distinguishes_bits_from_bytes() {
        assert_eq!(MemoryUnit::parse("Mb"), Ok(MemoryUnit::Megabit));
        assert_eq!(MemoryUnit::parse("MB"), Ok(MemoryUnit::Megabyte));
    }

    #[test]
    fn no_system_mapping() {
        for system in System::ALL {
            assert_eq!(
                MemoryUnit::in_system(system),
                Err(Error::UnmappedSystem { family: "memory", system })
            );
        }
        assert_eq!(MemoryUnit::Byte.related_system(), None);
        assert!(Memory::new(1.0, MemoryUnit::Bit)
            .print_in_system(System::MetreKilogramSecondKelvin)
            .is_err());
    }
}
