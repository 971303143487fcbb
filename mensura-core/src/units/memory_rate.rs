//! Rates of digital information.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of information per unit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "memory rate",
    dimension = Dimension::new(0, 0, -1, 0, 0, 0, 0),
    standard = BitPerSecond
)]
pub enum MemoryRateUnit {
    /// Bit per second (b/s).
    #[unit(symbol = "b/s", ratio = 1.0, aliases = ["b/sec", "bit/s", "bits/s", "bps"])]
    BitPerSecond,
    /// Byte per second (B/s).
    #[unit(symbol = "B/s", ratio = constants::BYTE, aliases = ["B/sec", "byte/s", "bytes/s", "Bps"])]
    BytePerSecond,
    /// Kilobit per second (kb/s).
    #[unit(symbol = "kb/s", ratio = 1e3, aliases = ["kb/sec", "kilobit/s", "kilobits/s", "kbps"])]
    KilobitPerSecond,
    /// Kilobyte per second (kB/s).
    #[unit(
        symbol = "kB/s",
        ratio = constants::BYTE * 1e3,
        aliases = ["kB/sec", "kilobyte/s", "kilobytes/s", "kBps"]
    )]
    KilobytePerSecond,
    /// Megabit per second (Mb/s).
    #[unit(symbol = "Mb/s", ratio = 1e6, aliases = ["Mb/sec", "megabit/s", "megabits/s", "Mbps"])]
    MegabitPerSecond,
    /// Megabyte per second (MB/s).
    #[unit(
        symbol = "MB/s",
        ratio = constants::BYTE * 1e6,
        aliases = ["MB/sec", "megabyte/s", "megabytes/s", "MBps"]
    )]
    MegabytePerSecond,
    /// Gigabit per second (Gb/s).
    #[unit(symbol = "Gb/s", ratio = 1e9, aliases = ["Gb/sec", "gigabit/s", "gigabits/s", "Gbps"])]
    GigabitPerSecond,
    /// Gigabyte per second (GB/s).
    #[unit(
        symbol = "GB/s",
        ratio = constants::BYTE * 1e9,
        aliases = ["GB/sec", "gigabyte/s", "gigabytes/s", "GBps"]
    )]
    GigabytePerSecond,
    /// Terabit per second (Tb/s).
    #[unit(symbol = "Tb/s", ratio = 1e12, aliases = ["Tb/sec", "terabit/s", "terabits/s", "Tbps"])]
    TerabitPerSecond,
    /// Terabyte per second (TB/s).
    #[unit(
        symbol = "TB/s",
        ratio = constants::BYTE * 1e12,
        aliases = ["TB/sec", "terabyte/s", "terabytes/s", "TBps"]
    )]
    TerabytePerSecond,
    /// Kibibit per second (Kib/s).
    #[unit(
        symbol = "Kib/s",
        ratio = constants::KIBI,
        aliases = ["Kib/sec", "kibibit/s", "kibibits/s", "Kibps"]
    )]
    KibibitPerSecond,
    /// Kibibyte per second (KiB/s).
    #[unit(
        symbol = "KiB/s",
        ratio = constants::BYTE * constants::KIBI,
        aliases = ["KiB/sec", "kibibyte/s", "kibibytes/s", "KiBps"]
    )]
    KibibytePerSecond,
    /// Mebibit per second (Mib/s).
    #[unit(
        symbol = "Mib/s",
        ratio = constants::squared(constants::KIBI),
        aliases = ["Mib/sec", "mebibit/s", "mebibits/s", "Mibps"]
    )]
    MebibitPerSecond,
    /// Mebibyte per second (MiB/s).
    #[unit(
        symbol = "MiB/s",
        ratio = constants::BYTE * constants::squared(constants::KIBI),
        aliases = ["MiB/sec", "mebibyte/s", "mebibytes/s", "MiBps"]
    )]
    MebibytePerSecond,
    /// Gibibit per second (Gib/s).
    #[unit(
        symbol = "Gib/s",
        ratio = constants::cubed(constants::KIBI),
        aliases = ["Gib/sec", "gibibit/s", "gibibits/s", "Gibps"]
    )]
    GibibitPerSecond,
    /// Gibibyte per second (GiB/s).
    #[unit(
        symbol = "GiB/s",
        ratio = constants::BYTE * constants::cubed(constants::KIBI),
        aliases = ["GiB/sec", "gibibyte/s", "gibibytes/s", "GiBps"]
    )]
    GibibytePerSecond,
    /// Tebibit per second (Tib/s).
    #[unit(
        symbol = "Tib/s",
        ratio = constants::squared(constants::squared(constants::KIBI)),
        aliases = ["Tib/sec", "tebibit/s", "tebibits/s", "Tibps"]
    )]
    TebibitPerSecond,
    /// Tebibyte per second (TiB/s).
    #[unit(
        symbol = "TiB/s",
        ratio = constants::BYTE * constants::squared(constants::squared(constants::KIBI)),
        aliases = ["TiB/sec", "tebibyte/s", "tebibytes/s", "TiBps"]
    )]
    TebibytePerSecond,
}

/// Kind marker for information rates.
pub enum MemoryRateKind {}
impl Kind for MemoryRateKind {
    type Unit = MemoryRateUnit;
    const NAME: &'static str = "MemoryRate";
}

/// Bandwidth or throughput.
pub type MemoryRate = Scalar<MemoryRateKind>;
