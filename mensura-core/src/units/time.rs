//! Durations.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "time", dimension = Dimension::TIME, standard = Second)]
pub enum TimeUnit {
    /// Nanosecond (ns).
    #[unit(symbol = "ns", ratio = 1e-9, aliases = ["nsec", "nanosecond", "nanoseconds"])]
    Nanosecond,
    /// Microsecond (μs).
    #[unit(symbol = "μs", ratio = 1e-6, aliases = ["us", "μsec", "usec", "microsecond", "microseconds"])]
    Microsecond,
    /// Millisecond (ms).
    #[unit(symbol = "ms", ratio = 1e-3, aliases = ["msec", "millisecond", "milliseconds"])]
    Millisecond,
    /// Second (s).
    #[unit(
        symbol = "s",
        ratio = 1.0,
        aliases = ["sec", "secs", "second", "seconds"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    Second,
    /// Minute (min).
    #[unit(symbol = "min", ratio = constants::MINUTE, aliases = ["mins", "minute", "minutes"])]
    Minute,
    /// Hour (hr).
    #[unit(symbol = "hr", ratio = constants::HOUR, aliases = ["h", "hrs", "hour", "hours"])]
    Hour,
    /// Day of 86 400 s (d).
    #[unit(symbol = "d", ratio = constants::DAY, aliases = ["day", "days"])]
    Day,
}

/// Kind marker for durations.
pub enum DurationKind {}
impl Kind for DurationKind {
    type Unit = TimeUnit;
    const NAME: &'static str = "Duration";
}

/// A span of time.
pub type Duration = Scalar<DurationKind>;

impl From<core::time::Duration> for Duration {
    /// ```rust
    /// use mensura_core::time::Duration;
    /// let d = Duration::from(std::time::Duration::from_millis(1500));
    /// assert_eq!(d.value(), 1.5);
    /// ```
    fn from(value: core::time::Duration) -> Self {
        Duration::from_standard(value.as_secs_f64())
    }
}
