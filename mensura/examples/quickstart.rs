//! Minimal end-to-end example: convert an acceleration and derive one quantity from others.

use mensura::{AccelerationMagnitude, AccelerationUnit, Duration, Length, LengthUnit, Speed, SpeedUnit, TimeUnit};

fn main() {
    let a = AccelerationMagnitude::new(10.0, AccelerationUnit::MetrePerSquareSecond);
    assert!((a.to(AccelerationUnit::FootPerSquareSecond) - 32.8084).abs() < 1e-4);

    let v = Speed::new(5.0, SpeedUnit::MetrePerSecond);
    let t = Duration::new(2.0, TimeUnit::Second);
    assert_eq!(v / t, AccelerationMagnitude::new(2.5, AccelerationUnit::MetrePerSquareSecond));

    let d: Length = Speed::new(60.0, SpeedUnit::MilePerHour) * Duration::new(90.0, TimeUnit::Minute);
    println!("{} = {:.1} mi", d, d.to(LengthUnit::Mile));
}
