//! Integration-level tests for the `mensura` facade crate.

use mensura::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn acceleration_metres_to_feet() {
    let a = AccelerationMagnitude::new(10.0, AccelerationUnit::MetrePerSquareSecond);
    assert_abs_diff_eq!(a.to(AccelerationUnit::FootPerSquareSecond), 32.8084, epsilon = 1e-4);
}

#[test]
fn speed_over_duration_is_acceleration() {
    let v = Speed::new(5.0, SpeedUnit::MetrePerSecond);
    let t = Duration::new(2.0, TimeUnit::Second);
    assert_eq!(v / t, AccelerationMagnitude::new(2.5, AccelerationUnit::MetrePerSquareSecond));
}

#[test]
fn unit_spellings() {
    assert_eq!(AccelerationUnit::parse("km/s^2"), Ok(AccelerationUnit::KilometrePerSquareSecond));
    assert_eq!("  ft/sec/sec ".parse::<AccelerationUnit>(), Ok(AccelerationUnit::FootPerSquareSecond));
    let err = AccelerationUnit::parse("banana").unwrap_err();
    assert_eq!(err.to_string(), "unrecognized acceleration unit: \"banana\"");
}

#[test]
fn quantity_strings() {
    let t: Temperature = "68 °F".parse().unwrap();
    assert_abs_diff_eq!(t.to(TemperatureUnit::Celsius), 20.0, epsilon = 1e-9);

    assert_eq!(
        "fast m/s".parse::<Speed>(),
        Err(Error::InvalidNumber("fast".into()))
    );
    assert!(matches!("3 furlongs".parse::<Length>(), Err(Error::UnrecognizedUnit { .. })));
}

#[test]
fn standard_unit_display() {
    let p = Pressure::new(1.0, PressureUnit::Kilopascal);
    assert_eq!(p.to_string(), "1000 Pa");
    assert_eq!(format!("{:.2}", Length::new(1.0, LengthUnit::Inch)), "0.03 m");
    assert_eq!(PoissonRatio::from_number(0.25).to_string(), "0.25");
}

#[test]
fn number_rendering() {
    assert_eq!(format::number_to_string(0.0), "0");
    assert_eq!(format::number_to_string(1.5), "1.5");
    assert_eq!(Length::new(1e-9, LengthUnit::Metre).print(), "1e-9");
    assert_eq!(Memory::new(1.0, MemoryUnit::Tebibyte).json(), "8796093022208");
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems of units
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn consistent_units_per_system() {
    assert_eq!(LengthUnit::in_system(System::MetreKilogramSecondKelvin), Ok(LengthUnit::Metre));
    assert_eq!(LengthUnit::in_system(System::MillimetreGramSecondKelvin), Ok(LengthUnit::Millimetre));
    assert_eq!(LengthUnit::in_system(System::FootPoundSecondRankine), Ok(LengthUnit::Foot));
    assert_eq!(LengthUnit::in_system(System::InchPoundSecondRankine), Ok(LengthUnit::Inch));
    assert_eq!(
        PressureUnit::in_system(System::InchPoundSecondRankine),
        Ok(PressureUnit::PoundForcePerSquareInch)
    );
    assert_eq!(
        MemoryUnit::in_system(System::MetreKilogramSecondKelvin),
        Err(Error::UnmappedSystem {
            family: "memory",
            system: System::MetreKilogramSecondKelvin,
        })
    );
}

#[test]
fn system_round_trip_through_strings() {
    for system in System::ALL {
        assert_eq!(system.to_string().parse::<System>(), Ok(system));
    }
    assert!(matches!("cgs".parse::<System>(), Err(Error::UnrecognizedSystem(_))));
}

#[test]
fn values_in_a_system() {
    let t = Temperature::new(20.0, TemperatureUnit::Celsius);
    assert_abs_diff_eq!(t.in_system(System::FootPoundSecondRankine).unwrap(), 527.67, epsilon = 1e-9);
    let g = AccelerationMagnitude::new(1.0, AccelerationUnit::StandardGravity);
    assert_relative_eq!(
        g.in_system(System::MillimetreGramSecondKelvin).unwrap(),
        9806.65,
        max_relative = 1e-12
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Vectors and directions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn velocity_from_speed_and_heading() {
    let heading = Direction::new(3.0, 4.0, 0.0).unwrap();
    let v = Speed::new(10.0, SpeedUnit::MetrePerSecond) * heading;
    assert_relative_eq!(v.x().value(), 6.0, max_relative = 1e-12);
    assert_relative_eq!(v.y().value(), 8.0, max_relative = 1e-12);
    assert_relative_eq!(v.magnitude().value(), 10.0, max_relative = 1e-12);
    let back = v.direction().unwrap();
    assert_relative_eq!(back.dot(&heading), 1.0, max_relative = 1e-12);
}

#[test]
fn direction_algebra() {
    let x = Direction::new(1.0, 0.0, 0.0).unwrap();
    let y = Direction::new(0.0, 1.0, 0.0).unwrap();
    let z = x.cross(&y).unwrap();
    assert_eq!(z.x_y_z(), [0.0, 0.0, 1.0]);
    assert_eq!(x.cross(&x), Err(Error::ParallelDirections));
    assert_relative_eq!(x.angle(&y).to(AngleUnit::Degree), 90.0, max_relative = 1e-12);
    assert_eq!(x.dyadic(&y)[(0, 1)], 1.0);
    assert_eq!(Direction::new(0.0, 0.0, 0.0), Err(Error::ZeroDirection));
}

#[test]
fn vector_outputs() {
    let g = TemperatureGradient::new([1.0, -2.0, 0.5], TemperatureGradientUnit::KelvinPerMetre);
    assert_eq!(g.print(), "(1, -2, 0.5)");
    assert_eq!(g.json(), r#"{"x":1,"y":-2,"z":0.5}"#);
    assert_eq!(g.xml(), "<x>1</x><y>-2</y><z>0.5</z>");
    assert_eq!(g.to_string(), "(1, -2, 0.5) K/m");
}

#[test]
fn falling_body() {
    let g = Acceleration::new([0.0, 0.0, -1.0], AccelerationUnit::StandardGravity);
    let t = Duration::new(3.0, TimeUnit::Second);
    let v: Velocity = g * t;
    let drop: Position = v * t / 2.0;
    assert_relative_eq!(drop.to(LengthUnit::Metre)[2], -44.129925, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived relations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn relations_close_algebraically() {
    let rho = MassDensity::new(998.0, MassDensityUnit::KilogramPerCubicMetre);
    let nu = KinematicViscosity::new(1.004, DiffusivityUnit::Centistokes);
    let mu: DynamicViscosity = nu * rho;
    assert_relative_eq!((mu / rho).value(), nu.value(), max_relative = 1e-12);
    assert_relative_eq!((mu / nu).value(), rho.value(), max_relative = 1e-12);

    let gradient = TemperatureGradientMagnitude::new(3.0, TemperatureGradientUnit::RankinePerFoot);
    let thickness = Length::new(2.0, LengthUnit::Foot);
    let dt = gradient * thickness;
    assert_relative_eq!(dt.to(TemperatureDifferenceUnit::Rankine), 6.0, max_relative = 1e-12);
    assert_relative_eq!((dt / thickness).unwrap().value(), gradient.value(), max_relative = 1e-12);
}

#[test]
fn temperature_arithmetic() {
    let morning = Temperature::new(12.0, TemperatureUnit::Celsius);
    let noon = morning + TemperatureDifference::new(9.0, TemperatureDifferenceUnit::Fahrenheit);
    assert_abs_diff_eq!(noon.to(TemperatureUnit::Celsius), 17.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        noon.difference(morning).to(TemperatureDifferenceUnit::Kelvin),
        5.0,
        epsilon = 1e-9
    );
}

#[test]
fn batch_conversion() {
    let mut readings = [0.0, 100.0, -40.0];
    TemperatureUnit::convert(&mut readings, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    for (got, want) in readings.iter().zip([32.0, 212.0, -40.0]) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Survey {
        #[serde(with = "mensura::serde_with_unit")]
        depth: Length,
        velocity: Velocity,
        heading: Direction,
        system: System,
    }

    #[test]
    fn scalar_is_a_bare_number() {
        let l = Length::new(2.0, LengthUnit::Kilometre);
        assert_eq!(serde_json::to_string(&l).unwrap(), "2000.0");
        let back: Length = serde_json::from_str("2000.0").unwrap();
        assert_eq!(back, l);
    }

    #[test]
    fn struct_round_trip() {
        let survey = Survey {
            depth: Length::new(12.0, LengthUnit::Foot),
            velocity: Velocity::new([1.0, 2.0, 3.0], SpeedUnit::MetrePerSecond),
            heading: Direction::new(0.0, 1.0, 0.0).unwrap(),
            system: System::FootPoundSecondRankine,
        };
        let json = serde_json::to_string(&survey).unwrap();
        assert!(json.contains(r#""unit":"m""#));
        assert!(json.contains(r#""velocity":{"x":1.0,"y":2.0,"z":3.0}"#));
        let back: Survey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, survey);
    }

    #[test]
    fn with_unit_accepts_any_spelling() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(with = "mensura::serde_with_unit")]
            t: Temperature,
        }
        let w: Wrapper = serde_json::from_str(r#"{"t":{"value":32.0,"unit":"degF"}}"#).unwrap();
        assert_abs_diff_eq!(w.t.value(), 273.15, epsilon = 1e-9);

        let bad = serde_json::from_str::<Wrapper>(r#"{"t":{"value":1.0,"unit":"banana"}}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn direction_is_normalized_on_read() {
        let d: Direction = serde_json::from_str(r#"{"x":0.0,"y":0.0,"z":5.0}"#).unwrap();
        assert_eq!(d.x_y_z(), [0.0, 0.0, 1.0]);
        assert!(serde_json::from_str::<Direction>(r#"{"x":0.0,"y":0.0,"z":0.0}"#).is_err());
    }
}
