//! Per-field control over how quantities are serialized.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use mensura::{Direction, Length, LengthUnit, Temperature, TemperatureUnit};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Borehole {
        // {"value": .., "unit": "m"}
        #[serde(with = "mensura::serde_with_unit")]
        depth: Length,

        // bare number in the standard unit
        casing: Length,

        #[serde(with = "mensura::serde_with_unit")]
        bottom_temperature: Temperature,

        axis: Direction,
    }

    let hole = Borehole {
        depth: Length::new(1200.0, LengthUnit::Foot),
        casing: Length::new(8.0, LengthUnit::Inch),
        bottom_temperature: Temperature::new(140.0, TemperatureUnit::Fahrenheit),
        axis: Direction::new(0.0, 0.1, -1.0).expect("non-zero axis"),
    };

    let json = serde_json::to_string_pretty(&hole).expect("serializable");
    println!("{}", json);

    let restored: Borehole = serde_json::from_str(&json).expect("round trip");
    println!("{:?}", restored);

    // Input written by hand may use any spelling of the family.
    let manual = r#"{
        "depth": {"value": 365.76, "unit": "metre"},
        "casing": 0.2032,
        "bottom_temperature": {"value": 60.0, "unit": "degC"},
        "axis": {"x": 0.0, "y": 0.0, "z": -3.0}
    }"#;
    let parsed: Borehole = serde_json::from_str(manual).expect("hand-written input");
    println!("{:.1} ft, {}", parsed.depth.to(LengthUnit::Foot), parsed.axis);
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
