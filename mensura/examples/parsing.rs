//! Reading units and quantities from text, and writing them in a system of units.

use mensura::{AccelerationUnit, Error, Pressure, System, Temperature, TemperatureUnit, Unit};

fn main() -> Result<(), Error> {
    for spelling in ["km/s^2", "ft/sec/sec", "uin/s2", "g0"] {
        let unit = AccelerationUnit::parse(spelling)?;
        println!("{:>12} -> {:?} ({})", spelling, unit, unit);
    }

    match AccelerationUnit::parse("banana") {
        Err(err) => println!("{}", err),
        Ok(unit) => println!("unexpected {:?}", unit),
    }

    let t: Temperature = "451 °F".parse()?;
    println!("{} is {:.2} °C", t, t.to(TemperatureUnit::Celsius));

    let p: Pressure = "14.7 psi".parse()?;
    for system in System::ALL {
        println!("{:>12}: {}", system, p.print_in_system(system)?);
    }
    Ok(())
}
