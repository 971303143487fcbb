//! Vectors, directions and vector relations.

use mensura::{
    Acceleration, AccelerationUnit, AngleUnit, Direction, Duration, Position, Speed, SpeedUnit, TimeUnit, Velocity,
};

fn main() -> Result<(), mensura::Error> {
    let heading = Direction::new(1.0, 1.0, 0.0)?;
    let v: Velocity = Speed::new(20.0, SpeedUnit::Knot) * heading;
    println!("velocity {} ({})", v, v.json_in(SpeedUnit::Knot));

    let t = Duration::new(2.0, TimeUnit::Hour);
    let travelled: Position = v * t;
    println!("after {}: {}", t, travelled.xml());

    let g = Acceleration::new([0.0, 0.0, -1.0], AccelerationUnit::StandardGravity);
    let fall: Velocity = g * Duration::new(1.5, TimeUnit::Second);
    println!("falling at {:.3} m/s", fall.magnitude().value());

    let up = Direction::new(0.0, 0.0, 1.0)?;
    println!("heading x up = {}", heading.cross(&up)?);
    println!("angle between heading and fall: {:.1} deg", v.angle(&fall).to(AngleUnit::Degree));
    Ok(())
}
