//! Measures distances between `geo_types` points and validated coordinates.

use geo_types::point;
use sphere_nav::{distance_haversine, Coordinate, GeoPoint, Sphere};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let museums = [
        ("Louvre", point!(x: 2.3376, y: 48.8606)),
        ("Prado", point!(x: -3.6921, y: 40.4138)),
        ("Uffizi", point!(x: 11.2553, y: 43.7678)),
    ];
    let home = Coordinate::new("512839N", "0002741W")?;

    for (name, museum) in &museums {
        let location = Coordinate::from_point(museum)?;
        log::info!(
            "{name} at {location}: {:.1} km, {:.1} km on the Moon-sized sphere",
            distance_haversine(&home, museum),
            home.distance(museum, &Sphere::new(1737.4)?)
        );
    }

    Ok(())
}
