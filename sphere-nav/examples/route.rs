//! Prints the great-circle route between two points given as DMS or decimal degrees.
//!
//! ```sh
//! cargo run --example route -- 512839N 0002741W 483857N 0022147E
//! ```

use sphere_nav::{bearing, distance_cosine_law, distance_haversine, dms, midpoint, Coordinate};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [lat1, lon1, lat2, lon2] = args.as_slice() else {
        anyhow::bail!("usage: route <lat1> <lon1> <lat2> <lon2>");
    };

    let from = Coordinate::new(lat1.as_str(), lon1.as_str())?;
    let to = Coordinate::new(lat2.as_str(), lon2.as_str())?;

    let distance = distance_haversine(&from, &to);
    let heading = bearing(&from, &to);
    let final_heading = from.final_heading(heading, distance)?;

    log::info!("From:          {from}");
    log::info!("To:            {to}");
    log::info!("Distance:      {distance:.1} km");
    log::info!("Cosine law:    {:.1} km", distance_cosine_law(&from, &to));
    log::info!("Bearing:       {}", dms::radians_to_bearing_text(heading));
    log::info!("Final heading: {}", dms::radians_to_bearing_text(final_heading));
    log::info!("Midpoint:      {}", midpoint(&from, &to));

    Ok(())
}
