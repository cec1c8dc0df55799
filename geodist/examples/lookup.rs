//! Look up two cities and print the distance between them.
//!
//! Run with: cargo run --example lookup --features geocode -- "Berlin" "Paris"

use geodist::{
    lookup_coordinates, DistanceCalculator, DistanceMethod, GeodistConfigBuilder, GeodistError,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), GeodistError> {
    let mut args = env::args().skip(1);
    let (from, to) = match (args.next(), args.next()) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            eprintln!("Usage: cargo run --example lookup --features geocode -- <city> <city>");
            std::process::exit(1);
        }
    };

    let config = GeodistConfigBuilder::from_env()?.build();
    let geocoder = config.build_geocoder()?;

    let mut points = Vec::with_capacity(2);
    for city in [&from, &to] {
        match lookup_coordinates(&geocoder, city).await {
            Ok(location) => {
                println!(
                    "{}: {}, {}",
                    city, location.latitude, location.longitude
                );
                points.push(location.to_coordinates()?);
            }
            Err(GeodistError::CityNotFound { .. }) => {
                println!("{}: not found", city);
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }

    for method in [DistanceMethod::Geodesic, DistanceMethod::Haversine] {
        let km = method.calculator().distance_km(points[0], points[1]);
        println!("{:>10}: {:.2} km", method, km);
    }

    Ok(())
}
