use anyhow::{Context, Result};
use geodist::{Coordinates, DistanceCalculator, DistanceMethod};
use serde::Serialize;

#[derive(Serialize)]
struct DistanceResponse {
    distance: f64,
    method: &'static str,
}

pub fn run(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    method: DistanceMethod,
    json: bool,
) -> Result<()> {
    let from = Coordinates::new(lat1, lon1).context("Invalid first point")?;
    let to = Coordinates::new(lat2, lon2).context("Invalid second point")?;

    let distance = method.calculator().distance_km(from, to);

    if json {
        let response = DistanceResponse {
            distance,
            method: method.as_str(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{:.2}", distance);
    }

    Ok(())
}
