use anyhow::{Context, Result};
use geodist::{lookup_coordinates, GeodistConfigBuilder, GeodistError};
use serde::Serialize;

/// Geocoder settings taken from global CLI flags.
pub struct GeocoderArgs {
    pub geocoder_url: Option<String>,
    pub user_agent: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Serialize)]
struct CoordinatesResponse<'a> {
    city_name: &'a str,
    latitude: String,
    longitude: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

pub async fn run(args: GeocoderArgs, city_name: &str, json: bool) -> Result<()> {
    let mut builder = GeodistConfigBuilder::from_env().context("Invalid GEODIST_* environment")?;

    if let Some(url) = args.geocoder_url {
        builder = builder.geocoder_url(url);
    }
    if let Some(user_agent) = args.user_agent {
        builder = builder.user_agent(user_agent);
    }
    if let Some(api_key) = args.api_key {
        builder = builder.api_key(api_key);
    }

    let geocoder = builder
        .build()
        .build_geocoder()
        .context("Failed to create geocoder")?;

    let location = match lookup_coordinates(&geocoder, city_name).await {
        Ok(location) => location,
        Err(GeodistError::CityNotFound { .. }) => {
            anyhow::bail!("No match for {:?}", city_name);
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to look up coordinates")),
    };

    if json {
        let response = CoordinatesResponse {
            city_name,
            latitude: location.latitude,
            longitude: location.longitude,
            display_name: location.display_name,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{},{}", location.latitude, location.longitude);
    }

    Ok(())
}
