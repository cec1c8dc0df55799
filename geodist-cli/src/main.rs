use anyhow::Result;
use clap::{Parser, Subcommand};
use geodist::DistanceMethod;

mod commands;

/// City coordinates and distance CLI tool
#[derive(Parser)]
#[command(name = "geodist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Nominatim-compatible geocoder base URL
    #[arg(long, env = "GEODIST_GEOCODER_URL", global = true)]
    geocoder_url: Option<String>,

    /// User-Agent sent to the geocoder
    #[arg(long, env = "GEODIST_USER_AGENT", global = true)]
    user_agent: Option<String>,

    /// Credential for hosted geocoders
    #[arg(long, env = "GEODIST_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the coordinates of a city
    Coordinates {
        /// City name, e.g. "Lima, Peru"
        city_name: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Distance in kilometers between two coordinate pairs
    Distance {
        /// Latitude of the first point
        #[arg(long, allow_hyphen_values = true)]
        lat1: f64,

        /// Longitude of the first point
        #[arg(long, allow_hyphen_values = true)]
        lon1: f64,

        /// Latitude of the second point
        #[arg(long, allow_hyphen_values = true)]
        lat2: f64,

        /// Longitude of the second point
        #[arg(long, allow_hyphen_values = true)]
        lon2: f64,

        /// Distance formula: geodesic or haversine
        #[arg(short, long, default_value = "geodesic", value_parser = parse_method)]
        method: DistanceMethod,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn parse_method(value: &str) -> std::result::Result<DistanceMethod, String> {
    value.parse().map_err(|e: geodist::GeodistError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Coordinates { city_name, json } => {
            commands::coordinates::run(
                commands::coordinates::GeocoderArgs {
                    geocoder_url: cli.geocoder_url,
                    user_agent: cli.user_agent,
                    api_key: cli.api_key,
                },
                &city_name,
                json,
            )
            .await
        }
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            method,
            json,
        } => commands::distance::run(lat1, lon1, lat2, lon2, method, json),
    }
}
