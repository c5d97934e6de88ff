//! noaa_river command-line entry point.
//!
//! Usage:
//!   noaa_river weather [--lat 38.95 --lon 77.343]
//!   noaa_river gauges --sites 01646500,01643700
//!   noaa_river gauges --bbox -78.0,38.0,-77.5,39.3
//!   noaa_river gauges --radius [15] [--lat 38.96 --lon -77.45] [--km]
//!
//! With no selector, `gauges` queries the sites listed in the config.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use noaa_river::config::{self, AppConfig};
use noaa_river::model::{BoundingBox, DistanceUnit, GaugeReport};
use noaa_river::{logging, GaugeClient, NoaaError, WeatherClient};

const RULE: &str = "---------------------------------------------------------------------";

/// Weather forecasts and river gauge levels from NOAA/NWS and USGS.
#[derive(Parser)]
#[command(name = "noaa_river", version, about)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Current conditions and worded forecast for a point.
    Weather(WeatherArgs),
    /// Latest river gauge readings by site, box or radius.
    Gauges(GaugeArgs),
}

#[derive(Args)]
struct WeatherArgs {
    /// Latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, west-positive (77.343 for northern Virginia).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
}

#[derive(Args)]
struct GaugeArgs {
    /// Comma-separated USGS site numbers.
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["bbox", "radius"])]
    sites: Vec<String>,
    /// west,south,east,north in degrees.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "radius")]
    bbox: Option<Vec<f64>>,
    /// Half-side of the search box around --lat/--lon. Bare `--radius`
    /// uses the configured default.
    #[arg(long, num_args = 0..=1)]
    radius: Option<Option<f64>>,
    /// Center latitude for --radius.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Center longitude for --radius.
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Interpret --radius in kilometers instead of miles.
    #[arg(long)]
    km: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match config::resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(2);
        }
    };

    let result = match cli.command {
        Command::Weather(args) => run_weather(&config, args),
        Command::Gauges(args) => run_gauges(&config, args),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        if e.is_fetch() {
            eprintln!("   Make sure the feed is reachable and the location is in the USA.");
        }
        process::exit(1);
    }
}

fn run_weather(config: &AppConfig, args: WeatherArgs) -> Result<(), NoaaError> {
    let defaults = &config.defaults.weather;
    let lat = args.lat.unwrap_or(defaults.latitude);
    let lon = args.lon.unwrap_or(defaults.longitude);

    let mut client = WeatherClient::from_config(config)?;
    client.query_by_lat_lon(lat, lon)?;

    println!("{}", RULE);
    println!(
        "Currently {} temperature {} degrees dew point {}",
        client.summary().unwrap_or("unknown"),
        client.temperature().unwrap_or("n/a"),
        client.dew_point().unwrap_or("n/a")
    );
    println!("{}\n", RULE);

    for period in client.forecast().unwrap_or_default() {
        println!("{}\n{}\n", period.period_name, period.text);
    }
    println!("{}", RULE);
    Ok(())
}

fn run_gauges(config: &AppConfig, args: GaugeArgs) -> Result<(), NoaaError> {
    let defaults = &config.defaults.gauges;
    let mut client = GaugeClient::from_config(config)?;
    let unit = DistanceUnit::from_kilometers(args.km || defaults.kilometers);

    let mut center = None;
    let report = if !args.sites.is_empty() {
        client.query_by_site_ids(&args.sites)?
    } else if let Some(edges) = args.bbox {
        let [west, south, east, north] = <[f64; 4]>::try_from(edges).map_err(|v| {
            NoaaError::InvalidArgument(format!("--bbox needs 4 values, got {}", v.len()))
        })?;
        client.query_by_bbox(&BoundingBox { west, south, east, north })?
    } else if let Some(radius) = args.radius {
        let radius = radius.unwrap_or(defaults.radius);
        let lat = args.lat.unwrap_or(defaults.latitude);
        let lon = args.lon.unwrap_or(defaults.longitude);
        center = Some((lat, lon));
        println!("Gauges within {} {} of {}, {}", radius, unit, lat, lon);
        client.query_by_radius(lat, lon, radius, unit)?
    } else {
        client.query_by_site_ids(&defaults.sites)?
    };

    print_sites(report, center, unit);
    Ok(())
}

fn print_sites(report: &GaugeReport, center: Option<(f64, f64)>, unit: DistanceUnit) {
    println!("{}", RULE);
    for site in &report.sites {
        print!("{}", site);
        if let Some((lat, lon)) = center {
            println!("Distance {:.1} {}", site.distance_from(lat, lon, unit), unit);
        }
        println!();
    }
    println!("{}", RULE);
    println!(
        "{} sites, {} entries skipped",
        report.sites.len(),
        report.skipped.len()
    );
    for skipped in &report.skipped {
        println!("   ⚠ {}", skipped);
    }
}
