use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use rdgrid_rs::{
    GpsCoordinate, RdError, Scalar, gps_to_rd, gps_to_tile, polygon_to_gps, rd_to_gps,
    rd_to_gps_unrounded, tile_to_gps, try_parse_point,
};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "rdgrid",
    version,
    about = "Convert between WGS84, Rijksdriehoek (RD) and slippy-map tiles"
)]
struct Cli {
    /// Numeric precision used for the conversion
    #[arg(short, long, value_enum, default_value_t = Precision::F64, global = true)]
    precision: Precision,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG is honoured otherwise)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Precision {
    F32,
    F64,
    Decimal,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// WGS84 latitude/longitude to RD X/Y
    GpsToRd {
        #[arg(allow_negative_numbers = true)]
        lat: String,
        #[arg(allow_negative_numbers = true)]
        lon: String,
    },
    /// RD X/Y to WGS84 latitude/longitude
    RdToGps {
        #[arg(allow_negative_numbers = true)]
        x: String,
        #[arg(allow_negative_numbers = true)]
        y: String,
        /// Skip rounding to four decimals
        #[arg(long)]
        unrounded: bool,
    },
    /// WGS84 latitude/longitude to a tile at the given zoom (clamped to 1-20)
    GpsToTile {
        #[arg(allow_negative_numbers = true)]
        zoom: i32,
        #[arg(allow_negative_numbers = true)]
        lat: String,
        #[arg(allow_negative_numbers = true)]
        lon: String,
    },
    /// Centre of a tile in WGS84
    TileToGps {
        #[arg(allow_negative_numbers = true)]
        zoom: i32,
        x: u32,
        y: u32,
    },
    /// Parse an RD `POINT(x y)` or `POLYGON((x y, ...))` and convert it to WGS84
    Parse { text: String },
}

fn parse_number<T: Scalar>(value: &str) -> Result<T, RdError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| RdError::MalformedInput(format!("invalid number: {}", value)))
}

fn print_gps<T: Scalar + Serialize>(
    gps: &GpsCoordinate<T>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(gps)?);
    } else {
        println!("{} {}", gps.latitude, gps.longitude);
    }
    Ok(())
}

fn run<T: Scalar + Serialize>(command: &Command, json: bool) -> Result<(), Box<dyn Error>> {
    match command {
        Command::GpsToRd { lat, lon } => {
            let rd = gps_to_rd::<T>(parse_number(lat)?, parse_number(lon)?)?;
            if json {
                println!("{}", serde_json::to_string(&rd)?);
            } else {
                println!("{}", rd);
            }
        }
        Command::RdToGps { x, y, unrounded } => {
            let (x, y) = (parse_number::<T>(x)?, parse_number::<T>(y)?);
            let gps = if *unrounded {
                rd_to_gps_unrounded(x, y)?
            } else {
                rd_to_gps(x, y)?
            };
            print_gps(&gps, json)?;
        }
        Command::GpsToTile { zoom, lat, lon } => {
            let tile = gps_to_tile::<T>(*zoom, parse_number(lat)?, parse_number(lon)?)?;
            if json {
                println!("{}", serde_json::to_string(&tile)?);
            } else {
                println!("{}", tile);
            }
        }
        Command::TileToGps { zoom, x, y } => {
            let gps = tile_to_gps::<T>(*zoom, *x, *y)?;
            print_gps(&gps, json)?;
        }
        Command::Parse { text } => {
            if text.trim_start().to_ascii_uppercase().starts_with("POLYGON") {
                let ring = polygon_to_gps::<T>(text)?;
                debug!("Parsed polygon with {} vertices", ring.len());
                if json {
                    println!("{}", serde_json::to_string(&ring)?);
                } else {
                    for gps in &ring {
                        println!("{} {}", gps.latitude, gps.longitude);
                    }
                }
            } else {
                let point = try_parse_point::<T>(text)?;
                print_gps(&point.to_gps()?, json)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("Running {:?} with {:?} precision", cli.command, cli.precision);

    match cli.precision {
        Precision::F32 => run::<f32>(&cli.command, cli.json),
        Precision::F64 => run::<f64>(&cli.command, cli.json),
        Precision::Decimal => run::<Decimal>(&cli.command, cli.json),
    }
}
