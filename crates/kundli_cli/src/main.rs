use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use kundli_chart::{ChartRequest, NatalChart, derive_from_request, derive_panchanga};
use kundli_vedic_base::{nakshatra_from_longitude, rashi_from_longitude};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic natal chart (kundli) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Tithi, yoga, karana and moon nakshatra from sidereal Sun/Moon
    Panchanga {
        /// Sidereal Sun longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        sun: f64,
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
    },
    /// Derive a full chart from a resolved request (JSON)
    Chart {
        /// Path to the request JSON file
        #[arg(long)]
        input: PathBuf,
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
        /// Override the conjunction orb (deg)
        #[arg(long)]
        conjunction_orb: Option<f64>,
        /// Override the aspect orb (deg)
        #[arg(long)]
        aspect_orb: Option<f64>,
        /// Override the combustion orb (deg)
        #[arg(long)]
        combustion_orb: Option<f64>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_request(path: &Path) -> ChartRequest {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid request {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn print_chart(chart: &NatalChart, pretty: bool) {
    let out = if pretty {
        serde_json::to_string_pretty(chart)
    } else {
        serde_json::to_string(chart)
    };
    match out {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize chart: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - index {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.rashi_index,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Panchanga { sun, moon } => {
            let p = derive_panchanga(sun, moon);
            println!(
                "Tithi:     {} ({} paksha, {}; {} of 30)",
                p.tithi_name,
                p.paksha.name(),
                p.paksha.english_name(),
                p.tithi_number
            );
            println!("Yoga:      {} ({} of 27)", p.yoga.name(), p.yoga_number);
            println!("Karana:    {} ({})", p.karana.name(), p.karana_number);
            println!(
                "Moon:      {} / {} pada {}",
                p.moon_sign.western_name(),
                p.nakshatra.name(),
                p.pada
            );
        }

        Commands::Chart {
            input,
            pretty,
            conjunction_orb,
            aspect_orb,
            combustion_orb,
        } => {
            let mut request = load_request(&input);
            if let Some(orb) = conjunction_orb {
                request.config.conjunction_orb_deg = orb;
            }
            if let Some(orb) = aspect_orb {
                request.config.aspect_orb_deg = orb;
            }
            if let Some(orb) = combustion_orb {
                request.config.combustion_orb_deg = orb;
            }
            debug!(config = ?request.config, "chart config");

            match derive_from_request(&request) {
                Ok(chart) => print_chart(&chart, pretty),
                Err(e) => {
                    eprintln!("Chart derivation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
