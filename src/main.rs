//! `yagi` - Yagi-Uda antenna dimension calculator.
//!
//! Usage:
//!   yagi --frequency 144.5 --directors 3          # Design sheet on stdout
//!   yagi --band 70cm --optimize f2b --json        # JSON on stdout
//!   yagi --config beam.toml --output beam.txt     # Parameters from a file

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use serde::Serialize;

use yagi_designer::design::{compute, compute_non_isolated, AntennaDesign};
use yagi_designer::geometry::{layout, Element};
use yagi_designer::matching::FeedMatch;
use yagi_designer::report::DesignSheet;

mod config;

use config::{Resolved, Settings};

#[derive(Parser)]
#[command(name = "yagi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Yagi-Uda antenna dimension and performance calculator", long_about = None)]
struct Cli {
    /// Design frequency in MHz
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Use the centre of an amateur band (6m, 2m, 70cm, 23cm, 13cm)
    #[arg(short, long, conflicts_with = "frequency")]
    band: Option<String>,

    /// Number of directors
    #[arg(short, long, allow_negative_numbers = true)]
    directors: Option<i32>,

    /// Element wire gauge in AWG (12, 14, 16, 18, 20)
    #[arg(short, long)]
    gauge: Option<u32>,

    /// Boom material (wood, aluminum, fiberglass, pvc)
    #[arg(long)]
    boom: Option<String>,

    /// Optimize for gain, bandwidth or front-to-back
    #[arg(short = 'O', long)]
    optimize: Option<String>,

    /// Length units for the design sheet (metric, imperial)
    #[arg(short, long)]
    units: Option<String>,

    /// Elements bonded to a metal boom of this diameter in mm
    #[arg(long, value_name = "BOOM_DIAMETER_MM")]
    non_isolated: Option<f64>,

    /// TOML design file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference impedance for the SWR figures in ohms
    #[arg(long, default_value_t = yagi_designer::constants::REFERENCE_IMPEDANCE_OHMS)]
    reference: f64,

    /// Emit JSON instead of a design sheet
    #[arg(long)]
    json: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            frequency: self.frequency,
            band: self.band.clone(),
            directors: self.directors,
            gauge: self.gauge,
            boom: self.boom.clone(),
            optimize: self.optimize.clone(),
            units: self.units.clone(),
            non_isolated: self.non_isolated,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    boom_correction_mm: Option<f64>,
    design: &'a AntennaDesign,
    feed_match: FeedMatch,
    elements: Vec<Element>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the default level.
    let env = if cli.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let mut settings = cli.settings();
    if let Some(path) = &cli.config {
        settings = settings.or(Settings::load(path)?);
    }
    let units = settings.length_units()?;
    let resolved = settings.resolve()?;

    let text = match &resolved {
        Resolved::Insulated(input) => {
            let design = compute(input).context("design parameters rejected")?;
            let feed_match = FeedMatch::for_design(&design, cli.reference)?;
            if cli.json {
                serde_json::to_string_pretty(&JsonOutput {
                    boom_correction_mm: None,
                    design: &design,
                    feed_match,
                    elements: layout(&design),
                })?
            } else {
                DesignSheet::insulated(input, &design, units)
                    .with_feed_match(feed_match)
                    .render()
            }
        }
        Resolved::NonIsolated(input) => {
            let result = compute_non_isolated(input).context("design parameters rejected")?;
            let feed_match = FeedMatch::for_design(&result.design, cli.reference)?;
            if cli.json {
                serde_json::to_string_pretty(&JsonOutput {
                    boom_correction_mm: Some(result.boom_correction_mm),
                    design: &result.design,
                    feed_match,
                    elements: layout(&result.design),
                })?
            } else {
                DesignSheet::non_isolated(input, &result, units)
                    .with_feed_match(feed_match)
                    .render()
            }
        }
    };

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{text}")?;
            writer.flush()?;
            log::info!("design written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{text}")?;
        }
    }
    Ok(())
}
