//! CLI Adapter.

mod render;

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use crate::app::api::EnvironmentalModel;
use crate::app::bootstrap::{ClientMode, connect};
use crate::app::configuration::load_config;
use crate::domain::{AppError, FieldPolicy};

const DEFAULT_EMISSION_SOURCE: &str = "Small industrial factory running 24/7";
const DEFAULT_SEQUESTRATION_EFFORT: &str =
    "Afforestation project covering 5 hectares of degraded land";
const DEFAULT_PLANT: &str = "Snake Plant (Sansevieria trifasciata)";
const DEFAULT_ROOM_SIZE_SQM: f64 = 15.0;

#[derive(Parser)]
#[command(name = "ecocast")]
#[command(version)]
#[command(
    about = "Generate environmental forecasts and eco-impact reports with a hosted language model",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./ecocast.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the model identifier
    #[arg(long, global = true)]
    model: Option<String>,
    /// Synthesize responses locally instead of calling the API
    #[arg(long, global = true)]
    mock: bool,
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily weather and air-quality forecast as structured data
    #[clap(visible_alias = "p")]
    Predict {
        /// Location to forecast (prompted when omitted)
        #[arg(short, long)]
        location: Option<String>,
        /// Forecast date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Accept any JSON object instead of requiring the five metric fields
        #[arg(long)]
        lenient: bool,
    },
    /// GHG emission versus sequestration narrative
    #[clap(visible_alias = "c")]
    Carbon {
        /// Emission source
        #[arg(short, long, default_value = DEFAULT_EMISSION_SOURCE)]
        source: String,
        /// Sequestration effort
        #[arg(short, long, default_value = DEFAULT_SEQUESTRATION_EFFORT)]
        effort: String,
    },
    /// CO2 absorbance and O2 emission report for an indoor plant
    #[clap(visible_alias = "pl")]
    Plant {
        /// Plant name
        #[arg(short, long, default_value = DEFAULT_PLANT)]
        name: String,
        /// Room size in square meters
        #[arg(short, long, default_value_t = DEFAULT_ROOM_SIZE_SQM)]
        room_size: f64,
    },
    /// Forecast for a location plus the example carbon and plant reports
    #[clap(visible_alias = "r")]
    Report {
        /// Location to forecast (prompted when omitted)
        #[arg(short, long)]
        location: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "ecocast=info" } else { "ecocast=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(cli.config.as_deref(), &cwd)?;
    if let Some(model) = cli.model {
        config.service.model = model;
        config.validate()?;
    }

    let mode = if cli.mock { ClientMode::Mock } else { ClientMode::Live };
    let client = connect(&config.service, mode);
    let model = EnvironmentalModel::new(client.as_ref(), config.service.model.clone());

    match cli.command {
        Commands::Predict { location, date, json, lenient } => {
            let policy = if lenient { FieldPolicy::Lenient } else { FieldPolicy::Strict };
            let model = model.with_field_policy(policy);
            let location = resolve_location(location)?;
            let date = date.unwrap_or_else(today);

            let result = model.predict_environmental_data(&location, &date);
            if json {
                println!("{}", render::render_prediction_json(&result)?);
            } else {
                println!("\n{}", render::render_prediction(&result));
            }
        }
        Commands::Carbon { source, effort } => {
            let text = model.simulate_carbon_cycle(&source, &effort);
            println!("\n{}", render::render_carbon_report(&text));
        }
        Commands::Plant { name, room_size } => {
            let text = model.model_indoor_plant_performance(&name, room_size);
            println!("\n{}", render::render_plant_report(&name, &text));
        }
        Commands::Report { location } => {
            println!("{}", render::render_banner());
            let location = resolve_location(location)?;

            let forecast = model.predict_environmental_data(&location, &today());
            println!("\n{}", render::render_prediction(&forecast));

            let carbon =
                model.simulate_carbon_cycle(DEFAULT_EMISSION_SOURCE, DEFAULT_SEQUESTRATION_EFFORT);
            println!("\n{}", render::render_carbon_report(&carbon));

            let plant = model.model_indoor_plant_performance(DEFAULT_PLANT, DEFAULT_ROOM_SIZE_SQM);
            println!("\n{}", render::render_plant_report(DEFAULT_PLANT, &plant));
        }
    }

    Ok(())
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn resolve_location(location: Option<String>) -> Result<String, AppError> {
    let location = match location {
        Some(location) => location,
        None => prompt_location()?,
    };

    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(AppError::config_error("Location must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn prompt_location() -> Result<String, AppError> {
    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        Input::<String>::new()
            .with_prompt("Enter the location")
            .interact_text()
            .map_err(AppError::from)
    } else {
        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| AppError::config_error(format!("Failed to read location: {}", e)))?;
        Ok(input)
    }
}
