use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use archetype::config::Config;
use archetype::errors::AppError;
use archetype::handlers::{handle_profile_json, load_curriculum, ProfileResponse};
use archetype::scoring::ArchetypeEngine;

/// Scores one student's grades into a six-axis RIASEC archetype profile
#[derive(Debug, Parser)]
#[command(name = "archetype")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Request JSON file; stdin when omitted or `-`
    #[arg(value_name = "REQUEST")]
    input: Option<PathBuf>,

    /// Curriculum JSON replacing the built-in IT + CS tables
    #[arg(long, env = "ARCHETYPE_CURRICULUM_PATH", value_name = "FILE")]
    curriculum: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long, env = "ARCHETYPE_PRETTY")]
    pretty: bool,
}

impl Cli {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the JSON response.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting archetype v{}", env!("CARGO_PKG_VERSION"));
    for key in &config.tuning_fallbacks {
        warn!(key, "Out-of-range tuning replaced by the built-in default");
    }

    match run(&cli, &config) {
        Ok(response) => println!("{}", to_json(&response, cli.pretty)?),
        Err(e) => {
            println!("{}", to_json(&e.to_body(), cli.pretty)?);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run(cli: &Cli, config: &Config) -> Result<ProfileResponse, AppError> {
    let curriculum = load_curriculum(cli.curriculum.as_deref())?;
    let engine = ArchetypeEngine::new(&curriculum).with_params(config.tuning);
    info!(tuning = ?engine.params(), "Engine configured");

    let body = read_input(cli.input_path())?;
    handle_profile_json(&body, &engine)
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize response")
}
