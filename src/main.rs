//! Command line entry point: runs the HTTP API or a single calculation in batch mode.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pension_engine::api::{AppState, ProjectionRequest, SalaryRequest, serve};
use pension_engine::calculation::{calculate, project};
use pension_engine::config::ConfigLoader;
use pension_engine::models::PayrollInput;

#[derive(Debug, Parser)]
#[command(
    name = "pension-engine",
    version,
    about = "Pension fee projection and payroll calculation engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the calculation API over HTTP (default).
    Serve {
        /// Path to the YAML service configuration.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Interface to bind, overriding the configuration.
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding the configuration.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Project a pension fund from a JSON request file and print the result.
    Project {
        /// JSON file shaped like the `/api/calculate` request body.
        #[arg(long, short)]
        input: PathBuf,
    },
    /// Calculate net salary from a JSON request file and print the result.
    Payroll {
        /// JSON file shaped like the `/api/calculate-salary` request body.
        #[arg(long, short)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Command::Serve { config, host, port } => {
            let loader = match config {
                Some(path) => ConfigLoader::load(&path)
                    .with_context(|| format!("loading configuration {}", path.display()))?,
                None => ConfigLoader::default(),
            }
            .with_server_overrides(host, port);

            init_tracing(&loader.logging().filter);

            let address = loader.server().bind_address();
            serve(AppState::new(loader), &address)
                .await
                .with_context(|| format!("serving on {}", address))?;
        }
        Command::Project { input } => {
            init_tracing("warn");
            println!("{}", run_projection(&input)?);
        }
        Command::Payroll { input } => {
            init_tracing("warn");
            println!("{}", run_payroll(&input)?);
        }
    }

    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` takes precedence over `default_filter`.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_request<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Projects the request in `path` and renders the result as pretty JSON.
fn run_projection(path: &Path) -> Result<String> {
    let request: ProjectionRequest = read_request(path)?;
    let result = project(&request.into_input()?)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Calculates the salary request in `path` and renders the result as pretty JSON.
fn run_payroll(path: &Path) -> Result<String> {
    let request: SalaryRequest = read_request(path)?;
    let input: PayrollInput = request.into();
    let result = calculate(&input)?;
    Ok(serde_json::to_string_pretty(&result)?)
}
