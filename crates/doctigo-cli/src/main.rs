use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "doctigo")]
#[command(about = "Doctigo - conversational medical appointment booking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive booking conversation
    Chat {
        /// Path to a doctigo.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Also print the finalized appointment as JSON
        #[arg(long)]
        json: bool,
        /// Publish a generated sample vitals reading before starting
        #[arg(long)]
        sample_vitals: bool,
    },
    /// List doctors, optionally filtered by symptoms
    Doctors {
        /// Comma-separated symptoms, e.g. "Fever,Cough"
        #[arg(long)]
        symptoms: Option<String>,
    },
    /// List hospitals, with distance when a location is given
    Hospitals {
        /// Your location as "lat,lng"
        #[arg(long)]
        near: Option<String>,
    },
    /// Show free/total bed counts per hospital and bed type
    Availability {
        /// Path to a doctigo.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a generated sample vitals reading
    Vitals,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            config,
            json,
            sample_vitals,
        } => commands::chat::run(config.as_deref(), json, sample_vitals).await,
        Commands::Doctors { symptoms } => commands::catalog::doctors(symptoms.as_deref()),
        Commands::Hospitals { near } => commands::catalog::hospitals(near.as_deref()),
        Commands::Availability { config } => commands::catalog::availability(config.as_deref()).await,
        Commands::Vitals => {
            let snapshot = doctigo_core::vitals::sample_snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
    }
}
