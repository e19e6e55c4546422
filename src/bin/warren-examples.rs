use anyhow::{Context, Result};
use clap::Parser;
use std::process::exit;
use tracing_subscriber::{fmt, EnvFilter};

// Import library modules
use warren_client::{ClientConfig, WarrenClient};
use warren_examples::cli::commands::{handle_command, CliArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Setup Tracing ---
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // --- Parse Args ---
    let args = CliArgs::parse();

    // --- Load Configuration ---
    let mut config = match args.config_path.as_ref() {
        Some(path) => ClientConfig::load_from_file(path).context("Failed to load configuration")?,
        None => ClientConfig::default(),
    };
    if let Some(address) = args.address.as_ref() {
        config.server_address = address.clone();
    }

    tracing::info!("Using WarrenDB server at {}", config.server_address);

    // --- Connect Client ---
    tracing::debug!("Connecting to WarrenDB...");
    let client_result = WarrenClient::new(config.clone()).await;

    let mut client: WarrenClient = match client_result {
        Ok(client_instance) => {
            tracing::debug!("Client connected successfully.");
            client_instance
        }
        Err(e) => {
            tracing::error!("Failed to connect to WarrenDB: {}", e);
            eprintln!("Error connecting to WarrenDB: {}", e);
            eprintln!(
                "Please check the server address ({}) and ensure the server is running.",
                config.server_address
            );
            exit(1);
        }
    };

    // --- Execute Command ---
    tracing::info!("Executing command: {:?}", args.command);

    let result = handle_command(args, &mut client).await;

    // --- Handle Result ---
    if let Err(e) = result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        exit(1);
    } else {
        tracing::debug!("Command executed successfully.");
    }

    Ok(())
}
