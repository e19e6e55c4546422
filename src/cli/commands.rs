use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use warren_client::WarrenClient;

use crate::constants::ENTITIES;

// --- Top-Level Arguments ---

/// Command-line arguments for the example programs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Address of the WarrenDB server (overrides config & env var)
    #[arg(short = 'a', long = "address", global = true, env = "WARREN_ADDRESS")]
    pub address: Option<String>,

    /// Path to a client configuration file
    #[arg(short = 'c', long = "config", global = true, env = "WARREN_CONFIG")]
    pub config_path: Option<PathBuf>,
}

// --- Main Command Enum ---

/// The example programs, one per subcommand.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check connectivity to the database
    Ping,
    /// Manage the example schema and its entities (init, drop, list, about)
    #[command(subcommand_negates_reqs = true)]
    Schema(super::schema::SchemaArgs),
    /// Import the sample feature vectors into the example entities
    Import(super::import::ImportArgs),
    /// Run the example queries (simple, lookup, knn)
    #[command(subcommand_negates_reqs = true)]
    Query(super::query::QueryArgs),
    /// Run the full example sequence: schema setup, import, queries
    Run(super::run::RunArgs),
}

// --- Main Command Handler Function ---

/// Dispatches the parsed command-line arguments to the appropriate handler.
///
/// # Arguments
/// * `args` - The parsed top-level command line arguments ([`CliArgs`]).
/// * `client` - A connected [`WarrenClient`].
pub async fn handle_command(args: CliArgs, client: &mut WarrenClient) -> Result<()> {
    match args.command {
        Commands::Ping => {
            client.ping().await?;
            println!("{}", "Server reachable.".green());
            Ok(())
        }
        Commands::Schema(ref cmd_args) => {
            super::schema::handle_schema_command(cmd_args.clone(), client).await
        }
        Commands::Import(ref cmd_args) => super::import::handle_import(cmd_args.clone(), client).await,
        Commands::Query(ref cmd_args) => {
            super::query::handle_query_command(cmd_args.clone(), client).await
        }
        Commands::Run(ref cmd_args) => super::run::handle_run(cmd_args.clone(), client).await,
    }
}

// --- Helper Functions ---

/// Resolves an optional entity name against the example entities.
///
/// Returns the matching `(name, dimension)` pair, or all three when no name
/// is given.
pub(crate) fn resolve_entities(filter: Option<&str>) -> Result<Vec<(&'static str, u32)>> {
    match filter {
        Some(name) => match ENTITIES.iter().find(|(candidate, _)| *candidate == name) {
            Some(&pair) => Ok(vec![pair]),
            None => bail!(
                "Unknown entity '{}'. Expected one of: scalablecolor, cedd, jhist.",
                name
            ),
        },
        None => Ok(ENTITIES.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_entities_all() {
        let all = resolve_entities(None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].0, "scalablecolor");
    }

    #[test]
    fn test_resolve_entities_single() {
        let one = resolve_entities(Some("cedd")).unwrap();
        assert_eq!(one, vec![("cedd", 144)]);
    }

    #[test]
    fn test_resolve_entities_unknown() {
        let err = resolve_entities(Some("surf")).unwrap_err();
        assert!(err.to_string().contains("Unknown entity 'surf'"));
    }
}
