use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use warren_client::language::basics::{entity, parse_entity, schema};
use warren_client::language::CreateEntity;
use warren_client::{ClientError, Type, WarrenClient};

use crate::cli::formatters::print_entity_details;
use crate::constants::{DEFAULT_SCHEMA, ENTITIES, FEATURE_COLUMN, ID_COLUMN};

/// Arguments for the `schema` subcommand group.
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// The schema operation to execute.
    #[command(subcommand)]
    pub command: SchemaCommand,
}

/// Schema and entity management operations.
#[derive(Subcommand, Debug, Clone)]
pub enum SchemaCommand {
    /// Create the example schema and its three feature entities
    Init,
    /// Drop the example schema and all entities it contains
    Drop,
    /// List all schemas and the entities they contain
    List,
    /// Show details about one entity
    About {
        /// Qualified entity name, e.g. "warren_example.cedd".
        #[arg(required = true)]
        entity: String,
    },
}

/// Dispatches a schema operation to its handler.
pub async fn handle_schema_command(args: SchemaArgs, client: &mut WarrenClient) -> Result<()> {
    match args.command {
        SchemaCommand::Init => initialize_schema(client).await,
        SchemaCommand::Drop => drop_example_schema(client).await,
        SchemaCommand::List => list_schemas(client).await,
        SchemaCommand::About { entity } => about_entity(client, &entity).await,
    }
}

/// Creates the example schema and the three feature entities.
///
/// Re-running against a populated server is fine: schemas and entities that
/// already exist are left untouched.
pub async fn initialize_schema(client: &mut WarrenClient) -> Result<()> {
    match client.create_schema(schema(DEFAULT_SCHEMA)).await {
        Ok(_) => println!("Schema {} created successfully.", DEFAULT_SCHEMA),
        Err(ClientError::AlreadyExists(_)) => {
            println!("Schema {} already exists, skipping.", DEFAULT_SCHEMA);
        }
        Err(e) => return Err(e.into()),
    }

    for (name, dimension) in ENTITIES {
        let definition = CreateEntity::new(entity(DEFAULT_SCHEMA, name))
            .column(ID_COLUMN, Type::String, 0, false)
            .column(FEATURE_COLUMN, Type::FloatVector, dimension, false);
        match client.create_entity(definition).await {
            Ok(_) => println!("Entity {}.{} created successfully.", DEFAULT_SCHEMA, name),
            Err(ClientError::AlreadyExists(_)) => {
                println!("Entity {}.{} already exists, skipping.", DEFAULT_SCHEMA, name);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Drops the example schema and everything in it.
pub async fn drop_example_schema(client: &mut WarrenClient) -> Result<()> {
    client.drop_schema(schema(DEFAULT_SCHEMA)).await?;
    println!("Schema {} dropped successfully.", DEFAULT_SCHEMA);
    Ok(())
}

/// Lists all schemas on the server together with their entities.
pub async fn list_schemas(client: &mut WarrenClient) -> Result<()> {
    let schema_list = client.list_schemas().await?;
    if schema_list.schemas.is_empty() {
        println!("No schemas found.");
        return Ok(());
    }

    for schema_name in schema_list.schemas {
        println!("{}", schema_name.name.cyan().bold());
        let entity_list = client.list_entities(schema_name.clone()).await?;
        for entity_name in entity_list.entities {
            println!("  {}", entity_name.name);
        }
    }
    Ok(())
}

/// Prints the column layout and row count of a single entity.
pub async fn about_entity(client: &mut WarrenClient, qualified: &str) -> Result<()> {
    let name = parse_entity(qualified)?;
    let details = client.about_entity(name).await?;
    print_entity_details(&details);
    Ok(())
}
