use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use warren_client::language::basics::{entity, float_vector, string_value};
use warren_client::language::dql::is_in;
use warren_client::language::Query;
use warren_client::{ClientError, Distance, QueryResponseMessage, WarrenClient};

use crate::cli::commands::resolve_entities;
use crate::cli::formatters::print_query_results;
use crate::constants::{DEFAULT_K, DEFAULT_SCHEMA, FEATURE_COLUMN, ID_COLUMN, LOOKUP_IDS, SELECT_LIMIT};
use crate::vector::random_float_vector;

/// Arguments for the `query` subcommand group.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// The query variant to execute.
    #[command(subcommand)]
    pub command: QueryCommand,
}

/// The example query variants.
#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommand {
    /// Fetch the first few rows of each entity
    Simple {
        /// Optional: Name of the entity to query (defaults to all three).
        #[arg(short, long)]
        entity: Option<String>,

        /// Maximum number of rows to return per entity.
        #[arg(short, long, default_value_t = SELECT_LIMIT)]
        limit: u64,

        /// Output results in JSON format.
        #[arg(long)]
        json: bool,
    },
    /// Fetch rows whose id matches one of the sample identifiers
    Lookup {
        /// Optional: Name of the entity to query (defaults to all three).
        #[arg(short, long)]
        entity: Option<String>,

        /// Identifiers to look up (defaults to the built-in sample ids).
        #[arg(short, long)]
        id: Vec<String>,

        /// Output results in JSON format.
        #[arg(long)]
        json: bool,
    },
    /// Fetch the k nearest neighbours of a random query vector
    Knn {
        /// Optional: Name of the entity to query (defaults to all three).
        #[arg(short, long)]
        entity: Option<String>,

        /// Number of neighbours to return.
        #[arg(short, long, default_value_t = DEFAULT_K)]
        k: u32,

        /// Distance function to rank by.
        #[arg(long, value_enum, default_value = "euclidean")]
        distance: DistanceArg,

        /// Output results in JSON format.
        #[arg(long)]
        json: bool,
    },
}

/// Distance functions supported by the kNN example.
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum DistanceArg {
    /// Euclidean (L2) distance
    Euclidean,
    /// Squared Euclidean distance
    SquaredEuclidean,
    /// Manhattan (L1) distance
    Manhattan,
    /// Cosine distance
    Cosine,
}

impl From<DistanceArg> for Distance {
    fn from(arg: DistanceArg) -> Self {
        match arg {
            DistanceArg::Euclidean => Distance::Euclidean,
            DistanceArg::SquaredEuclidean => Distance::SquaredEuclidean,
            DistanceArg::Manhattan => Distance::Manhattan,
            DistanceArg::Cosine => Distance::Cosine,
        }
    }
}

/// Dispatches a query variant to its handler, once per selected entity.
pub async fn handle_query_command(args: QueryArgs, client: &mut WarrenClient) -> Result<()> {
    match args.command {
        QueryCommand::Simple { entity, limit, json } => {
            for (name, _) in resolve_entities(entity.as_deref())? {
                simple_select(client, name, limit, json).await?;
            }
            Ok(())
        }
        QueryCommand::Lookup { entity, id, json } => {
            let ids = if id.is_empty() {
                LOOKUP_IDS.iter().map(|s| s.to_string()).collect()
            } else {
                id
            };
            for (name, _) in resolve_entities(entity.as_deref())? {
                lookup_select(client, name, &ids, json).await?;
            }
            Ok(())
        }
        QueryCommand::Knn {
            entity,
            k,
            distance,
            json,
        } => {
            for (name, dimension) in resolve_entities(entity.as_deref())? {
                knn_select(client, name, dimension, k, distance.into(), json).await?;
            }
            Ok(())
        }
    }
}

/// Fetches the first `limit` rows of an entity with a star projection.
pub async fn simple_select(
    client: &mut WarrenClient,
    entity_name: &str,
    limit: u64,
    json: bool,
) -> Result<()> {
    let query = Query::new(entity(DEFAULT_SCHEMA, entity_name)).limit(limit);
    let batches = run_query(client, query).await?;

    if !json {
        println!("Results of query for entity '{}':", entity_name);
    }
    print_query_results(&batches, json)
}

/// Fetches the rows of an entity whose id matches one of `ids`.
pub async fn lookup_select(
    client: &mut WarrenClient,
    entity_name: &str,
    ids: &[String],
    json: bool,
) -> Result<()> {
    let predicate = is_in(ID_COLUMN, ids.iter().map(|id| string_value(id.as_str())));
    let query = Query::new(entity(DEFAULT_SCHEMA, entity_name)).filter(predicate);
    let batches = run_query(client, query).await?;

    if !json {
        println!("Results of query for entity '{}':", entity_name);
    }
    print_query_results(&batches, json)
}

/// Fetches the `k` nearest neighbours of a random query vector, returning
/// each row's id and its distance to the query.
pub async fn knn_select(
    client: &mut WarrenClient,
    entity_name: &str,
    dimension: u32,
    k: u32,
    distance: Distance,
    json: bool,
) -> Result<()> {
    let query_vector = float_vector(random_float_vector(dimension as usize));
    let query = Query::new(entity(DEFAULT_SCHEMA, entity_name))
        .select(&[ID_COLUMN, "distance"])
        .knn(FEATURE_COLUMN, k, query_vector, distance);
    let batches = run_query(client, query).await?;

    if !json {
        println!(
            "Results of kNN query for entity '{}' (k = {}, column = 'feature'):",
            entity_name, k
        );
    }
    print_query_results(&batches, json)
}

async fn run_query(client: &mut WarrenClient, query: Query) -> Result<Vec<QueryResponseMessage>> {
    let mut responses = client.query(query).await?;
    let mut batches = Vec::new();
    while let Some(batch) = responses.message().await.map_err(ClientError::from)? {
        batches.push(batch);
    }
    Ok(batches)
}
