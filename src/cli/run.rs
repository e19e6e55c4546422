use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use warren_client::{Distance, WarrenClient};

use crate::cli::{import, query, schema};
use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_K, ENTITIES, LOOKUP_IDS, SELECT_LIMIT};

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory holding the tab-separated sample files.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Stream rows during import instead of one insert per row.
    #[arg(long)]
    pub streaming: bool,
}

/// Runs the full example sequence: schema setup, data import, a plain
/// select, a filtered select and a kNN query on each entity.
pub async fn handle_run(args: RunArgs, client: &mut WarrenClient) -> Result<()> {
    schema::initialize_schema(client).await?;

    for (name, dimension) in ENTITIES {
        let path = args.data_dir.join(format!("{}.tsv", name));
        if args.streaming {
            import::import_streaming(client, name, dimension, &path).await?;
        } else {
            import::import_transactional(client, name, dimension, &path).await?;
        }
    }

    for (name, _) in ENTITIES {
        query::simple_select(client, name, SELECT_LIMIT, false).await?;
    }

    let ids: Vec<String> = LOOKUP_IDS.iter().map(|s| s.to_string()).collect();
    for (name, _) in ENTITIES {
        query::lookup_select(client, name, &ids, false).await?;
    }

    for (name, dimension) in ENTITIES {
        query::knn_select(client, name, dimension, DEFAULT_K, Distance::Euclidean, false).await?;
    }
    Ok(())
}
