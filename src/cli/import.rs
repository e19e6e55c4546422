use anyhow::{Context, Result};
use clap::Args;
use futures::stream;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use warren_client::language::basics::{entity, float_vector, string_value, vector_value};
use warren_client::language::Insert;
use warren_client::{ClientError, InsertMessage, WarrenClient};

use crate::cli::commands::resolve_entities;
use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_SCHEMA, FEATURE_COLUMN, ID_COLUMN};
use crate::dataset::{read_tsv, FeatureRecord};

/// Arguments for the `import` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Optional: Name of the entity to import (defaults to all three).
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Directory holding the tab-separated sample files.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Stream all rows over a single gRPC call instead of one insert per row.
    #[arg(long)]
    pub streaming: bool,
}

/// Imports the sample files into the selected entities.
pub async fn handle_import(args: ImportArgs, client: &mut WarrenClient) -> Result<()> {
    for (name, dimension) in resolve_entities(args.entity.as_deref())? {
        let path = args.data_dir.join(format!("{}.tsv", name));
        if args.streaming {
            import_streaming(client, name, dimension, &path).await?;
        } else {
            import_transactional(client, name, dimension, &path).await?;
        }
    }
    Ok(())
}

/// Imports one sample file inside a single transaction.
///
/// Every row becomes one `Insert` call carrying the transaction id. The
/// transaction is committed once all rows are in; any failure rolls it back
/// before the error is propagated.
pub async fn import_transactional(
    client: &mut WarrenClient,
    entity_name: &str,
    dimension: u32,
    path: &Path,
) -> Result<()> {
    let records = read_tsv(path, dimension as usize)
        .with_context(|| format!("Failed to load sample file {}", path.display()))?;
    let total = records.len();

    let txn = client.begin().await?;
    tracing::debug!("Began transaction {} for import into {}", txn.tid, entity_name);

    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%)")?
            .progress_chars("#>- "),
    );

    match insert_records(client, entity_name, txn.tid, records, &progress_bar).await {
        Ok(()) => {
            client.commit(txn).await?;
            progress_bar.finish_and_clear();
            println!(
                "Imported {} features into {}.{}.",
                total, DEFAULT_SCHEMA, entity_name
            );
            Ok(())
        }
        Err(e) => {
            progress_bar.finish_and_clear();
            println!("Exception during data import.");
            if let Err(rollback_err) = client.rollback(txn).await {
                tracing::error!(
                    "Rollback of transaction {} failed: {}",
                    txn.tid,
                    rollback_err
                );
            }
            Err(e).with_context(|| {
                format!("Import into {}.{} failed", DEFAULT_SCHEMA, entity_name)
            })
        }
    }
}

async fn insert_records(
    client: &mut WarrenClient,
    entity_name: &str,
    tid: i64,
    records: Vec<FeatureRecord>,
    progress_bar: &ProgressBar,
) -> Result<(), ClientError> {
    for record in records {
        let insert = Insert::new(entity(DEFAULT_SCHEMA, entity_name))
            .value(ID_COLUMN, string_value(record.id))
            .value(FEATURE_COLUMN, vector_value(float_vector(record.feature)))
            .tid(tid);
        client.insert(insert).await?;
        progress_bar.inc(1);
    }
    Ok(())
}

/// Imports one sample file through the streaming insert endpoint.
///
/// All rows travel over a single gRPC call and the server reports one
/// `InsertStatus` per accepted row.
pub async fn import_streaming(
    client: &mut WarrenClient,
    entity_name: &str,
    dimension: u32,
    path: &Path,
) -> Result<()> {
    let records = read_tsv(path, dimension as usize)
        .with_context(|| format!("Failed to load sample file {}", path.display()))?;
    let total = records.len() as u64;

    let messages: Vec<InsertMessage> = records
        .into_iter()
        .map(|record| {
            Insert::new(entity(DEFAULT_SCHEMA, entity_name))
                .value(ID_COLUMN, string_value(record.id))
                .value(FEATURE_COLUMN, vector_value(float_vector(record.feature)))
                .into()
        })
        .collect();

    let mut responses = client.insert_stream(stream::iter(messages)).await?;

    let progress_bar = ProgressBar::new(total);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%)")?
            .progress_chars("#>- "),
    );

    let mut counter = 0u64;
    loop {
        match responses.message().await {
            Ok(Some(_status)) => {
                counter += 1;
                progress_bar.inc(1);
            }
            Ok(None) => break,
            Err(status) => {
                progress_bar.finish_and_clear();
                println!(
                    "Error occurred while importing features for {}: {}",
                    entity_name,
                    status.message()
                );
                return Err(ClientError::from(status)).with_context(|| {
                    format!("Streaming import into {}.{} failed", DEFAULT_SCHEMA, entity_name)
                });
            }
        }
    }
    progress_bar.finish_and_clear();

    println!(
        "Import of {} features for {} completed! Everything committed...",
        counter, entity_name
    );
    Ok(())
}
