use assert_cmd::Command;
use clap::CommandFactory;
use predicates::prelude::*;
use std::error::Error;
use std::path::Path;

use warren_examples::cli::CliArgs;
use warren_examples::constants::{ENTITIES, LOOKUP_IDS};
use warren_examples::dataset::read_tsv;

// Helper function to get the path to the compiled binary
fn get_binary_path() -> Result<String, Box<dyn Error>> {
    Ok(assert_cmd::cargo::cargo_bin("warren-examples").to_string_lossy().to_string())
}

#[test]
fn test_cli_args_are_consistent() {
    CliArgs::command().debug_assert();
}

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn Error>> {
    let bin_path = get_binary_path()?;

    Command::new(&bin_path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ping"))
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("run"));

    Ok(())
}

#[test]
fn test_unknown_subcommand_fails() -> Result<(), Box<dyn Error>> {
    let bin_path = get_binary_path()?;

    Command::new(&bin_path)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));

    Ok(())
}

#[test]
fn test_unreachable_server_reports_connection_error() -> Result<(), Box<dyn Error>> {
    let bin_path = get_binary_path()?;

    // Port 1 is never listening, so the connection attempt fails fast.
    Command::new(&bin_path)
        .arg("--address")
        .arg("http://127.0.0.1:1")
        .arg("ping")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error connecting to WarrenDB"));

    Ok(())
}

#[test]
fn test_sample_files_match_declared_dimensions() -> Result<(), Box<dyn Error>> {
    for (name, dimension) in ENTITIES {
        let path = Path::new("data").join(format!("{}.tsv", name));
        let records = read_tsv(&path, dimension as usize)?;
        assert!(!records.is_empty(), "Sample file for {} is empty", name);
    }

    Ok(())
}

#[test]
fn test_sample_files_contain_lookup_ids() -> Result<(), Box<dyn Error>> {
    let mut all_ids = Vec::new();
    for (name, dimension) in ENTITIES {
        let path = Path::new("data").join(format!("{}.tsv", name));
        for record in read_tsv(&path, dimension as usize)? {
            all_ids.push(record.id);
        }
    }

    for id in LOOKUP_IDS {
        assert!(
            all_ids.iter().any(|candidate| candidate == id),
            "Lookup id {} not present in any sample file",
            id
        );
    }

    Ok(())
}
