use clap::Parser;
use json_collections_api::infra::config;
use json_collections_api::storage::{try_merge, DataPaths};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Merge a directory of `{collection}.json` files into one merged document.
#[derive(Parser, Debug)]
#[command(name = "merge_json")]
struct Cli {
    /// Directory holding one JSON file per collection. Defaults to `DB_DIR` or `db`.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Merged document to write. Defaults to `DB_FILE` or `db.json`.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let paths = DataPaths::new(
        cli.output.unwrap_or_else(config::db_file),
        cli.source.unwrap_or_else(config::db_dir),
    );

    match try_merge(&paths) {
        Ok(summary) => {
            tracing::info!(
                "generated {} from {} ({} of {} files)",
                summary.output.display(),
                paths.collection_dir.display(),
                summary.collections.len(),
                summary.files_found
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("merge failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
