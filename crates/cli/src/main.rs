//! `expense-tracker` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — connect, ensure the schema, and start the API server.
//! - `init-db` — connect and ensure the schema, then exit.

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{DatabaseArgs, ServerArgs};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    about = "Personal expense records over HTTP",
    version
)]
struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve(ServerArgs),
    /// Create missing tables and exit.
    InitDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let pool = db::DbPool::open(&cli.database.pool_config())
        .await
        .context("Error connecting to database")?;

    let result = run(cli.command, pool.clone()).await;
    pool.close().await;
    result
}

async fn run(command: Command, pool: db::DbPool) -> anyhow::Result<()> {
    db::ensure_schema(&pool)
        .await
        .context("Error initializing database")?;

    match command {
        Command::Serve(server) => {
            let config = server.server_config();
            info!(port = config.bind_addr.port(), "Server starting");
            api::serve(api::AppState::new(pool), config)
                .await
                .context("server failed")?;
        }
        Command::InitDb => {
            info!("Schema is up to date");
        }
    }

    Ok(())
}
