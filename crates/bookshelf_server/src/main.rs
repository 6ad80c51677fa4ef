//! Bookshelf GraphQL server entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging, open and migrate the database.
//! - Serve the GraphQL schema over HTTP until the process is stopped.

mod config;

use anyhow::{anyhow, Context, Result};
use bookshelf_core::{init_logging, open_db_at, DbHandle};
use bookshelf_graphql::{build_schema, schema_sdl, serve};
use clap::Parser;
use config::Cli;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", schema_sdl());
        return Ok(());
    }

    init_logging(cli.log_level(), cli.log_dir.as_deref()).map_err(|err| anyhow!(err))?;
    info!(
        "event=server_boot module=server status=start core_version={}",
        bookshelf_core::core_version()
    );

    let conn = open_db_at(&cli.database)
        .with_context(|| format!("failed to open database `{}`", cli.database))?;
    if cli.is_memory_database() {
        warn!("event=server_boot module=server status=ok storage=memory note=data_not_persisted");
    }

    let schema = build_schema(DbHandle::new(conn));
    serve(schema, &cli.server_config())
        .await
        .context("http server stopped")?;

    Ok(())
}
