//! Connectivity check against the configured database

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::{ConnectOptions, Connection};

use tienda_server::db::describe_target;

use super::DatabaseArgs;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Open one connection, run `SELECT 1`, and close it.
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let options = args.database.connect_options()?;
    let target = describe_target(&options);

    let mut conn = options
        .connect()
        .await
        .with_context(|| format!("Failed to connect to {target}"))?;
    let (one,): (i32,) = sqlx::query_as("SELECT 1")
        .fetch_one(&mut conn)
        .await
        .context("Database did not answer SELECT 1")?;
    conn.close().await.ok();

    tracing::debug!(result = one, "SELECT 1");
    println!("database reachable: {target}");
    Ok(())
}
