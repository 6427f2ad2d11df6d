//! tienda: run and check the catalog API

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::check_db::{run_check_db, CheckDbArgs};
use commands::serve::{run_serve, ServeArgs};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(name = "tienda", version, about = "Catalog API for categories, products, and suppliers")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Verify the database is reachable
    CheckDb(CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => run_serve(args).await?,
        Commands::CheckDb(args) => run_check_db(args).await?,
    }

    Ok(())
}
