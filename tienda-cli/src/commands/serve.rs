//! HTTP server command for the tienda API

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use tienda_server::db::{create_pool, describe_target};
use tienda_server::http::server::DEFAULT_CORS_ORIGIN;
use tienda_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Frontend origin allowed to call the API (repeatable or comma-separated)
    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGIN",
        value_delimiter = ',',
        default_value = DEFAULT_CORS_ORIGIN
    )]
    pub cors_origins: Vec<String>,

    /// Allow any origin (without credentials) - development only
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_origins: self.cors_origins.clone(),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let options = args.database.connect_options()?;
    tracing::info!(database = %describe_target(&options), "Connecting to database");

    let pool = create_pool(options)
        .await
        .context("Failed to create database pool")?;

    // Run server (blocks until shutdown, closes the pool on the way out)
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_split_on_commas() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/tienda",
            "--cors-origin",
            "http://localhost:5173,https://tiendanepe.onrender.com",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ])
        .unwrap();

        let config = args.server_config();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://tiendanepe.onrender.com"]
        );
        assert!(!config.cors_permissive);
    }
}
