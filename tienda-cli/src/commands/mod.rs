//! Subcommand implementations

pub mod check_db;
pub mod serve;

use clap::{Args, ValueEnum};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// TLS mode for the database connection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslMode {
    /// Plain TCP
    Disable,
    /// TLS when the server offers it, certificate not verified
    Prefer,
    /// Always TLS, certificate not verified
    Require,
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// TLS mode for the database connection
    #[arg(long, env = "DATABASE_SSL_MODE", value_enum, default_value = "prefer")]
    pub db_ssl_mode: SslMode,
}

impl DatabaseArgs {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        use anyhow::Context;

        tienda_server::db::connect_options(&self.database_url, Some(self.db_ssl_mode.into()))
            .context("DATABASE_URL is not a valid PostgreSQL connection string")
    }
}
