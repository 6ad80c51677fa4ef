//! Command-line and environment configuration.

use bookshelf_core::db::MEMORY_DB_LOCATION;
use bookshelf_graphql::ServerConfig;
use clap::Parser;

/// Serve the bookshelf GraphQL API.
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version)]
pub struct Cli {
    /// SQLite database file, or `:memory:` for a throwaway database.
    #[arg(long, env = "BOOKSHELF_DATABASE", default_value = "bookshelf.sqlite3")]
    pub database: String,

    /// Address to bind.
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "BOOKSHELF_PORT", default_value_t = 8000)]
    pub port: u16,

    /// trace|debug|info|warn|error. Defaults to `debug` in debug builds, `info` otherwise.
    #[arg(long, env = "BOOKSHELF_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "BOOKSHELF_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Do not serve the GraphiQL page on GET /graphql.
    #[arg(long, env = "BOOKSHELF_NO_GRAPHIQL")]
    pub no_graphiql: bool,

    /// Print the GraphQL schema definition and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            graphiql: !self.no_graphiql,
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(bookshelf_core::default_log_level())
    }

    pub fn is_memory_database(&self) -> bool {
        self.database == MEMORY_DB_LOCATION
    }
}
