use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use spycat_core::breeds::DEFAULT_BREEDS_URL;

/// HTTP service for managing spy cats and their missions
///
/// Every option can also be supplied through the environment variable named
/// in its help text. Command-line values win over the environment.
#[derive(Parser, Debug)]
#[command(version, about, name = "spycat")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/spycat/spycat.db
    #[arg(long, env = "SPYCAT_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "SPYCAT_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// URL of the breed reference list
    #[arg(long, env = "SPYCAT_BREEDS_URL", default_value = DEFAULT_BREEDS_URL)]
    pub breeds_url: String,

    /// Timeout for a breed lookup, in seconds
    #[arg(long, env = "SPYCAT_BREEDS_TIMEOUT", default_value_t = 10)]
    pub breeds_timeout: u64,

    /// Accept only these breeds instead of querying the breed reference list
    /// (repeatable, or comma separated)
    #[arg(long = "breed", env = "SPYCAT_BREEDS", value_delimiter = ',')]
    pub breeds: Vec<String>,

    /// Origins allowed by CORS (repeatable, or comma separated). `*` allows
    /// any origin
    #[arg(
        long = "allowed-origin",
        env = "SPYCAT_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// Allow credentialed cross-origin requests
    #[arg(long, env = "SPYCAT_ALLOW_CREDENTIALS")]
    pub allow_credentials: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "SPYCAT_LOG", default_value = "info")]
    pub log_level: String,
}
