//! CLI module for hax
//!
//! Provides command-line interface for the health-check ingestion server.

pub mod serve;

use clap::{Parser, Subcommand};

/// hax - health-check ingestion endpoint feeding cluster HA decisions
#[derive(Parser, Debug)]
#[command(name = "hax")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HAX_HOST                    Bind address (default: 0.0.0.0)
    HAX_PORT                    Listen port (default: 8080)
    HAX_LOG_LEVEL               Log filter (default: info)
    HAX_DATA_DIR                Data directory for logs (default: ~/.hax)
    HAX_FORWARD_URL             Downstream URL receiving HA states (default: in-process only)
    HAX_FORWARD_TIMEOUT_SECS    Downstream request timeout (default: 5)
    HAX_MAX_BODY_BYTES          Request body limit (default: 2097152)
    HAX_DECODE_FAILURE_POLICY   treat_as_empty | reject (default: treat_as_empty)
    HAX_ENTRY_FAILURE_POLICY    abort_batch | skip_entry (default: abort_batch)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the ingestion server (default)
    Serve(serve::ServeArgs),
}
