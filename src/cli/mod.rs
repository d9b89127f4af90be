//! CLI argument parsing

mod assign;
mod common;
mod create;
mod get;
mod resend;
mod update;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use assign::{AssignProgramArgs, AssignResource};
pub use common::OutputFormat;
pub use create::{CreateClientArgs, CreateResource};
pub use get::{
    AdherenceArgs, ClientArgs, EventArgs, ExerciseArgs, GetResource, MessageArgs, ProgramArgs,
    ProgramExercisesArgs, PromArgs, TemplateArgs,
};
pub use resend::ResendArgs;
pub use update::{UpdateClientArgs, UpdateProgramArgs, UpdateResource};

/// Physitrack CLI
#[derive(Parser, Debug)]
#[command(name = "physitrack")]
#[command(version)]
#[command(
    about = "Explore and manage clients, programs and exercises in a Physitrack account",
    long_about = None
)]
pub struct Cli {
    /// API key (overrides env var and credentials file)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Account subdomain, e.g. 'acme' for acme.physitrack.com
    #[arg(short = 's', long, global = true)]
    pub subdomain: Option<String>,

    /// Override the API base URL (staging hosts, mock servers)
    #[arg(long, global = true, hide = true)]
    pub base_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode - no progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Assign resources to a client
    Assign {
        #[command(subcommand)]
        resource: AssignResource,
    },

    /// Resend a program access code to a client
    Resend(ResendArgs),
}

/// Parse a `--body` argument into a JSON object
pub fn parse_json_body(raw: &str) -> std::result::Result<serde_json::Value, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {}", e))?;
    if !value.is_object() {
        return Err("body must be a JSON object".to_string());
    }
    Ok(value)
}
