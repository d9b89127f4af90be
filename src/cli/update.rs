//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update a client
    Client(UpdateClientArgs),

    /// Update (or end) a program assigned to a client
    Program(UpdateProgramArgs),
}

/// Arguments for 'update client' subcommand
#[derive(Parser, Debug)]
pub struct UpdateClientArgs {
    /// Client ID
    pub id: String,

    /// Client fields as a JSON object (same fields as 'create client')
    #[arg(long, value_parser = super::parse_json_body)]
    pub body: serde_json::Value,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'update program' subcommand
#[derive(Parser, Debug)]
pub struct UpdateProgramArgs {
    /// Program access code
    pub access_code: String,

    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// New end date (ISO8601, e.g. 2018-06-13T00:00:00Z)
    ///
    /// Without an end date the program ends today.
    #[arg(long)]
    pub end_date: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
