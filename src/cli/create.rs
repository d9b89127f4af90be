//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a client
    Client(CreateClientArgs),
}

/// Arguments for 'create client' subcommand
#[derive(Parser, Debug)]
pub struct CreateClientArgs {
    /// Client fields as a JSON object
    ///
    ///   {"external_id": "ext-1", "first_name": "John", "last_name": "Trevor",
    ///    "year_of_birth": 1990, "gender": "m", "email": "john@example.com"}
    #[arg(long, value_parser = super::parse_json_body, verbatim_doc_comment)]
    pub body: serde_json::Value,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
