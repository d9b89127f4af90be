//! Assign command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'assign' command
#[derive(Subcommand, Debug)]
pub enum AssignResource {
    /// Assign a program built from a template to a client
    Program(AssignProgramArgs),
}

/// Arguments for 'assign program' subcommand
#[derive(Parser, Debug)]
pub struct AssignProgramArgs {
    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Template ID the program is built from
    #[arg(short, long)]
    pub template: u64,

    /// Start date (ISO8601, e.g. 2018-06-13T00:00:00Z)
    #[arg(long)]
    pub start_date: String,

    /// Program length in weeks (inherits from template if omitted)
    #[arg(long)]
    pub num_weeks: Option<u32>,

    /// External reference for the program
    #[arg(long)]
    pub external_id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
