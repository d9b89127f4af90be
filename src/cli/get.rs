//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get clients (all clients, or one by ID)
    #[command(visible_alias = "clients")]
    Client(ClientArgs),

    /// Get programs assigned to a client
    #[command(visible_alias = "programs")]
    Program(ProgramArgs),

    /// Get the exercise routine of an assigned program
    #[command(visible_alias = "program-exercises")]
    ProgramExercise(ProgramExercisesArgs),

    /// Get adherence and pain levels for an assigned program
    Adherence(AdherenceArgs),

    /// Get PROMs attached to an assigned program
    #[command(visible_alias = "proms")]
    Prom(PromArgs),

    /// Get messages for a client
    #[command(visible_alias = "messages")]
    Message(MessageArgs),

    /// Get templates available to the practitioner
    #[command(visible_alias = "templates")]
    Template(TemplateArgs),

    /// Get exercises, optionally searched by name
    #[command(visible_alias = "exercises")]
    Exercise(ExerciseArgs),

    /// Get events on the practitioner's account
    #[command(visible_alias = "events")]
    Event(EventArgs),
}

/// Arguments for 'get client' subcommand
#[derive(Parser, Debug)]
pub struct ClientArgs {
    /// Client ID (if specified, shows details for that client)
    pub id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get program' subcommand
#[derive(Parser, Debug)]
pub struct ProgramArgs {
    /// Program access code (if specified, shows details for that program)
    pub access_code: Option<String>,

    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get program-exercise' subcommand
#[derive(Parser, Debug)]
pub struct ProgramExercisesArgs {
    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Program access code
    #[arg(short = 'a', long)]
    pub access_code: String,

    /// Return a link to a personalized PDF instead of the full routine
    #[arg(long, default_value_t = false)]
    pub pdf: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get adherence' subcommand
#[derive(Parser, Debug)]
pub struct AdherenceArgs {
    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Program access code
    #[arg(short = 'a', long)]
    pub access_code: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get prom' subcommand
#[derive(Parser, Debug)]
pub struct PromArgs {
    /// PROM ID (if specified, shows details for that PROM)
    pub id: Option<String>,

    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Program access code
    #[arg(short = 'a', long)]
    pub access_code: String,

    /// Show the PROM's results (requires ID)
    #[arg(long, default_value_t = false, requires = "id")]
    pub results: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get message' subcommand
#[derive(Parser, Debug)]
pub struct MessageArgs {
    /// Message ID (if specified, shows that message)
    pub id: Option<String>,

    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get template' subcommand
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Template ID (if specified, shows details for that template)
    pub id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get exercise' subcommand
#[derive(Parser, Debug)]
pub struct ExerciseArgs {
    /// Search exercises by name
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get event' subcommand
#[derive(Parser, Debug)]
pub struct EventArgs {
    /// Event ID (if specified, shows details for that event)
    pub id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
