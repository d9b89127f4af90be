//! Physitrack CLI - Main entry point

use clap::Parser;
use log::{debug, info};

use physitrack::api::{clients, events, exercises, messages, programs, proms, templates};
use physitrack::cli::{AssignResource, CreateResource, GetResource, UpdateResource};
use physitrack::{Cli, Command, CredentialsResolver, PhysitrackClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting physitrack v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let credentials =
        CredentialsResolver::new().resolve(cli.api_key.as_deref(), cli.subdomain.as_deref())?;
    debug!("Using account subdomain '{}'", credentials.subdomain());

    let client = match &cli.base_url {
        Some(url) => PhysitrackClient::with_base_url(credentials, url),
        None => PhysitrackClient::new(credentials),
    };

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Client(_) => clients::run_client_command(&client, cli).await,
            GetResource::Program(_) => programs::run_program_command(&client, cli).await,
            GetResource::ProgramExercise(_) => {
                programs::run_program_exercises_command(&client, cli).await
            }
            GetResource::Adherence(_) => programs::run_adherence_command(&client, cli).await,
            GetResource::Prom(_) => proms::run_prom_command(&client, cli).await,
            GetResource::Message(_) => messages::run_message_command(&client, cli).await,
            GetResource::Template(_) => templates::run_template_command(&client, cli).await,
            GetResource::Exercise(_) => exercises::run_exercise_command(&client, cli).await,
            GetResource::Event(_) => events::run_event_command(&client, cli).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Client(_) => clients::run_create_client_command(&client, cli).await,
        },
        Command::Update { resource } => match resource {
            UpdateResource::Client(_) => clients::run_update_client_command(&client, cli).await,
            UpdateResource::Program(_) => programs::run_update_program_command(&client, cli).await,
        },
        Command::Assign { resource } => match resource {
            AssignResource::Program(_) => programs::run_assign_program_command(&client, cli).await,
        },
        Command::Resend(_) => programs::run_resend_command(&client, cli).await,
    }
}
