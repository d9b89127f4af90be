//! Client command handlers

use log::debug;

use crate::api::PhysitrackClient;
use crate::cli::{Cli, Command, CreateResource, GetResource, UpdateResource};
use crate::config::api;
use crate::output::output_response;
use crate::ui::with_spinner;

/// Run the client list/get command
pub async fn run_client_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Client(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        debug!("Fetching client {}", id);
        let response = with_spinner(
            &format!("Fetching client '{}'...", id),
            cli.batch,
            client.find_client(id),
        )
        .await?;
        return output_response(&response, None, args.output);
    }

    let response = with_spinner("Fetching clients...", cli.batch, client.get_all_clients()).await?;
    output_response(&response, Some(api::CLIENTS), args.output)
}

/// Run the create client command
pub async fn run_create_client_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Client(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Creating client");
    let response = client.create_client(&args.body).await?;
    output_response(&response, None, args.output)
}

/// Run the update client command
pub async fn run_update_client_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Client(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Updating client {}", args.id);
    let response = client.update_client(&args.id, &args.body).await?;
    output_response(&response, None, args.output)
}
