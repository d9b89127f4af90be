//! Message command handlers

use crate::api::PhysitrackClient;
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_response;

/// Run the message list/get command
pub async fn run_message_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Message(args),
    } = &cli.command
    else {
        unreachable!()
    };

    match &args.id {
        Some(id) => {
            let response = client.find_client_message(&args.client, id).await?;
            output_response(&response, None, args.output)
        }
        None => {
            let response = client.get_all_client_messages(&args.client).await?;
            let collection = response
                .has_attribute(api::MESSAGES)
                .then_some(api::MESSAGES);
            output_response(&response, collection, args.output)
        }
    }
}
