//! PROM command handlers

use log::debug;

use crate::api::PhysitrackClient;
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_response;

/// Run the PROM list/get command
pub async fn run_prom_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Prom(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let response = match &args.id {
        Some(id) if args.results => {
            debug!("Fetching results of PROM {}", id);
            client
                .find_client_program_prom_results(&args.client, &args.access_code, id)
                .await?
        }
        Some(id) => {
            client
                .find_client_program_prom(&args.client, &args.access_code, id)
                .await?
        }
        None => {
            let response = client
                .get_all_client_program_proms(&args.client, &args.access_code)
                .await?;
            let collection = response.has_attribute(api::PROMS).then_some(api::PROMS);
            return output_response(&response, collection, args.output);
        }
    };

    output_response(&response, None, args.output)
}
