//! Template command handlers

use crate::api::PhysitrackClient;
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_response;
use crate::ui::with_spinner;

/// Run the template list/get command
pub async fn run_template_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Template(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = &args.id {
        let response = client.find_template(id).await?;
        return output_response(&response, None, args.output);
    }

    let response =
        with_spinner("Fetching templates...", cli.batch, client.get_all_templates()).await?;
    output_response(&response, Some(api::TEMPLATES), args.output)
}
