//! Exercise command handlers

use log::debug;

use crate::api::PhysitrackClient;
use crate::cli::{Cli, Command, GetResource};
use crate::config::api;
use crate::output::output_response;
use crate::ui::with_spinner;

/// Run the exercise list command
pub async fn run_exercise_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Exercise(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let message = match &args.search {
        Some(search) => {
            debug!("Searching exercises for '{}'", search);
            format!("Searching exercises for '{}'...", search)
        }
        None => "Fetching exercises...".to_string(),
    };

    let response = with_spinner(
        &message,
        cli.batch,
        client.get_all_exercises(args.search.as_deref()),
    )
    .await?;
    output_response(&response, Some(api::EXERCISES), args.output)
}
