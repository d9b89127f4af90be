//! Program command handlers

use log::debug;

use super::models::{ProgramAssignment, ProgramExercisesFormat, ProgramUpdate};
use crate::api::PhysitrackClient;
use crate::cli::{AssignResource, Cli, Command, GetResource, UpdateResource};
use crate::config::api;
use crate::output::output_response;
use crate::ui::with_spinner;

/// Run the program list/get command
pub async fn run_program_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Program(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(access_code) = &args.access_code {
        debug!("Fetching program {} for client {}", access_code, args.client);
        let response = client.find_client_program(&args.client, access_code).await?;
        return output_response(&response, None, args.output);
    }

    let response = with_spinner(
        &format!("Fetching programs for client '{}'...", args.client),
        cli.batch,
        client.get_client_programs(&args.client),
    )
    .await?;
    output_response(&response, Some(api::PROGRAMS), args.output)
}

/// Run the program exercises command
pub async fn run_program_exercises_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::ProgramExercise(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let format = if args.pdf {
        ProgramExercisesFormat::Pdf
    } else {
        ProgramExercisesFormat::Routine
    };

    debug!(
        "Fetching exercises of program {} ({:?})",
        args.access_code, format
    );
    let response = client
        .get_client_program_exercises(&args.client, &args.access_code, format)
        .await?;

    // The routine comes back as a list; the PDF variant is a single link
    let collection = match format {
        ProgramExercisesFormat::Routine if response.has_attribute(api::EXERCISES) => {
            Some(api::EXERCISES)
        }
        _ => None,
    };
    output_response(&response, collection, args.output)
}

/// Run the program adherence command
pub async fn run_adherence_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Adherence(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let response = client
        .get_client_program_adherence(&args.client, &args.access_code)
        .await?;
    output_response(&response, None, args.output)
}

/// Run the assign program command
pub async fn run_assign_program_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Assign {
        resource: AssignResource::Program(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let mut body = ProgramAssignment::new(args.template, &args.start_date);
    if let Some(num_weeks) = args.num_weeks {
        body = body.num_weeks(num_weeks);
    }
    if let Some(external_id) = &args.external_id {
        body = body.external_id(external_id);
    }

    debug!(
        "Assigning template {} to client {}",
        args.template, args.client
    );
    let response = client.assign_program(&args.client, &body).await?;
    output_response(&response, None, args.output)
}

/// Run the update program command
pub async fn run_update_program_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Program(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let body = match &args.end_date {
        Some(date) => ProgramUpdate::end_on(date),
        None => ProgramUpdate::end_now(),
    };

    let response = client
        .update_client_program(&args.client, &args.access_code, &body)
        .await?;
    output_response(&response, None, args.output)
}

/// Run the resend access code command
pub async fn run_resend_command(
    client: &PhysitrackClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Resend(args) = &cli.command else {
        unreachable!()
    };

    debug!(
        "Resending access code {} to client {} via {}",
        args.access_code, args.client, args.via
    );
    let response = client
        .resend_access_code(&args.client, &args.access_code, args.via)
        .await?;
    output_response(&response, None, args.output)
}
