//! Programs module - exercise programs assigned to clients

mod api;
mod commands;
mod models;

pub use api::client_programs_query;
pub(crate) use api::program_path;
pub use commands::{
    run_adherence_command, run_assign_program_command, run_program_command,
    run_program_exercises_command, run_resend_command, run_update_program_command,
};
pub use models::{DeliveryChannel, ProgramAssignment, ProgramExercisesFormat, ProgramUpdate};
