//! Clients module - practitioner's clients (patients)

mod api;
mod commands;
mod models;

pub use api::clients_query;
pub use commands::{run_client_command, run_create_client_command, run_update_client_command};
pub use models::{ClientBody, Gender};
