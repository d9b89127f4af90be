//! Events module - activity on the practitioner's account

mod api;
mod commands;

pub use api::events_query;
pub use commands::run_event_command;
