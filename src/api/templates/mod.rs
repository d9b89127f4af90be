//! Templates module - program, workout and routine templates

mod api;
mod commands;

pub use api::templates_query;
pub use commands::run_template_command;
