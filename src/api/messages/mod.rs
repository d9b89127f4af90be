//! Messages module - messages exchanged with a client

mod api;
mod commands;

pub use commands::run_message_command;
