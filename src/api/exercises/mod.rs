//! Exercises module - the exercise library

mod api;
mod commands;

pub use api::exercises_query;
pub use commands::run_exercise_command;
