//! PROMs module - Patient-Reported Outcome Measures attached to programs

mod api;
mod commands;

pub use commands::run_prom_command;
