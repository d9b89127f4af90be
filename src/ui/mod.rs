//! UI utilities for terminal output

mod spinner;

pub use spinner::{create_spinner, with_spinner};
