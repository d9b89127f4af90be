//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Create a spinner with the given message
///
/// Returns `None` in batch mode.
pub fn create_spinner(message: &str, batch: bool) -> Option<ProgressBar> {
    if batch {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Await `task` while a spinner runs, then clear it
pub async fn with_spinner<F, T>(message: &str, batch: bool, task: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = create_spinner(message, batch);
    let result = task.await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    result
}
