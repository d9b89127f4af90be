//! Output formatting module
//!
//! Handles the output formats (table, JSON) for API responses

mod json;
mod table;

use crate::api::Response;
use crate::cli::OutputFormat;

pub use self::json::payload_json;
pub use self::table::{fields_table, format_cell, records_table};

/// Print a response in the requested format
///
/// `collection` names the payload key holding a list of records; without it
/// the payload is shown as a single resource. A failed call prints nothing
/// to stdout and comes back as an error carrying the server's messages.
pub fn output_response(
    response: &Response,
    collection: Option<&str>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if !response.succeeded() {
        return Err(failure_message(response).into());
    }

    match format {
        OutputFormat::Json => println!("{}", payload_json(response.payload())?),
        OutputFormat::Table => match collection {
            Some(key) => {
                let records = response.records(key)?;
                if records.is_empty() {
                    eprintln!("No {} found", key);
                } else {
                    println!("{}", records_table(records));
                }
            }
            None => println!("{}", fields_table(response.payload())),
        },
    }

    Ok(())
}

/// Status line plus the server's `errors`, one per line
pub fn failure_message(response: &Response) -> String {
    let mut message = format!(
        "Request failed with status {} {}",
        response.status_code(),
        response.status_message()
    );
    for error in response.errors() {
        message.push_str(&format!("\n  {}", error));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: serde_json::Value, succeeded: bool, status: u16, message: &str) -> Response {
        let payload = match body {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        Response::new(payload, succeeded, status, message)
    }

    #[test]
    fn test_failure_message_lists_errors() {
        let failed = response(
            json!({"errors": ["Email has already been taken"]}),
            false,
            422,
            "Unprocessable Entity",
        );
        let message = failure_message(&failed);
        assert!(message.starts_with("Request failed with status 422 Unprocessable Entity"));
        assert!(message.contains("Email has already been taken"));
    }

    #[test]
    fn test_output_response_failed_call_is_error() {
        let failed = response(json!({"errors": ["Not found"]}), false, 404, "Not Found");
        let err = output_response(&failed, None, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_output_response_collection_table() {
        let ok = response(json!({"clients": [{"id": 1}]}), true, 200, "OK");
        assert!(output_response(&ok, Some("clients"), OutputFormat::Table).is_ok());
    }

    #[test]
    fn test_output_response_missing_collection_key() {
        let ok = response(json!({"id": 1}), true, 200, "OK");
        assert!(output_response(&ok, Some("clients"), OutputFormat::Table).is_err());
    }
}
