//! JSON output formatter

use crate::api::Payload;
use crate::error::Result;

/// Pretty-printed payload, exactly as the server returned it
pub fn payload_json(payload: &Payload) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}
