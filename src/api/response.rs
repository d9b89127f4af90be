//! Uniform wrapper around one Physitrack HTTP exchange

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PhysitrackError, Result};

/// JSON object payload, keys kept in server order
pub type Payload = Map<String, Value>;

/// Result of one logical API operation
///
/// Wraps a single request, or the terminal request of a pagination chain.
/// Failed calls are not errors: check [`Response::succeeded`] and read
/// [`Response::errors`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    payload: Payload,
    succeeded: bool,
    status_code: u16,
    status_message: String,
}

impl Response {
    pub fn new(
        payload: Payload,
        succeeded: bool,
        status_code: u16,
        status_message: impl Into<String>,
    ) -> Self {
        Self {
            payload,
            succeeded,
            status_code,
            status_message: status_message.into(),
        }
    }

    /// Read status and body of an HTTP response
    ///
    /// An empty body, a non-JSON body, or JSON that is not an object all
    /// become an empty payload.
    pub async fn from_http(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let status_message = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text().await?;

        Ok(Self::new(
            parse_payload(&text, status.as_u16()),
            status.is_success(),
            status.as_u16(),
            status_message,
        ))
    }

    /// Replace the payload, keeping status, code and message
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// True for 2xx statuses
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Look up a top-level payload field
    ///
    /// A key that is present with a `null` value returns `Value::Null`;
    /// an absent key is a [`PhysitrackError::NoSuchAttribute`].
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.payload
            .get(key)
            .ok_or_else(|| PhysitrackError::NoSuchAttribute(key.to_string()))
    }

    /// Typed read of a top-level payload field
    pub fn get_as<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self.get(key)?;
        serde_json::from_value(value.clone())
            .map_err(|e| PhysitrackError::Json(format!("Failed to read '{}': {}", key, e)))
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.payload.contains_key(key)
    }

    /// Top-level payload keys in insertion order
    pub fn attributes(&self) -> Vec<&str> {
        self.payload.keys().map(String::as_str).collect()
    }

    /// The array stored under `key`
    ///
    /// Fails if the key is absent or does not hold an array.
    pub fn records(&self, key: &str) -> Result<&Vec<Value>> {
        match self.get(key)? {
            Value::Array(records) => Ok(records),
            other => Err(PhysitrackError::Json(format!(
                "Expected '{}' to be an array, got {}",
                key,
                type_name(other)
            ))),
        }
    }

    /// Human-readable messages from the server's `errors` array
    pub fn errors(&self) -> Vec<String> {
        match self.payload.get("errors") {
            Some(Value::Array(errors)) => errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

fn parse_payload(text: &str, status: u16) -> Payload {
    if text.trim().is_empty() {
        return Payload::new();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!(
                "Expected a JSON object body (status {}), got {}; payload left empty",
                status,
                type_name(&other)
            );
            Payload::new()
        }
        Err(e) => {
            warn!("Response body is not JSON (status {}): {}", status, e);
            Payload::new()
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    fn client_response() -> Response {
        Response::new(
            payload(json!({
                "id": 42,
                "first_name": "John",
                "last_name": "Trevor",
                "email": null
            })),
            true,
            200,
            "OK",
        )
    }

    #[test]
    fn test_get_present_key() {
        let response = client_response();
        assert_eq!(response.get("first_name").unwrap(), "John");
        assert_eq!(response.get_as::<u64>("id").unwrap(), 42);
    }

    #[test]
    fn test_get_null_is_not_missing() {
        let response = client_response();
        assert_eq!(response.get("email").unwrap(), &Value::Null);
        assert!(response.has_attribute("email"));
    }

    #[test]
    fn test_get_absent_key_fails() {
        let response = client_response();
        match response.get("gender") {
            Err(PhysitrackError::NoSuchAttribute(key)) => assert_eq!(key, "gender"),
            other => panic!("Expected NoSuchAttribute, got {:?}", other),
        }
        assert!(!response.has_attribute("gender"));
    }

    #[test]
    fn test_get_as_type_mismatch() {
        let response = client_response();
        assert!(matches!(
            response.get_as::<u64>("first_name"),
            Err(PhysitrackError::Json(_))
        ));
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let response = client_response();
        assert_eq!(
            response.attributes(),
            vec!["id", "first_name", "last_name", "email"]
        );
    }

    #[test]
    fn test_with_payload_keeps_status() {
        let response = Response::new(payload(json!({"clients": [1]})), true, 200, "OK")
            .with_payload(payload(json!({"clients": [1, 2, 3]})));
        assert!(response.succeeded());
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.status_message(), "OK");
        assert_eq!(response.records("clients").unwrap().len(), 3);
    }

    #[test]
    fn test_records_rejects_non_array() {
        let response = client_response();
        assert!(matches!(
            response.records("first_name"),
            Err(PhysitrackError::Json(_))
        ));
        assert!(matches!(
            response.records("clients"),
            Err(PhysitrackError::NoSuchAttribute(_))
        ));
    }

    #[test]
    fn test_errors_from_failed_call() {
        let response = Response::new(
            payload(json!({"errors": ["First name can't be blank", "Gender is invalid"]})),
            false,
            422,
            "Unprocessable Entity",
        );
        assert_eq!(
            response.errors(),
            vec!["First name can't be blank", "Gender is invalid"]
        );
    }

    #[test]
    fn test_errors_empty_when_absent() {
        assert!(client_response().errors().is_empty());
    }

    #[test]
    fn test_parse_payload_variants() {
        assert!(parse_payload("", 204).is_empty());
        assert!(parse_payload("<html>Bad Gateway</html>", 502).is_empty());
        assert!(parse_payload("[1, 2]", 200).is_empty());
        assert_eq!(parse_payload(r#"{"id": 1}"#, 200).len(), 1);
    }

    #[test]
    fn test_serializes_for_output() {
        let json = serde_json::to_value(client_response()).unwrap();
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["status_code"], 200);
        assert_eq!(json["payload"]["last_name"], "Trevor");
    }
}
