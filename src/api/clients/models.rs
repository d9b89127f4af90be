//! Client request bodies

use serde::{Deserialize, Serialize};

/// Client gender as the API encodes it
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// Body for creating or updating a client
///
/// Optional fields left as `None` are not sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientBody {
    /// Unique id in the caller's own system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub year_of_birth: u16,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// International format, e.g. '+16043105253'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
}

impl ClientBody {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        year_of_birth: u16,
        gender: Gender,
    ) -> Self {
        Self {
            external_id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            year_of_birth,
            gender,
            email: None,
            mobile_phone: None,
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn mobile_phone(mut self, mobile_phone: impl Into<String>) -> Self {
        self.mobile_phone = Some(mobile_phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_body_serialization_skips_unset_fields() {
        let body = ClientBody::new("John", "Trevor", 1990, Gender::Male);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first_name": "John",
                "last_name": "Trevor",
                "year_of_birth": 1990,
                "gender": "m"
            })
        );
    }

    #[test]
    fn test_client_body_with_optional_fields() {
        let body = ClientBody::new("Jane", "Doe", 1985, Gender::Female)
            .external_id("ext-1")
            .email("jane@example.com")
            .mobile_phone("+16043105253");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["gender"], "f");
        assert_eq!(json["external_id"], "ext-1");
        assert_eq!(json["mobile_phone"], "+16043105253");
    }

    #[test]
    fn test_client_body_deserialization() {
        let json = r#"{"first_name": "John", "last_name": "Trevor", "year_of_birth": 1990, "gender": "m"}"#;
        let body: ClientBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.gender, Gender::Male);
        assert!(body.email.is_none());
    }
}
