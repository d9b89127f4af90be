//! Program API operations

use serde::Serialize;

use super::models::{DeliveryChannel, ProgramExercisesFormat};
use crate::api::pagination::CollectionQuery;
use crate::api::{segment, PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

/// Path of one program instance: `clients/{client_id}/programs/{access_code}`
pub(crate) fn program_path(client_id: &str, access_code: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        api::CLIENTS,
        segment(client_id),
        api::PROGRAMS,
        segment(access_code)
    )
}

/// Query listing every program assigned to a client
pub fn client_programs_query(client_id: &str) -> CollectionQuery {
    CollectionQuery::new(
        format!("{}/{}/{}", api::CLIENTS, segment(client_id), api::PROGRAMS),
        api::PROGRAMS,
    )
}

impl PhysitrackClient {
    /// Find a single program by client id and access code
    pub async fn find_client_program(&self, client_id: &str, access_code: &str) -> Result<Response> {
        self.get(&program_path(client_id, access_code)).await
    }

    /// Fetch all programs for the client, following pagination
    pub async fn get_client_programs(&self, client_id: &str) -> Result<Response> {
        self.fetch_collection(&client_programs_query(client_id))
            .await
    }

    /// Assign a program to a client (see [`ProgramAssignment`](super::ProgramAssignment))
    pub async fn assign_program<B>(&self, client_id: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("{}/{}/{}", api::CLIENTS, segment(client_id), api::PROGRAMS);
        self.post(&path, body).await
    }

    /// Update a program already assigned to a client
    ///
    /// A `null` end date ends the program today (see [`ProgramUpdate`](super::ProgramUpdate)).
    pub async fn update_client_program<B>(
        &self,
        client_id: &str,
        access_code: &str,
        body: &B,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.put(&program_path(client_id, access_code), body).await
    }

    /// Send the client the program access code
    pub async fn resend_access_code(
        &self,
        client_id: &str,
        access_code: &str,
        via: DeliveryChannel,
    ) -> Result<Response> {
        let path = format!(
            "{}/resend?via={}",
            program_path(client_id, access_code),
            via.as_str()
        );
        self.post(&path, &serde_json::json!({})).await
    }

    /// Get the exercises of a program assigned to a client
    ///
    /// The routine format holds the whole routine for the duration of the
    /// program; the PDF format returns a link to a personalized document.
    pub async fn get_client_program_exercises(
        &self,
        client_id: &str,
        access_code: &str,
        format: ProgramExercisesFormat,
    ) -> Result<Response> {
        let path = format!(
            "{}/{}{}",
            program_path(client_id, access_code),
            api::EXERCISES,
            format.query()
        );
        self.get(&path).await
    }

    /// Adherence and pain levels for all exercises of a program
    pub async fn get_client_program_adherence(
        &self,
        client_id: &str,
        access_code: &str,
    ) -> Result<Response> {
        self.get(&format!("{}/adherence", program_path(client_id, access_code)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::programs::{ProgramAssignment, ProgramUpdate};
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_program_path() {
        assert_eq!(program_path("7", "ABC123"), "clients/7/programs/ABC123");
    }

    #[test]
    fn test_program_path_encodes_segments() {
        assert_eq!(program_path("7", "AB/C"), "clients/7/programs/AB%2FC");
    }

    #[test]
    fn test_client_programs_query() {
        let query = client_programs_query("7");
        assert_eq!(query.page_path(2), "clients/7/programs?page=2");
        assert_eq!(query.key(), "programs");
    }

    #[tokio::test]
    async fn test_find_client_program() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/clients/7/programs/ABC123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_code": "ABC123",
                "num_weeks": 4
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client.find_client_program("7", "ABC123").await.unwrap();
        assert_eq!(response.get("access_code").unwrap(), "ABC123");
    }

    #[tokio::test]
    async fn test_get_client_programs_paginates() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        let full: Vec<serde_json::Value> = (0..200)
            .map(|i| serde_json::json!({"access_code": format!("AC{}", i)}))
            .collect();

        Mock::given(method("GET"))
            .and(path("/clients/7/programs"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "programs": full })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/clients/7/programs"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "programs": [{"access_code": "LAST"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client.get_client_programs("7").await.unwrap();
        let programs = response.records("programs").unwrap();
        assert_eq!(programs.len(), 201);
        assert_eq!(programs[200]["access_code"], "LAST");
    }

    #[tokio::test]
    async fn test_assign_program() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("POST"))
            .and(path("/clients/7/programs"))
            .and(body_json(serde_json::json!({
                "template_id": 99,
                "start_date": "2018-06-13T00:00:00Z",
                "num_weeks": 6
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "access_code": "NEW123",
                "num_weeks": 6
            })))
            .expect(1)
            .mount(&server)
            .await;

        let body = ProgramAssignment::new(99, "2018-06-13T00:00:00Z").num_weeks(6);
        let response = client.assign_program("7", &body).await.unwrap();
        assert!(response.succeeded());
        assert_eq!(response.get("access_code").unwrap(), "NEW123");
    }

    #[tokio::test]
    async fn test_update_client_program_end_now() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("PUT"))
            .and(path("/clients/7/programs/ABC123"))
            .and(body_json(serde_json::json!({"end_date": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_code": "ABC123",
                "end_date": "2018-06-13T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .update_client_program("7", "ABC123", &ProgramUpdate::end_now())
            .await
            .unwrap();
        assert!(response.succeeded());
    }

    #[tokio::test]
    async fn test_resend_access_code_via_sms() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("POST"))
            .and(path("/clients/7/programs/ABC123/resend"))
            .and(query_param("via", "sms"))
            .and(body_json(serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Access code sent"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .resend_access_code("7", "ABC123", DeliveryChannel::Sms)
            .await
            .unwrap();
        assert!(response.succeeded());
        assert_eq!(response.get("message").unwrap(), "Access code sent");
    }

    #[tokio::test]
    async fn test_resend_access_code_defaults_to_email() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("POST"))
            .and(path("/clients/7/programs/ABC123/resend"))
            .and(query_param("via", "email"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .resend_access_code("7", "ABC123", DeliveryChannel::default())
            .await
            .unwrap();
        assert!(response.succeeded());
    }

    #[tokio::test]
    async fn test_get_client_program_exercises_routine() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/clients/7/programs/ABC123/exercises"))
            .and(query_param_is_missing("format"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "exercises": [{"id": 1, "name": "Squat"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .get_client_program_exercises("7", "ABC123", ProgramExercisesFormat::Routine)
            .await
            .unwrap();
        assert_eq!(response.records("exercises").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_client_program_exercises_pdf() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/clients/7/programs/ABC123/exercises"))
            .and(query_param("format", "pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://example.com/program.pdf"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .get_client_program_exercises("7", "ABC123", ProgramExercisesFormat::Pdf)
            .await
            .unwrap();
        assert_eq!(response.attributes(), vec!["url"]);
    }

    #[tokio::test]
    async fn test_get_client_program_adherence() {
        let server = MockServer::start().await;
        let client = PhysitrackClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/clients/7/programs/ABC123/adherence"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "adherence": 0.85,
                "pain_levels": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client
            .get_client_program_adherence("7", "ABC123")
            .await
            .unwrap();
        assert_eq!(response.get_as::<f64>("adherence").unwrap(), 0.85);
    }
}
