//! Message API operations

use crate::api::{segment, PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

impl PhysitrackClient {
    /// Find a single message for a client by id
    pub async fn find_client_message(&self, client_id: &str, id: &str) -> Result<Response> {
        let path = format!(
            "{}/{}/{}/{}",
            api::CLIENTS,
            segment(client_id),
            api::MESSAGES,
            segment(id)
        );
        self.get(&path).await
    }

    /// Get all messages associated with the client
    pub async fn get_all_client_messages(&self, client_id: &str) -> Result<Response> {
        let path = format!("{}/{}/{}", api::CLIENTS, segment(client_id), api::MESSAGES);
        self.get(&path).await
    }
}
