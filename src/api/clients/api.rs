//! Client API operations

use serde::Serialize;

use crate::api::pagination::CollectionQuery;
use crate::api::{segment, PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

/// Query listing every client of the practitioner
pub fn clients_query() -> CollectionQuery {
    CollectionQuery::new(api::CLIENTS, api::CLIENTS)
}

impl PhysitrackClient {
    /// Find a single client by id
    pub async fn find_client(&self, id: &str) -> Result<Response> {
        self.get(&format!("{}/{}", api::CLIENTS, segment(id))).await
    }

    /// Fetch all clients for the practitioner, following pagination
    pub async fn get_all_clients(&self) -> Result<Response> {
        self.fetch_collection(&clients_query()).await
    }

    /// Create a single client (see [`ClientBody`](crate::api::clients::ClientBody))
    pub async fn create_client<B>(&self, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.post(&format!("{}/", api::CLIENTS), body).await
    }

    /// Update a single client; takes the same fields as create
    pub async fn update_client<B>(&self, id: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.put(&format!("{}/{}", api::CLIENTS, segment(id)), body)
            .await
    }
}
