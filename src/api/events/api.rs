//! Event API operations

use crate::api::pagination::CollectionQuery;
use crate::api::{segment, PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

/// Query listing every event on the practitioner's account
pub fn events_query() -> CollectionQuery {
    CollectionQuery::new(api::EVENTS, api::EVENTS)
}

impl PhysitrackClient {
    /// Find an event by its id
    pub async fn find_event(&self, id: &str) -> Result<Response> {
        self.get(&format!("{}/{}", api::EVENTS, segment(id))).await
    }

    /// Get all events that occurred on the practitioner's account
    pub async fn get_all_events(&self) -> Result<Response> {
        self.fetch_collection(&events_query()).await
    }
}
