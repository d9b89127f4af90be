//! Exercise API operations

use crate::api::pagination::CollectionQuery;
use crate::api::{PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

/// Query listing exercises, optionally searched by name
pub fn exercises_query(search: Option<&str>) -> CollectionQuery {
    let query = CollectionQuery::new(api::EXERCISES, api::EXERCISES);
    match search {
        Some(name) => query.param("name", name),
        None => query,
    }
}

impl PhysitrackClient {
    /// Get all exercises, following pagination
    ///
    /// With a search term only exercises whose name matches are returned.
    pub async fn get_all_exercises(&self, search: Option<&str>) -> Result<Response> {
        self.fetch_collection(&exercises_query(search)).await
    }
}
