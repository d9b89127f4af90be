//! Template API operations

use crate::api::pagination::CollectionQuery;
use crate::api::{segment, PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

/// Query listing every template available to the practitioner
pub fn templates_query() -> CollectionQuery {
    CollectionQuery::new(api::TEMPLATES, api::TEMPLATES)
}

impl PhysitrackClient {
    /// Find a template (program, workout, routine...) by its id
    pub async fn find_template(&self, id: &str) -> Result<Response> {
        self.get(&format!("{}/{}", api::TEMPLATES, segment(id)))
            .await
    }

    /// Get all templates available to the practitioner, following pagination
    pub async fn get_all_templates(&self) -> Result<Response> {
        self.fetch_collection(&templates_query()).await
    }
}
