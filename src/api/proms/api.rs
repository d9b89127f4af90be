//! PROM API operations

use crate::api::programs::program_path;
use crate::api::{segment, PhysitrackClient, Response};
use crate::config::api;
use crate::error::Result;

fn prom_path(client_id: &str, access_code: &str, id: &str) -> String {
    format!(
        "{}/{}/{}",
        program_path(client_id, access_code),
        api::PROMS,
        segment(id)
    )
}

impl PhysitrackClient {
    /// Find a PROM assigned to a program
    pub async fn find_client_program_prom(
        &self,
        client_id: &str,
        access_code: &str,
        id: &str,
    ) -> Result<Response> {
        self.get(&prom_path(client_id, access_code, id)).await
    }

    /// Get all PROMs attached to a program
    pub async fn get_all_client_program_proms(
        &self,
        client_id: &str,
        access_code: &str,
    ) -> Result<Response> {
        self.get(&format!(
            "{}/{}",
            program_path(client_id, access_code),
            api::PROMS
        ))
        .await
    }

    /// Find the results of a PROM on a client's program
    pub async fn find_client_program_prom_results(
        &self,
        client_id: &str,
        access_code: &str,
        id: &str,
    ) -> Result<Response> {
        self.get(&format!("{}/results", prom_path(client_id, access_code, id)))
            .await
    }
}
