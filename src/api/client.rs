//! Physitrack HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::api::credentials::Credentials;
use crate::api::pagination::{is_full_page, CollectionQuery};
use crate::api::response::{Payload, Response};
use crate::config::api;
use crate::error::Result;

/// Physitrack API client
///
/// Every call is independent; the only state is the read-only credentials.
pub struct PhysitrackClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl PhysitrackClient {
    /// Create a new client for the account named by `credentials`
    pub fn new(credentials: Credentials) -> Self {
        let base_url = credentials.base_url();
        Self::build(credentials, base_url)
    }

    /// Validate raw credential values and create a client
    pub fn from_parts(api_key: &str, subdomain: &str) -> Result<Self> {
        Ok(Self::new(Credentials::new(api_key, subdomain)?))
    }

    /// Create a client with a custom base URL (mock servers, staging hosts)
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Self {
        let base_url = format!("{}/", base_url.trim_end_matches('/'));
        Self::build(credentials, base_url)
    }

    fn build(credentials: Credentials, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url,
        }
    }

    /// Base URL every request path is appended to (ends with `/`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header(api::API_KEY_HEADER, self.credentials.api_key())
    }

    /// GET `path` and wrap the result
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.with_headers(self.client.get(&url)).send().await?;
        Response::from_http(response).await
    }

    /// POST `body` as JSON to `path` and wrap the result
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let body = serde_json::to_vec(body)?;
        debug!("POST {} ({} bytes)", url, body.len());
        let response = self
            .with_headers(self.client.post(&url))
            .body(body)
            .send()
            .await?;
        Response::from_http(response).await
    }

    /// PUT `body` as JSON to `path` and wrap the result
    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let body = serde_json::to_vec(body)?;
        debug!("PUT {} ({} bytes)", url, body.len());
        let response = self
            .with_headers(self.client.put(&url))
            .body(body)
            .send()
            .await?;
        Response::from_http(response).await
    }

    /// Fetch a single page of a collection, without accumulating
    pub async fn fetch_page(&self, query: &CollectionQuery, page: u32) -> Result<Response> {
        self.get(&query.page_path(page)).await
    }

    /// Fetch every page of a collection, one after another
    ///
    /// Starts at the query's start page and keeps going while pages come
    /// back full. The returned payload is `{key: [all records]}` with the
    /// status of the last page. A failed page is returned as-is and the
    /// records gathered before it are dropped.
    pub async fn fetch_collection(&self, query: &CollectionQuery) -> Result<Response> {
        let mut page = query.start_page();
        let mut records: Vec<Value> = Vec::new();

        loop {
            let response = self.fetch_page(query, page).await?;

            if !response.succeeded() {
                debug!(
                    "Page {} of '{}' failed with status {}",
                    page,
                    query.key(),
                    response.status_code()
                );
                return Ok(response);
            }

            let batch = response.records(query.key())?;
            let count = batch.len();
            records.extend(batch.iter().cloned());

            debug!("Page {} of '{}' returned {} records", page, query.key(), count);

            if !is_full_page(count) {
                debug!("Fetched {} total '{}'", records.len(), query.key());
                let mut payload = Payload::new();
                payload.insert(query.key().to_string(), Value::Array(records));
                return Ok(response.with_payload(payload));
            }

            page += 1;
        }
    }
}

#[cfg(test)]
impl PhysitrackClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        let credentials = Credentials::new("test-key", "test").expect("valid test credentials");
        Self::with_base_url(credentials, base_url)
    }
}
