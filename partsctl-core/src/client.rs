//! Typed client for the remote `parts` table.
//!
//! Speaks the PostgREST subset exposed by the hosted service: ordered
//! full-table select, case-insensitive substring filters, and
//! insert/update/delete with `Prefer: return=representation`. Every
//! operation is a single HTTP request with no retry, no batching, and no
//! local cache; failures surface immediately as [`PartsError`].

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{PartsError, Result};
use crate::part::{NewPart, Part, PartPatch};

/// Error body returned by the remote service on failed queries
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: String,
}

/// Stateless client for the remote parts table
pub struct PartsClient {
    client: Client,
    base_url: String,
    access_key: String,
}

impl PartsClient {
    /// Create a new client for the given endpoint and access key
    pub fn new(endpoint_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        let endpoint = endpoint_url.into();
        let base_url = format!("{}/rest/v1/parts", endpoint.trim_end_matches('/'));
        Self {
            client: Client::new(),
            base_url,
            access_key: access_key.into(),
        }
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.endpoint_url, &config.access_key)
    }

    /// Get all parts, ordered by name ascending
    pub async fn list_all(&self) -> Result<Vec<Part>> {
        debug!("listing all parts");
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "part_name.asc")])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Self::rows(response, "parts listing").await
    }

    /// Get a single part by identifier
    pub async fn get(&self, id: i64) -> Result<Part> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let rows = Self::rows(response, "part lookup").await?;
        rows.into_iter().next().ok_or_else(|| PartsError::no_rows(id))
    }

    /// Insert a new part and return the stored row
    pub async fn create(&self, part: &NewPart) -> Result<Part> {
        debug!(part_name = %part.part_name, "creating part");
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(part)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let status = response.status().as_u16();
        let rows = Self::rows(response, "inserted part").await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| PartsError::query(status, "insert returned no representation"))
    }

    /// Patch named fields on the part matching `id` and return the stored row
    pub async fn update(&self, id: i64, patch: &PartPatch) -> Result<Part> {
        debug!(id, "updating part");
        let response = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let rows = Self::rows(response, "updated part").await?;
        rows.into_iter().next().ok_or_else(|| PartsError::no_rows(id))
    }

    /// Delete the part matching `id`
    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "deleting part");
        let response = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let rows = Self::rows(response, "deleted part").await?;
        if rows.is_empty() {
            return Err(PartsError::no_rows(id));
        }
        Ok(())
    }

    /// Case-insensitive substring search on warehouse location, ordered by
    /// location ascending. An empty query degrades to the full name-ordered
    /// set, matching a cleared search box.
    pub async fn search_by_location(&self, query: &str) -> Result<Vec<Part>> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_all().await;
        }

        let response = self
            .request(Method::GET)
            .query(&[
                ("select", "*".to_string()),
                ("warehouse_location", ilike_pattern(query)),
                ("order", "warehouse_location.asc".to_string()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Self::rows(response, "location search").await
    }

    /// Case-insensitive substring search on part name, ordered by name
    /// ascending. Same empty-query degradation as the location search.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Part>> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_all().await;
        }

        let response = self
            .request(Method::GET)
            .query(&[
                ("select", "*".to_string()),
                ("part_name", ilike_pattern(query)),
                ("order", "part_name.asc".to_string()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Self::rows(response, "name search").await
    }

    /// Build a request against the table with auth headers applied
    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.base_url)
            .header("apikey", &self.access_key)
            .header("Authorization", format!("Bearer {}", self.access_key))
    }

    /// Convert a non-2xx response into a query error
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(PartsError::query(
            status.as_u16(),
            remote_error_message(&body),
        ))
    }

    /// Parse a response body as a list of rows
    async fn rows(response: Response, context: &str) -> Result<Vec<Part>> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PartsError::decode(context, e))
    }
}

/// PostgREST `ilike` filter value for a substring match (`*` wildcards)
fn ilike_pattern(query: &str) -> String {
    format!("ilike.*{}*", query)
}

/// Extract the `message` field from a remote error body, falling back to a
/// truncated copy of the raw body.
fn remote_error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<RemoteErrorBody>(body) {
        return parsed.message;
    }
    if body.len() > 500 {
        format!("{}...", &body[..500])
    } else {
        body.to_string()
    }
}
