use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Query body. Unset fields fall back to the server defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub brands: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prices: Vec<PriceRange>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fuel_type: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub seating_capacity: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// 1 ascending, -1 descending, anything else keeps catalog order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: i64,
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_items: usize,
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with `{"success": false, ...}`.
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run a filter/sort/paginate query.
    pub async fn query(&self, req: &QueryRequest) -> Result<QueryResponse, SdkError> {
        let resp = self
            .client
            .post(format!("{}/", self.base_url))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    /// Free-text search.
    pub async fn search(&self, term: &str) -> Result<SearchResponse, SdkError> {
        let resp = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("search", term)])
            .send()
            .await?;
        decode(resp).await
    }

    /// Service health document.
    pub async fn health(&self) -> Result<Value, SdkError> {
        let resp = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, SdkError> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<FailureResponse>(&text)
            .map(|f| f.message)
            .unwrap_or(text);
        return Err(SdkError::Service {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
