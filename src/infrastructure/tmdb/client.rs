use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::error::UpstreamError;
use crate::config::settings::AppConfig;

pub type Params<'a> = [(&'a str, String)];

/// Source of raw movie metadata JSON.
///
/// The HTTP implementation is [`TmdbClient`]; tests swap in scripted fakes.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GET `path` with `params` appended to the query string.
    async fn fetch_json(&self, path: &str, params: &Params<'_>) -> Result<Value, UpstreamError>;
}

/// Fetches `path` and decodes it into `T`, reporting the offending field on mismatch.
pub async fn fetch_as<T: DeserializeOwned>(
    upstream: &dyn Upstream,
    path: &str,
    params: &Params<'_>,
) -> Result<T, UpstreamError> {
    let value = upstream.fetch_json(path, params).await?;
    serde_path_to_error::deserialize(value).map_err(|e| UpstreamError::Decode {
        field: e.path().to_string(),
        source: e.into_inner(),
    })
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        info!("✅ TMDb client ready ({})", config.tmdb_base_url);
        Ok(Self::with_client(client, &config.tmdb_base_url, &config.tmdb_api_key))
    }

    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Api {
                status_code: status.as_u16(),
                message: status_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Upstream for TmdbClient {
    async fn fetch_json(&self, path: &str, params: &Params<'_>) -> Result<Value, UpstreamError> {
        debug!(path, params = params.len(), "TMDb request");

        let response = self
            .client
            .get(self.url(path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;
        self.handle_response(response).await
    }
}

/// TMDb error bodies look like `{"status_code":34,"status_message":"..."}`.
fn status_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("status_message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
