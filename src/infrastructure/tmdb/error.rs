use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure. The URL is stripped since it carries `api_key`.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape at `{field}`: {source}")]
    Decode {
        field: String,
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Request(e.without_url())
    }
}

impl UpstreamError {
    /// Upstream HTTP status, when the call got that far.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UpstreamError::Api { status_code, .. } => Some(*status_code),
            UpstreamError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
