use serde::Deserialize;
use std::time::Duration;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub timeout_secs: u64,
    /// Regions checked in order when picking an age rating.
    pub certification_regions: Vec<String>,
}

impl AppConfig {
    /// Loads settings from the environment. `TMDB_API_KEY` has no fallback.
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            tmdb_api_key: env::get(EnvKey::TmdbApiKey)?,
            tmdb_base_url: trim_slash(env::get_or(EnvKey::TmdbBaseUrl, DEFAULT_TMDB_BASE_URL)),
            image_base_url: trim_slash(env::get_or(EnvKey::TmdbImageBaseUrl, DEFAULT_IMAGE_BASE_URL)),
            language: env::get_or(EnvKey::TmdbLanguage, "en-US"),
            timeout_secs: env::get_parsed(EnvKey::TmdbTimeoutSecs, 10),
            certification_regions: env::get_list(EnvKey::CertificationRegions, &["IN", "US"]),
        })
    }

    /// Defaults for everything except the credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            tmdb_api_key: api_key.into(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: "en-US".to_string(),
            timeout_secs: 10,
            certification_regions: vec!["IN".to_string(), "US".to_string()],
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
